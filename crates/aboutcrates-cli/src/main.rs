//! CLI entry point for aboutcrates.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `aboutcrates-app` crate.

use aboutcrates_app::{
    CollectInput, parse_report_json, render_markdown, run_collect, serialize_report,
};
use aboutcrates_repo::{CargoCommand, MetadataFile, MetadataSource};
use aboutcrates_settings::Overrides;
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "aboutcrates",
    version,
    about = "Attribution and license reports for Cargo workspaces"
)]
struct Cli {
    /// Path to the workspace Cargo.toml (defaults to cargo's own lookup).
    #[arg(long)]
    manifest_path: Option<Utf8PathBuf>,

    /// Path to aboutcrates config TOML, relative to the manifest directory.
    #[arg(long, default_value = "aboutcrates.toml")]
    config: Utf8PathBuf,

    /// Override dependency kinds to collect (normal|build|dev|all).
    #[arg(long)]
    configuration: Option<String>,

    /// Debug diagnostics on stderr. `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Collect resolved dependencies and write the attribution report.
    Collect {
        /// Read captured `cargo metadata --format-version 1` output instead of running cargo.
        #[arg(long)]
        metadata_file: Option<Utf8PathBuf>,

        /// Pass `--locked` to cargo metadata.
        #[arg(long)]
        locked: bool,

        /// Pass `--offline` to cargo metadata.
        #[arg(long)]
        offline: bool,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/aboutcrates/libraries.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown listing alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown listing (if enabled).
        #[arg(long, default_value = "artifacts/aboutcrates/LIBRARIES.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Render Markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/aboutcrates/libraries.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.cmd {
        Commands::Collect {
            metadata_file,
            locked,
            offline,
            report_out,
            write_markdown,
            markdown_out,
        } => cmd_collect(
            &cli,
            metadata_file.as_deref(),
            *locked,
            *offline,
            report_out,
            write_markdown.then_some(markdown_out.as_path()),
        ),
        Commands::Md { report, output } => cmd_md(report, output.as_deref()),
    };

    if let Err(err) = result {
        eprintln!("aboutcrates error: {err:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = if verbose == 0 { "warn" } else { "debug" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_collect(
    cli: &Cli,
    metadata_file: Option<&Utf8Path>,
    locked: bool,
    offline: bool,
    report_out: &Utf8Path,
    markdown_out: Option<&Utf8Path>,
) -> anyhow::Result<()> {
    // Missing config file is allowed (defaults apply).
    let cfg_path = config_path(cli);
    let cfg_text = match std::fs::read_to_string(&cfg_path) {
        Ok(text) => text,
        Err(_) => {
            tracing::debug!(path = %cfg_path, "no config file; using defaults");
            String::new()
        }
    };

    let source: Box<dyn MetadataSource> = match metadata_file {
        Some(path) => Box::new(MetadataFile::read(path).context("read metadata file")?),
        None => Box::new(CargoCommand {
            manifest_path: cli.manifest_path.clone(),
            locked,
            offline,
            ..CargoCommand::default()
        }),
    };

    let output = run_collect(CollectInput {
        source,
        config_text: &cfg_text,
        overrides: Overrides {
            configuration: cli.configuration.clone(),
        },
    })?;

    let data = serialize_report(&output.report)?;
    write_file(report_out, &data).context("write report json")?;
    tracing::info!(path = %report_out, libraries = output.report.libraries.len(), "wrote report");

    if let Some(md_path) = markdown_out {
        let md = render_markdown(&output.report);
        write_file(md_path, md.as_bytes()).context("write markdown")?;
    }

    Ok(())
}

/// The config lives next to the manifest when one is given, else in the working directory.
fn config_path(cli: &Cli) -> Utf8PathBuf {
    match cli.manifest_path.as_deref().and_then(Utf8Path::parent) {
        Some(dir) if !dir.as_str().is_empty() => dir.join(&cli.config),
        _ => cli.config.clone(),
    }
}

fn write_file(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, data).with_context(|| format!("write: {}", path))?;
    Ok(())
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&report);

    match output {
        Some(out_path) => write_file(out_path, md.as_bytes()).context("write markdown output")?,
        None => print!("{}", md),
    }

    Ok(())
}
