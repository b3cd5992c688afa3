use crate::metadata::Metadata;
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use std::process::Command;

/// Where cargo metadata comes from.
pub trait MetadataSource {
    /// Workspace packages and their declared dependencies. Must not trigger resolution.
    fn declared(&self) -> anyhow::Result<Metadata>;

    /// Metadata including the resolve graph. Resolution (and any fetching) happens here.
    fn resolved(&self) -> anyhow::Result<Metadata>;
}

impl<S: MetadataSource + ?Sized> MetadataSource for Box<S> {
    fn declared(&self) -> anyhow::Result<Metadata> {
        (**self).declared()
    }

    fn resolved(&self) -> anyhow::Result<Metadata> {
        (**self).resolved()
    }
}

impl<S: MetadataSource + ?Sized> MetadataSource for &S {
    fn declared(&self) -> anyhow::Result<Metadata> {
        (**self).declared()
    }

    fn resolved(&self) -> anyhow::Result<Metadata> {
        (**self).resolved()
    }
}

/// Runs `cargo metadata`.
#[derive(Clone, Debug)]
pub struct CargoCommand {
    pub cargo: String,
    pub manifest_path: Option<Utf8PathBuf>,
    pub locked: bool,
    pub offline: bool,
}

impl Default for CargoCommand {
    fn default() -> Self {
        Self {
            // Respect the cargo that invoked us, e.g. when running as a cargo subcommand.
            cargo: std::env::var("CARGO").unwrap_or_else(|_| "cargo".to_string()),
            manifest_path: None,
            locked: false,
            offline: false,
        }
    }
}

impl CargoCommand {
    pub fn for_manifest(manifest_path: &Utf8Path) -> Self {
        Self {
            manifest_path: Some(manifest_path.to_path_buf()),
            ..Self::default()
        }
    }

    fn args(&self, no_deps: bool) -> Vec<String> {
        let mut args = vec![
            "metadata".to_string(),
            "--format-version".to_string(),
            "1".to_string(),
        ];
        if no_deps {
            args.push("--no-deps".to_string());
        }
        if let Some(path) = &self.manifest_path {
            args.push("--manifest-path".to_string());
            args.push(path.to_string());
        }
        if self.locked {
            args.push("--locked".to_string());
        }
        if self.offline {
            args.push("--offline".to_string());
        }
        args
    }

    fn run(&self, no_deps: bool) -> anyhow::Result<Metadata> {
        let output = Command::new(&self.cargo)
            .args(self.args(no_deps))
            .output()
            .with_context(|| format!("spawn {}", self.cargo))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!(
                "cargo metadata returned non-zero exit status: {}",
                stderr.trim()
            );
        }

        let stdout = String::from_utf8(output.stdout).context("cargo metadata output is not utf-8")?;
        Metadata::from_json(&stdout)
    }
}

impl MetadataSource for CargoCommand {
    fn declared(&self) -> anyhow::Result<Metadata> {
        self.run(true)
    }

    fn resolved(&self) -> anyhow::Result<Metadata> {
        self.run(false)
    }
}

/// Previously captured `cargo metadata` output.
#[derive(Clone, Debug)]
pub struct MetadataFile {
    text: String,
}

impl MetadataFile {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn read(path: &Utf8Path) -> anyhow::Result<Self> {
        let text =
            std::fs::read_to_string(path).with_context(|| format!("read {}", path))?;
        Ok(Self::new(text))
    }
}

impl MetadataSource for MetadataFile {
    fn declared(&self) -> anyhow::Result<Metadata> {
        Metadata::from_json(&self.text)
    }

    fn resolved(&self) -> anyhow::Result<Metadata> {
        Metadata::from_json(&self.text)
    }
}
