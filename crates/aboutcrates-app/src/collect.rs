//! The `collect` use case: resolve a configuration, collect its artifacts, and build the report.

use crate::log::TracingLog;
use crate::mapping::map_library;
use aboutcrates_domain::{ArtifactCollector, DependencyConfiguration};
use aboutcrates_repo::{CargoConfiguration, MetadataSource};
use aboutcrates_settings::{AboutcratesConfigV1, Overrides, ResolvedConfig};
use aboutcrates_types::{AttributionReport, LibraryRecord, SCHEMA_REPORT_V1, ToolMeta};
use anyhow::Context;
use time::OffsetDateTime;

/// Input for the collect use case.
#[derive(Clone, Debug)]
pub struct CollectInput<'a, S> {
    /// Where cargo metadata comes from.
    pub source: S,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the collect use case.
#[derive(Clone, Debug)]
pub struct CollectOutput {
    pub report: AttributionReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the collect use case: parse config, read the workspace, collect, map, produce report.
///
/// A resolution failure aborts the whole run; no partial report is produced.
pub fn run_collect<S: MetadataSource>(input: CollectInput<'_, S>) -> anyhow::Result<CollectOutput> {
    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        AboutcratesConfigV1::default()
    } else {
        aboutcrates_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = aboutcrates_settings::resolve_config(cfg, input.overrides)
        .context("resolve config")?;
    let effective = &resolved.effective;

    let configuration = CargoConfiguration::load(input.source, effective.selection)
        .context("load dependency configuration")?;
    tracing::debug!(
        configuration = configuration.name(),
        declared = configuration.declared_dependencies().len(),
        "loaded dependency configuration"
    );

    let artifacts = ArtifactCollector::new(TracingLog)
        .collect(&configuration)
        .context("collect resolved artifacts")?;

    let mut libraries: Vec<LibraryRecord> = Vec::with_capacity(artifacts.len());
    for artifact in &artifacts {
        let unique_id = artifact.identity.unique_id();
        if effective.is_excluded(&unique_id) {
            tracing::debug!(library = %unique_id, "excluded by config");
            continue;
        }
        let details = configuration.package_details(&artifact.identity);
        libraries.push(map_library(
            artifact,
            details.as_ref(),
            effective.library_override(&unique_id),
        ));
    }

    tracing::info!(
        configuration = configuration.name(),
        artifacts = artifacts.len(),
        libraries = libraries.len(),
        "collected libraries"
    );

    let report = AttributionReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "aboutcrates".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        generated_at: OffsetDateTime::now_utc(),
        configuration: configuration.name().to_string(),
        libraries,
    };

    Ok(CollectOutput {
        report,
        resolved_config: resolved,
    })
}
