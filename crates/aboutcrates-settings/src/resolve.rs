use crate::model::{AboutcratesConfigV1, LibraryOverride};
use aboutcrates_domain::ConfigurationSelection;
use anyhow::Context;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub configuration: Option<String>,
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub selection: ConfigurationSelection,
    /// Exclusion globs as written, kept for diagnostics.
    pub exclude: Vec<String>,
    exclude_set: GlobSet,
    pub libraries: BTreeMap<String, LibraryOverride>,
}

impl EffectiveConfig {
    /// Whether `unique_id` (`group:name`) is excluded from reports.
    pub fn is_excluded(&self, unique_id: &str) -> bool {
        self.exclude_set.is_match(unique_id)
    }

    pub fn library_override(&self, unique_id: &str) -> Option<&LibraryOverride> {
        self.libraries.get(unique_id)
    }
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            selection: ConfigurationSelection::default(),
            exclude: Vec::new(),
            exclude_set: GlobSet::empty(),
            libraries: BTreeMap::new(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: AboutcratesConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let mut effective = EffectiveConfig::default();

    if let Some(sel) = overrides.configuration.or(cfg.configuration) {
        effective.selection = parse_selection(&sel)?;
    }

    if !cfg.exclude.is_empty() {
        effective.exclude_set = build_exclude_set(&cfg.exclude)?;
        effective.exclude = cfg.exclude;
    }

    effective.libraries = cfg.libraries;

    Ok(ResolvedConfig { effective })
}

fn build_exclude_set(patterns: &[String]) -> anyhow::Result<GlobSet> {
    let mut b = GlobSetBuilder::new();
    for pattern in patterns {
        b.add(Glob::new(pattern).with_context(|| format!("invalid exclude glob: {pattern}"))?);
    }
    b.build().context("compile exclude globset")
}

fn parse_selection(v: &str) -> anyhow::Result<ConfigurationSelection> {
    ConfigurationSelection::parse(v).with_context(|| {
        format!("unknown configuration: {v} (expected normal|build|dev|all)")
    })
}
