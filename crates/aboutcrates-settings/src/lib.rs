//! Config parsing and resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{AboutcratesConfigV1, LibraryOverride};
pub use resolve::{EffectiveConfig, Overrides, ResolvedConfig};

/// Parse `aboutcrates.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<AboutcratesConfigV1> {
    let cfg: AboutcratesConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config (defaults + file + CLI overrides).
pub fn resolve_config(
    cfg: AboutcratesConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
