//! Fuzz target for `aboutcrates.toml` parsing and resolution.
//!
//! Goal: config handling should **never panic** on any input.
//! Invalid TOML, unknown configurations and bad globs are errors, not crashes.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config
//! ```

#![no_main]

use aboutcrates_settings::{Overrides, parse_config_toml, resolve_config};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct ConfigInput {
    toml: String,
    configuration_override: Option<String>,
    /// Library ids probed against the resolved exclude set.
    probes: Vec<String>,
}

fuzz_target!(|input: ConfigInput| {
    if input.toml.len() > 64 * 1024 || input.probes.len() > 100 {
        return;
    }

    let Ok(cfg) = parse_config_toml(&input.toml) else {
        return;
    };
    let overrides = Overrides {
        configuration: input.configuration_override,
    };
    if let Ok(resolved) = resolve_config(cfg, overrides) {
        for probe in input.probes.iter().filter(|p| p.len() <= 512) {
            let _ = resolved.effective.is_excluded(probe);
            let _ = resolved.effective.library_override(probe);
        }
    }
});
