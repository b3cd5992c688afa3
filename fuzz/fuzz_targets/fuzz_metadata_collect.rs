//! Fuzz target for collecting artifacts from captured `cargo metadata` output.
//!
//! Goal: parsing and walking an arbitrary resolve graph should **never panic**.
//! Malformed JSON, dangling ids and cycles must surface as errors or finish.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_metadata_collect
//! ```

#![no_main]

use aboutcrates_domain::{ArtifactCollector, ConfigurationSelection, NoopLog};
use aboutcrates_repo::{CargoConfiguration, MetadataFile};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Limit input size to avoid OOM and keep fuzzing fast
    if data.len() > 256 * 1024 {
        return;
    }
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    for selection in [
        ConfigurationSelection::Normal,
        ConfigurationSelection::Build,
        ConfigurationSelection::Dev,
        ConfigurationSelection::All,
    ] {
        let Ok(configuration) = CargoConfiguration::load(MetadataFile::new(text), selection)
        else {
            return;
        };
        if let Ok(artifacts) = ArtifactCollector::new(NoopLog).collect(&configuration) {
            for pair in artifacts.windows(2) {
                assert!(pair[0].identity.sort_key() <= pair[1].identity.sort_key());
            }
        }
    }
});
