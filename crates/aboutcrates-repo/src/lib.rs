//! Repository adapters: read what Cargo resolved and expose it as dependency configurations.
//!
//! Resolution is Cargo's job. This crate only runs `cargo metadata` (or reads a captured copy)
//! and walks the resolve graph it reports.

#![forbid(unsafe_code)]

mod configuration;
mod metadata;
mod source;

pub use configuration::{CargoConfiguration, PackageDetails};
pub use metadata::{Metadata, group_from_source};
pub use source::{CargoCommand, MetadataFile, MetadataSource};
