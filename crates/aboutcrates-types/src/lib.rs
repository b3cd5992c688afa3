//! Stable DTOs and IDs used across the aboutcrates workspace.
//!
//! This crate is intentionally boring:
//! - artifact identities as reported by the resolver
//! - the library record handed to report renderers
//! - the emitted report envelope and its schema id

#![forbid(unsafe_code)]

pub mod artifact;
pub mod ids;
pub mod library;
pub mod report;

pub use artifact::{ArtifactIdentity, ResolvedArtifact};
pub use library::LibraryRecord;
pub use report::{AttributionReport, SCHEMA_REPORT_V1, ToolMeta};
