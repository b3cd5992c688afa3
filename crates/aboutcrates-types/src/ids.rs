//! Stable identifiers for artifact groups and artifact kinds.
//!
//! Cargo has no notion of a Maven-style group, so the group is derived from where a package
//! comes from.

// Groups
pub const GROUP_CRATES_IO: &str = "crates.io";
pub const GROUP_LOCAL: &str = "local";

// Artifact kinds
pub const KIND_LIB: &str = "lib";
pub const KIND_PROC_MACRO: &str = "proc-macro";
pub const KIND_CRATE: &str = "crate";
