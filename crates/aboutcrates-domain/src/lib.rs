//! Pure artifact collection (no IO).
//!
//! Input: a dependency configuration whose resolution is performed elsewhere.
//! Output: the deduplicated, deterministically ordered artifacts it resolves to.

#![forbid(unsafe_code)]

pub mod error;
pub mod log;
pub mod model;
pub mod policy;

mod collector;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use collector::ArtifactCollector;
pub use error::ResolutionError;
pub use log::{DebugLog, NoopLog};
pub use model::{DeclaredDependency, DepKind, DependencyConfiguration};
pub use policy::ConfigurationSelection;
