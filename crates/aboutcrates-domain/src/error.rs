use std::error::Error as StdError;
use thiserror::Error;

/// Failure reported by the external resolver.
///
/// The collector never constructs these; it hands them back to its caller unchanged.
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("could not resolve `{dependency}` in configuration `{configuration}`: {reason}")]
    Unresolved {
        configuration: String,
        dependency: String,
        reason: String,
    },

    #[error("resolution failed for configuration `{configuration}`")]
    Resolver {
        configuration: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl ResolutionError {
    pub fn configuration(&self) -> &str {
        match self {
            ResolutionError::Unresolved { configuration, .. }
            | ResolutionError::Resolver { configuration, .. } => configuration,
        }
    }
}
