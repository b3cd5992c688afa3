use crate::LibraryRecord;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for attribution reports.
pub const SCHEMA_REPORT_V1: &str = "aboutcrates.report.v1";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// The JSON document consumed by downstream renderers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AttributionReport {
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub generated_at: OffsetDateTime,
    /// Name of the dependency configuration the libraries were collected from.
    pub configuration: String,
    /// Sorted by `library_artifact_id`.
    pub libraries: Vec<LibraryRecord>,
}
