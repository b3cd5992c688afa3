use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// License and attribution metadata for one library, as handed to report renderers.
///
/// Records are built once by the mapping stage and not modified afterwards. No field is
/// validated here; absent optionals mean "unknown", which renderers keep distinct from an
/// empty string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct LibraryRecord {
    /// Version-independent id (`group:name`).
    pub unique_id: String,
    /// Versioned artifact id (`group:name:version`).
    pub library_artifact_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library_website: Option<String>,
    /// SPDX license expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_id: Option<String>,

    pub is_open_source: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Copyright year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

impl LibraryRecord {
    /// Record with the required fields set and every optional field unknown.
    pub fn new(
        unique_id: impl Into<String>,
        library_artifact_id: impl Into<String>,
        is_open_source: bool,
    ) -> Self {
        Self {
            unique_id: unique_id.into(),
            library_artifact_id: library_artifact_id.into(),
            author: None,
            author_website: None,
            library_name: None,
            library_description: None,
            library_version: None,
            library_website: None,
            license_id: None,
            is_open_source,
            repository_link: None,
            owner: None,
            year: None,
        }
    }
}
