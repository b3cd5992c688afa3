use camino::Utf8PathBuf;
use std::fmt;

/// Version identity of a resolved artifact: `group:name:version`.
///
/// Equality, hashing, and the report ordering all use the three fields together. Keying by
/// name alone would merge unrelated packages that share a name across registries.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ArtifactIdentity {
    pub group: String,
    pub name: String,
    pub version: String,
}

impl ArtifactIdentity {
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: version.into(),
        }
    }

    /// Composite ordering key. Sorting compares this string, not the field tuple.
    pub fn sort_key(&self) -> String {
        format!("{}:{}:{}", self.group, self.name, self.version)
    }

    /// `group:name`, the version-independent library id.
    pub fn unique_id(&self) -> String {
        format!("{}:{}", self.group, self.name)
    }
}

impl fmt::Display for ArtifactIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)
    }
}

/// One artifact produced by resolution.
///
/// `kind` and `file` describe the artifact but take no part in its identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedArtifact {
    pub identity: ArtifactIdentity,
    /// Declared artifact type (`lib`, `proc-macro`, ...).
    pub kind: String,
    /// On-disk location, when the resolver knows it.
    pub file: Option<Utf8PathBuf>,
}

impl ResolvedArtifact {
    pub fn new(identity: ArtifactIdentity, kind: impl Into<String>) -> Self {
        Self {
            identity,
            kind: kind.into(),
            file: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<Utf8PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }
}
