use crate::ResolutionError;
use aboutcrates_types::ResolvedArtifact;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DepKind {
    Normal,
    Dev,
    Build,
}

/// A dependency as written in a manifest, before resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeclaredDependency {
    pub name: String,
    /// Version requirement, if one was declared.
    pub req: Option<String>,
    pub kind: DepKind,
}

/// A named set of declared dependencies plus a view of what they resolve to.
///
/// Resolution belongs to the host build tool. Implementations may resolve eagerly or on the
/// first call to `resolved_artifacts`; either way the call blocks until the full transitive
/// set is known or resolution has failed.
pub trait DependencyConfiguration {
    fn name(&self) -> &str;

    fn declared_dependencies(&self) -> &[DeclaredDependency];

    fn resolved_artifacts(&self) -> Result<Vec<ResolvedArtifact>, ResolutionError>;
}
