use crate::log::DebugLog;
use crate::model::{DeclaredDependency, DepKind, DependencyConfiguration};
use crate::ResolutionError;
use aboutcrates_types::{ArtifactIdentity, ResolvedArtifact, ids};
use std::cell::{Cell, RefCell};
use std::fmt;

pub fn declared(name: &str) -> DeclaredDependency {
    DeclaredDependency {
        name: name.to_string(),
        req: Some("1".to_string()),
        kind: DepKind::Normal,
    }
}

pub fn artifact(group: &str, name: &str, version: &str) -> ResolvedArtifact {
    ResolvedArtifact::new(ArtifactIdentity::new(group, name, version), ids::KIND_LIB)
}

/// In-memory configuration with a canned resolution outcome.
#[derive(Clone, Debug)]
pub struct StaticConfiguration {
    name: String,
    declared: Vec<DeclaredDependency>,
    outcome: Result<Vec<ResolvedArtifact>, String>,
    resolve_calls: Cell<usize>,
}

impl StaticConfiguration {
    pub fn new(
        name: &str,
        declared: Vec<DeclaredDependency>,
        resolved: Vec<ResolvedArtifact>,
    ) -> Self {
        Self {
            name: name.to_string(),
            declared,
            outcome: Ok(resolved),
            resolve_calls: Cell::new(0),
        }
    }

    pub fn failing(name: &str, declared: Vec<DeclaredDependency>, reason: &str) -> Self {
        Self {
            name: name.to_string(),
            declared,
            outcome: Err(reason.to_string()),
            resolve_calls: Cell::new(0),
        }
    }

    pub fn resolve_calls(&self) -> usize {
        self.resolve_calls.get()
    }
}

impl DependencyConfiguration for StaticConfiguration {
    fn name(&self) -> &str {
        &self.name
    }

    fn declared_dependencies(&self) -> &[DeclaredDependency] {
        &self.declared
    }

    fn resolved_artifacts(&self) -> Result<Vec<ResolvedArtifact>, ResolutionError> {
        self.resolve_calls.set(self.resolve_calls.get() + 1);
        match &self.outcome {
            Ok(artifacts) => Ok(artifacts.clone()),
            Err(reason) => Err(ResolutionError::Unresolved {
                configuration: self.name.clone(),
                dependency: self
                    .declared
                    .first()
                    .map(|d| d.name.clone())
                    .unwrap_or_default(),
                reason: reason.clone(),
            }),
        }
    }
}

/// Keeps every formatted debug line.
#[derive(Debug, Default)]
pub struct RecordingLog {
    lines: RefCell<Vec<String>>,
}

impl RecordingLog {
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl DebugLog for RecordingLog {
    fn debug(&self, args: fmt::Arguments<'_>) {
        self.lines.borrow_mut().push(args.to_string());
    }
}
