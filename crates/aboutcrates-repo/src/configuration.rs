use crate::metadata::{Metadata, Node, Package};
use crate::source::MetadataSource;
use aboutcrates_domain::{
    ConfigurationSelection, DeclaredDependency, DependencyConfiguration, ResolutionError,
};
use aboutcrates_types::{ArtifactIdentity, ResolvedArtifact};
use anyhow::Context;
use std::cell::OnceCell;
use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

/// Attribution-relevant package fields as reported by Cargo.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PackageDetails {
    pub authors: Vec<String>,
    pub description: Option<String>,
    pub license: Option<String>,
    pub homepage: Option<String>,
    pub documentation: Option<String>,
    pub repository: Option<String>,
}

impl From<&Package> for PackageDetails {
    fn from(p: &Package) -> Self {
        Self {
            authors: p.authors.clone(),
            description: p.description.clone(),
            license: p.license.clone(),
            homepage: p.homepage.clone(),
            documentation: p.documentation.clone(),
            repository: p.repository.clone(),
        }
    }
}

/// A Cargo workspace viewed through one dependency-kind selection.
///
/// Declared dependencies are read up front without resolving. The resolve graph is requested
/// from the source on the first `resolved_artifacts` call and kept for `package_details`.
pub struct CargoConfiguration<S> {
    name: String,
    selection: ConfigurationSelection,
    source: S,
    declared: Vec<DeclaredDependency>,
    resolved: OnceCell<Metadata>,
}

impl<S: MetadataSource> CargoConfiguration<S> {
    pub fn load(source: S, selection: ConfigurationSelection) -> anyhow::Result<Self> {
        let metadata = source.declared().context("read workspace dependencies")?;

        let mut declared: Vec<DeclaredDependency> = metadata
            .workspace_packages()
            .flat_map(|p| p.dependencies.iter())
            .filter(|d| selection.includes(d.dep_kind()))
            .map(|d| DeclaredDependency {
                name: d.name.clone(),
                req: d.req.clone(),
                kind: d.dep_kind(),
            })
            .collect();
        declared.sort_by(|a, b| a.name.cmp(&b.name).then(a.kind.cmp(&b.kind)));

        Ok(Self {
            name: selection.as_str().to_string(),
            selection,
            source,
            declared,
            resolved: OnceCell::new(),
        })
    }

    pub fn selection(&self) -> ConfigurationSelection {
        self.selection
    }

    /// Package fields for a resolved artifact. `None` until the configuration has been resolved.
    pub fn package_details(&self, identity: &ArtifactIdentity) -> Option<PackageDetails> {
        self.resolved
            .get()?
            .packages
            .iter()
            .find(|p| p.identity() == *identity)
            .map(PackageDetails::from)
    }

    fn resolve(&self) -> Result<&Metadata, ResolutionError> {
        if let Some(metadata) = self.resolved.get() {
            return Ok(metadata);
        }
        let metadata = self
            .source
            .resolved()
            .map_err(|err| ResolutionError::Resolver {
                configuration: self.name.clone(),
                source: err.into(),
            })?;
        Ok(self.resolved.get_or_init(move || metadata))
    }

    fn unresolved(&self, dependency: &str, reason: impl Into<String>) -> ResolutionError {
        ResolutionError::Unresolved {
            configuration: self.name.clone(),
            dependency: dependency.to_string(),
            reason: reason.into(),
        }
    }

    /// Walk the resolve graph from the workspace members.
    ///
    /// A starting member's edges use the selection; everything reached through an edge uses its
    /// transitive filter, including a member pulled in by another member. Members are not
    /// artifacts of themselves, but a member reached through another member's edge is.
    fn walk(&self, metadata: &Metadata) -> Result<Vec<ResolvedArtifact>, ResolutionError> {
        let resolve = metadata
            .resolve
            .as_ref()
            .ok_or_else(|| self.unresolved("<workspace>", "metadata has no resolve graph"))?;

        let nodes: HashMap<&str, &Node> =
            resolve.nodes.iter().map(|n| (n.id.as_str(), n)).collect();
        let packages: HashMap<&str, &Package> = metadata
            .packages
            .iter()
            .map(|p| (p.id.as_str(), p))
            .collect();
        let members: BTreeSet<&str> = metadata
            .workspace_members
            .iter()
            .map(|m| m.as_str())
            .collect();

        // Members start as roots and may be expanded once more as a dependency.
        let mut expanded: HashSet<&str> = HashSet::new();
        let mut emitted: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<(&str, Hop)> =
            members.iter().map(|m| (*m, Hop::Root)).collect();
        let mut out = Vec::new();

        while let Some((id, hop)) = queue.pop_front() {
            let node = nodes
                .get(id)
                .ok_or_else(|| self.unresolved(id, "package is missing from the resolve graph"))?;

            for dep in &node.deps {
                let follow = dep.kinds().into_iter().any(|k| match hop {
                    Hop::Root => self.selection.includes(k),
                    Hop::Transitive => self.selection.includes_transitive(k),
                });
                if !follow {
                    continue;
                }

                let target = dep.pkg.as_str();
                let package = packages.get(target).ok_or_else(|| {
                    self.unresolved(
                        &dep.name,
                        format!("resolved package `{target}` is missing from metadata"),
                    )
                })?;

                if emitted.insert(target) {
                    let mut artifact =
                        ResolvedArtifact::new(package.identity(), package.artifact_kind());
                    artifact.file = package.package_dir();
                    out.push(artifact);
                }
                if expanded.insert(target) {
                    queue.push_back((target, Hop::Transitive));
                }
            }
        }

        Ok(out)
    }
}

/// Which edge filter applies when expanding a package.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Hop {
    Root,
    Transitive,
}

impl<S: MetadataSource> DependencyConfiguration for CargoConfiguration<S> {
    fn name(&self) -> &str {
        &self.name
    }

    fn declared_dependencies(&self) -> &[DeclaredDependency] {
        &self.declared
    }

    fn resolved_artifacts(&self) -> Result<Vec<ResolvedArtifact>, ResolutionError> {
        let metadata = self.resolve()?;
        self.walk(metadata)
    }
}
