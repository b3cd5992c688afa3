//! Typed subset of `cargo metadata --format-version 1`.

use aboutcrates_domain::DepKind;
use aboutcrates_types::{ArtifactIdentity, ids};
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;

const CRATES_IO_INDEXES: &[&str] = &[
    "https://github.com/rust-lang/crates.io-index",
    "https://index.crates.io/",
];

#[derive(Clone, Debug, Deserialize)]
pub struct Metadata {
    pub packages: Vec<Package>,
    pub workspace_members: Vec<String>,
    /// Absent when metadata was produced with `--no-deps`.
    #[serde(default)]
    pub resolve: Option<Resolve>,
}

impl Metadata {
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        serde_json::from_str(text).context("parse cargo metadata json")
    }

    pub fn workspace_packages(&self) -> impl Iterator<Item = &Package> {
        self.packages
            .iter()
            .filter(|p| self.workspace_members.iter().any(|m| m == &p.id))
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Package {
    pub id: String,
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub documentation: Option<String>,
    #[serde(default)]
    pub repository: Option<String>,
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
    #[serde(default)]
    pub targets: Vec<Target>,
    pub manifest_path: String,
}

impl Package {
    pub fn identity(&self) -> ArtifactIdentity {
        ArtifactIdentity::new(
            group_from_source(self.source.as_deref()),
            &self.name,
            &self.version,
        )
    }

    /// `proc-macro` or `lib` from the package targets, `crate` otherwise.
    pub fn artifact_kind(&self) -> &'static str {
        let kinds = || self.targets.iter().flat_map(|t| t.kind.iter());
        if kinds().any(|k| k == "proc-macro") {
            ids::KIND_PROC_MACRO
        } else if kinds().any(|k| {
            matches!(k.as_str(), "lib" | "rlib" | "dylib" | "cdylib" | "staticlib")
        }) {
            ids::KIND_LIB
        } else {
            ids::KIND_CRATE
        }
    }

    pub fn package_dir(&self) -> Option<Utf8PathBuf> {
        Utf8Path::new(&self.manifest_path)
            .parent()
            .map(Utf8Path::to_path_buf)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Dependency {
    pub name: String,
    #[serde(default)]
    pub req: Option<String>,
    /// `null` for normal dependencies, otherwise `dev` or `build`.
    #[serde(default)]
    pub kind: Option<String>,
}

impl Dependency {
    pub fn dep_kind(&self) -> DepKind {
        parse_dep_kind(self.kind.as_deref())
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Target {
    #[serde(default)]
    pub kind: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Resolve {
    pub nodes: Vec<Node>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(default)]
    pub deps: Vec<NodeDep>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NodeDep {
    pub name: String,
    pub pkg: String,
    /// Missing on cargo releases older than 1.41; treated as a normal edge.
    #[serde(default)]
    pub dep_kinds: Vec<DepKindInfo>,
}

impl NodeDep {
    pub fn kinds(&self) -> Vec<DepKind> {
        if self.dep_kinds.is_empty() {
            return vec![DepKind::Normal];
        }
        self.dep_kinds
            .iter()
            .map(|k| parse_dep_kind(k.kind.as_deref()))
            .collect()
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct DepKindInfo {
    #[serde(default)]
    pub kind: Option<String>,
}

fn parse_dep_kind(kind: Option<&str>) -> DepKind {
    match kind {
        Some("dev") => DepKind::Dev,
        Some("build") => DepKind::Build,
        _ => DepKind::Normal,
    }
}

/// Derive an artifact group from a cargo source id.
///
/// - no source (path or workspace package) -> `local`
/// - the crates.io index (git or sparse) -> `crates.io`
/// - any other registry or git source -> the URL host
pub fn group_from_source(source: Option<&str>) -> String {
    let Some(source) = source else {
        return ids::GROUP_LOCAL.to_string();
    };

    if source.starts_with("path+") {
        return ids::GROUP_LOCAL.to_string();
    }

    let url = ["registry+", "sparse+", "git+"]
        .iter()
        .find_map(|prefix| source.strip_prefix(prefix))
        .unwrap_or(source);

    if CRATES_IO_INDEXES
        .iter()
        .any(|idx| url.trim_end_matches('/') == idx.trim_end_matches('/'))
    {
        return ids::GROUP_CRATES_IO.to_string();
    }

    url_host(url).unwrap_or(url).to_string()
}

fn url_host(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once("://")?;
    let authority = rest.split(['/', '?', '#']).next()?;
    let host = authority.rsplit_once('@').map(|(_, h)| h).unwrap_or(authority);
    (!host.is_empty()).then_some(host)
}
