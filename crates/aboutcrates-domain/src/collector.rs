use crate::log::DebugLog;
use crate::model::DependencyConfiguration;
use crate::ResolutionError;
use aboutcrates_types::{ArtifactIdentity, ResolvedArtifact};
use std::collections::HashSet;

/// Collects the distinct artifacts a configuration resolves to.
pub struct ArtifactCollector<L> {
    log: L,
}

impl<L: DebugLog> ArtifactCollector<L> {
    pub fn new(log: L) -> Self {
        Self { log }
    }

    /// Return the configuration's resolved artifacts, one per identity, sorted by
    /// `group:name:version`.
    ///
    /// A configuration without declared dependencies yields nothing and is never resolved.
    /// Resolution errors are returned as-is.
    pub fn collect<C>(&self, configuration: &C) -> Result<Vec<ResolvedArtifact>, ResolutionError>
    where
        C: DependencyConfiguration + ?Sized,
    {
        if configuration.declared_dependencies().is_empty() {
            return Ok(Vec::new());
        }

        let resolved = configuration.resolved_artifacts()?;

        let mut seen: HashSet<ArtifactIdentity> = HashSet::with_capacity(resolved.len());
        let mut out: Vec<ResolvedArtifact> = Vec::with_capacity(resolved.len());
        for artifact in resolved {
            self.log.debug(format_args!(
                "Adding artifact for config name '{}' module '{}' (type '{}', location '{}')",
                configuration.name(),
                artifact.identity,
                artifact.kind,
                artifact.file.as_ref().map(|f| f.as_str()).unwrap_or("-"),
            ));
            // First occurrence wins.
            if seen.insert(artifact.identity.clone()) {
                out.push(artifact);
            }
        }

        out.sort_by_cached_key(|a| a.identity.sort_key());
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{artifact, declared, RecordingLog, StaticConfiguration};
    use crate::NoopLog;

    fn keys(artifacts: &[ResolvedArtifact]) -> Vec<String> {
        artifacts.iter().map(|a| a.identity.sort_key()).collect()
    }

    #[test]
    fn sorts_by_composite_key() {
        let cfg = StaticConfiguration::new(
            "runtime",
            vec![declared("bar"), declared("baz"), declared("alpha")],
            vec![
                artifact("com.foo", "bar", "1.0"),
                artifact("com.bar", "baz", "2.0"),
                artifact("com.foo", "alpha", "1.0"),
            ],
        );

        let out = ArtifactCollector::new(NoopLog).collect(&cfg).expect("collect");
        assert_eq!(
            keys(&out),
            vec!["com.bar:baz:2.0", "com.foo:alpha:1.0", "com.foo:bar:1.0"]
        );
    }

    #[test]
    fn ordering_uses_the_joined_string_not_the_field_tuple() {
        // Field-wise, "a" < "a.b". As joined strings, '.' sorts before ':'.
        let cfg = StaticConfiguration::new(
            "runtime",
            vec![declared("x")],
            vec![artifact("a", "x", "1.0"), artifact("a.b", "x", "1.0")],
        );

        let out = ArtifactCollector::new(NoopLog).collect(&cfg).expect("collect");
        assert_eq!(keys(&out), vec!["a.b:x:1.0", "a:x:1.0"]);
    }

    #[test]
    fn duplicate_identities_collapse_keeping_first_occurrence() {
        let cfg = StaticConfiguration::new(
            "runtime",
            vec![declared("serde"), declared("serde_json")],
            vec![
                artifact("crates.io", "serde", "1.0.228").with_file("/first"),
                artifact("crates.io", "itoa", "1.0.15"),
                artifact("crates.io", "serde", "1.0.228").with_file("/second"),
                artifact("crates.io", "serde", "1.0.100"),
            ],
        );

        let out = ArtifactCollector::new(NoopLog).collect(&cfg).expect("collect");
        assert_eq!(
            keys(&out),
            vec![
                "crates.io:itoa:1.0.15",
                "crates.io:serde:1.0.100",
                "crates.io:serde:1.0.228"
            ]
        );
        assert_eq!(out[2].file.as_deref().map(|f| f.as_str()), Some("/first"));
    }

    #[test]
    fn same_name_in_different_groups_is_kept_apart() {
        let cfg = StaticConfiguration::new(
            "runtime",
            vec![declared("utils")],
            vec![
                artifact("crates.io", "utils", "1.0.0"),
                artifact("local", "utils", "1.0.0"),
            ],
        );

        let out = ArtifactCollector::new(NoopLog).collect(&cfg).expect("collect");
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn empty_configuration_yields_empty_and_skips_resolution() {
        let cfg = StaticConfiguration::failing("runtime", Vec::new(), "network down");

        let out = ArtifactCollector::new(NoopLog).collect(&cfg).expect("collect");
        assert!(out.is_empty());
        assert_eq!(cfg.resolve_calls(), 0);
    }

    #[test]
    fn declared_but_nothing_resolved_is_empty() {
        let cfg = StaticConfiguration::new("runtime", vec![declared("optional")], Vec::new());

        let out = ArtifactCollector::new(NoopLog).collect(&cfg).expect("collect");
        assert!(out.is_empty());
        assert_eq!(cfg.resolve_calls(), 1);
    }

    #[test]
    fn resolution_failure_propagates_unchanged() {
        let cfg = StaticConfiguration::failing("runtime", vec![declared("serde")], "network down");

        let err = ArtifactCollector::new(NoopLog)
            .collect(&cfg)
            .expect_err("must fail");
        match err {
            ResolutionError::Unresolved {
                configuration,
                dependency,
                reason,
            } => {
                assert_eq!(configuration, "runtime");
                assert_eq!(dependency, "serde");
                assert_eq!(reason, "network down");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(cfg.resolve_calls(), 1);
    }

    #[test]
    fn emits_one_debug_line_per_resolved_artifact() {
        let cfg = StaticConfiguration::new(
            "runtime",
            vec![declared("serde")],
            vec![
                artifact("crates.io", "serde", "1.0.228").with_file("/cargo/serde-1.0.228"),
                artifact("crates.io", "serde", "1.0.228").with_file("/cargo/serde-1.0.228"),
                artifact("local", "app", "0.1.0"),
            ],
        );
        let log = RecordingLog::default();

        ArtifactCollector::new(&log).collect(&cfg).expect("collect");

        let lines = log.lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Adding artifact for config name 'runtime' module 'crates.io:serde:1.0.228' \
             (type 'lib', location '/cargo/serde-1.0.228')"
        );
        assert!(lines[2].contains("module 'local:app:0.1.0'"));
        assert!(lines[2].contains("location '-'"));
    }

    #[test]
    fn collect_does_not_mutate_input() {
        let cfg = StaticConfiguration::new(
            "runtime",
            vec![declared("b"), declared("a")],
            vec![artifact("g", "b", "1"), artifact("g", "a", "1")],
        );
        let before = cfg.clone();

        ArtifactCollector::new(NoopLog).collect(&cfg).expect("collect");

        assert_eq!(cfg.declared_dependencies(), before.declared_dependencies());
        assert_eq!(cfg.resolved_artifacts().ok(), before.resolved_artifacts().ok());
    }
}
