//! Shared test utilities for the aboutcrates workspace.
//!
//! Reports carry a generation timestamp and the tool version, so golden comparisons need both
//! pinned first.

use serde_json::Value;
use std::path::PathBuf;

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// `tool.version` is replaced with `"__VERSION__"` only when the *root* object looks like a
/// report envelope (`schema`, `tool`, `generated_at`, `libraries`), so library payloads that
/// happen to share key names are left alone. `generated_at` is replaced with
/// `"__TIMESTAMP__"` at the root only for the same reason.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = obj.contains_key("schema")
            && obj.contains_key("tool")
            && obj.contains_key("generated_at")
            && obj.contains_key("libraries");
        if !is_envelope {
            return value;
        }
        obj.insert(
            "generated_at".to_string(),
            Value::String("__TIMESTAMP__".to_string()),
        );
        if let Some(tool_obj) = obj.get_mut("tool").and_then(Value::as_object_mut)
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String("__VERSION__".to_string()),
            );
        }
    }
    value
}

/// Workspace root, two levels above the calling crate's manifest dir.
pub fn workspace_root(manifest_dir: &str) -> PathBuf {
    let dir = PathBuf::from(manifest_dir);
    dir.parent()
        .and_then(|p| p.parent())
        .map(|p| p.to_path_buf())
        .unwrap_or(dir)
}

/// Path of a file under `tests/fixtures/`.
pub fn fixture_path(manifest_dir: &str, rel: &str) -> PathBuf {
    workspace_root(manifest_dir).join("tests").join("fixtures").join(rel)
}
