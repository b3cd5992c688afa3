use crate::{RenderableLibrary, RenderableReport};
use std::collections::BTreeMap;

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Third-party libraries\n\n");
    out.push_str(&format!(
        "- Configuration: `{}`\n- Libraries: {}\n\n",
        report.configuration,
        report.libraries.len()
    ));

    if report.libraries.is_empty() {
        out.push_str("No libraries.\n");
        return out;
    }

    out.push_str("## Licenses\n\n");
    for (license, count) in license_summary(&report.libraries) {
        out.push_str(&format!("- {}: {}\n", license, count));
    }
    out.push('\n');

    out.push_str("## Libraries\n\n");
    for lib in &report.libraries {
        match &lib.version {
            Some(v) => out.push_str(&format!("### {} {}\n\n", lib.name, v)),
            None => out.push_str(&format!("### {}\n\n", lib.name)),
        }
        out.push_str(&format!("- id: `{}`\n", lib.artifact_id));
        out.push_str(&format!(
            "- license: {}\n",
            lib.license.as_deref().unwrap_or("unknown")
        ));
        if !lib.open_source {
            out.push_str("- not open source\n");
        }
        if let Some(author) = &lib.author {
            out.push_str(&format!("- author: {}\n", author));
        }
        if let Some(owner) = &lib.owner {
            match &lib.year {
                Some(year) => out.push_str(&format!("- copyright: {} {}\n", year, owner)),
                None => out.push_str(&format!("- copyright: {}\n", owner)),
            }
        }
        if let Some(website) = &lib.website {
            out.push_str(&format!("- website: {}\n", website));
        }
        if let Some(repo) = &lib.repository {
            out.push_str(&format!("- repository: {}\n", repo));
        }
        out.push('\n');
    }

    out
}

fn license_summary(libraries: &[RenderableLibrary]) -> BTreeMap<&str, usize> {
    let mut m = BTreeMap::new();
    for lib in libraries {
        *m.entry(lib.license.as_deref().unwrap_or("unknown")).or_insert(0) += 1;
    }
    m
}
