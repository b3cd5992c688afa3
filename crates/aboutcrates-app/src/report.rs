use aboutcrates_render::{RenderableLibrary, RenderableReport};
use aboutcrates_types::{AttributionReport, LibraryRecord, SCHEMA_REPORT_V1};
use anyhow::Context;

pub fn parse_report_json(text: &str) -> anyhow::Result<AttributionReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse aboutcrates v1 report")
}

pub fn serialize_report(report: &AttributionReport) -> anyhow::Result<Vec<u8>> {
    let mut data = serde_json::to_vec_pretty(report).context("serialize report")?;
    data.push(b'\n');
    Ok(data)
}

pub fn to_renderable(report: &AttributionReport) -> RenderableReport {
    RenderableReport {
        configuration: report.configuration.clone(),
        libraries: report.libraries.iter().map(renderable_library).collect(),
    }
}

fn renderable_library(rec: &LibraryRecord) -> RenderableLibrary {
    RenderableLibrary {
        artifact_id: rec.library_artifact_id.clone(),
        name: rec
            .library_name
            .clone()
            .unwrap_or_else(|| rec.unique_id.clone()),
        version: rec.library_version.clone(),
        author: rec.author.clone(),
        license: rec.license_id.clone(),
        open_source: rec.is_open_source,
        website: rec.library_website.clone(),
        repository: rec.repository_link.clone(),
        owner: rec.owner.clone(),
        year: rec.year.clone(),
    }
}
