//! Render use cases: markdown from in-memory reports.

use aboutcrates_types::AttributionReport;

pub fn render_markdown(report: &AttributionReport) -> String {
    aboutcrates_render::render_markdown(&crate::to_renderable(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aboutcrates_types::{LibraryRecord, SCHEMA_REPORT_V1, ToolMeta};
    use time::macros::datetime;

    #[test]
    fn renders_records_in_report_order() {
        let mut serde = LibraryRecord::new("crates.io:serde", "crates.io:serde:1.0.228", true);
        serde.library_name = Some("serde".to_string());
        serde.library_version = Some("1.0.228".to_string());
        serde.license_id = Some("MIT OR Apache-2.0".to_string());

        let report = AttributionReport {
            schema: SCHEMA_REPORT_V1.to_string(),
            tool: ToolMeta {
                name: "aboutcrates".to_string(),
                version: "0.1.0".to_string(),
            },
            generated_at: datetime!(2026-01-02 03:04:05 UTC),
            configuration: "build".to_string(),
            libraries: vec![
                LibraryRecord::new("local:helper", "local:helper:0.1.0", false),
                serde,
            ],
        };

        let md = render_markdown(&report);
        assert!(md.contains("- Configuration: `build`"));
        let helper = md.find("### local:helper").expect("helper heading");
        let serde = md.find("### serde 1.0.228").expect("serde heading");
        assert!(helper < serde);
        assert!(md.contains("- not open source"));
    }
}
