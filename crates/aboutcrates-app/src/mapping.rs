//! The mapping stage: resolved artifact + Cargo package fields + config overrides -> record.

use aboutcrates_repo::PackageDetails;
use aboutcrates_settings::LibraryOverride;
use aboutcrates_types::{LibraryRecord, ResolvedArtifact};

pub fn map_library(
    artifact: &ResolvedArtifact,
    details: Option<&PackageDetails>,
    overrides: Option<&LibraryOverride>,
) -> LibraryRecord {
    let id = &artifact.identity;
    let license = details.and_then(|d| d.license.clone());

    let mut record = LibraryRecord::new(id.unique_id(), id.sort_key(), license.is_some());
    record.library_name = Some(id.name.clone());
    record.library_version = Some(id.version.clone());
    record.license_id = license;

    if let Some(d) = details {
        record.author = join_authors(&d.authors);
        record.library_description = d.description.clone();
        record.library_website = d.homepage.clone().or_else(|| d.documentation.clone());
        record.repository_link = d.repository.clone();
    }

    if let Some(o) = overrides {
        apply_override(&mut record, o);
    }

    record
}

fn apply_override(record: &mut LibraryRecord, o: &LibraryOverride) {
    if let Some(v) = &o.author {
        record.author = Some(v.clone());
    }
    if let Some(v) = &o.author_website {
        record.author_website = Some(v.clone());
    }
    if let Some(v) = &o.owner {
        record.owner = Some(v.clone());
    }
    if let Some(v) = &o.year {
        record.year = Some(v.clone());
    }
    if let Some(v) = &o.license {
        record.license_id = Some(v.clone());
        record.is_open_source = true;
    }
    if let Some(v) = &o.website {
        record.library_website = Some(v.clone());
    }
    if let Some(v) = &o.repository {
        record.repository_link = Some(v.clone());
    }
    if let Some(v) = o.open_source {
        record.is_open_source = v;
    }
}

/// `"Jane Doe <jane@example.com>"` entries become `"Jane Doe"`, joined with `, `.
fn join_authors(authors: &[String]) -> Option<String> {
    let names: Vec<&str> = authors
        .iter()
        .map(|a| a.split('<').next().unwrap_or_default().trim())
        .filter(|n| !n.is_empty())
        .collect();
    (!names.is_empty()).then(|| names.join(", "))
}
