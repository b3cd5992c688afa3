//! Use case orchestration for aboutcrates.
//!
//! This crate provides the application layer: use cases that coordinate the domain, repo, and
//! render layers. It is intentionally thin and delegates heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod collect;
mod log;
mod mapping;
mod render;
mod report;

pub use collect::{CollectInput, CollectOutput, run_collect};
pub use log::TracingLog;
pub use mapping::map_library;
pub use render::render_markdown;
pub use report::{parse_report_json, serialize_report, to_renderable};
