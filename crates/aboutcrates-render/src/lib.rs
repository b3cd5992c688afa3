//! Rendering utilities for attribution surfaces (Markdown, etc).

#![forbid(unsafe_code)]

mod markdown;
mod model;

pub use markdown::render_markdown;
pub use model::{RenderableLibrary, RenderableReport};
