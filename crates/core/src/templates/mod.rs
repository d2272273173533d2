//! Template rendering for capture content, anchor lines, and target paths.
//!
//! Supports `{{var}}` placeholders with a small set of filters; variables
//! come from the built-in context (date/time, config paths) plus anything
//! the caller adds.

pub mod engine;
pub mod vars;

pub use engine::{
    Render, RenderContext, RenderError, build_capture_context, render_string,
};
pub use vars::{VarMetadata, VarSpec, VarsMap, extract_variable_names};
