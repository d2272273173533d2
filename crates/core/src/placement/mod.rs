//! Deciding where a captured block lands inside a document, and splicing it in.
//!
//! The entry point is [`engine::place`]: a pure function of
//! (document text, frontmatter end line, formatted block, placement) that
//! produces the new document text. Nothing in here touches the filesystem.

pub mod anchor;
pub mod engine;
pub mod section;
pub mod types;

// Re-export primary API
pub use anchor::AnchorMatcher;
pub use engine::place;
pub use section::end_of_section;
pub use types::{
    AnchorSpec, CreateLocation, Placement, PlacementError, PlacementStrategy,
};
