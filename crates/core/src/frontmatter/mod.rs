//! Frontmatter extent detection.
//!
//! The placement engine only needs to know where the frontmatter block
//! ends; the keys inside it are never parsed here.

pub mod locator;

pub use locator::end_line;
