use serde::Deserialize;
use thiserror::Error;

use crate::templates::RenderError;

/// Where a synthesized anchor block goes when the anchor line is missing
/// and `create_if_not_found` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreateLocation {
    /// Right after the frontmatter, or at the very top without one.
    #[default]
    Top,
    /// Appended after the last line of the document.
    Bottom,
}

/// Configuration for the insert-after-anchor strategy.
#[derive(Debug, Clone, Deserialize)]
pub struct AnchorSpec {
    /// Anchor line template, rendered through the formatter before matching.
    pub after: String,

    /// Advance the insertion point to the end of the anchor's section.
    #[serde(default)]
    pub insert_at_end: bool,

    /// Whether nested subsections travel with the section when
    /// `insert_at_end` is set. See [`super::section::end_of_section`].
    #[serde(default)]
    pub consider_subsections: bool,

    /// Synthesize the anchor line when it is missing instead of failing.
    #[serde(default)]
    pub create_if_not_found: bool,

    /// Placement of the synthesized anchor block.
    #[serde(default)]
    pub create_location: CreateLocation,
}

/// Mutually exclusive placement strategies.
#[derive(Debug, Clone)]
pub enum PlacementStrategy {
    /// Write the block at the bottom of the file.
    Prepend,
    /// Insert the block after a matched (or synthesized) anchor line.
    InsertAfter(AnchorSpec),
    /// Insert the block right after the frontmatter, or at the very top
    /// of a document that has none.
    AfterFrontmatter,
}

/// Full placement description for one capture invocation.
#[derive(Debug, Clone)]
pub struct Placement {
    pub strategy: PlacementStrategy,

    /// Task-style blocks carry their own trailing linebreak, so the splice
    /// must not add a separating one.
    pub task: bool,
}

impl Placement {
    #[must_use]
    pub fn new(strategy: PlacementStrategy) -> Self {
        Self { strategy, task: false }
    }

    #[must_use]
    pub fn task(mut self, value: bool) -> Self {
        self.task = value;
        self
    }
}

#[derive(Debug, Error)]
pub enum PlacementError {
    /// The insert-after anchor is absent and no create-fallback was
    /// requested. Recoverable: the document is left untouched.
    #[error("anchor line not found in document: {0}")]
    AnchorNotFound(String),

    #[error("failed to render anchor template: {0}")]
    Render(#[from] RenderError),
}
