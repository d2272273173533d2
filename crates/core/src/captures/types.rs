use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::placement::{AnchorSpec, Placement, PlacementStrategy};
use crate::templates::VarsMap;

/// A capture specification loaded from a YAML file
#[derive(Debug, Clone, Deserialize)]
pub struct CaptureSpec {
    /// Logical name of the capture
    pub name: String,

    /// Human-readable description
    #[serde(default)]
    pub description: String,

    /// Variable specifications with prompts and defaults.
    #[serde(default)]
    pub vars: Option<VarsMap>,

    /// Target file and placement configuration
    pub target: CaptureTarget,

    /// Content template to insert (supports {{var}} placeholders)
    pub content: String,
}

/// Target configuration: which file, and where inside it.
///
/// `prepend` wins over `insert_after`; with neither, the block lands right
/// after the frontmatter (or at the very top of a document without one).
#[derive(Debug, Clone, Deserialize)]
pub struct CaptureTarget {
    /// Path to the target file, relative to the vault root
    /// (supports {{var}} placeholders)
    pub file: String,

    /// Write the block at the bottom of the file
    #[serde(default)]
    pub prepend: bool,

    /// Task-style capture: the block carries its own trailing linebreak
    #[serde(default)]
    pub task: bool,

    /// Insert after a matched anchor line
    #[serde(default)]
    pub insert_after: Option<AnchorSpec>,
}

impl CaptureTarget {
    /// Collapse the flag surface into the strategy the engine consumes.
    #[must_use]
    pub fn placement(&self) -> Placement {
        let strategy = if self.prepend {
            PlacementStrategy::Prepend
        } else if let Some(spec) = &self.insert_after {
            PlacementStrategy::InsertAfter(spec.clone())
        } else {
            PlacementStrategy::AfterFrontmatter
        };

        Placement { strategy, task: self.task }
    }
}

/// Information about a discovered capture file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureInfo {
    /// Logical name (filename without .yaml extension)
    pub logical_name: String,
    /// Full path to the YAML file
    pub path: PathBuf,
}

/// A fully loaded capture ready for execution
#[derive(Debug, Clone)]
pub struct LoadedCapture {
    pub logical_name: String,
    pub path: PathBuf,
    pub spec: CaptureSpec,
}

#[derive(Debug, Error)]
pub enum CaptureDiscoveryError {
    #[error("captures directory does not exist: {0}")]
    MissingDir(String),

    #[error("failed to read captures directory {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),
}

#[derive(Debug, Error)]
pub enum CaptureRepoError {
    #[error(transparent)]
    Discovery(#[from] CaptureDiscoveryError),

    #[error("capture not found: {0}")]
    NotFound(String),

    #[error("failed to read capture file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse capture YAML {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
