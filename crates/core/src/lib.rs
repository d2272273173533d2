#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod captures;
pub mod config;
pub mod frontmatter;
pub mod placement;
pub mod templates;

#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
