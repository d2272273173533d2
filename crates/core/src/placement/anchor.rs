//! Whitespace-tolerant matching of anchor lines.

use regex::Regex;

/// A reusable matcher for one rendered anchor string.
///
/// The anchor text is escaped and matched literally; leading and trailing
/// whitespace on the document line is ignored.
#[derive(Debug)]
pub struct AnchorMatcher {
    pattern: Regex,
}

impl AnchorMatcher {
    #[must_use]
    pub fn new(anchor: &str) -> Self {
        let pattern = Regex::new(&format!(r"^\s*{}\s*$", regex::escape(anchor)))
            .expect("valid regex");
        Self { pattern }
    }

    #[must_use]
    pub fn is_match(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }

    /// Index of the first matching line, scanning top to bottom.
    #[must_use]
    pub fn find_in(&self, lines: &[&str]) -> Option<usize> {
        lines.iter().position(|line| self.is_match(line))
    }
}
