//! Line-oriented section boundaries.
//!
//! A section is the run of lines owned by a heading, ending at the next
//! heading of equal or shallower level. Only ATX-style heading lines are
//! recognized; everything else is body text.

/// Heading level of a line: the number of leading `#` markers, when they
/// are followed by whitespace or nothing at all.
pub(crate) fn heading_level(line: &str) -> Option<u8> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    match line.as_bytes().get(hashes).copied() {
        None | Some(b' ' | b'\t' | b'\r') => u8::try_from(hashes).ok(),
        Some(_) => None,
    }
}

/// Find the last line of the section owned by the heading at `anchor`.
///
/// A later line ends the section when it is a heading whose level is less
/// than or equal to the anchor's. Deeper headings are never boundaries, so
/// `consider_subsections` does not change the computed index; it is
/// accepted so call sites can state whether nested subsections were meant
/// to travel with the section.
///
/// Returns `None` when no boundary heading follows, meaning the section
/// runs to the end of the document; callers then default to the last line
/// index. An anchor line that is not a heading owns everything after it.
#[must_use]
pub fn end_of_section(
    lines: &[&str],
    anchor: usize,
    consider_subsections: bool,
) -> Option<usize> {
    debug_assert!(anchor < lines.len());
    let _ = consider_subsections;

    let anchor_level = heading_level(lines[anchor]).unwrap_or(0);

    lines
        .iter()
        .enumerate()
        .skip(anchor + 1)
        .find(|(_, line)| heading_level(line).is_some_and(|l| l <= anchor_level))
        .map(|(idx, _)| idx - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn heading_level_counts_markers() {
        assert_eq!(heading_level("# Title"), Some(1));
        assert_eq!(heading_level("### Deep"), Some(3));
        assert_eq!(heading_level("######"), Some(6));
        assert_eq!(heading_level("#######  too deep"), None);
        assert_eq!(heading_level("#no-space"), None);
        assert_eq!(heading_level("body text"), None);
        assert_eq!(heading_level(""), None);
    }

    #[test]
    fn heading_level_tolerates_carriage_return() {
        assert_eq!(heading_level("## Inbox\r"), Some(2));
    }

    #[rstest]
    // Subsection swallowed, sibling heading ends the section.
    #[case(vec!["# A", "body1", "## A1", "body2", "# B"], 0, Some(3))]
    // Sibling right below the anchor gives an empty section.
    #[case(vec!["## A", "## B", "body"], 0, Some(0))]
    // Shallower heading ends a deeper section.
    #[case(vec!["## A", "body", "# Top"], 0, Some(1))]
    // No boundary heading: section runs to document end.
    #[case(vec!["# Only", "line 1", "line 2"], 0, None)]
    // Anchor on the last line.
    #[case(vec!["body", "# Tail"], 1, None)]
    // Non-heading anchor owns everything after it.
    #[case(vec!["some line", "# Later", "body"], 0, None)]
    fn boundary_cases(
        #[case] lines: Vec<&str>,
        #[case] anchor: usize,
        #[case] expected: Option<usize>,
    ) {
        assert_eq!(end_of_section(&lines, anchor, false), expected);
        // The flag never changes the level-based boundary.
        assert_eq!(end_of_section(&lines, anchor, true), expected);
    }
}
