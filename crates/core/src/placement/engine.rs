//! The insertion positioning engine.

use tracing::{debug, error};

use crate::placement::anchor::AnchorMatcher;
use crate::placement::section::end_of_section;
use crate::placement::types::{
    AnchorSpec, CreateLocation, Placement, PlacementError, PlacementStrategy,
};
use crate::templates::Render;

/// Splice `formatted` into `document` according to `placement`.
///
/// `frontmatter_end` is the zero-based index of the last frontmatter line,
/// computed by [`crate::frontmatter::end_line`]; `None` means the document
/// has no frontmatter block. The anchor template of an insert-after
/// placement is expanded through `renderer` before matching.
///
/// Pure over its inputs: the document is never modified in place, and every
/// original line survives into the result with the block added as a single
/// contiguous run. A block that is empty after trimming leaves the document
/// untouched.
///
/// # Errors
///
/// `AnchorNotFound` when the insert-after anchor is absent and
/// `create_if_not_found` was not requested; `Render` when the anchor
/// template fails to expand. In both cases nothing is written.
pub fn place(
    document: &str,
    frontmatter_end: Option<usize>,
    formatted: &str,
    placement: &Placement,
    renderer: &dyn Render,
) -> Result<String, PlacementError> {
    let formatted = match_linebreaks(formatted, document);

    if formatted.trim().is_empty() {
        debug!("formatted content is empty, leaving document untouched");
        return Ok(document.to_string());
    }

    match &placement.strategy {
        PlacementStrategy::Prepend => {
            let separator = if placement.task { "" } else { "\n" };
            Ok(format!("{document}{separator}{formatted}"))
        }
        PlacementStrategy::InsertAfter(spec) => insert_after(
            document,
            frontmatter_end,
            &formatted,
            spec,
            placement.task,
            renderer,
        ),
        PlacementStrategy::AfterFrontmatter => {
            if frontmatter_end.is_none() {
                debug!("no frontmatter in target, inserting at the top of the file");
            }
            Ok(splice_after_line(&formatted, document, frontmatter_end, placement.task))
        }
    }
}

fn insert_after(
    document: &str,
    frontmatter_end: Option<usize>,
    formatted: &str,
    spec: &AnchorSpec,
    task: bool,
    renderer: &dyn Render,
) -> Result<String, PlacementError> {
    // A literal "\n" escape typed into the anchor template never survives
    // into the single-line match.
    let anchor = renderer.render(&spec.after)?.replace("\\n", "");
    let matcher = AnchorMatcher::new(&anchor);
    let lines: Vec<&str> = document.split('\n').collect();

    let Some(mut target) = matcher.find_in(&lines) else {
        if spec.create_if_not_found {
            return Ok(create_anchor(
                document,
                frontmatter_end,
                formatted,
                &anchor,
                spec,
                task,
            ));
        }
        error!(anchor = %anchor, "unable to find the insert-after line in the target");
        return Err(PlacementError::AnchorNotFound(anchor));
    };

    if spec.insert_at_end {
        target = end_of_section(&lines, target, spec.consider_subsections)
            .unwrap_or(lines.len() - 1);
        debug!(line = target, "advanced insertion point to end of section");
    }

    Ok(splice_after_line(formatted, document, Some(target), task))
}

/// Synthesize the missing anchor line together with the block.
///
/// `insert_at_end` is intentionally not consulted here: a freshly created
/// anchor has no section to extend.
fn create_anchor(
    document: &str,
    frontmatter_end: Option<usize>,
    formatted: &str,
    anchor: &str,
    spec: &AnchorSpec,
    task: bool,
) -> String {
    let block = format!("{anchor}\n{formatted}");
    match spec.create_location {
        CreateLocation::Top => splice_after_line(&block, document, frontmatter_end, task),
        CreateLocation::Bottom => format!("{document}\n{block}"),
    }
}

/// Shared splice rule.
///
/// `pos` is the line index the block lands after; `None` is the
/// top-of-file case used when the document has no frontmatter. The block
/// is concatenated directly against the trailing remainder, so callers
/// wanting a separating blank line must end the block with one.
fn splice_after_line(
    formatted: &str,
    document: &str,
    pos: Option<usize>,
    task: bool,
) -> String {
    let Some(pos) = pos else {
        // Task captures already carry their own trailing linebreak.
        let separator = if task { "" } else { "\n" };
        return format!("{formatted}{separator}{document}");
    };

    let lines: Vec<&str> = document.split('\n').collect();
    let cut = (pos + 1).min(lines.len());
    let pre = lines[..cut].join("\n");
    let post = lines[cut..].join("\n");

    format!("{pre}\n{formatted}{post}")
}

/// Normalize the block to the document's line-break convention.
fn match_linebreaks(text: &str, document: &str) -> String {
    let unix = text.replace("\r\n", "\n");
    if document.contains("\r\n") {
        unix.replace('\n', "\r\n")
    } else {
        unix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splice_lands_between_pre_and_post() {
        let doc = "a\nb\nc";
        assert_eq!(splice_after_line("X\n", doc, Some(0), false), "a\nX\nb\nc");
        assert_eq!(splice_after_line("X\n", doc, Some(1), false), "a\nb\nX\nc");
    }

    #[test]
    fn splice_past_last_line_appends() {
        assert_eq!(splice_after_line("X\n", "a\nb", Some(5), false), "a\nb\nX\n");
    }

    #[test]
    fn splice_top_of_file_sentinel() {
        assert_eq!(splice_after_line("X", "body", None, false), "X\nbody");
        assert_eq!(splice_after_line("X\n", "body", None, true), "X\nbody");
    }

    #[test]
    fn linebreaks_follow_document_convention() {
        assert_eq!(match_linebreaks("a\nb", "doc\r\nbody"), "a\r\nb");
        assert_eq!(match_linebreaks("a\r\nb", "doc\nbody"), "a\nb");
        assert_eq!(match_linebreaks("a\nb", "doc\nbody"), "a\nb");
    }
}
