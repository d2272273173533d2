//! Locating the end of a YAML frontmatter block.

/// Zero-based index of the last line of the frontmatter block, or `None`
/// when the document does not open with one.
///
/// Frontmatter is delimited by `---` on the very first line and `---`
/// (or `...`) at the start of a later line:
///
/// ```markdown
/// ---
/// key: value
/// ---
/// # Document content
/// ```
///
/// An opening delimiter without a closing one is not frontmatter.
#[must_use]
pub fn end_line(content: &str) -> Option<usize> {
    let mut lines = content.split('\n');
    if lines.next()?.trim_end() != "---" {
        return None;
    }

    for (idx, line) in lines.enumerate() {
        let trimmed = line.trim_end();
        if trimmed == "---" || trimmed == "..." {
            return Some(idx + 1);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_frontmatter() {
        assert_eq!(end_line("# Hello\n\nSome content"), None);
        assert_eq!(end_line(""), None);
    }

    #[test]
    fn simple_frontmatter() {
        let content = "---\ntitle: Hello\n---\n# Content";
        assert_eq!(end_line(content), Some(2));
    }

    #[test]
    fn empty_frontmatter() {
        assert_eq!(end_line("---\n---\n# Content"), Some(1));
    }

    #[test]
    fn dotted_closing_delimiter() {
        let content = "---\ntitle: Hello\n...\nbody";
        assert_eq!(end_line(content), Some(2));
    }

    #[test]
    fn unclosed_delimiter_is_not_frontmatter() {
        assert_eq!(end_line("---\ntitle: Hello\nbody"), None);
    }

    #[test]
    fn delimiter_must_open_the_document() {
        assert_eq!(end_line("\n---\ntitle: x\n---\nbody"), None);
    }

    #[test]
    fn crlf_delimiters() {
        let content = "---\r\ntitle: Hello\r\n---\r\nbody";
        assert_eq!(end_line(content), Some(2));
    }
}
