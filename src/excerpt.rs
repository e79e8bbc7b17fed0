//! Bounded-context excerpt extraction
//!
//! Finds every literal occurrence of a wikilink token in a file body
//! and captures up to [`MAX_CONTEXT_CHARS`] characters of surrounding
//! text on each side, clipped at line boundaries.

/// Maximum context captured on each side of a match, in characters
pub const MAX_CONTEXT_CHARS: usize = 50;

/// Render a date token as the literal wikilink text to search for.
pub fn wikilink(token: &str) -> String {
    format!("[[{token}]]")
}

/// Extract every excerpt around literal occurrences of `pattern`.
///
/// The search runs line by line; an excerpt never crosses a line
/// boundary. Multiple occurrences on one line each produce their own
/// excerpt, with the search resuming after the end of the previous
/// match. Context is counted in characters and clipping stays on
/// `char` boundaries, so multi-byte content cannot split a code point.
/// Excerpts are returned in order of appearance.
pub fn extract_excerpts(content: &str, pattern: &str) -> Vec<String> {
    let mut excerpts = Vec::new();
    if pattern.is_empty() {
        return excerpts;
    }

    for line in content.lines() {
        let mut search_from = 0;
        while let Some(offset) = line[search_from..].find(pattern) {
            let match_start = search_from + offset;
            let match_end = match_start + pattern.len();

            let start = chars_before(line, match_start, MAX_CONTEXT_CHARS);
            let end = chars_after(line, match_end, MAX_CONTEXT_CHARS);
            excerpts.push(line[start..end].to_string());

            search_from = match_end;
        }
    }

    excerpts
}

/// Byte index at most `n` characters before `from`, clipped to the
/// start of the string.
fn chars_before(s: &str, from: usize, n: usize) -> usize {
    s[..from]
        .char_indices()
        .rev()
        .take(n)
        .last()
        .map_or(from, |(i, _)| i)
}

/// Byte index at most `n` characters after `from`, clipped to the end
/// of the string.
fn chars_after(s: &str, from: usize, n: usize) -> usize {
    s[from..]
        .char_indices()
        .nth(n)
        .map_or(s.len(), |(i, _)| from + i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_line_not_clipped() {
        let excerpts = extract_excerpts("See you [[2099-12-31]] for New Year", "[[2099-12-31]]");
        assert_eq!(excerpts, vec!["See you [[2099-12-31]] for New Year"]);
    }

    #[test]
    fn test_long_line_clipped_to_context() {
        let prefix = "p".repeat(80);
        let suffix = "s".repeat(80);
        let line = format!("{prefix}[[2099-01-01]]{suffix}");

        let excerpts = extract_excerpts(&line, "[[2099-01-01]]");
        assert_eq!(excerpts.len(), 1);
        let expected = format!("{}[[2099-01-01]]{}", "p".repeat(50), "s".repeat(50));
        assert_eq!(excerpts[0], expected);
    }

    #[test]
    fn test_clip_at_line_start_and_end() {
        let excerpts = extract_excerpts("[[2099-01-01]]", "[[2099-01-01]]");
        assert_eq!(excerpts, vec!["[[2099-01-01]]"]);
    }

    #[test]
    fn test_never_crosses_line_boundary() {
        let content = format!(
            "{}\nbefore [[2099-01-01]] after\n{}",
            "a".repeat(100),
            "b".repeat(100)
        );
        let excerpts = extract_excerpts(&content, "[[2099-01-01]]");
        assert_eq!(excerpts, vec!["before [[2099-01-01]] after"]);
    }

    #[test]
    fn test_multiple_occurrences_same_line() {
        let gap = "-".repeat(60);
        let line = format!("first [[2099-01-01]]{gap}[[2099-01-01]] again");
        let excerpts = extract_excerpts(&line, "[[2099-01-01]]");

        // Search resumes after the previous match, so each occurrence
        // gets its own window
        assert_eq!(excerpts.len(), 2);
        assert_eq!(
            excerpts[0],
            format!("first [[2099-01-01]]{}", "-".repeat(50))
        );
        assert_eq!(
            excerpts[1],
            format!("{}[[2099-01-01]] again", "-".repeat(50))
        );
    }

    #[test]
    fn test_occurrences_across_lines_in_order() {
        let excerpts = extract_excerpts(
            "one [[2099-01-01]]\ntwo [[2099-01-01]]\nno link here",
            "[[2099-01-01]]",
        );
        assert_eq!(excerpts, vec!["one [[2099-01-01]]", "two [[2099-01-01]]"]);
    }

    #[test]
    fn test_multibyte_context_stays_on_char_boundaries() {
        let prefix = "ü".repeat(60);
        let suffix = "é".repeat(60);
        let line = format!("{prefix}[[2099-01-01]]{suffix}");

        let excerpts = extract_excerpts(&line, "[[2099-01-01]]");
        assert_eq!(excerpts.len(), 1);
        let expected = format!("{}[[2099-01-01]]{}", "ü".repeat(50), "é".repeat(50));
        assert_eq!(excerpts[0], expected);
    }

    #[test]
    fn test_no_match_yields_nothing() {
        assert!(extract_excerpts("plain text", "[[2099-01-01]]").is_empty());
        assert!(extract_excerpts("", "[[2099-01-01]]").is_empty());
    }
}
