//! Strict 3-bullet response parsing.
//!
//! Services answer in slightly different shapes (numbered lists, dash or dot
//! bullets, stray blank lines). Leading list markers are stripped and blank
//! lines dropped; anything that does not then reduce to exactly 3 non-empty
//! lines is a contract violation. No truncation, no padding.

use regex::Regex;

use crate::error::NarrativeError;

/// Reduce a raw service response to exactly 3 bullet strings.
///
/// # Errors
///
/// Returns [`NarrativeError::Malformed`] when the response does not contain
/// exactly 3 non-empty lines after marker stripping.
pub(crate) fn parse_bullets(raw: &str) -> Result<[String; 3], NarrativeError> {
    let marker = Regex::new(r"^\s*(?:[-*•]+|\d+[.)])\s*").expect("valid bullet marker regex");

    let lines: Vec<String> = raw
        .lines()
        .map(|line| marker.replace(line, "").trim().to_owned())
        .filter(|line| !line.is_empty())
        .collect();

    let count = lines.len();
    let [a, b, c]: [String; 3] = lines.try_into().map_err(|_| {
        NarrativeError::Malformed(format!("expected exactly 3 bullet lines, got {count}"))
    })?;

    Ok([a, b, c])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_three_lines_parse() {
        let bullets = parse_bullets("first\nsecond\nthird").unwrap();
        assert_eq!(bullets, ["first", "second", "third"]);
    }

    #[test]
    fn numbered_list_markers_are_stripped() {
        let bullets = parse_bullets("1. first\n2. second\n3. third").unwrap();
        assert_eq!(bullets, ["first", "second", "third"]);
    }

    #[test]
    fn parenthesis_numbering_is_stripped() {
        let bullets = parse_bullets("1) first\n2) second\n3) third").unwrap();
        assert_eq!(bullets[0], "first");
    }

    #[test]
    fn dash_and_dot_markers_are_stripped() {
        let bullets = parse_bullets("- first\n• second\n* third").unwrap();
        assert_eq!(bullets, ["first", "second", "third"]);
    }

    #[test]
    fn blank_lines_are_dropped_before_counting() {
        let bullets = parse_bullets("\nfirst\n\nsecond\n\nthird\n\n").unwrap();
        assert_eq!(bullets, ["first", "second", "third"]);
    }

    #[test]
    fn two_lines_are_rejected_not_padded() {
        let result = parse_bullets("first\nsecond");
        assert!(matches!(result, Err(NarrativeError::Malformed(_))));
    }

    #[test]
    fn four_lines_are_rejected_not_truncated() {
        let result = parse_bullets("a\nb\nc\nd");
        assert!(matches!(result, Err(NarrativeError::Malformed(_))));
    }

    #[test]
    fn marker_only_lines_count_as_empty() {
        // Three bullets plus a dangling "-" must not pass as four lines,
        // and must not pass as three if a real bullet is missing.
        let bullets = parse_bullets("- a\n- b\n- c\n- ").unwrap();
        assert_eq!(bullets, ["a", "b", "c"]);
    }

    #[test]
    fn empty_response_is_rejected() {
        let result = parse_bullets("");
        assert!(matches!(result, Err(NarrativeError::Malformed(_))));
    }
}
