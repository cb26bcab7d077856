//! Extraction of the score and suggestions from the model's free-text reply.
//!
//! The reply is not structured, so both extractions are heuristics:
//! - the score is the first 1-3 digit run that follows the word "score"
//!   (case-insensitive) on the same line;
//! - suggestions are the lines that begin with a hyphen or a bullet glyph.
//!
//! A reply that mentions a per-criterion score before the total, e.g.
//! `Clarity score: 18`, yields that sub-score.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{GradeResult, Score};

/// Maximum number of suggestion lines kept from a reply.
pub const MAX_FEEDBACK_ITEMS: usize = 6;

const BULLET_PREFIXES: [char; 2] = ['-', '•'];

static SCORE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)score.*?([0-9]{1,3})").expect("score pattern is a valid regex")
});

/// Parses a model reply into a [`GradeResult`].
pub fn parse_grade_output(text: &str) -> GradeResult {
    GradeResult {
        score: extract_score(text),
        feedback: extract_feedback(text),
    }
}

/// Finds the first `score ... <digits>` occurrence.
pub fn extract_score(text: &str) -> Score {
    SCORE_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse::<u16>().ok())
        .map(Score::Points)
        .unwrap_or(Score::NotAvailable)
}

/// Collects bullet lines in reply order, keeping at most [`MAX_FEEDBACK_ITEMS`].
///
/// Lines are copied verbatim, bullet included. Indented bullets are skipped.
pub fn extract_feedback(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| line.starts_with(BULLET_PREFIXES))
        .take(MAX_FEEDBACK_ITEMS)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_total_score_and_bullets() {
        let reply = "Total Score: 87\n\nSuggestions:\n- Improve intro\n- Add keywords";
        let result = parse_grade_output(reply);
        assert_eq!(result.score, Score::Points(87));
        assert_eq!(result.feedback, vec!["- Improve intro", "- Add keywords"]);
    }

    #[test]
    fn score_is_case_insensitive() {
        assert_eq!(extract_score("SCORE = 64/100"), Score::Points(64));
        assert_eq!(extract_score("final ScOrE was 5"), Score::Points(5));
    }

    #[test]
    fn score_without_digits_is_not_available() {
        assert_eq!(extract_score("The score is excellent."), Score::NotAvailable);
        assert_eq!(extract_score("92 points overall"), Score::NotAvailable);
        assert_eq!(extract_score(""), Score::NotAvailable);
    }

    #[test]
    fn score_digits_must_share_the_line() {
        assert_eq!(extract_score("Score:\n91"), Score::NotAvailable);
    }

    #[test]
    fn score_takes_at_most_three_digits() {
        assert_eq!(extract_score("score 1234"), Score::Points(123));
    }

    #[test]
    fn score_zero_is_a_number() {
        assert_eq!(extract_score("Score: 0"), Score::Points(0));
    }

    #[test]
    fn score_ignores_non_ascii_digits() {
        assert_eq!(extract_score("score ٣ then 42"), Score::Points(42));
    }

    #[test]
    fn first_score_mention_wins_even_for_sub_scores() {
        // Known limitation: a per-criterion score listed before the total
        // is reported as the total.
        let reply = "Clarity score: 18/20\nStructure: 15/20\nTotal Score: 78/100";
        assert_eq!(extract_score(reply), Score::Points(18));
    }

    #[test]
    fn feedback_keeps_hyphen_and_bullet_lines_in_order() {
        let reply = "Intro\n• Tighten headings\nnot a bullet\n- Add alt text\n* star bullet";
        assert_eq!(
            extract_feedback(reply),
            vec!["• Tighten headings", "- Add alt text"]
        );
    }

    #[test]
    fn feedback_is_capped_at_six() {
        let reply = (1..=9)
            .map(|i| format!("- tip {}", i))
            .collect::<Vec<_>>()
            .join("\n");
        let feedback = extract_feedback(&reply);
        assert_eq!(feedback.len(), MAX_FEEDBACK_ITEMS);
        assert_eq!(feedback.first().map(String::as_str), Some("- tip 1"));
        assert_eq!(feedback.last().map(String::as_str), Some("- tip 6"));
    }

    #[test]
    fn indented_bullets_are_skipped() {
        assert!(extract_feedback("  - nested\n\t• tabbed").is_empty());
    }

    #[test]
    fn crlf_line_endings_are_trimmed() {
        assert_eq!(extract_feedback("- one\r\n- two\r\n"), vec!["- one", "- two"]);
    }

    #[test]
    fn parsing_is_deterministic() {
        let reply = "Score: 70\n- a\n- b";
        assert_eq!(parse_grade_output(reply), parse_grade_output(reply));
    }
}
