//! Property-based tests for markup stripping and reply parsing.

use proptest::prelude::*;

use contentgrade_core::{
    extract_feedback, extract_page_text, extract_score, parse_grade_output, strip_markup,
    truncate_chars, Score, MAX_FEEDBACK_ITEMS, MAX_FETCHED_CHARS,
};

// =============================================================================
// Strategy helpers
// =============================================================================

/// Generate HTML-ish text: words interleaved with tags.
fn html_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-zA-Z0-9 .,!]{0,12}",
            "[a-z]{1,6}".prop_map(|tag| format!("<{}>", tag)),
            "[a-z]{1,6}".prop_map(|tag| format!("</{}>", tag)),
            "[a-z]{1,4}".prop_map(|tag| format!("<{} class=\"c\">", tag)),
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

/// Generate a model reply made of mixed plain and bullet lines.
fn reply_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-zA-Z ]{0,20}",
            "[a-z ]{1,20}".prop_map(|s| format!("- {}", s)),
            "[a-z ]{1,20}".prop_map(|s| format!("• {}", s)),
            (0u16..=100).prop_map(|n| format!("Score: {}", n)),
        ],
        0..20,
    )
    .prop_map(|lines| lines.join("\n"))
}

// =============================================================================
// Markup
// =============================================================================

proptest! {
    #[test]
    fn stripped_text_has_no_complete_tags(html in html_strategy()) {
        let stripped = strip_markup(&html);
        if let Some(open) = stripped.find('<') {
            prop_assert!(!stripped[open..].contains('>'));
        }
    }

    #[test]
    fn stripping_is_idempotent(html in html_strategy()) {
        let once = strip_markup(&html);
        prop_assert_eq!(strip_markup(&once), once.clone());
    }

    #[test]
    fn tag_free_text_is_unchanged(text in "[^<>]{0,200}") {
        prop_assert_eq!(strip_markup(&text), text);
    }

    #[test]
    fn page_text_never_exceeds_budget(html in html_strategy(), pad in 0usize..4000) {
        let page = format!("{}{}", html, "x".repeat(pad));
        let text = extract_page_text(&page);
        prop_assert!(text.chars().count() <= MAX_FETCHED_CHARS);
        prop_assert!(strip_markup(&page).starts_with(&text));
    }

    #[test]
    fn truncation_is_a_char_prefix(text in "\\PC{0,64}", limit in 0usize..80) {
        let cut = truncate_chars(&text, limit);
        prop_assert!(text.starts_with(cut));
        prop_assert_eq!(cut.chars().count(), limit.min(text.chars().count()));
    }
}

// =============================================================================
// Reply parsing
// =============================================================================

proptest! {
    #[test]
    fn feedback_is_bounded_and_bulleted(reply in reply_strategy()) {
        let feedback = extract_feedback(&reply);
        prop_assert!(feedback.len() <= MAX_FEEDBACK_ITEMS);
        for line in &feedback {
            prop_assert!(line.starts_with('-') || line.starts_with('•'));
        }
    }

    #[test]
    fn feedback_preserves_reply_order(reply in reply_strategy()) {
        let expected: Vec<String> = reply
            .lines()
            .filter(|l| l.starts_with('-') || l.starts_with('•'))
            .take(MAX_FEEDBACK_ITEMS)
            .map(String::from)
            .collect();
        prop_assert_eq!(extract_feedback(&reply), expected);
    }

    #[test]
    fn explicit_score_line_is_found(n in 0u16..=100, noise in "[a-z ]{0,30}") {
        let reply = format!("{}\nScore: {}\n- tip", noise.replace("score", ""), n);
        prop_assert_eq!(extract_score(&reply), Score::Points(n));
    }

    #[test]
    fn parsing_is_pure(reply in reply_strategy()) {
        prop_assert_eq!(parse_grade_output(&reply), parse_grade_output(&reply));
    }
}
