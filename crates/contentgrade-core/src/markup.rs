//! Markup stripping for fetched pages.
//!
//! Tag removal is a plain pattern substitution: every `<` up to the next `>`
//! is deleted. Script and style bodies survive as text, and a stray `<` with
//! no closing `>` is kept.

use std::sync::LazyLock;

use regex::Regex;

/// Maximum number of characters of fetched page text sent to the model.
pub const MAX_FETCHED_CHARS: usize = 3000;

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is a valid regex"));

/// Removes every `<...>` substring from `html`.
pub fn strip_markup(html: &str) -> String {
    TAG_PATTERN.replace_all(html, "").into_owned()
}

/// Returns the first `limit` characters of `text`.
///
/// Counts Unicode scalar values, so a multi-byte character is never split.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Strips markup from a fetched page and caps it at [`MAX_FETCHED_CHARS`].
pub fn extract_page_text(html: &str) -> String {
    let stripped = strip_markup(html);
    truncate_chars(&stripped, MAX_FETCHED_CHARS).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_adjacent_tags() {
        assert_eq!(strip_markup("<p>Hello</p><b>World</b>"), "HelloWorld");
    }

    #[test]
    fn keeps_text_between_and_around_tags() {
        let html = "<html><head><title>T</title></head>\n<body class=\"x\">Hi <em>there</em>!</body></html>";
        assert_eq!(strip_markup(html), "T\nHi there!");
    }

    #[test]
    fn tag_match_is_non_greedy() {
        assert_eq!(strip_markup("a<b>c<d>e"), "ace");
    }

    #[test]
    fn unterminated_tag_is_kept() {
        assert_eq!(strip_markup("1 < 2 and more"), "1 < 2 and more");
    }

    #[test]
    fn tags_may_span_lines() {
        assert_eq!(strip_markup("x<div\n  id=\"a\">y"), "xy");
    }

    #[test]
    fn truncate_is_char_based() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 3), "abc");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("abc", 0), "");
    }

    #[test]
    fn page_text_is_capped() {
        let html = format!("<p>{}</p>", "a".repeat(MAX_FETCHED_CHARS + 500));
        let text = extract_page_text(&html);
        assert_eq!(text.chars().count(), MAX_FETCHED_CHARS);
    }

    #[test]
    fn cap_applies_after_stripping() {
        // Tags do not count against the budget.
        let html = format!("{}<p>tail</p>", "<br>".repeat(MAX_FETCHED_CHARS));
        assert_eq!(extract_page_text(&html), "tail");
    }
}
