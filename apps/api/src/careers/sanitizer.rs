//! Response Sanitizer: turns raw model text into clean candidate lines.
//!
//! Reasoning models wrap their scratchpad in `<think>` tags and tend to pad
//! lists with commentary. Both are removed before anything downstream sees
//! the text.

use once_cell::sync::Lazy;
use regex::Regex;

const OPEN_TAG: &str = "<think>";
const CLOSE_TAG: &str = "</think>";

/// Lines containing any of these (lowercased) are treated as commentary.
const COMMENTARY_MARKERS: [&str; 4] = ["think", "explanation", "reasoning", "analysis"];

static REASONING_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<think>.*?</think>").expect("valid reasoning regex"));

static NUMBERED_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\d+\.\s+(.+)$").expect("valid numbered-line regex"));

/// Removes reasoning spans and trims the result.
///
/// Closed `<think>…</think>` spans are cut out. After that, an orphan closing
/// tag drops everything before it and an orphan opening tag drops everything
/// after it.
pub fn strip_reasoning(raw: &str) -> String {
    let mut text = REASONING_SPAN.replace_all(raw, "").into_owned();

    // ASCII lowercasing keeps byte offsets aligned with `text`.
    if let Some(end) = text.to_ascii_lowercase().rfind(CLOSE_TAG) {
        text = text[end + CLOSE_TAG.len()..].to_string();
    }
    if let Some(start) = text.to_ascii_lowercase().find(OPEN_TAG) {
        text.truncate(start);
    }

    text.trim().to_string()
}

/// Extracts candidate lines from a model reply.
///
/// If any `N. text` lines survive the commentary filter, only their text is
/// returned. Otherwise every non-empty line is returned. Never fails: junk in,
/// empty vec out.
pub fn sanitize_response(raw: &str) -> Vec<String> {
    let text = strip_reasoning(raw);

    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| {
            let lower = line.to_lowercase();
            !COMMENTARY_MARKERS.iter().any(|m| lower.contains(m))
        })
        .collect();

    let numbered: Vec<String> = lines
        .iter()
        .filter_map(|line| NUMBERED_LINE.captures(line))
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().trim().to_string()))
        .filter(|item| !item.is_empty())
        .collect();

    if !numbered.is_empty() {
        return numbered;
    }

    lines.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_reasoning_removes_exactly_the_span() {
        let raw = "Before <think>weighing options\nover two lines</think> after";
        assert_eq!(strip_reasoning(raw), "Before  after");
    }

    #[test]
    fn test_strip_reasoning_removes_every_closed_span() {
        let raw = "<think>a</think>one<THINK>b</THINK>two";
        assert_eq!(strip_reasoning(raw), "onetwo");
    }

    #[test]
    fn test_strip_reasoning_unclosed_open_tag_truncates_to_end() {
        let raw = "1. Data Engineer\n<think>still going";
        assert_eq!(strip_reasoning(raw), "1. Data Engineer");
    }

    #[test]
    fn test_strip_reasoning_orphan_close_tag_truncates_from_start() {
        let raw = "the model rambled here</think>\n1. Data Engineer";
        assert_eq!(strip_reasoning(raw), "1. Data Engineer");
    }

    #[test]
    fn test_sanitize_extracts_numbered_items_only() {
        let raw = "Here are some careers for you:\n\
                   1.  Frontend Developer  \n\
                   2. Data Engineer\n\
                   Good luck!\n\
                   10. Cloud Architect";
        assert_eq!(
            sanitize_response(raw),
            vec!["Frontend Developer", "Data Engineer", "Cloud Architect"]
        );
    }

    #[test]
    fn test_sanitize_drops_commentary_lines() {
        let raw = "<think>hmm</think>\n\
                   1. Game Developer\n\
                   Explanation: these fit your hobbies\n\
                   2. Security Analyst\n\
                   3. I think this one is good";
        assert_eq!(
            sanitize_response(raw),
            vec!["Game Developer", "Security Analyst"]
        );
    }

    #[test]
    fn test_sanitize_falls_back_to_plain_lines() {
        let raw = "  Frontend Developer \n\n Data Engineer\n";
        assert_eq!(
            sanitize_response(raw),
            vec!["Frontend Developer", "Data Engineer"]
        );
    }

    #[test]
    fn test_sanitize_empty_and_reasoning_only_inputs() {
        assert!(sanitize_response("").is_empty());
        assert!(sanitize_response("   \n  ").is_empty());
        assert!(sanitize_response("<think>only a scratchpad").is_empty());
    }

    #[test]
    fn test_number_without_space_is_not_a_list_item() {
        assert_eq!(sanitize_response("1.5 million jobs"), vec!["1.5 million jobs"]);
    }
}
