//! Content markup to plain text.
//!
//! Entities are decoded only in their terminated form: `&amp;` becomes `&`,
//! while a bare `&amp` without the semicolon is left as written.

use regex::Regex;
use std::sync::OnceLock;

/// Paragraph ends and `<br>` in its void and self-closed spellings.
static LINE_BREAK: OnceLock<Regex> = OnceLock::new();
static TAG: OnceLock<Regex> = OnceLock::new();

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn line_break() -> &'static Regex {
    LINE_BREAK.get_or_init(|| {
        Regex::new(r"(?i)</p>|<br\s*/?>").expect("Static regex pattern is guaranteed to be valid")
    })
}

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn tag() -> &'static Regex {
    TAG.get_or_init(|| {
        Regex::new(r"<[^>]+>").expect("Static regex pattern is guaranteed to be valid")
    })
}

/// Lines starting with this marker are private annotations, not memo text.
const COMMENT_MARKER: char = '#';

/// Convert one memo's content markup into clean text.
///
/// # Algorithm
/// 1. Paragraph ends and line breaks become `\n` (must run before stripping)
/// 2. Every remaining tag span is removed
/// 3. Character entities are decoded
/// 4. Lines are trimmed; blank and `#` lines are dropped
///
/// # Returns
/// The surviving lines joined by `\n`, or `None` when nothing survives and the
/// memo should be dropped.
#[must_use]
pub fn normalize(markup: &str) -> Option<String> {
    let text = line_break().replace_all(markup, "\n");
    let text = tag().replace_all(&text, "");
    let text = html_escape::decode_html_entities(&text);

    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_MARKER))
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}
