//! Memo block extraction.
//!
//! The export format is fixed: every memo is a `<div class="memo">` holding a
//! `<div class="time">` followed by a `<div class="content">`. Extraction is a
//! flat scan over that shape, not a markup parse. The document is cut at each
//! memo opener and every segment is matched on its own, so a broken block
//! never lends its fields to the next memo. Content that contains its own
//! `</div>` ends the capture early.

use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

const MEMO_OPEN: &str = r#"<div class="memo">"#;

static MEMO_BLOCK: OnceLock<Regex> = OnceLock::new();

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn memo_block() -> &'static Regex {
    MEMO_BLOCK.get_or_init(|| {
        Regex::new(
            r#"(?s)\A<div class="memo">.*?<div class="time">(.*?)</div>.*?<div class="content">(.*?)</div>.*?</div>"#,
        )
        .expect("Static regex pattern is guaranteed to be valid")
    })
}

/// Raw captures of one memo block, borrowed from the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRecord<'a> {
    /// Timestamp text, whitespace-trimmed.
    pub timestamp: &'a str,
    /// Content markup, untouched.
    pub content: &'a str,
}

/// Find every memo block in `html`, in document order.
///
/// A segment that does not hold both a time and a content element is skipped.
#[must_use]
pub fn extract(html: &str) -> Vec<RawRecord<'_>> {
    let starts: Vec<usize> = html.match_indices(MEMO_OPEN).map(|(i, _)| i).collect();

    starts
        .iter()
        .enumerate()
        .filter_map(|(n, &start)| {
            let end = starts.get(n + 1).copied().unwrap_or(html.len());
            let segment = &html[start..end];

            let Some(caps) = memo_block().captures(segment) else {
                debug!("Skipping malformed memo block at byte {start}");
                return None;
            };
            let (_, [timestamp, content]) = caps.extract();
            Some(RawRecord {
                timestamp: timestamp.trim(),
                content,
            })
        })
        .collect()
}
