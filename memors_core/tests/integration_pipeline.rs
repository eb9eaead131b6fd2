//! Integration tests for the full conversion pipeline.
//!
//! These tests verify that:
//! - Memos come out oldest first with their raw timestamps
//! - Empty and `#`-only memos are dropped
//! - Unparsable timestamps follow the configured policy
//! - Output is free of markup and reproducible

use memors_core::{ConvertOptions, Error, UnparsablePolicy, convert};

fn memo(time: &str, content: &str) -> String {
    format!(
        "  <div class=\"memo\">\n    <div class=\"time\">{time}</div>\n    <div class=\"content\">{content}</div>\n  </div>\n"
    )
}

fn document(memos: &[(&str, &str)]) -> String {
    let body: String = memos.iter().map(|(t, c)| memo(t, c)).collect();
    format!(
        "<!DOCTYPE html>\n<html>\n<body>\n<div class=\"memos\">\n{body}</div>\n</body>\n</html>\n"
    )
}

fn options(unparsable: UnparsablePolicy) -> ConvertOptions {
    ConvertOptions {
        unparsable,
        ..ConvertOptions::default()
    }
}

#[test]
fn test_two_memos_sorted_chronologically() {
    let html = document(&[
        ("2023-01-02 10:00:00", "<p>Second</p>"),
        ("2023-01-01 09:00:00", "<p>First</p>"),
    ]);

    let rendered = convert(&html, &ConvertOptions::default()).expect("conversion succeeds");

    assert_eq!(rendered.count, 2);
    assert_eq!(
        rendered.text,
        "2023-01-01 09:00:00\nFirst\n\n2023-01-02 10:00:00\nSecond\n\n"
    );
}

#[test]
fn test_empty_memos_reduce_count() {
    let html = document(&[
        ("2023-03-01 08:00:00", "<p>kept one</p>"),
        ("2023-03-02 08:00:00", "<p></p>"),
        ("2023-03-03 08:00:00", "<p>#private</p><p>  </p>"),
        ("2023-03-04 08:00:00", "<p>kept two</p>"),
    ]);

    let rendered = convert(&html, &ConvertOptions::default()).expect("conversion succeeds");

    assert_eq!(rendered.count, 2);
    assert!(!rendered.text.contains("2023-03-02"));
    assert!(!rendered.text.contains("2023-03-03"));
}

#[test]
fn test_unparsable_time_sorts_first_by_default() {
    let html = document(&[
        ("2023-01-01 09:00:00", "<p>dated</p>"),
        ("not-a-date", "<p>undated</p>"),
    ]);

    let rendered = convert(&html, &ConvertOptions::default()).expect("conversion succeeds");

    assert_eq!(rendered.count, 2);
    assert!(rendered.text.starts_with("not-a-date\nundated\n\n"));
}

#[test]
fn test_unparsable_time_last_policy() {
    let html = document(&[
        ("not-a-date", "<p>undated</p>"),
        ("2023-01-01 09:00:00", "<p>dated</p>"),
    ]);

    let rendered =
        convert(&html, &options(UnparsablePolicy::Last)).expect("conversion succeeds");

    assert_eq!(
        rendered.text,
        "2023-01-01 09:00:00\ndated\n\nnot-a-date\nundated\n\n"
    );
}

#[test]
fn test_unparsable_time_exclude_policy() {
    let html = document(&[
        ("not-a-date", "<p>undated</p>"),
        ("2023-01-01 09:00:00", "<p>dated</p>"),
    ]);

    let rendered =
        convert(&html, &options(UnparsablePolicy::Exclude)).expect("conversion succeeds");

    assert_eq!(rendered.count, 1);
    assert_eq!(rendered.text, "2023-01-01 09:00:00\ndated\n\n");
}

#[test]
fn test_output_has_no_tags_or_comment_lines() {
    let html = document(&[
        (
            "2023-06-01 12:00:00",
            r#"<p>Read <a href="https://example.com">this <em>post</em></a></p><p>#reading</p><ul><li>one</li><li>two</li></ul>"#,
        ),
        ("2023-06-02 12:00:00", "<p>Fish &amp; chips</p><p>It&#39;s good<br/>really</p>"),
    ]);

    let rendered = convert(&html, &ConvertOptions::default()).expect("conversion succeeds");

    assert!(!rendered.text.contains('<'));
    assert!(!rendered.text.contains('>'));
    assert!(rendered.text.lines().all(|line| !line.starts_with('#')));
    assert!(rendered.text.contains("Read this post\nonetwo"));
    assert!(rendered.text.contains("Fish & chips\nIt's good\nreally"));
}

#[test]
fn test_rerun_is_byte_identical() {
    let html = document(&[
        ("2023-01-05 00:00:00", "<p>e</p>"),
        ("bad", "<p>x</p>"),
        ("2023-01-01 00:00:00", "<p>a</p>"),
        ("2023-01-01 00:00:00", "<p>b</p>"),
        ("also bad", "<p>y</p>"),
    ]);

    let first = convert(&html, &ConvertOptions::default()).expect("conversion succeeds");
    let second = convert(&html, &ConvertOptions::default()).expect("conversion succeeds");

    assert_eq!(first, second);
    assert_eq!(
        first.text,
        "bad\nx\n\nalso bad\ny\n\n2023-01-01 00:00:00\na\n\n2023-01-01 00:00:00\nb\n\n2023-01-05 00:00:00\ne\n\n"
    );
}

#[test]
fn test_document_without_memos() {
    let html = "<html><body><p>empty export</p></body></html>";
    let result = convert(html, &ConvertOptions::default());
    assert!(matches!(result, Err(Error::NoRecords)));
}

#[test]
fn test_incomplete_memo_does_not_borrow_next_content() {
    let html = format!(
        "<html><body>\n<div class=\"memo\"><div class=\"time\">2023-01-01 00:00:00</div></div>\n{}</body></html>",
        memo("2023-02-01 00:00:00", "<p>kept</p>")
    );

    let rendered = convert(&html, &ConvertOptions::default()).expect("conversion succeeds");

    assert_eq!(rendered.count, 1);
    assert_eq!(rendered.text, "2023-02-01 00:00:00\nkept\n\n");
}

#[test]
fn test_short_field_timestamp_uses_fallback() {
    let html = document(&[
        ("2023-01-01 09:00:00", "<p>dated</p>"),
        ("2023-1-2 9:0:0", "<p>sloppy</p>"),
    ]);

    let rendered = convert(&html, &ConvertOptions::default()).expect("conversion succeeds");

    assert_eq!(
        rendered.text,
        "2023-1-2 9:0:0\nsloppy\n\n2023-01-01 09:00:00\ndated\n\n"
    );
}
