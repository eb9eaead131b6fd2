//! Chronological ordering and rendering of memo records.

use chrono::NaiveDateTime;

use crate::record::{MemoRecord, UnparsablePolicy};

/// Final output text and the number of memos it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub count: usize,
}

/// Collects memo records and renders them oldest first.
///
/// The sort is stable, so records with equal instants (including all
/// unparsable ones) keep the order they were pushed in.
#[derive(Debug)]
pub struct Assembler {
    policy: UnparsablePolicy,
    records: Vec<MemoRecord>,
}

impl Assembler {
    #[must_use]
    pub const fn new(policy: UnparsablePolicy) -> Self {
        Self {
            policy,
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, record: MemoRecord) {
        self.records.push(record);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sort and render every collected record.
    ///
    /// Each memo is written as its raw timestamp line, its content, then a
    /// blank line.
    #[must_use]
    pub fn finish(mut self) -> Rendered {
        let policy = self.policy;
        self.records.sort_by_key(|record| sort_key(policy, record.parsed_time()));

        let mut text = String::new();
        for record in &self.records {
            text.push_str(record.timestamp_text());
            text.push('\n');
            text.push_str(record.content());
            text.push_str("\n\n");
        }

        Rendered {
            text,
            count: self.records.len(),
        }
    }
}

/// `(trailing, time)`; `trailing` is only set for unparsed records under `Last`.
const fn sort_key(
    policy: UnparsablePolicy,
    parsed: Option<NaiveDateTime>,
) -> (bool, Option<NaiveDateTime>) {
    match policy {
        UnparsablePolicy::Last => (parsed.is_none(), parsed),
        UnparsablePolicy::Earliest | UnparsablePolicy::Exclude => (false, parsed),
    }
}
