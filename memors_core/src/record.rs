use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::timestamp::DEFAULT_TIMESTAMP_FORMAT;

/// How records whose timestamp cannot be parsed take part in ordering.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UnparsablePolicy {
    /// Sort as the earliest instant, before every parsed record.
    #[default]
    Earliest,
    /// Keep the record but place it after every parsed record.
    Last,
    /// Drop the record.
    Exclude,
}

impl std::fmt::Display for UnparsablePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Earliest => write!(f, "earliest"),
            Self::Last => write!(f, "last"),
            Self::Exclude => write!(f, "exclude"),
        }
    }
}

impl std::str::FromStr for UnparsablePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "earliest" => Ok(Self::Earliest),
            "last" => Ok(Self::Last),
            "exclude" => Ok(Self::Exclude),
            _ => Err(format!("unknown unparsable policy: {s}")),
        }
    }
}

/// Options for a single conversion run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConvertOptions {
    /// `chrono` format string used to parse memo timestamps.
    #[serde(default = "ConvertOptions::default_timestamp_format")]
    pub timestamp_format: String,
    #[serde(default)]
    pub unparsable: UnparsablePolicy,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            timestamp_format: Self::default_timestamp_format(),
            unparsable: UnparsablePolicy::default(),
        }
    }
}

impl ConvertOptions {
    fn default_timestamp_format() -> String {
        DEFAULT_TIMESTAMP_FORMAT.to_string()
    }
}

/// One normalized memo, ready for ordering and rendering.
///
/// `content` is never empty, holds no markup and no blank or `#` lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoRecord {
    timestamp_text: String,
    parsed_time: Option<NaiveDateTime>,
    content: String,
}

impl MemoRecord {
    #[must_use]
    pub const fn new(
        timestamp_text: String,
        parsed_time: Option<NaiveDateTime>,
        content: String,
    ) -> Self {
        Self {
            timestamp_text,
            parsed_time,
            content,
        }
    }

    /// The timestamp exactly as it appeared in the source.
    #[must_use]
    pub fn timestamp_text(&self) -> &str {
        &self.timestamp_text
    }

    /// `None` when the timestamp could not be parsed.
    #[must_use]
    pub const fn parsed_time(&self) -> Option<NaiveDateTime> {
        self.parsed_time
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}
