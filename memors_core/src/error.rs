use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("No memos found.")]
    NoRecords,
}

/// Why a memo timestamp could not be turned into an instant.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimestampError {
    #[error(transparent)]
    Parse(#[from] chrono::ParseError),

    /// Parsed, but not written in the exact field widths of the format.
    #[error("not in canonical form, expected '{expected}'")]
    NotCanonical { expected: String },
}
