#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Memo archive to plain text conversion.
//!
//! The pipeline runs in four stages: [`extract`] finds memo blocks in the
//! exported HTML, [`normalize`] turns each block's content markup into clean
//! lines, [`timestamp`] parses the memo time for ordering, and [`assemble`]
//! sorts and renders the final text.

pub mod assemble;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod pipeline;
pub mod record;
pub mod timestamp;

pub use assemble::{Assembler, Rendered};
pub use error::{Error, Result, TimestampError};
pub use extract::{RawRecord, extract};
pub use normalize::normalize;
pub use pipeline::convert;
pub use record::{ConvertOptions, MemoRecord, UnparsablePolicy};
pub use timestamp::{DEFAULT_TIMESTAMP_FORMAT, interpret, parse_timestamp};
