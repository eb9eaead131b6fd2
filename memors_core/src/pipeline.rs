use tracing::{debug, info, warn};

use crate::assemble::{Assembler, Rendered};
use crate::error::{Error, Result};
use crate::extract::extract;
use crate::normalize::normalize;
use crate::record::{ConvertOptions, MemoRecord, UnparsablePolicy};
use crate::timestamp::interpret;

/// Run the whole conversion over an in-memory HTML export.
///
/// Per-memo problems (empty content, unparsable time) are absorbed here.
/// The only failure is a document with no memo blocks at all.
pub fn convert(html: &str, options: &ConvertOptions) -> Result<Rendered> {
    let raw_records = extract(html);
    if raw_records.is_empty() {
        return Err(Error::NoRecords);
    }
    info!("Found {} memo blocks", raw_records.len());

    let mut assembler = Assembler::new(options.unparsable);
    for raw in raw_records {
        let Some(content) = normalize(raw.content) else {
            debug!("Dropping memo at '{}': no content left", raw.timestamp);
            continue;
        };

        let parsed_time = interpret(raw.timestamp, &options.timestamp_format);
        if parsed_time.is_none() && options.unparsable == UnparsablePolicy::Exclude {
            warn!("Excluding memo with unparsable time '{}'", raw.timestamp);
            continue;
        }

        assembler.push(MemoRecord::new(
            raw.timestamp.to_string(),
            parsed_time,
            content,
        ));
    }

    Ok(assembler.finish())
}
