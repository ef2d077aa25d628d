//! Whole-stream compression: read lines, encode each, write the records.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::encoder::{Encoder, EncoderConfig};
use crate::error::StreamError;
use crate::lines::LineReader;
use crate::summary::RunSummary;

/// Encode every line of `input` and write the records to `output`
///
/// Lines are written back to back with no separators. Reading stops at end
/// of input or at the first read error. The writer is flushed before
/// returning.
///
/// # Errors
/// - [`StreamError::Encode`] if a line cannot be encoded
/// - [`StreamError::Io`] if writing fails
pub fn compress_stream<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    config: EncoderConfig,
) -> Result<RunSummary, StreamError> {
    let mut lines = LineReader::new(input);
    let mut encoder = Encoder::with_config(config);
    let mut summary = RunSummary::default();

    while let Some((line_no, line)) = lines.next_line() {
        let encoded = encoder
            .encode_line(line)
            .map_err(|source| StreamError::Encode { line: line_no, source })?;
        if !encoded.summary.is_lossless() {
            warn!(
                line = line_no,
                aliased_records = encoded.summary.aliased_records,
                "stretch minimum >= 128 does not fit the header; line will not decode exactly"
            );
        }
        output.write_all(encoded.bytes)?;
        summary.add_encoded(&encoded);
    }
    output.flush()?;

    debug!(
        lines = summary.lines,
        input_bytes = summary.input_bytes,
        encoded_bytes = summary.encoded_bytes,
        ratio = summary.ratio(),
        "compression finished"
    );
    Ok(summary)
}
