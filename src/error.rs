//! Error types for diffcompress encoding and decoding operations.

use thiserror::Error;

/// Error returned when encoding a line fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The output buffer could not grow to hold the encoded line
    #[error("out of memory: could not reserve {requested} bytes for encoded output")]
    OutOfMemory { requested: usize },
    /// A stretch minimum does not fit in the 7 header bits (strict policy only)
    #[error("stretch at offset {offset} has minimum {minimum}, which does not fit in 7 bits")]
    MinimumOutOfRange { offset: usize, minimum: u8 },
}

/// Error returned when decoding fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Buffer ends inside a record header or payload
    #[error("buffer too short: expected at least {expected} bytes, got {actual}")]
    BufferTooShort { expected: usize, actual: usize },
    /// Record header does not carry the encoded marker bit
    #[error("invalid record header at offset {offset}: marker bit not set")]
    InvalidHeader { offset: usize },
    /// Record header describes an empty stretch
    #[error("record at offset {offset} has zero length")]
    ZeroLength { offset: usize },
    /// Unused padding nibble of an odd-length record is not zero
    #[error("encoded data is malformed at offset {offset}: non-zero padding nibble")]
    MalformedData { offset: usize },
}

/// Error returned when compressing a whole input stream fails
#[derive(Debug, Error)]
pub enum StreamError {
    /// A line could not be encoded
    #[error("line {line}: {source}")]
    Encode {
        line: u64,
        #[source]
        source: EncodeError,
    },
    /// Writing encoded output failed
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}
