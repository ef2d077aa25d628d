//! `diffcompress` - Nibble packing for low-dynamic-range byte lines
//!
//! Compresses lines whose byte values stay close together, such as FASTQ
//! quality strings or columns of numeric text. Each line is split into
//! stretches whose values fit a 16-value window, and every value is stored as
//! a 4-bit offset from the stretch minimum. Lines are encoded independently.
//!
//! # Example
//! ```
//! use diffcompress::{decode, Encoder};
//!
//! let mut encoder = Encoder::new();
//! let encoded = encoder.encode_line(b"FFFF:FFF:F").unwrap();
//! assert_eq!(encoded.summary.stretches, 1);
//! assert_eq!(encoded.bytes.len(), 2 + 5);
//!
//! assert_eq!(decode(encoded.bytes).unwrap(), b"FFFF:FFF:F");
//! ```
//!
//! # Wire Format
//!
//! A line encodes to a sequence of records with no line framing and no file
//! header. Each record:
//!
//! | Offset | Size | Field | Description |
//! |--------|------|-------|-------------|
//! | 0 | 1 | `marker_min` | `0x80 \| minimum`. The top bit marks an encoded record. |
//! | 1 | 1 | `len` | Values in the record, 1-255. |
//! | 2 | `ceil(len / 2)` | payload | Offsets `value - minimum`, two per byte, high nibble first. |
//!
//! An odd-length record leaves the low nibble of its last byte at zero.
//!
//! ## Partitioning
//!
//! A single forward pass tracks the running min/max. When the next byte would
//! push `max - min` above 15 the current stretch closes before it and that
//! byte starts the next stretch. Stretches longer than 255 bytes become
//! several records sharing one minimum.
//!
//! ## Minimums of 128 and above
//!
//! Only 7 bits of the minimum fit beside the marker bit. By default such
//! stretches are still written (bit 7 is lost and the record does not decode
//! exactly); [`MinimumPolicy::Reject`] turns them into an error instead.
//!
//! ## Sizing
//! - Record size: `2 + ceil(len / 2)` bytes
//! - Worst case: 3 output bytes per input byte
//! - Empty line: no output

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]

pub mod constants;
mod decoder;
mod encoder;
mod error;
pub mod lines;
pub mod logging;
mod packer;
mod stream;
mod stretch;
mod summary;


// Re-export public API
pub use decoder::{decode, decode_into, records, Record, Records};
pub use encoder::{encode, encoded_len, Encoded, Encoder, EncoderConfig, MinimumPolicy};
pub use error::{DecodeError, EncodeError, StreamError};
pub use lines::LineReader;
pub use stream::compress_stream;
pub use stretch::{stretches, Stretch, Stretches};
pub use summary::{LineSummary, RunSummary};
