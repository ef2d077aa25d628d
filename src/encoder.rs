//! Line encoder for the stretch record format.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::constants::{max_encoded_len, record_count, record_len, ALIASED_MINIMUM, MAX_RECORD_LEN};
use crate::error::EncodeError;
use crate::packer::pack_stretch;
use crate::stretch::stretches;
use crate::summary::LineSummary;

/// How to treat stretches whose minimum is 128 or more
///
/// The first header byte stores the minimum next to the marker bit, so only
/// 7 bits of it survive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinimumPolicy {
    /// Emit `0x80 | minimum` anyway (bit 7 of the minimum is lost)
    #[default]
    Alias,
    /// Fail the line with [`EncodeError::MinimumOutOfRange`]
    Reject,
}

/// Encoder settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    pub minimum_policy: MinimumPolicy,
}

impl EncoderConfig {
    /// Configuration that refuses lossy headers
    #[must_use]
    pub const fn strict() -> Self {
        Self { minimum_policy: MinimumPolicy::Reject }
    }
}

/// Output of [`Encoder::encode_line`], borrowed from the encoder's buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoded<'a> {
    /// Concatenated records for the line
    pub bytes: &'a [u8],
    /// Length of every stretch, in line order
    pub stretch_lens: &'a [usize],
    /// Statistics about the line
    pub summary: LineSummary,
}

/// Encodes lines one at a time into a reusable output buffer
///
/// The buffer is cleared on every call and grows to fit the largest line
/// seen so far. No state carries over between lines.
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    buf: Vec<u8>,
    stretch_lens: Vec<usize>,
    config: EncoderConfig,
}

impl Encoder {
    /// Create an encoder with the default (aliasing) configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an encoder with explicit settings
    #[inline]
    #[must_use]
    pub fn with_config(config: EncoderConfig) -> Self {
        Self { buf: Vec::new(), stretch_lens: Vec::new(), config }
    }

    /// Settings in use
    #[inline]
    #[must_use]
    pub fn config(&self) -> EncoderConfig {
        self.config
    }

    /// Encode one line (terminator already stripped)
    ///
    /// An empty line produces no bytes.
    ///
    /// # Errors
    /// - [`EncodeError::OutOfMemory`] if the output buffer cannot grow
    /// - [`EncodeError::MinimumOutOfRange`] under [`MinimumPolicy::Reject`]
    ///   when a stretch minimum is 128 or more; nothing is emitted for the line
    pub fn encode_line(&mut self, line: &[u8]) -> Result<Encoded<'_>, EncodeError> {
        self.buf.clear();
        self.stretch_lens.clear();
        let mut summary = LineSummary { input_len: line.len(), ..LineSummary::default() };
        if line.is_empty() {
            return Ok(Encoded { bytes: &self.buf, stretch_lens: &self.stretch_lens, summary });
        }

        let requested = max_encoded_len(line.len());
        self.buf
            .try_reserve(requested)
            .map_err(|_| EncodeError::OutOfMemory { requested })?;
        self.stretch_lens
            .try_reserve(line.len())
            .map_err(|_| EncodeError::OutOfMemory { requested: line.len().saturating_mul(std::mem::size_of::<usize>()) })?;

        for stretch in stretches(line) {
            let records = record_count(stretch.len);
            if stretch.minimum >= ALIASED_MINIMUM {
                match self.config.minimum_policy {
                    MinimumPolicy::Alias => summary.aliased_records += records,
                    MinimumPolicy::Reject => {
                        self.buf.clear();
                        self.stretch_lens.clear();
                        return Err(EncodeError::MinimumOutOfRange {
                            offset: stretch.start,
                            minimum: stretch.minimum,
                        });
                    }
                }
            }
            pack_stretch(stretch.slice(line), stretch.minimum, &mut self.buf);
            self.stretch_lens.push(stretch.len);
            summary.stretches += 1;
            summary.records += records;
        }

        summary.encoded_len = self.buf.len();
        trace!(
            input_len = summary.input_len,
            encoded_len = summary.encoded_len,
            stretches = summary.stretches,
            "encoded line"
        );
        Ok(Encoded { bytes: &self.buf, stretch_lens: &self.stretch_lens, summary })
    }

    /// Bytes produced by the most recent successful call
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Take the output buffer
    #[inline]
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Encode a single line with the default configuration
///
/// # Example
/// ```
/// use diffcompress::encode;
///
/// assert_eq!(encode(&[5, 20]).unwrap(), vec![0x85, 0x02, 0x0F]);
/// assert!(encode(&[]).unwrap().is_empty());
/// ```
///
/// # Errors
/// Returns [`EncodeError::OutOfMemory`] if the output cannot be allocated.
pub fn encode(line: &[u8]) -> Result<Vec<u8>, EncodeError> {
    let mut encoder = Encoder::new();
    encoder.encode_line(line)?;
    Ok(encoder.into_bytes())
}

/// Exact size `encode(line)` would produce, without allocating
#[must_use]
pub fn encoded_len(line: &[u8]) -> usize {
    stretches(line)
        .map(|s| {
            let full = s.len / MAX_RECORD_LEN;
            let rest = s.len % MAX_RECORD_LEN;
            full * record_len(MAX_RECORD_LEN) + if rest > 0 { record_len(rest) } else { 0 }
        })
        .sum()
}
