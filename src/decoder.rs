//! Decoding functionality for stretch records.
//!
//! Records are self-delimiting, so a buffer holding the output of one line
//! (or several concatenated lines) can be walked without extra framing.
//! Line boundaries are not recoverable from the records alone.

use crate::constants::{payload_len, ENCODED_BIT, MINIMUM_MASK, RECORD_HEADER_LEN};
use crate::error::DecodeError;

/// A borrowed view of one encoded record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    /// Offset of the record header within the decoded buffer
    pub offset: usize,
    /// Minimum as stored in the header (7 bits)
    pub minimum: u8,
    /// Number of values described (1-255)
    pub len: usize,
    /// Packed nibbles, `ceil(len / 2)` bytes
    pub payload: &'a [u8],
}

impl<'a> Record<'a> {
    /// Encoded size of this record in bytes
    #[inline]
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        RECORD_HEADER_LEN + self.payload.len()
    }

    /// Iterate over the reconstructed byte values
    pub fn values(&self) -> impl Iterator<Item = u8> + 'a {
        let payload: &'a [u8] = self.payload;
        let minimum = self.minimum;
        payload
            .iter()
            .flat_map(|&b| [b >> 4, b & 0x0F])
            .take(self.len)
            .map(move |offset| minimum + offset)
    }
}

/// Iterator over the records of an encoded buffer
///
/// Yields `Err` once on malformed input and then stops.
#[derive(Debug, Clone)]
pub struct Records<'a> {
    buf: &'a [u8],
    pos: usize,
}

/// Walk the records of `buf`
#[must_use]
pub fn records(buf: &[u8]) -> Records<'_> {
    Records { buf, pos: 0 }
}

impl<'a> Records<'a> {
    fn read_record(&self) -> Result<Record<'a>, DecodeError> {
        let buf = self.buf;
        let offset = self.pos;
        let header_end = offset + RECORD_HEADER_LEN;
        if header_end > buf.len() {
            return Err(DecodeError::BufferTooShort { expected: header_end, actual: buf.len() });
        }

        let marker_min = buf[offset];
        if marker_min & ENCODED_BIT == 0 {
            return Err(DecodeError::InvalidHeader { offset });
        }
        let len = usize::from(buf[offset + 1]);
        if len == 0 {
            return Err(DecodeError::ZeroLength { offset });
        }

        let end = header_end + payload_len(len);
        if end > buf.len() {
            return Err(DecodeError::BufferTooShort { expected: end, actual: buf.len() });
        }
        let payload = &buf[header_end..end];
        if len % 2 == 1 && payload[payload.len() - 1] & 0x0F != 0 {
            return Err(DecodeError::MalformedData { offset: end - 1 });
        }

        Ok(Record { offset, minimum: marker_min & MINIMUM_MASK, len, payload })
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = Result<Record<'a>, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.buf.len() {
            return None;
        }
        match self.read_record() {
            Ok(record) => {
                self.pos += record.encoded_len();
                Some(Ok(record))
            }
            Err(e) => {
                self.pos = self.buf.len();
                Some(Err(e))
            }
        }
    }
}

impl std::iter::FusedIterator for Records<'_> {}

/// Decode `buf` and append the reconstructed bytes to `out`
///
/// Returns the number of bytes appended. On error, `out` may hold the
/// values of records decoded before the bad one.
///
/// # Errors
/// Returns a [`DecodeError`] for truncated records, a missing marker bit,
/// a zero length, or a non-zero padding nibble.
pub fn decode_into(buf: &[u8], out: &mut Vec<u8>) -> Result<usize, DecodeError> {
    let before = out.len();
    for record in records(buf) {
        let record = record?;
        out.extend(record.values());
    }
    Ok(out.len() - before)
}

/// Decode an encoded buffer back to the original bytes
///
/// Exact for every record whose stretch minimum was below 128.
///
/// # Example
/// ```
/// use diffcompress::{decode, encode};
///
/// let line = b"IIIIHHHGG?";
/// assert_eq!(decode(&encode(line).unwrap()).unwrap(), line);
/// ```
///
/// # Errors
/// See [`decode_into`].
pub fn decode(buf: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::with_capacity(buf.len() * 2);
    decode_into(buf, &mut out)?;
    Ok(out)
}
