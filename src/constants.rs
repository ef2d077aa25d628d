//! Format constants and sizing helpers for the stretch record format.

/// Marker bit set on the first header byte of every encoded record
pub const ENCODED_BIT: u8 = 0x80;

/// Mask applied to the first header byte to recover the stretch minimum
pub const MINIMUM_MASK: u8 = 0x7F;

/// Largest allowed `max - min` inside one stretch (fits a 4-bit nibble)
pub const MAX_SPREAD: u8 = 15;

/// Largest length a single record can describe (the length field is one byte)
pub const MAX_RECORD_LEN: usize = u8::MAX as usize;

/// Header size of every record: marker|minimum, length
pub const RECORD_HEADER_LEN: usize = 2;

/// Smallest minimum that no longer fits beside the marker bit
pub const ALIASED_MINIMUM: u8 = 0x80;

/// Number of packed payload bytes for a record of `len` values
#[inline]
#[must_use]
pub const fn payload_len(len: usize) -> usize {
    len / 2 + len % 2
}

/// Total byte size of a record describing `len` values (`len <= 255`)
#[inline]
#[must_use]
pub const fn record_len(len: usize) -> usize {
    RECORD_HEADER_LEN + payload_len(len)
}

/// Number of records a stretch of `len` values is split into
#[inline]
#[must_use]
pub const fn record_count(len: usize) -> usize {
    len.div_ceil(MAX_RECORD_LEN)
}

/// Upper bound on the encoded size of an `n`-byte line
///
/// Worst case is every byte in its own one-value stretch: 2 header bytes
/// plus one half-filled payload byte.
#[inline]
#[must_use]
pub const fn max_encoded_len(n: usize) -> usize {
    n.saturating_mul(3)
}
