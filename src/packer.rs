//! Record packing: turn a stretch into headers and 4-bit offsets.
//!
//! Record layout:
//!
//! | Offset | Size | Field | Description |
//! |--------|------|-------|-------------|
//! | 0 | 1 | `marker_min` | `0x80 \| minimum` |
//! | 1 | 1 | `len` | number of values, 1-255 |
//! | 2 | `ceil(len / 2)` | payload | offsets from `minimum`, high nibble first |
//!
//! An odd trailing value occupies the high nibble of the last payload byte;
//! the low nibble is zero.

use crate::constants::{record_len, ENCODED_BIT, MAX_RECORD_LEN};

/// Pack one stretch, splitting it into records of at most 255 values
///
/// All chunks share `minimum`. Returns the number of bytes appended to `out`.
/// Callers must guarantee every byte lies in `[minimum, minimum + 15]`.
#[inline]
pub(crate) fn pack_stretch(data: &[u8], minimum: u8, out: &mut Vec<u8>) -> usize {
    data.chunks(MAX_RECORD_LEN)
        .map(|chunk| pack_record(chunk, minimum, out))
        .sum()
}

/// Pack a single record of 1-255 values
///
/// Returns the number of bytes appended to `out` (`2 + ceil(len / 2)`).
#[inline]
pub(crate) fn pack_record(data: &[u8], minimum: u8, out: &mut Vec<u8>) -> usize {
    debug_assert!(!data.is_empty() && data.len() <= MAX_RECORD_LEN);

    let before = out.len();
    out.push(ENCODED_BIT | minimum);
    out.push(data.len() as u8);

    let mut pairs = data.chunks_exact(2);
    for pair in &mut pairs {
        out.push((nibble(pair[0], minimum) << 4) | nibble(pair[1], minimum));
    }
    if let [last] = pairs.remainder() {
        out.push(nibble(*last, minimum) << 4);
    }

    let written = out.len() - before;
    debug_assert_eq!(written, record_len(data.len()));
    written
}

#[inline]
fn nibble(value: u8, minimum: u8) -> u8 {
    let offset = value - minimum;
    debug_assert!(offset <= 0x0F, "offset {offset} does not fit a nibble");
    offset
}
