//! Stretch partitioning: split a byte line into maximal low-spread runs.

use crate::constants::MAX_SPREAD;

/// A contiguous run of bytes whose values all lie in `[minimum, minimum + 15]`
///
/// A stretch may be longer than one record can describe; the packer splits it
/// into 255-byte chunks that all share `minimum`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stretch {
    /// Offset of the first byte within the line
    pub start: usize,
    /// Number of bytes covered (always at least 1)
    pub len: usize,
    /// Smallest byte value in the stretch
    pub minimum: u8,
}

impl Stretch {
    /// Byte range covered by this stretch
    #[inline]
    #[must_use]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.start + self.len
    }

    /// Borrow the covered bytes out of the line this stretch came from
    #[inline]
    #[must_use]
    pub fn slice<'a>(&self, line: &'a [u8]) -> &'a [u8] {
        &line[self.range()]
    }
}

/// Greedy single-pass iterator over the stretches of a line
///
/// Created by [`stretches`].
#[derive(Debug, Clone)]
pub struct Stretches<'a> {
    data: &'a [u8],
    pos: usize,
}

/// Partition `data` into stretches, left to right
///
/// Each stretch grows until the next byte would push `max - min` above 15.
/// The breaking byte seeds the next stretch. An empty line yields nothing.
///
/// # Example
/// ```
/// use diffcompress::stretches;
///
/// let parts: Vec<_> = stretches(&[0, 0, 0, 20, 20, 20]).map(|s| (s.len, s.minimum)).collect();
/// assert_eq!(parts, vec![(3, 0), (3, 20)]);
/// ```
#[must_use]
pub fn stretches(data: &[u8]) -> Stretches<'_> {
    Stretches { data, pos: 0 }
}

impl Iterator for Stretches<'_> {
    type Item = Stretch;

    fn next(&mut self) -> Option<Stretch> {
        let rest = &self.data[self.pos..];
        let (&first, tail) = rest.split_first()?;

        let mut minimum = first;
        let mut maximum = first;
        let mut len = 1;
        for &c in tail {
            let lo = minimum.min(c);
            let hi = maximum.max(c);
            // The window is only committed once it holds; the closed stretch
            // keeps the minimum of the bytes it actually contains.
            if hi - lo > MAX_SPREAD {
                break;
            }
            minimum = lo;
            maximum = hi;
            len += 1;
        }

        let stretch = Stretch { start: self.pos, len, minimum };
        self.pos += len;
        Some(stretch)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.data.len() - self.pos;
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl std::iter::FusedIterator for Stretches<'_> {}
