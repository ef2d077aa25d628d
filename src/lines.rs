//! Line reader that hands out raw byte lines with the terminator removed.

use std::io::BufRead;

use tracing::warn;

/// Line terminator stripped from each line
pub const LINE_TERMINATOR: u8 = b'\n';

/// Reads `\n`-terminated byte lines into a reused buffer
///
/// A final line without a terminator is still returned. A read error is
/// logged and treated like end of input.
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
    buf: Vec<u8>,
    line_no: u64,
}

impl<R: BufRead> LineReader<R> {
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self { reader, buf: Vec::new(), line_no: 0 }
    }

    /// Next line (1-based number, bytes without terminator), or `None` at end of input
    pub fn next_line(&mut self) -> Option<(u64, &[u8])> {
        self.buf.clear();
        match self.reader.read_until(LINE_TERMINATOR, &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                self.line_no += 1;
                Some((self.line_no, strip_terminator(&self.buf)))
            }
            Err(e) => {
                warn!(line = self.line_no + 1, error = %e, "read failed, treating as end of input");
                None
            }
        }
    }
}

/// Drop one trailing `\n` if present
#[inline]
#[must_use]
pub fn strip_terminator(line: &[u8]) -> &[u8] {
    line.strip_suffix(&[LINE_TERMINATOR]).unwrap_or(line)
}
