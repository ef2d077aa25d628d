//! Encoding statistics for single lines and whole runs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::encoder::Encoded;

/// What encoding one line produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSummary {
    /// Bytes in the line (terminator excluded)
    pub input_len: usize,
    /// Bytes emitted for the line
    pub encoded_len: usize,
    /// Stretches found by the partitioner
    pub stretches: usize,
    /// Records emitted (a stretch longer than 255 spans several)
    pub records: usize,
    /// Records whose minimum lost bit 7 in the header
    pub aliased_records: usize,
}

impl LineSummary {
    /// True when every record of the line decodes back exactly
    #[inline]
    #[must_use]
    pub fn is_lossless(&self) -> bool {
        self.aliased_records == 0
    }
}

/// Accumulated statistics over many lines
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub lines: u64,
    pub input_bytes: u64,
    pub encoded_bytes: u64,
    pub stretches: u64,
    pub records: u64,
    pub aliased_records: u64,
    /// Lines containing at least one aliased record
    pub aliased_lines: u64,
    /// Stretch length -> number of stretches
    pub stretch_lengths: BTreeMap<usize, u64>,
}

impl RunSummary {
    /// Fold one line's summary in
    pub fn add_line(&mut self, line: &LineSummary) {
        self.lines += 1;
        self.input_bytes += line.input_len as u64;
        self.encoded_bytes += line.encoded_len as u64;
        self.stretches += line.stretches as u64;
        self.records += line.records as u64;
        self.aliased_records += line.aliased_records as u64;
        if !line.is_lossless() {
            self.aliased_lines += 1;
        }
    }

    /// Fold one encoded line in, including its stretch lengths
    pub fn add_encoded(&mut self, encoded: &Encoded<'_>) {
        self.add_line(&encoded.summary);
        for &len in encoded.stretch_lens {
            *self.stretch_lengths.entry(len).or_insert(0) += 1;
        }
    }

    /// Encoded size as a fraction of input size (0.0 for empty input)
    #[must_use]
    pub fn ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            return 0.0;
        }
        self.encoded_bytes as f64 / self.input_bytes as f64
    }

    /// Mean stretch length (0.0 when no stretches were seen)
    #[must_use]
    pub fn mean_stretch_len(&self) -> f64 {
        if self.stretches == 0 {
            return 0.0;
        }
        self.input_bytes as f64 / self.stretches as f64
    }
}
