//! Run statistics.
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use crate::filtering::Rejection;
use crate::sources::DecoderStats;

/// Counters collected by a run, returned by [crate::pipelines::Pipeline::run].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PipelineStats {
    /// pages pulled from the decoder
    pub processed: u64,
    pub written: u64,
    /// pages rejected by the article gate
    pub filtered: u64,
    pub rejections: BTreeMap<Rejection, u64>,
    /// pages lost to a processing or write error
    pub skipped: u64,
    /// pages cleaned by the fallback tier
    pub fallback: u64,
    /// `true` if the run stopped on a user interrupt
    pub interrupted: bool,
    pub decoder: DecoderStats,
    pub elapsed: Duration,
    pub output_size: Option<u64>,
}

impl PipelineStats {
    pub fn reject(&mut self, rejection: Rejection) {
        self.filtered += 1;
        *self.rejections.entry(rejection).or_insert(0) += 1;
    }

    pub fn records_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.processed as f64 / secs
        } else {
            0.0
        }
    }

    /// Share of processed pages that were written, in percent.
    pub fn success_rate(&self) -> f64 {
        self.written as f64 / self.processed.max(1) as f64 * 100.0
    }
}

impl fmt::Display for PipelineStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "=".repeat(50))?;
        writeln!(f, "PROCESSING STATISTICS")?;
        writeln!(f, "{}", "=".repeat(50))?;
        writeln!(f, "Pages read: {}", self.decoder.pages)?;
        writeln!(
            f,
            "Pages excluded by decoder: {} (empty {}, redirect {}, disambiguation {}, namespace {}, too short {}, malformed {})",
            self.decoder.excluded(),
            self.decoder.empty,
            self.decoder.redirect,
            self.decoder.disambiguation,
            self.decoder.namespace,
            self.decoder.too_short,
            self.decoder.malformed,
        )?;
        writeln!(f, "Total processed: {}", self.processed)?;
        writeln!(f, "Total written: {}", self.written)?;
        writeln!(f, "Total filtered: {}", self.filtered)?;
        for (rejection, count) in &self.rejections {
            writeln!(f, "  {}: {}", rejection, count)?;
        }
        writeln!(f, "Total skipped: {}", self.skipped)?;
        writeln!(f, "Fallback extractions: {}", self.fallback)?;
        writeln!(f, "Success rate: {:.1}%", self.success_rate())?;
        writeln!(
            f,
            "Processing rate: {:.1} records/second",
            self.records_per_second()
        )?;
        writeln!(f, "Elapsed: {:.1}s", self.elapsed.as_secs_f64())?;
        if let Some(size) = self.output_size {
            writeln!(
                f,
                "Output file size: {:.1} MB",
                size as f64 / (1024.0 * 1024.0)
            )?;
        }
        if self.decoder.truncated {
            writeln!(f, "Warning: the dump ended early")?;
        }
        if self.interrupted {
            writeln!(f, "Warning: interrupted by user")?;
        }
        write!(f, "{}", "=".repeat(50))
    }
}
