//! Batch driver.
//!
//! Runs a list of (input, output) jobs. For each job the input listing is
//! decoded and the result lines are written to the output file joined by
//! `\n`. Failures stay inside their job:
//! - a missing or unreadable input still produces an (empty) output file;
//! - an output that cannot be written is reported and the batch moves on.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::batch::try_decode_file;
use crate::common::error::{BatchError, BatchResult};
use crate::stats::DecodeStats;

/// One listing to decode and where to put the result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Job {
    /// Listing to read.
    pub input: PathBuf,
    /// Result file to write.
    pub output: PathBuf,
}

impl Job {
    /// Creates a job from an input and output path.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// What happened to one job.
#[derive(Debug)]
pub struct JobReport {
    /// The job that ran.
    pub job: Job,
    /// Line counters for the input (all zero if it could not be read).
    pub stats: DecodeStats,
    /// Why the input could not be decoded, if it could not.
    pub input_error: Option<BatchError>,
    /// Why the output could not be written, if it could not.
    pub output_error: Option<BatchError>,
}

impl JobReport {
    /// Returns `true` if the output file was written.
    pub const fn output_written(&self) -> bool {
        self.output_error.is_none()
    }

    /// Returns `true` if both the input and the output were handled cleanly.
    pub const fn is_ok(&self) -> bool {
        self.input_error.is_none() && self.output_error.is_none()
    }
}

/// Reports for a whole batch.
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// One report per job, in job order.
    pub reports: Vec<JobReport>,
    /// Counters summed over every job.
    pub totals: DecodeStats,
}

impl BatchSummary {
    /// Number of jobs whose output file was written.
    pub fn written(&self) -> usize {
        self.reports.iter().filter(|r| r.output_written()).count()
    }

    /// Number of jobs with any failure.
    pub fn failed(&self) -> usize {
        self.reports.iter().filter(|r| !r.is_ok()).count()
    }
}

/// Writes output lines to `path`, joined by `\n` with no trailing newline.
pub fn write_output(path: impl AsRef<Path>, lines: &[String]) -> BatchResult<()> {
    let path = path.as_ref();
    fs::write(path, lines.join("\n")).map_err(|e| BatchError::writing(path, e))
}

/// Runs a single job.
pub fn run_job(job: &Job) -> JobReport {
    let (lines, stats, input_error) = match try_decode_file(&job.input) {
        Ok(out) => (out.lines, out.stats, None),
        Err(e) => {
            if e.is_not_found() {
                warn!("{e}");
            } else {
                error!("{e}");
            }
            (Vec::new(), DecodeStats::default(), Some(e))
        }
    };

    let output_error = match write_output(&job.output, &lines) {
        Ok(()) => {
            info!(path = %job.output.display(), lines = lines.len(), "wrote result");
            None
        }
        Err(e) => {
            error!("{e}");
            Some(e)
        }
    };

    JobReport {
        job: job.clone(),
        stats,
        input_error,
        output_error,
    }
}

/// Runs every job in order.
///
/// `on_report` is called after each job, before the next one starts, so a
/// caller can print progress as it happens.
pub fn run_batch<F>(jobs: &[Job], mut on_report: F) -> BatchSummary
where
    F: FnMut(&JobReport),
{
    let mut summary = BatchSummary::default();
    for job in jobs {
        let report = run_job(job);
        on_report(&report);
        summary.totals.merge(&report.stats);
        summary.reports.push(report);
    }
    info!(
        jobs = jobs.len(),
        written = summary.written(),
        failed = summary.failed(),
        "batch complete"
    );
    summary
}
