//! Run-time reporting handed explicitly to ingestion and merging.

use std::path::{Path, PathBuf};

use log::{error, info};

use crate::error::GenopsError;
use crate::types::RecordFormat;

pub trait Reporter {
    /// A file was left out of the run; `reason` is a recoverable error.
    fn skipped(&mut self, reason: &GenopsError);

    fn ingested(&mut self, path: &Path, format: RecordFormat, records: usize);

    /// One fold step of the merge finished with `records` joined rows.
    fn merged(&mut self, step: usize, records: usize);
}

/// Forwards events to the `log` facade and remembers which files were skipped.
#[derive(Debug, Default)]
pub struct LogReporter {
    skipped: Vec<PathBuf>,
}

impl LogReporter {
    pub fn skipped_paths(&self) -> &[PathBuf] {
        &self.skipped
    }
}

impl Reporter for LogReporter {
    fn skipped(&mut self, reason: &GenopsError) {
        error!("{}, continuing without it", reason);
        if let GenopsError::UnrecognizedFormat { path } = reason {
            self.skipped.push(path.clone());
        }
    }

    fn ingested(&mut self, path: &Path, format: RecordFormat, records: usize) {
        info!("{}: {} records as {}", path.display(), records, format);
    }

    fn merged(&mut self, step: usize, records: usize) {
        info!("merge step {}: {} joined records", step, records);
    }
}
