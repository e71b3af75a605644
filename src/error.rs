//! Error types for sniffing, ingestion and merging.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::RecordFormat;

pub type Result<T> = std::result::Result<T, GenopsError>;

#[derive(Error, Debug)]
pub enum GenopsError {
    /// None of the registered sniffers accepted the file.
    #[error("could not determine the format of '{}'", path.display())]
    UnrecognizedFormat { path: PathBuf },

    #[error("cannot add a {actual} record to a {expected} collection")]
    FormatMismatch {
        expected: RecordFormat,
        actual: RecordFormat,
    },

    #[error("record has {actual} fields but the collection holds records with {expected}")]
    FieldCountMismatch { expected: usize, actual: usize },

    #[error("position '{token}' is not a non-negative integer")]
    MalformedPosition { token: String },

    #[error("malformed line: {reason}")]
    MalformedLine { reason: String },

    /// A record-level failure, located in its source file.
    #[error("{}:{line}: {source}", path.display())]
    Ingest {
        path: PathBuf,
        line: usize,
        #[source]
        source: Box<GenopsError>,
    },

    #[error("nothing to merge: no input could be read")]
    NoDatasets,

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Compression(#[from] niffler::Error),
}

impl GenopsError {
    pub(crate) fn at(self, path: PathBuf, line: usize) -> Self {
        GenopsError::Ingest {
            path,
            line,
            source: Box::new(self),
        }
    }

    /// Whether the run may continue past this error by skipping the offending file.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GenopsError::UnrecognizedFormat { .. })
    }
}
