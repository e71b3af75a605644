use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::error::{GenopsError, Result};
use crate::record::{PositionRecord, RecordList};
use crate::report::Reporter;
use crate::sniff::{Classification, SnifferRegistry};
use crate::types::RecordFormat;

/// Open a plain or compressed text file for line reading.
pub fn open<P: AsRef<Path>>(path: P) -> Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    let reader: Box<dyn Read> = match niffler::from_path(path) {
        Ok((reader, _format)) => reader,
        // too short to carry a compression magic number
        Err(niffler::Error::FileTooShort) => Box::new(File::open(path)?),
        Err(e) => return Err(e.into()),
    };
    Ok(Box::new(BufReader::new(reader)))
}

/// Records parsed from the data lines of one source.
///
/// Lines before `data_start` and blank lines are skipped. Each item carries
/// the 1-based line number it came from. Invalid UTF-8 is decoded lossily.
pub struct PositionRecords<R: BufRead> {
    format: RecordFormat,
    data_start: usize,
    line_idx: usize,
    buf: Vec<u8>,
    inner: R,
}

impl<R: BufRead> PositionRecords<R> {
    pub fn new(reader: R, classification: &Classification) -> Self {
        Self {
            format: classification.format(),
            data_start: classification.data_start(),
            line_idx: 0,
            buf: Vec::new(),
            inner: reader,
        }
    }
}

impl<R: BufRead> Iterator for PositionRecords<R> {
    type Item = (usize, Result<PositionRecord>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            let read = self.inner.read_until(b'\n', &mut self.buf);
            self.line_idx += 1;
            match read {
                Ok(0) => return None,
                Err(e) => return Some((self.line_idx, Err(e.into()))),
                Ok(_) => {}
            }
            if self.line_idx <= self.data_start {
                continue;
            }
            let line = String::from_utf8_lossy(&self.buf);
            if line.trim().is_empty() {
                continue;
            }
            return Some((self.line_idx, self.format.parse_line(&line)));
        }
    }
}

/// Parse every data line of a classified source into a new list.
///
/// The first bad line aborts the whole read; the error names `path` and the line.
pub fn ingest<R: BufRead>(reader: R, path: &Path, classification: &Classification) -> Result<RecordList> {
    let format = classification.format();
    let mut list = RecordList::new(format, classification.header().cloned());
    for (line, record) in PositionRecords::new(reader, classification) {
        record
            .and_then(|record| list.append(format, record))
            .map_err(|e| e.at(path.to_owned(), line))?;
    }
    if let (Some(count), Some(header)) = (list.field_count(), classification.header()) {
        if count != header.len() {
            warn!(
                "{}: header names {} columns but records carry {} fields",
                path.display(),
                header.len(),
                count
            );
        }
    }
    Ok(list)
}

/// Classify and ingest each path in order.
///
/// Detection failures that [`GenopsError::is_recoverable`] allows are handed
/// to `reporter` and the file is left out; any other failure stops the run.
pub fn ingest_all<P: AsRef<Path>>(
    registry: &SnifferRegistry,
    paths: &[P],
    reporter: &mut dyn Reporter,
) -> Result<Vec<RecordList>> {
    info!("Sniffing and reading {} input files", paths.len());
    let mut lists = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.as_ref();
        let classified = registry.classify_path(path).and_then(|found| {
            found.ok_or_else(|| GenopsError::UnrecognizedFormat {
                path: PathBuf::from(path),
            })
        });
        let classification = match classified {
            Ok(classification) => classification,
            Err(e) if e.is_recoverable() => {
                reporter.skipped(&e);
                continue;
            }
            Err(e) => return Err(e),
        };
        let list = ingest(open(path)?, path, &classification)?;
        reporter.ingested(path, list.format(), list.len());
        lists.push(list);
    }
    Ok(lists)
}
