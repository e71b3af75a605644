//! Format detection for position files.
//!
//! Each [`Sniffer`] recognises one line convention. A sniffer reads lines
//! until the first data-bearing one and lets that line alone decide; header
//! lines met on the way are remembered. The [`SnifferRegistry`] tries its
//! sniffers in registration order and returns the first match.

use std::io::{BufRead, Cursor};
use std::path::Path;

use getset::{CopyGetters, Getters};
use log::debug;

use crate::error::Result;
use crate::parser::{integer, looks_like_colon_locus};
use crate::reader;
use crate::types::{Header, RecordFormat, CHROM_MARKER};

/// Outcome of running one sniffer over one file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct Verdict {
    #[getset(get_copy = "pub")]
    is_match: bool,
    #[getset(get = "pub")]
    header: Option<Header>,
    /// Zero-based index of the first data line.
    #[getset(get_copy = "pub")]
    data_start: usize,
}

impl Verdict {
    fn matched(header: Option<Header>, data_start: usize) -> Self {
        Self {
            is_match: true,
            header,
            data_start,
        }
    }

    fn rejected() -> Self {
        Self {
            is_match: false,
            header: None,
            data_start: 0,
        }
    }
}

/// A positive verdict bound to the record format it was registered with.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct Classification {
    #[getset(get_copy = "pub")]
    format: RecordFormat,
    #[getset(get = "pub")]
    verdict: Verdict,
}

impl Classification {
    pub fn header(&self) -> Option<&Header> {
        self.verdict.header.as_ref()
    }

    pub fn data_start(&self) -> usize {
        self.verdict.data_start
    }
}

pub trait Sniffer {
    /// Leading token that marks a header line.
    fn header_marker(&self) -> &'static str;

    /// Number of leading header tokens that do not name payload columns.
    fn key_columns(&self) -> usize;

    /// Whether a whitespace-split data line has this sniffer's shape.
    fn accepts(&self, tokens: &[&str]) -> bool;

    /// Decide on the leading content of `reader`.
    ///
    /// Blank lines are skipped. Header lines are remembered (the last one
    /// wins). The first other line decides; later lines are never read.
    /// Bytes that are not valid UTF-8 are read as replacement characters, so
    /// binary or mis-encoded input is rejected rather than failing the read.
    fn sniff(&self, reader: &mut dyn BufRead) -> Result<Verdict> {
        let mut header = None;
        let mut buf = Vec::new();
        let mut idx = 0;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                return Ok(Verdict::rejected());
            }
            let line = String::from_utf8_lossy(&buf);
            let tokens: Vec<&str> = line.split_whitespace().collect();
            match tokens.first() {
                None => {}
                Some(&first) if first == self.header_marker() => {
                    header = Some(
                        tokens
                            .iter()
                            .skip(self.key_columns())
                            .map(|&t| t.to_owned())
                            .collect(),
                    );
                }
                Some(_) if self.accepts(&tokens) => return Ok(Verdict::matched(header, idx)),
                Some(_) => return Ok(Verdict::rejected()),
            }
            idx += 1;
        }
    }
}

/// `VAR`-headed files keyed by `chr1:12345` identifiers.
#[derive(Debug, Default)]
pub struct ColonFormSniffer;

impl Sniffer for ColonFormSniffer {
    fn header_marker(&self) -> &'static str {
        "VAR"
    }

    fn key_columns(&self) -> usize {
        1
    }

    fn accepts(&self, tokens: &[&str]) -> bool {
        looks_like_colon_locus(tokens[0])
    }
}

/// `chrom`-headed tables where each point is written as a unit-width interval.
#[derive(Debug, Default)]
pub struct RangeTableSniffer;

impl Sniffer for RangeTableSniffer {
    fn header_marker(&self) -> &'static str {
        "chrom"
    }

    fn key_columns(&self) -> usize {
        3
    }

    fn accepts(&self, tokens: &[&str]) -> bool {
        if !tokens[0].contains(CHROM_MARKER) {
            return false;
        }
        let bounds = (
            tokens.get(1).and_then(|t| integer(t)),
            tokens.get(2).and_then(|t| integer(t)),
        );
        match bounds {
            (Some(start), Some(end)) => end.checked_sub(start) == Some(1),
            _ => false,
        }
    }
}

/// `chr`-headed files with chromosome and position in the first two columns.
#[derive(Debug, Default)]
pub struct TwoColumnSniffer;

impl Sniffer for TwoColumnSniffer {
    fn header_marker(&self) -> &'static str {
        "chr"
    }

    fn key_columns(&self) -> usize {
        2
    }

    fn accepts(&self, tokens: &[&str]) -> bool {
        tokens[0].contains(CHROM_MARKER) && tokens.get(1).and_then(|t| integer(t)).is_some()
    }
}

/// Ordered sniffers, each bound to the record format of the files it accepts.
pub struct SnifferRegistry {
    sniffers: Vec<(Box<dyn Sniffer>, RecordFormat)>,
}

impl Default for SnifferRegistry {
    /// Colon-form first, then range-table, then two-column.
    fn default() -> Self {
        let mut registry = Self::new();
        registry
            .register(ColonFormSniffer, RecordFormat::ColonForm)
            .register(RangeTableSniffer, RecordFormat::RangeTable)
            .register(TwoColumnSniffer, RecordFormat::TwoColumn);
        registry
    }
}

impl SnifferRegistry {
    pub fn new() -> Self {
        Self {
            sniffers: Vec::new(),
        }
    }

    pub fn register<S: Sniffer + 'static>(&mut self, sniffer: S, format: RecordFormat) -> &mut Self {
        self.sniffers.push((Box::new(sniffer), format));
        self
    }

    pub fn formats(&self) -> impl Iterator<Item = RecordFormat> + '_ {
        self.sniffers.iter().map(|(_, format)| *format)
    }

    /// Classify the content produced by `open`, which is called once per sniffer
    /// so that every sniffer starts reading from the beginning.
    pub fn classify_with<F>(&self, mut open: F) -> Result<Option<Classification>>
    where
        F: FnMut() -> Result<Box<dyn BufRead>>,
    {
        for (sniffer, format) in &self.sniffers {
            let mut reader = open()?;
            let verdict = sniffer.sniff(reader.as_mut())?;
            debug!("{} sniffer: match={}", format, verdict.is_match());
            if verdict.is_match() {
                return Ok(Some(Classification {
                    format: *format,
                    verdict,
                }));
            }
        }
        Ok(None)
    }

    /// Classify in-memory content.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_genops::sniff::SnifferRegistry;
    /// use rust_genops::types::RecordFormat;
    ///
    /// let registry = SnifferRegistry::default();
    /// let found = registry.classify_bytes(b"chr\tpos\tdepth\nchr3\t500\t42\n").unwrap().unwrap();
    /// assert_eq!(found.format(), RecordFormat::TwoColumn);
    /// assert_eq!(found.header().unwrap(), &["depth"]);
    /// ```
    pub fn classify_bytes(&self, content: &[u8]) -> Result<Option<Classification>> {
        let content = content.to_vec();
        self.classify_with(|| Ok(Box::new(Cursor::new(content.clone())) as Box<dyn BufRead>))
    }

    /// Classify a file on disk, which may be compressed.
    pub fn classify_path<P: AsRef<Path>>(&self, path: P) -> Result<Option<Classification>> {
        let path = path.as_ref();
        self.classify_with(|| reader::open(path))
    }
}
