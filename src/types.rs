use strum::{Display, EnumString};

use crate::error::{GenopsError, Result};
use crate::parser;
use crate::record::PositionRecord;

/// Marker that identifies a chromosome token, and the prefix stripped from it.
pub(crate) const CHROM_MARKER: &str = "chr";
/// Column name used when a source carries no header.
pub(crate) const PLACEHOLDER_COLUMN: &str = "NA";
pub(crate) const KEY_COLUMNS: [&str; 2] = ["CHR", "POS"];

pub type Header = Vec<String>;
pub type Position = u64;

/// The line conventions a position file can follow.
///
/// `Merged` is never sniffed; it tags the output of a join, whose rows share
/// the `TwoColumn` layout.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum RecordFormat {
    /// `chr1:12345 <fields>`
    ColonForm,
    /// `chr1 12344 12345 <fields>`
    RangeTable,
    /// `chr1 12345 <fields>`
    TwoColumn,
    /// Rows produced by a join.
    Merged,
}

impl RecordFormat {
    /// Parse one whitespace-delimited line into a record following this convention.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_genops::types::RecordFormat;
    ///
    /// let record = RecordFormat::ColonForm.parse_line("chr7:1234\tA\tG").unwrap();
    /// assert_eq!(record.chromosome(), "7");
    /// assert_eq!(*record.position(), 1234);
    /// assert_eq!(record.fields(), &["A", "G"]);
    /// ```
    pub fn parse_line(self, line: &str) -> Result<PositionRecord> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match self {
            RecordFormat::ColonForm => {
                let (chrom, pos) = parser::colon_locus(required(&tokens, 0, "locus")?)?;
                PositionRecord::from_tokens(chrom, pos, &tokens[1..])
            }
            RecordFormat::RangeTable => {
                let chrom = required(&tokens, 0, "chromosome")?;
                required(&tokens, 1, "start")?;
                // the record sits at the 1-based end of the unit-width interval
                let end = required(&tokens, 2, "end")?;
                PositionRecord::from_tokens(chrom, end, &tokens[3..])
            }
            RecordFormat::TwoColumn | RecordFormat::Merged => {
                let chrom = required(&tokens, 0, "chromosome")?;
                let pos = required(&tokens, 1, "position")?;
                PositionRecord::from_tokens(chrom, pos, &tokens[2..])
            }
        }
    }
}

fn required<'a>(tokens: &[&'a str], idx: usize, what: &str) -> Result<&'a str> {
    tokens
        .get(idx)
        .copied()
        .ok_or_else(|| GenopsError::MalformedLine {
            reason: format!("missing {} column (column {})", what, idx + 1),
        })
}
