use getset::{CopyGetters, Getters};
use itertools::Itertools;

use crate::error::{GenopsError, Result};
use crate::record::PositionRecord;
use crate::types::{Header, RecordFormat, KEY_COLUMNS, PLACEHOLDER_COLUMN};

/// An ordered, homogeneous collection of records from one source.
///
/// The format and the number of fields are fixed: the format when the list is
/// created, the field count by the first record appended. Records keep their
/// insertion order.
#[derive(Debug, Clone, Getters, CopyGetters)]
pub struct RecordList {
    #[getset(get_copy = "pub")]
    format: RecordFormat,
    header: Option<Header>,
    #[getset(get_copy = "pub")]
    field_count: Option<usize>,
    #[getset(get = "pub")]
    records: Vec<PositionRecord>,
}

impl RecordList {
    pub fn new(format: RecordFormat, header: Option<Header>) -> Self {
        Self {
            format,
            header,
            field_count: None,
            records: Vec::new(),
        }
    }

    /// Column names of the payload fields.
    ///
    /// A list created without a header gets one `NA` column per field once
    /// its first record is appended.
    pub fn header(&self) -> &[String] {
        self.header.as_deref().unwrap_or(&[])
    }

    /// Append a record parsed with `format`.
    ///
    /// Fails if the format differs from the list's, or if the record's field
    /// count differs from that of the records already held.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_genops::record::{PositionRecord, RecordList};
    /// use rust_genops::types::RecordFormat;
    ///
    /// let mut list = RecordList::new(RecordFormat::TwoColumn, None);
    /// let record = PositionRecord::new("chr1", 10, vec!["a".into(), "b".into()]);
    /// list.append(RecordFormat::TwoColumn, record).unwrap();
    /// assert_eq!(list.header(), &["NA", "NA"]);
    ///
    /// let short = PositionRecord::new("chr1", 11, vec!["a".into()]);
    /// assert!(list.append(RecordFormat::TwoColumn, short).is_err());
    /// ```
    pub fn append(&mut self, format: RecordFormat, record: PositionRecord) -> Result<()> {
        if format != self.format {
            return Err(GenopsError::FormatMismatch {
                expected: self.format,
                actual: format,
            });
        }
        match self.field_count {
            Some(expected) if expected != record.field_count() => {
                return Err(GenopsError::FieldCountMismatch {
                    expected,
                    actual: record.field_count(),
                });
            }
            Some(_) => {}
            None => {
                self.field_count = Some(record.field_count());
                if self.header.is_none() {
                    self.header = Some(vec![PLACEHOLDER_COLUMN.to_owned(); record.field_count()]);
                }
            }
        }
        self.records.push(record);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PositionRecord> {
        self.records.iter()
    }

    /// The rendered header row: `CHR`, `POS`, then the field names.
    pub fn header_line(&self) -> String {
        KEY_COLUMNS
            .iter()
            .copied()
            .chain(self.header().iter().map(String::as_str))
            .join("\t")
    }
}

impl<'a> IntoIterator for &'a RecordList {
    type Item = &'a PositionRecord;
    type IntoIter = std::slice::Iter<'a, PositionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
