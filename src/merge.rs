//! Positional inner join of record lists.
//!
//! Lists are folded left to right: the running result is joined against the
//! next list in turn. Each join is a plain nested scan in the accumulator's
//! order, so output order follows the first list and cost is O(n·m) per step.

use itertools::iproduct;

use crate::error::{GenopsError, Result};
use crate::record::RecordList;
use crate::report::Reporter;
use crate::types::RecordFormat;

/// Join two lists on chromosome and position.
///
/// The result has `left`'s header followed by `right`'s, and one record per
/// matching pair carrying `left`'s fields followed by `right`'s. Records
/// without a partner are dropped.
///
/// # Examples
///
/// ```
/// use rust_genops::merge::merge_pair;
/// use rust_genops::record::{PositionRecord, RecordList};
/// use rust_genops::types::RecordFormat;
///
/// let mut a = RecordList::new(RecordFormat::TwoColumn, Some(vec!["col_a".into()]));
/// a.append(RecordFormat::TwoColumn, PositionRecord::new("1", 100, vec!["x".into()])).unwrap();
/// let mut b = RecordList::new(RecordFormat::TwoColumn, Some(vec!["col_b".into()]));
/// b.append(RecordFormat::TwoColumn, PositionRecord::new("1", 100, vec!["y".into()])).unwrap();
/// b.append(RecordFormat::TwoColumn, PositionRecord::new("2", 200, vec!["z".into()])).unwrap();
///
/// let merged = merge_pair(&a, &b).unwrap();
/// assert_eq!(merged.header_line(), "CHR\tPOS\tcol_a\tcol_b");
/// assert_eq!(merged.len(), 1);
/// assert_eq!(merged.records()[0].to_string(), "1\t100\tx\ty");
/// ```
pub fn merge_pair(left: &RecordList, right: &RecordList) -> Result<RecordList> {
    let header = left
        .header()
        .iter()
        .chain(right.header())
        .cloned()
        .collect();
    let mut merged = RecordList::new(RecordFormat::Merged, Some(header));
    for (a, d) in iproduct!(left.iter(), right.iter()) {
        if a == d {
            merged.append(RecordFormat::Merged, a.joined(d))?;
        }
    }
    Ok(merged)
}

/// Fold `datasets` into one list, joining the accumulator against each next list.
///
/// A single list comes back unchanged; an empty slice is an error.
pub fn merge(datasets: &[RecordList], reporter: &mut dyn Reporter) -> Result<RecordList> {
    let (first, rest) = datasets.split_first().ok_or(GenopsError::NoDatasets)?;
    let mut acc = first.clone();
    for (step, dataset) in rest.iter().enumerate() {
        acc = merge_pair(&acc, dataset)?;
        reporter.merged(step + 1, acc.len());
    }
    Ok(acc)
}
