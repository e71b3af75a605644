use std::fmt;

use getset::Getters;
use itertools::Itertools;

use crate::error::Result;
use crate::parser::parse_position;
use crate::types::{Position, CHROM_MARKER};

/// A single genomic position and the payload columns a file attached to it.
///
/// Records compare equal when chromosome and position match; the fields are
/// carried along but never take part in the comparison.
#[derive(Debug, Clone, Getters)]
#[getset(get = "pub")]
pub struct PositionRecord {
    chromosome: String,
    position: Position,
    fields: Vec<String>,
}

impl PositionRecord {
    /// Build a record, stripping a leading `chr` from the chromosome name.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_genops::record::PositionRecord;
    ///
    /// let a = PositionRecord::new("chr7", 100, vec!["x".into()]);
    /// let b = PositionRecord::new("7", 100, vec![]);
    /// assert_eq!(a.chromosome(), "7");
    /// assert_eq!(a, b);
    /// ```
    pub fn new(chromosome: &str, position: Position, fields: Vec<String>) -> Self {
        let chromosome = chromosome
            .strip_prefix(CHROM_MARKER)
            .unwrap_or(chromosome)
            .to_owned();
        Self {
            chromosome,
            position,
            fields,
        }
    }

    pub(crate) fn from_tokens(chromosome: &str, position: &str, fields: &[&str]) -> Result<Self> {
        let position = parse_position(position)?;
        Ok(Self::new(
            chromosome,
            position,
            fields.iter().map(|&f| f.to_owned()).collect(),
        ))
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// The record that results from joining `self` with `other` at the same key.
    pub(crate) fn joined(&self, other: &PositionRecord) -> PositionRecord {
        PositionRecord {
            chromosome: self.chromosome.clone(),
            position: self.position,
            fields: self
                .fields
                .iter()
                .chain(other.fields.iter())
                .cloned()
                .collect(),
        }
    }
}

impl PartialEq for PositionRecord {
    fn eq(&self, other: &Self) -> bool {
        self.chromosome == other.chromosome && self.position == other.position
    }
}

impl Eq for PositionRecord {}

impl fmt::Display for PositionRecord {
    /// Tab-delimited row: chromosome, position, then the fields.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.chromosome, self.position)?;
        if !self.fields.is_empty() {
            write!(f, "\t{}", self.fields.iter().join("\t"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_equality_ignores_fields() {
        let a = PositionRecord::new("1", 100, vec!["x".into()]);
        let b = PositionRecord::new("1", 100, vec!["y".into(), "z".into()]);
        let c = PositionRecord::new("1", 101, vec!["x".into()]);
        let d = PositionRecord::new("2", 100, vec!["x".into()]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn test_prefix_is_stripped_only_at_start() {
        assert_eq!(PositionRecord::new("chrX", 1, vec![]).chromosome(), "X");
        assert_eq!(PositionRecord::new("scaffold_chr1", 1, vec![]).chromosome(), "scaffold_chr1");
    }

    #[test]
    fn test_joined() {
        let a = PositionRecord::new("1", 100, vec!["x".into()]);
        let b = PositionRecord::new("1", 100, vec!["y".into()]);
        let joined = a.joined(&b);
        assert_eq!(joined.fields(), &["x", "y"]);
        assert_eq!(joined.field_count(), 2);
        assert_eq!(a.field_count(), 1);
    }

    #[test]
    fn test_display() {
        let a = PositionRecord::new("chr1", 100, vec!["x".into(), "y".into()]);
        assert_eq!(a.to_string(), "1\t100\tx\ty");
        assert_eq!(PositionRecord::new("2", 5, vec![]).to_string(), "2\t5");
    }
}
