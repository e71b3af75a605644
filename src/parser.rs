use nom::bytes::complete::is_not;
use nom::character::complete::{char, i64 as signed, u64 as unsigned};
use nom::combinator::{all_consuming, opt, rest};
use nom::sequence::{preceded, separated_pair};
use nom::IResult;

use crate::error::{GenopsError, Result};
use crate::types::Position;

fn position(input: &str) -> IResult<&str, Position> {
    all_consuming(preceded(opt(char('+')), unsigned))(input)
}

fn signed_integer(input: &str) -> IResult<&str, i64> {
    all_consuming(signed)(input)
}

fn locus(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(is_not(":"), char(':'), rest)(input)
}

/// Parse a position token, which must be a non-negative integer (an explicit
/// `+` is allowed) with nothing trailing.
pub(crate) fn parse_position(token: &str) -> Result<Position> {
    position(token)
        .map(|(_, pos)| pos)
        .map_err(|_| GenopsError::MalformedPosition {
            token: token.to_owned(),
        })
}

/// Whether `token` is a signed integer, as the sniffers accept it.
pub(crate) fn integer(token: &str) -> Option<i64> {
    signed_integer(token).ok().map(|(_, v)| v)
}

/// Split a `chr1:12345` identifier into its chromosome and position tokens.
pub(crate) fn colon_locus(token: &str) -> Result<(&str, &str)> {
    let (_, (chrom, pos)) = locus(token).map_err(|_| GenopsError::MalformedLine {
        reason: format!("'{}' is not of the form chromosome:position", token),
    })?;
    Ok((chrom, pos))
}

/// Shape test applied by the colon-form sniffer to the first token of a line.
pub(crate) fn looks_like_colon_locus(token: &str) -> bool {
    token.contains(crate::types::CHROM_MARKER) && token.contains(':')
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("12345").unwrap(), 12345);
        assert_eq!(parse_position("+100").unwrap(), 100);
        assert!(parse_position("++1").is_err());
        assert!(parse_position("+").is_err());
        assert!(parse_position("-1").is_err());
        assert!(parse_position("12.5").is_err());
        assert!(parse_position("").is_err());
    }

    #[test]
    fn test_integer() {
        assert_eq!(integer("-4"), Some(-4));
        assert_eq!(integer("17"), Some(17));
        assert_eq!(integer("17bp"), None);
    }

    #[test]
    fn test_colon_locus() {
        assert_eq!(colon_locus("chr1:12345").unwrap(), ("chr1", "12345"));
        assert_eq!(colon_locus("chrX:").unwrap(), ("chrX", ""));
        assert!(colon_locus("chr1").is_err());
        assert!(colon_locus(":5").is_err());
    }

    #[test]
    fn test_looks_like_colon_locus() {
        assert!(looks_like_colon_locus("chr1:100"));
        assert!(!looks_like_colon_locus("1:100"));
        assert!(!looks_like_colon_locus("chr1"));
    }
}
