//! Conversion between `(column, row)` pairs and reference text
//!
//! These are the entry points the adjusters use. They work on plain `u32`
//! pairs and `[col1, row1, col2, row2]` arrays so callers can shift
//! individual components before encoding them again.

use super::address::{CellAddress, CellRange};
use crate::error::{Error, Result};

/// Decode a cell reference such as `"B7"` into `(col, row)`
pub fn decode(reference: &str) -> Result<(u32, u32)> {
    let addr = CellAddress::parse(reference)?;
    Ok((addr.col, addr.row))
}

/// Encode a 1-based `(col, row)` pair as a cell reference
pub fn encode(col: u32, row: u32) -> Result<String> {
    CellAddress::new(col, row).to_a1_string()
}

/// Decode a range reference such as `"A1:C4"` into `[col1, row1, col2, row2]`
///
/// The corners are returned as written, without reordering.
pub fn decode_range(reference: &str) -> Result<[u32; 4]> {
    let stripped = reference.trim().replace('$', "");
    let mut parts = stripped.split(':');

    match (parts.next(), parts.next(), parts.next()) {
        (Some(first), Some(last), None) => {
            let (x1, y1) = decode(first)
                .map_err(|e| Error::InvalidRange(format!("'{}': {}", reference, e)))?;
            let (x2, y2) = decode(last)
                .map_err(|e| Error::InvalidRange(format!("'{}': {}", reference, e)))?;
            Ok([x1, y1, x2, y2])
        }
        _ => Err(Error::InvalidRange(format!(
            "expected two cell references in '{}'",
            reference
        ))),
    }
}

/// Encode `[col1, row1, col2, row2]` as a range reference
pub fn encode_range(coords: &[u32]) -> Result<String> {
    match coords {
        [x1, y1, x2, y2] => Ok(format!("{}:{}", encode(*x1, *y1)?, encode(*x2, *y2)?)),
        _ => Err(Error::InvalidRange(format!(
            "expected 4 coordinates, got {}",
            coords.len()
        ))),
    }
}

/// Decode a range reference into a normalised [`CellRange`]
pub fn decode_area(reference: &str) -> Result<CellRange> {
    decode_range(reference).map(CellRange::from_coordinates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_decode_encode() {
        assert_eq!(decode("A1").unwrap(), (1, 1));
        assert_eq!(decode("AB12").unwrap(), (28, 12));
        assert_eq!(decode("$D$5").unwrap(), (4, 5));
        assert_eq!(encode(28, 12).unwrap(), "AB12");
        assert_eq!(encode(16384, 3).unwrap(), "XFD3");
    }

    #[test]
    fn test_encode_rejects_off_grid_coordinates() {
        assert_eq!(encode(0, 1), Err(Error::coordinate(0, 1)));
        assert_eq!(encode(1, 0), Err(Error::coordinate(1, 0)));
        assert_eq!(encode(16385, 1), Err(Error::coordinate(16385, 1)));
        assert_eq!(
            encode(1, crate::MAX_ROWS + 1),
            Err(Error::coordinate(1, crate::MAX_ROWS + 1))
        );
        assert_eq!(encode(1, crate::MAX_ROWS).unwrap(), "A1048576");
        assert_eq!(decode("A1048576").unwrap(), (1, crate::MAX_ROWS));
    }

    #[test]
    fn test_decode_rejects_malformed_text() {
        assert!(matches!(decode("7G"), Err(Error::InvalidReference(_))));
        assert!(matches!(decode("G"), Err(Error::InvalidReference(_))));
        assert!(matches!(decode("G 7"), Err(Error::InvalidReference(_))));
    }

    #[test]
    fn test_decode_range_keeps_written_order() {
        assert_eq!(decode_range("C1:B3").unwrap(), [3, 1, 2, 3]);
        assert_eq!(decode_range("$A$2:$C$10").unwrap(), [1, 2, 3, 10]);
        assert_eq!(
            decode_area("C1:B3").unwrap(),
            CellRange::from_coordinates([2, 1, 3, 3])
        );
    }

    #[test]
    fn test_decode_range_requires_two_references() {
        for bad in ["A1", "A1:B2:C3", "", "A1:?"] {
            assert!(
                matches!(decode_range(bad), Err(Error::InvalidRange(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_encode_range() {
        assert_eq!(encode_range(&[1, 2, 3, 10]).unwrap(), "A2:C10");
        assert!(matches!(encode_range(&[1, 2, 3]), Err(Error::InvalidRange(_))));
        assert!(matches!(
            encode_range(&[1, 2, 3, 4, 5]),
            Err(Error::InvalidRange(_))
        ));
        assert_eq!(encode_range(&[1, 0, 3, 4]), Err(Error::coordinate(1, 0)));
    }

    proptest! {
        #[test]
        fn prop_decode_inverts_encode(col in 1u32..=16384, row in 1u32..=1_048_576) {
            let reference = encode(col, row).unwrap();
            prop_assert_eq!(decode(&reference).unwrap(), (col, row));
        }

        #[test]
        fn prop_encode_inverts_decode(letters in "[A-W][A-Z]{0,2}", row in 1u32..=1_048_576) {
            let reference = format!("{}{}", letters, row);
            let (col, row) = decode(&reference).unwrap();
            prop_assert_eq!(encode(col, row).unwrap(), reference);
        }
    }
}
