//! Cell address and range types

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};
use std::fmt;
use std::str::FromStr;

/// A cell address (e.g., "A1", "XFD1048576")
///
/// Both components are 1-based, matching the textual form: column `A` is 1
/// and row `1` is 1. `$` absolute markers are accepted when parsing and never
/// written back out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellAddress {
    /// Column index (1-based, A=1, B=2, ..., XFD=16384)
    pub col: u32,
    /// Row index (1-based)
    pub row: u32,
}

impl CellAddress {
    /// Create a new cell address from a 1-based column and row
    pub fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    /// Check that both components lie on the grid
    pub fn is_valid(&self) -> bool {
        (1..=MAX_COLS).contains(&self.col) && (1..=MAX_ROWS).contains(&self.row)
    }

    /// Parse a cell address from A1-style notation
    ///
    /// # Examples
    /// ```
    /// use gridshift_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("B3").unwrap();
    /// assert_eq!(addr.col, 2);
    /// assert_eq!(addr.row, 3);
    ///
    /// let addr = CellAddress::parse("$AA$10").unwrap();
    /// assert_eq!(addr.col, 27);
    /// assert_eq!(addr.row, 10);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidReference("empty reference".into()));
        }

        let bytes = s.as_bytes();
        let mut pos = 0;

        if bytes.get(pos) == Some(&b'$') {
            pos += 1;
        }

        let col_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
            pos += 1;
        }

        if pos == col_start {
            return Err(Error::InvalidReference(format!(
                "no column letters in '{}'",
                s
            )));
        }

        let col = Self::letters_to_column(&s[col_start..pos])
            .map_err(|_| Error::InvalidReference(format!("column out of range in '{}'", s)))?;

        if bytes.get(pos) == Some(&b'$') {
            pos += 1;
        }

        let row_str = &s[pos..];
        if row_str.is_empty() {
            return Err(Error::InvalidReference(format!("no row number in '{}'", s)));
        }
        if !row_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidReference(format!(
                "invalid row number in '{}'",
                s
            )));
        }

        let row: u32 = row_str
            .parse()
            .map_err(|_| Error::InvalidReference(format!("invalid row number in '{}'", s)))?;

        if row == 0 || row > MAX_ROWS {
            return Err(Error::InvalidReference(format!(
                "row number out of range in '{}'",
                s
            )));
        }

        Ok(Self { col, row })
    }

    /// Convert a 1-based column index to letters (1 = A, 26 = Z, 27 = AA, etc.)
    pub fn column_to_letters(col: u32) -> Result<String> {
        if col < 1 || col > MAX_COLS {
            return Err(Error::coordinate(col, 1));
        }

        let mut result = String::new();
        let mut n = col;

        while n > 0 {
            n -= 1;
            let c = ((n % 26) as u8 + b'A') as char;
            result.insert(0, c);
            n /= 26;
        }

        Ok(result)
    }

    /// Convert column letters to a 1-based index (A = 1, Z = 26, AA = 27, etc.)
    pub fn letters_to_column(letters: &str) -> Result<u32> {
        if letters.is_empty() {
            return Err(Error::InvalidReference("empty column letters".into()));
        }

        let mut col: u32 = 0;
        for c in letters.chars() {
            if !c.is_ascii_alphabetic() {
                return Err(Error::InvalidReference(format!(
                    "invalid column letter '{}'",
                    c
                )));
            }
            col = col * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
            if col > MAX_COLS {
                return Err(Error::InvalidReference(format!(
                    "column '{}' beyond the last column",
                    letters
                )));
            }
        }

        Ok(col)
    }

    /// Format as A1-style string
    ///
    /// Fails for any address [`CellAddress::parse`] would not accept back.
    pub fn to_a1_string(&self) -> Result<String> {
        if !self.is_valid() {
            return Err(Error::coordinate(self.col, self.row));
        }
        let letters = Self::column_to_letters(self.col)?;
        Ok(format!("{}{}", letters, self.row))
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_a1_string() {
            Ok(s) => f.write_str(&s),
            Err(_) => write!(f, "R{}C{}", self.row, self.col),
        }
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A rectangular range of cells (e.g., "A1:B10")
///
/// Construction through [`CellRange::new`] always normalises the corners so
/// `start` is the top-left and `end` the bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellRange {
    /// Start address (top-left)
    pub start: CellAddress,
    /// End address (bottom-right)
    pub end: CellAddress,
}

impl CellRange {
    /// Create a new cell range
    pub fn new(start: CellAddress, end: CellAddress) -> Self {
        let (start_row, end_row) = if start.row <= end.row {
            (start.row, end.row)
        } else {
            (end.row, start.row)
        };

        let (start_col, end_col) = if start.col <= end.col {
            (start.col, end.col)
        } else {
            (end.col, start.col)
        };

        Self {
            start: CellAddress::new(start_col, start_row),
            end: CellAddress::new(end_col, end_row),
        }
    }

    /// Create a range from `[col1, row1, col2, row2]`
    pub fn from_coordinates(coords: [u32; 4]) -> Self {
        let [x1, y1, x2, y2] = coords;
        Self::new(CellAddress::new(x1, y1), CellAddress::new(x2, y2))
    }

    /// Corners as `[col1, row1, col2, row2]`
    pub fn coordinates(&self) -> [u32; 4] {
        [self.start.col, self.start.row, self.end.col, self.end.row]
    }

    /// Parse a range from A1:B10 notation
    ///
    /// Exactly two cell references are required; a bare "A1" is rejected.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let stripped = s.replace('$', "");
        let mut parts = stripped.split(':');

        let (first, last) = match (parts.next(), parts.next(), parts.next()) {
            (Some(first), Some(last), None) => (first, last),
            _ => {
                return Err(Error::InvalidRange(format!(
                    "expected two cell references in '{}'",
                    s
                )))
            }
        };

        let start = CellAddress::parse(first)
            .map_err(|e| Error::InvalidRange(format!("'{}': {}", s, e)))?;
        let end = CellAddress::parse(last)
            .map_err(|e| Error::InvalidRange(format!("'{}': {}", s, e)))?;

        Ok(Self::new(start, end))
    }

    /// Check if the range covers a single cell
    pub fn is_single_cell(&self) -> bool {
        self.start == self.end
    }

    /// Format as A1:B10 string
    ///
    /// Both corners are always written, so a one-cell range reads "C3:C3".
    pub fn to_a1_string(&self) -> Result<String> {
        Ok(format!(
            "{}:{}",
            self.start.to_a1_string()?,
            self.end.to_a1_string()?
        ))
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

impl FromStr for CellRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
