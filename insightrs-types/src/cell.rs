//! Spreadsheet cells and symbolic tags

use std::fmt;
use std::str::FromStr;

use insightrs_core::constants::MAX_ROW;

use crate::error::{Error, Result};

/// Spreadsheet column, `A` to `Z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Column(char);

impl Column {
    /// Create a column; lower-case letters are accepted
    pub fn new(letter: char) -> Result<Self> {
        let letter = letter.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            return Err(Error::Validation(format!(
                "Column must be a letter between A and Z, got {letter:?}"
            )));
        }
        Ok(Self(letter))
    }

    pub fn letter(self) -> char {
        self.0
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Spreadsheet cell, rendered as column letter plus three-digit row (`A005`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellAddress {
    column: Column,
    row: u16,
}

impl CellAddress {
    /// Create a cell address
    ///
    /// # Examples
    ///
    /// ```
    /// use insightrs_types::CellAddress;
    ///
    /// let cell = CellAddress::new('b', 10).unwrap();
    /// assert_eq!(cell.to_string(), "B010");
    ///
    /// assert!(CellAddress::new('A', 400).is_err());
    /// ```
    pub fn new(column: char, row: u16) -> Result<Self> {
        if row > MAX_ROW {
            return Err(Error::Validation(format!(
                "Row must be between 0 and {MAX_ROW} (inclusive), got {row}"
            )));
        }

        Ok(Self {
            column: Column::new(column)?,
            row,
        })
    }

    pub fn column(&self) -> Column {
        self.column
    }

    pub fn row(&self) -> u16 {
        self.row
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:03}", self.column, self.row)
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    /// Parse `A5`, `a005`, `Z399`
    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.trim().chars();
        let column = chars
            .next()
            .ok_or_else(|| Error::Parse("Empty cell address".into()))?;
        let row = chars
            .as_str()
            .parse::<u16>()
            .map_err(|e| Error::Parse(format!("Invalid row in cell address {s:?}: {e}")))?;

        Self::new(column, row)
    }
}

/// Where a value lives: a spreadsheet cell or an EasyBuilder symbolic tag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueTarget {
    Cell(CellAddress),
    Tag(String),
}

impl ValueTarget {
    /// Spreadsheet cell target
    pub fn cell(column: char, row: u16) -> Result<Self> {
        Ok(Self::Cell(CellAddress::new(column, row)?))
    }

    /// Symbolic tag target, e.g. `Pattern_1.Horizontal_Offset`
    ///
    /// Tags are separated from values by a space on the wire, so they must
    /// be non-empty printable ASCII without whitespace.
    pub fn tag(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(Error::Validation("The symbolic tag cannot be empty".into()));
        }

        if !name.chars().all(|c| c.is_ascii_graphic()) {
            return Err(Error::Validation(format!(
                "The symbolic tag {name:?} must be printable ASCII without whitespace"
            )));
        }

        Ok(Self::Tag(name))
    }

    /// Address as sent by `GV`
    pub fn address(&self) -> String {
        match self {
            Self::Cell(cell) => cell.to_string(),
            Self::Tag(tag) => tag.clone(),
        }
    }

    /// Address followed by a value, as sent by `SI`/`SF`/`SR`
    ///
    /// Cells take the value directly after the row, tags need a space.
    ///
    /// # Examples
    ///
    /// ```
    /// use insightrs_types::ValueTarget;
    ///
    /// let cell = ValueTarget::cell('D', 19).unwrap();
    /// assert_eq!(cell.with_value(53), "D01953");
    ///
    /// let tag = ValueTarget::tag("Threshold").unwrap();
    /// assert_eq!(tag.with_value(53), "Threshold 53");
    /// ```
    pub fn with_value(&self, value: impl fmt::Display) -> String {
        match self {
            Self::Cell(cell) => format!("{cell}{value}"),
            Self::Tag(tag) => format!("{tag} {value}"),
        }
    }

    pub fn is_cell(&self) -> bool {
        matches!(self, Self::Cell(_))
    }
}

impl From<CellAddress> for ValueTarget {
    fn from(cell: CellAddress) -> Self {
        Self::Cell(cell)
    }
}

impl fmt::Display for ValueTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address())
    }
}
