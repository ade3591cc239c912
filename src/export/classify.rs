//! Positional and banding classes for rows and cells.
//!
//! Table styles in Word define conditional formatting for the first/last
//! row and column and for alternating row bands. The emitter tags every
//! row and cell with these names so a stylesheet can target them.

use std::fmt;

pub fn row_position_class(row: usize, row_count: usize) -> &'static str {
    if row == 0 {
        "firstRow"
    } else if row + 1 == row_count {
        "lastRow"
    } else {
        "row"
    }
}

/// Banding starts at the second row and follows absolute row parity.
pub fn band_class(row: usize) -> &'static str {
    if row == 0 {
        ""
    } else if row % 2 == 0 {
        "band2Horz"
    } else {
        "band1Horz"
    }
}

pub fn col_position_class(index: usize, cell_count: usize) -> &'static str {
    if index == 0 {
        "firstCol"
    } else if index + 1 == cell_count {
        "lastCol"
    } else {
        "col"
    }
}

/// Class list for a `<tr>`; displays as `firstRow` or `row band1Horz`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowClasses {
    pub position: &'static str,
    pub band: &'static str,
}

impl RowClasses {
    pub fn new(row: usize, row_count: usize) -> Self {
        Self {
            position: row_position_class(row, row_count),
            band: band_class(row),
        }
    }
}

impl fmt::Display for RowClasses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.position)?;
        if !self.band.is_empty() {
            write!(f, " {}", self.band)?;
        }
        Ok(())
    }
}
