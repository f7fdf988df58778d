//! Text coordinates: a row letter followed by a 1-based column number.

#[cfg(not(feature = "std"))]
use alloc::{format, string::String};

use crate::common::CoordError;

/// Parse `input` (e.g. `"B3"`, `"f6"`) into zero-based `(row, col)` on a
/// `size`×`size` board. Surrounding whitespace is ignored.
pub fn parse_coord(input: &str, size: usize) -> Result<(usize, usize), CoordError> {
    let input = input.trim();
    let mut chars = input.chars();
    let row_ch = chars.next().ok_or(CoordError::Empty)?;
    if !row_ch.is_ascii_alphabetic() {
        return Err(CoordError::InvalidRow(row_ch));
    }
    let row = (row_ch.to_ascii_uppercase() as u8 - b'A') as usize;
    if row >= size {
        return Err(CoordError::RowOutOfRange(row_ch));
    }

    let col_str = chars.as_str();
    if col_str.is_empty() {
        return Err(CoordError::MissingColumn);
    }
    if !col_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoordError::InvalidColumn);
    }
    let col: usize = col_str.parse().map_err(|_| CoordError::InvalidColumn)?;
    if col == 0 || col > size {
        return Err(CoordError::ColumnOutOfRange(col));
    }
    Ok((row, col - 1))
}

/// Format zero-based `(row, col)` the way players type it.
pub fn coord_to_string(row: usize, col: usize) -> String {
    let letter = (b'A' + row as u8) as char;
    format!("{}{}", letter, col + 1)
}

/// Row label shown in the board margin.
pub fn row_label(row: usize) -> char {
    (b'A' + row as u8) as char
}
