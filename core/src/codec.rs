use alloc::string::ToString;

use crate::*;

/// Decodes a square label such as `"B3"` into zero-based `(row, col)`.
///
/// The leading letter selects the row (case-insensitive, `A` is row 0) and the
/// remaining digits select the 1-based column. Rows past the grid are not
/// rejected here, only by the grid's bounds checks.
pub fn parse_square(text: &str) -> Result<Coord2, FormatError> {
    let invalid = || FormatError::InvalidFormat(text.to_string());

    let mut chars = text.chars();
    let row_char = chars.next().ok_or_else(invalid)?;
    let rest = chars.as_str();
    if rest.is_empty() {
        return Err(invalid());
    }

    let row = row_char.to_ascii_uppercase() as Coord - 'A' as Coord;
    let col = rest.parse::<Coord>().map_err(|_| invalid())?;

    Ok((row, col.checked_sub(1).ok_or_else(invalid)?))
}
