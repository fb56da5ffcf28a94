use minesweeper_core::Grid;
use std::fmt;

/// Line-based view of a grid: a header of column numbers, then one line per
/// row prefixed with its letter.
pub struct GridView<'a>(pub &'a Grid);

impl fmt::Display for GridView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.0;

        write!(f, "  ")?;
        for col in 1..=grid.size() {
            write!(f, "{col} ")?;
        }
        writeln!(f)?;

        for (row, cells) in grid.rows().enumerate() {
            write!(f, "{} ", row_label(row))?;
            for cell in cells.iter() {
                write!(f, "{cell} ")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Letter used for a row, `A` for the first. Rows past `Z` continue through the
/// following code points, matching what the square parser accepts.
fn row_label(row: usize) -> char {
    u32::try_from(row)
        .ok()
        .and_then(|row| char::from_u32('A' as u32 + row))
        .unwrap_or('?')
}

#[cfg(test)]
mod tests {
    use super::*;
    use minesweeper_core::ScriptedDraws;

    #[test]
    fn renders_header_rows_and_glyphs() {
        let mut grid = Grid::new(4, 3, ScriptedDraws::new([0, 0, 1, 1, 2, 2], 0)).unwrap();
        grid.reveal(3, 0);

        assert_eq!(
            GridView(&grid).to_string(),
            "  1 2 3 4 \n\
             A _ _ _ _ \n\
             B _ _ _ _ \n\
             C 1 2 _ _ \n\
             D 0 1 _ _ \n"
        );
    }

    #[test]
    fn row_labels_follow_the_alphabet() {
        assert_eq!(row_label(0), 'A');
        assert_eq!(row_label(25), 'Z');
    }
}
