use alloc::string::{String, ToString};
use core::fmt;
use serde::Serialize;

/// Glyph shown for a cell the player has not revealed yet.
pub const HIDDEN_GLYPH: char = '_';

/// One grid square.
///
/// Only the grid mutates cells: the mine flag and neighbour count are fixed
/// during setup and `revealed` only ever goes from `false` to `true`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Cell {
    mine: bool,
    revealed: bool,
    adjacent_mines: u8,
}

impl Cell {
    pub const fn is_mine(&self) -> bool {
        self.mine
    }

    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub const fn adjacent_mine_count(&self) -> u8 {
        self.adjacent_mines
    }

    /// Text a renderer shows for this cell: [`HIDDEN_GLYPH`] while hidden,
    /// the neighbour count once revealed.
    ///
    /// Revealed mines render through the same rule; the loss is reported by
    /// the game state rather than by a dedicated glyph.
    pub fn display_value(&self) -> String {
        self.to_string()
    }

    pub(crate) fn set_mine(&mut self) {
        self.mine = true;
    }

    pub(crate) fn set_adjacent_mines(&mut self, count: u8) {
        self.adjacent_mines = count;
    }

    pub(crate) fn reveal(&mut self) {
        self.revealed = true;
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.revealed {
            write!(f, "{}", self.adjacent_mines)
        } else {
            write!(f, "{HIDDEN_GLYPH}")
        }
    }
}
