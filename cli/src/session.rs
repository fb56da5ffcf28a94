use minesweeper_core::{Grid, RevealOutcome, parse_square};
use std::fmt;

/// Result of the player selecting one square. `Display` gives the message shown
/// to the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    InvalidFormat,
    InvalidPosition,
    AlreadyRevealed,
    Detonated,
    Won,
    Revealed { adjacent: u8 },
}

impl fmt::Display for SelectOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use SelectOutcome::*;

        match self {
            InvalidFormat => write!(f, "Square format is invalid. Please use this format (e.g., A1)."),
            InvalidPosition => write!(f, "Position is invalid. Please try again."),
            AlreadyRevealed => write!(f, "This cell is already revealed. Please try again."),
            Detonated => write!(f, "Oh no, you detonated a mine! Game over."),
            Won => write!(f, "Congratulations, you have won the game!"),
            Revealed { adjacent } => write!(f, "This square contains {adjacent} adjacent mines."),
        }
    }
}

/// One game in progress.
pub struct Session {
    grid: Grid,
}

impl Session {
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn is_finished(&self) -> bool {
        self.grid.state().is_finished()
    }

    pub fn select_square(&mut self, text: &str) -> SelectOutcome {
        let (row, col) = match parse_square(text) {
            Ok(coords) => coords,
            Err(err) => {
                log::debug!("{err}");
                return SelectOutcome::InvalidFormat;
            }
        };

        let Ok(cell) = self.grid.get_cell(row, col) else {
            return SelectOutcome::InvalidPosition;
        };
        let adjacent = cell.adjacent_mine_count();

        match self.grid.try_reveal((row, col)) {
            RevealOutcome::AlreadyRevealed => SelectOutcome::AlreadyRevealed,
            RevealOutcome::HitMine => SelectOutcome::Detonated,
            RevealOutcome::Won => SelectOutcome::Won,
            RevealOutcome::Revealed => SelectOutcome::Revealed { adjacent },
            // only reachable once the game has ended
            RevealOutcome::NoChange => SelectOutcome::InvalidPosition,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minesweeper_core::ScriptedDraws;

    fn session() -> Session {
        Session::new(Grid::new(4, 3, ScriptedDraws::new([0, 0, 1, 1, 2, 2], 0)).unwrap())
    }

    #[test]
    fn malformed_and_out_of_range_squares() {
        let mut session = session();

        assert_eq!(session.select_square("A"), SelectOutcome::InvalidFormat);
        assert_eq!(session.select_square("AX"), SelectOutcome::InvalidFormat);
        assert_eq!(session.select_square("E1"), SelectOutcome::InvalidPosition);
        assert_eq!(session.select_square("A5"), SelectOutcome::InvalidPosition);
        assert_eq!(session.grid().revealed_count(), 0);
    }

    #[test]
    fn reports_count_then_already_revealed() {
        let mut session = session();

        assert_eq!(session.select_square("d4"), SelectOutcome::Revealed { adjacent: 1 });
        assert_eq!(session.select_square("D4"), SelectOutcome::AlreadyRevealed);
        assert!(!session.is_finished());
    }

    #[test]
    fn detonating_ends_the_session() {
        let mut session = session();

        let outcome = session.select_square("B2");

        assert_eq!(outcome, SelectOutcome::Detonated);
        assert_eq!(outcome.to_string(), "Oh no, you detonated a mine! Game over.");
        assert!(session.is_finished());
    }

    #[test]
    fn last_safe_square_wins() {
        let mut session = Session::new(Grid::new(2, 1, ScriptedDraws::new([0, 0], 0)).unwrap());

        assert_eq!(session.select_square("A2"), SelectOutcome::Revealed { adjacent: 1 });
        assert_eq!(session.select_square("B1"), SelectOutcome::Revealed { adjacent: 1 });
        assert_eq!(session.select_square("B2"), SelectOutcome::Won);
        assert!(session.is_finished());
        assert_eq!(
            SelectOutcome::Revealed { adjacent: 2 }.to_string(),
            "This square contains 2 adjacent mines."
        );
    }
}
