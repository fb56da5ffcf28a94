use alloc::collections::VecDeque;
use ndarray::{Array2, ArrayView1, Axis};
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Active -> Lost
/// - Active -> Won
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    Active,
    Lost,
    Won,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Outcome of revealing a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Game already finished or position outside the grid.
    NoChange,
    AlreadyRevealed,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    /// Whether the reveal was accepted by the grid.
    pub const fn has_effect(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Square minefield and the state of one game played on it.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    size: Coord,
    total_mines: CellCount,
    cells: Array2<Cell>,
    revealed_count: CellCount,
    state: GameState,
}

impl Grid {
    /// Builds a `size` x `size` grid with exactly `mines` mines.
    ///
    /// Mines are placed by drawing `(row, col)` pairs from `draws` and discarding
    /// pairs that hit an already mined cell.
    pub fn new(size: Coord, mines: CellCount, draws: impl DrawSource) -> Result<Self> {
        Self::from_config(GameConfig::new(size, mines), draws)
    }

    pub fn from_config(config: GameConfig, mut draws: impl DrawSource) -> Result<Self> {
        config.validate()?;

        let GameConfig { size, mines } = config;
        let mut grid = Self {
            size,
            total_mines: mines,
            cells: Array2::default((size, size).to_nd_index()),
            revealed_count: 0,
            state: GameState::Active,
        };

        grid.place_mines(&mut draws);
        grid.count_adjacent_mines();
        log::debug!("Created {size}x{size} grid with {mines} mines");

        Ok(grid)
    }

    fn place_mines(&mut self, draws: &mut impl DrawSource) {
        let mut placed = 0;
        let mut discarded = 0usize;

        while placed < self.total_mines {
            let coords = (draws.draw(self.size), draws.draw(self.size));
            let cell = &mut self.cells[coords.to_nd_index()];

            if cell.is_mine() {
                discarded += 1;
            } else {
                cell.set_mine();
                placed += 1;
            }
        }

        log::trace!("Placed {placed} mines, discarded {discarded} duplicate draws");
    }

    fn count_adjacent_mines(&mut self) {
        for row in 0..self.size {
            for col in 0..self.size {
                let coords = (row, col);
                if self.cells[coords.to_nd_index()].is_mine() {
                    continue;
                }

                let count = NeighborIter::new(coords, self.size)
                    .filter(|&pos| self.cells[pos.to_nd_index()].is_mine())
                    .count();
                self.cells[coords.to_nd_index()].set_adjacent_mines(count as u8);
            }
        }
    }

    pub fn size(&self) -> Coord {
        self.size
    }

    pub fn total_mines(&self) -> CellCount {
        self.total_mines
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state == GameState::Lost
    }

    pub fn is_game_won(&self) -> bool {
        self.state == GameState::Won
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.size * self.size - self.total_mines
    }

    pub fn is_valid_position(&self, row: Coord, col: Coord) -> bool {
        (0..self.size).contains(&row) && (0..self.size).contains(&col)
    }

    pub fn get_cell(&self, row: Coord, col: Coord) -> Result<&Cell> {
        if self.is_valid_position(row, col) {
            Ok(&self.cells[(row, col).to_nd_index()])
        } else {
            Err(ConfigError::OutOfBounds { row, col })
        }
    }

    /// Rows of cells from top to bottom, for rendering.
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, Cell>> {
        self.cells.axis_iter(Axis(0))
    }

    /// Reveals a cell, returning `false` only when the call had no effect
    /// (finished game or invalid position).
    pub fn reveal(&mut self, row: Coord, col: Coord) -> bool {
        self.try_reveal((row, col)).has_effect()
    }

    pub fn try_reveal(&mut self, coords: Coord2) -> RevealOutcome {
        let (row, col) = coords;
        if self.state.is_finished() || !self.is_valid_position(row, col) {
            return RevealOutcome::NoChange;
        }

        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.is_revealed() {
            return RevealOutcome::AlreadyRevealed;
        }

        cell.reveal();
        if cell.is_mine() {
            log::debug!("Mine revealed at {coords:?}, game lost");
            self.state = GameState::Lost;
            return RevealOutcome::HitMine;
        }

        self.revealed_count += 1;
        if cell.adjacent_mine_count() == 0 {
            self.cascade(coords);
        }

        if self.revealed_count == self.safe_cell_count() {
            log::debug!("All safe cells revealed, game won");
            self.state = GameState::Won;
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        }
    }

    /// Opens the zero-count region around `origin` plus its numbered border.
    fn cascade(&mut self, origin: Coord2) {
        let mut to_visit: VecDeque<_> = self.hidden_safe_neighbors(origin).collect();
        let mut opened = 0usize;

        while let Some(coords) = to_visit.pop_front() {
            let cell = &mut self.cells[coords.to_nd_index()];
            if cell.is_revealed() || cell.is_mine() {
                continue;
            }

            cell.reveal();
            self.revealed_count += 1;
            opened += 1;

            if cell.adjacent_mine_count() == 0 {
                to_visit.extend(self.hidden_safe_neighbors(coords));
            }
        }

        log::trace!("Cascade from {origin:?} opened {opened} cells");
    }

    fn hidden_safe_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + '_ {
        NeighborIter::new(coords, self.size).filter(|&pos| {
            let cell = self.cells[pos.to_nd_index()];
            !cell.is_revealed() && !cell.is_mine()
        })
    }
}
