use serde::{Deserialize, Serialize};

use crate::*;

/// Smallest accepted grid side.
pub const MIN_SIZE: Coord = 2;

/// Share of the grid, in percent, that may be mined.
const MAX_MINE_PERCENT: i64 = 35;

/// Largest mine count accepted for a `size` x `size` grid, `floor(size² * 0.35)`.
pub fn max_mines(size: Coord) -> CellCount {
    let max = mult(size, size) * MAX_MINE_PERCENT / 100;
    max.clamp(0, CellCount::MAX.into()) as CellCount
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new(size: Coord, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn validate(&self) -> Result<()> {
        if self.size < MIN_SIZE {
            return Err(ConfigError::GridTooSmall);
        }

        let max = max_mines(self.size);
        if self.mines <= 0 || self.mines > max {
            return Err(ConfigError::MineCountOutOfRange { max });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_mines_rounds_down() {
        assert_eq!(max_mines(2), 1);
        assert_eq!(max_mines(3), 3);
        assert_eq!(max_mines(4), 5);
        assert_eq!(max_mines(10), 35);
    }

    #[test]
    fn rejects_small_grids_before_mine_count() {
        assert_eq!(GameConfig::new(1, 1).validate(), Err(ConfigError::GridTooSmall));
        assert_eq!(GameConfig::new(-3, 0).validate(), Err(ConfigError::GridTooSmall));
    }

    #[test]
    fn rejects_mine_counts_outside_range() {
        let out_of_range = Err(ConfigError::MineCountOutOfRange { max: 5 });

        assert_eq!(GameConfig::new(4, 0).validate(), out_of_range);
        assert_eq!(GameConfig::new(4, -1).validate(), out_of_range);
        assert_eq!(GameConfig::new(4, 6).validate(), out_of_range);
        assert_eq!(GameConfig::new(4, 1).validate(), Ok(()));
        assert_eq!(GameConfig::new(4, 5).validate(), Ok(()));
    }

    #[test]
    fn loads_from_json() {
        let config: GameConfig = serde_json::from_str(r#"{"size": 6, "mines": 4}"#).unwrap();

        assert_eq!(config, GameConfig::new(6, 4));
    }
}
