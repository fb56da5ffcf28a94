use alloc::string::String;
use thiserror::Error;

use crate::{CellCount, Coord};

/// Rejected grid configuration or cell access.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Minimum grid size is 2x2")]
    GridTooSmall,
    #[error("Mine count should be between 1 and {max}")]
    MineCountOutOfRange { max: CellCount },
    #[error("Cell position is invalid: {row},{col}")]
    OutOfBounds { row: Coord, col: Coord },
}

/// Malformed square label handed to the coordinate codec.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Square format is invalid: {0:?}")]
    InvalidFormat(String),
}

pub type Result<T, E = ConfigError> = core::result::Result<T, E>;
