//! Grid engine for a single-player minesweeper game.
//!
//! A [`Grid`] owns the minefield and all game state. Mines are placed from an
//! injected [`DrawSource`], and text labels such as `"B3"` are turned into grid
//! coordinates by [`parse_square`].
#![no_std]

extern crate alloc;

pub use cell::*;
pub use codec::*;
pub use config::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use types::*;

mod cell;
mod codec;
mod config;
mod error;
mod generator;
mod grid;
mod types;
