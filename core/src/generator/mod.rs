use rand::rngs::SmallRng;

use crate::*;
pub use scripted::*;

mod scripted;

/// Source of the uniform draws used to place mines.
///
/// Injected into [`Grid::new`] so that games can be replayed from a seed or from
/// a fixed script of draws.
pub trait DrawSource {
    /// Returns a value in `0..bound`. `bound` is always positive.
    fn draw(&mut self, bound: Coord) -> Coord;
}

impl DrawSource for SmallRng {
    fn draw(&mut self, bound: Coord) -> Coord {
        use rand::prelude::*;

        self.random_range(0..bound)
    }
}

impl<D: DrawSource + ?Sized> DrawSource for &mut D {
    fn draw(&mut self, bound: Coord) -> Coord {
        (**self).draw(bound)
    }
}

/// Seeded generator for real games.
pub fn seeded_draws(seed: u64) -> SmallRng {
    use rand::prelude::*;

    SmallRng::seed_from_u64(seed)
}
