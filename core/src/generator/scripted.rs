use alloc::collections::VecDeque;
use rand::rngs::SmallRng;

use super::*;

/// Replays a fixed sequence of draws, then falls back to a seeded generator.
///
/// Mines are placed from pairs of draws `(row, col)`, so the script
/// `[0, 0, 1, 1, 2, 2]` mines the main diagonal of the first three rows.
#[derive(Clone, Debug)]
pub struct ScriptedDraws {
    script: VecDeque<Coord>,
    fallback: SmallRng,
}

impl ScriptedDraws {
    pub fn new(script: impl IntoIterator<Item = Coord>, fallback_seed: u64) -> Self {
        Self {
            script: script.into_iter().collect(),
            fallback: seeded_draws(fallback_seed),
        }
    }

    /// Draws left before the fallback generator takes over.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl DrawSource for ScriptedDraws {
    fn draw(&mut self, bound: Coord) -> Coord {
        match self.script.pop_front() {
            Some(value) if (0..bound).contains(&value) => value,
            Some(value) => {
                log::warn!("Scripted draw {value} outside 0..{bound}, using fallback generator");
                self.fallback.draw(bound)
            }
            None => self.fallback.draw(bound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_script_then_falls_back() {
        let mut draws = ScriptedDraws::new([3, 1, 2], 0);

        assert_eq!(draws.draw(4), 3);
        assert_eq!(draws.draw(4), 1);
        assert_eq!(draws.remaining(), 1);
        assert_eq!(draws.draw(4), 2);
        assert_eq!(draws.remaining(), 0);

        for _ in 0..20 {
            assert!((0..4).contains(&draws.draw(4)));
        }
    }

    #[test]
    fn out_of_range_entries_are_replaced() {
        let mut draws = ScriptedDraws::new([9, -1], 0);

        assert!((0..4).contains(&draws.draw(4)));
        assert!((0..4).contains(&draws.draw(4)));
        assert_eq!(draws.remaining(), 0);
    }
}
