use anyhow::Context;
use minesweeper_core::{CellCount, Coord, DrawSource, GameConfig, Grid, MIN_SIZE, max_mines};
use std::io::{BufRead, Write};

use crate::{args::Preset, render::GridView, session::Session};

/// Line-oriented terminal. Every `ask*` method returns `None` once input is
/// exhausted.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, text: impl std::fmt::Display) -> anyhow::Result<()> {
        writeln!(self.output, "{text}").context("Could not write to terminal")
    }

    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Could not read from terminal")?;
        Ok((read > 0).then(|| line.trim().to_owned()))
    }

    fn ask(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{prompt}").context("Could not write to terminal")?;
        self.output.flush().context("Could not flush terminal")?;
        self.read_line()
    }

    fn ask_size(&mut self) -> anyhow::Result<Option<Coord>> {
        loop {
            let Some(line) = self.ask("Enter the size of the grid (e.g. 4 for a 4x4 grid): ")? else {
                return Ok(None);
            };

            match line.parse::<Coord>() {
                Ok(size) if size >= MIN_SIZE => return Ok(Some(size)),
                Ok(_) => self.say("Minimum Grid size should be 2x2.")?,
                Err(_) => self.say("Input is invalid. Please enter a number.")?,
            }
        }
    }

    fn ask_mines(&mut self, max: CellCount) -> anyhow::Result<Option<CellCount>> {
        loop {
            self.say("Enter the number of mines to place on the grid (maximum is 35% of the total squares): ")?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            match line.parse::<CellCount>() {
                Ok(mines) if (1..=max).contains(&mines) => return Ok(Some(mines)),
                Ok(_) => self.say(format_args!("Mines count should be between 1 and {max}."))?,
                Err(_) => self.say("Input is invalid. Please enter a number.")?,
            }
        }
    }

    /// Resolves the game configuration, taking preset values that pass
    /// validation and prompting for the rest.
    fn configure(&mut self, preset: Preset) -> anyhow::Result<Option<GameConfig>> {
        let size = match preset.size {
            Some(size) if size >= MIN_SIZE => size,
            preset_size => {
                if preset_size.is_some() {
                    self.say("Minimum Grid size should be 2x2.")?;
                }
                let Some(size) = self.ask_size()? else {
                    return Ok(None);
                };
                size
            }
        };

        let config = match preset.mines.map(|mines| GameConfig::new(size, mines)) {
            Some(config) if config.validate().is_ok() => config,
            preset_config => {
                if let Some(Err(err)) = preset_config.map(|config| config.validate()) {
                    self.say(err)?;
                }
                let Some(mines) = self.ask_mines(max_mines(size))? else {
                    return Ok(None);
                };
                GameConfig::new(size, mines)
            }
        };

        Ok(Some(config))
    }

    /// Plays one game to the end. Returns `false` if input ran out first.
    pub fn play_game(&mut self, preset: Preset, draws: impl DrawSource) -> anyhow::Result<bool> {
        self.say("Welcome to Minesweeper!\n")?;

        let Some(config) = self.configure(preset)? else {
            return Ok(false);
        };
        log::info!("Starting {0}x{0} game with {1} mines", config.size, config.mines);

        let mut session = Session::new(Grid::from_config(config, draws)?);
        self.say("\nHere is your minefield:")?;
        self.say(GridView(session.grid()))?;

        while !session.is_finished() {
            let Some(square) = self.ask("Select a square to reveal (e.g. A1): ")? else {
                return Ok(false);
            };

            let outcome = session.select_square(&square);
            log::debug!("{square:?} -> {outcome:?}");
            self.say(outcome)?;

            if !session.is_finished() {
                self.say("\nHere is your updated minefield:")?;
                self.say(GridView(session.grid()))?;
            }
        }

        Ok(true)
    }

    /// Plays games until the player declines another round or input ends.
    ///
    /// The preset only applies to the first game. `draws_for_round` supplies
    /// the mine draws for each game, counting from zero.
    pub fn run<D: DrawSource>(
        &mut self,
        preset: Preset,
        mut draws_for_round: impl FnMut(u64) -> D,
    ) -> anyhow::Result<()> {
        let mut preset = Some(preset);

        for round in 0u64.. {
            if !self.play_game(preset.take().unwrap_or_default(), draws_for_round(round))? {
                break;
            }

            self.say("Press any key to play again...")?;
            match self.read_line()? {
                Some(line) if !line.is_empty() => continue,
                _ => break,
            }
        }

        Ok(())
    }
}
