use anyhow::Context;
use clap::Parser;
use minesweeper_core::{CellCount, Coord, GameConfig};
use std::{fs, path::PathBuf};

#[derive(Parser, Debug)]
#[command(version, about = "Reveal every safe square without detonating a mine", long_about = None)]
pub struct Args {
    /// What log level to use
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Grid size for the first game, skips the size prompt
    #[arg(long)]
    pub size: Option<Coord>,

    /// Mine count for the first game, skips the mine prompt
    #[arg(long)]
    pub mines: Option<CellCount>,

    /// JSON file holding `size` and `mines` for the first game
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Answers supplied up front instead of through the prompts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Preset {
    pub size: Option<Coord>,
    pub mines: Option<CellCount>,
}

impl Args {
    /// Merges the config file with the command line, flags taking precedence.
    pub fn preset(&self) -> anyhow::Result<Preset> {
        let mut preset = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("Could not read config file {}", path.display()))?;
                let config: GameConfig = serde_json::from_str(&text)
                    .with_context(|| format!("Could not parse config file {}", path.display()))?;
                log::debug!("Loaded {config:?} from {}", path.display());
                Preset {
                    size: Some(config.size),
                    mines: Some(config.mines),
                }
            }
            None => Preset::default(),
        };

        if self.size.is_some() {
            preset.size = self.size;
        }
        if self.mines.is_some() {
            preset.mines = self.mines;
        }

        Ok(preset)
    }
}
