use clap::Parser;
use minesweeper_core::seeded_draws;
use std::io;
use web_time::SystemTime;

mod args;
mod prompt;
mod render;
mod session;

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() -> anyhow::Result<()> {
    let args = args::Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let preset = args.preset()?;
    let seed = args.seed.unwrap_or_else(clock_seed);
    log::debug!("seed: {seed}");

    let mut console = prompt::Console::new(io::stdin().lock(), io::stdout().lock());
    console.run(preset, |round| seeded_draws(seed.wrapping_add(round)))
}
