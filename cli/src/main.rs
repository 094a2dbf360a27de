use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use floodit_core::*;

use crate::command::{Command, HELP};

mod command;
mod render;

#[derive(Parser, Debug)]
#[command(version, about = "Flood the board with one color before the moves run out", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board side length
    #[arg(short = 'n', long, default_value_t = GameConfig::classic().board_size)]
    size: Coord,

    /// Number of colors on the board
    #[arg(short, long, default_value_t = GameConfig::classic().palette_size)]
    colors: ColorIndex,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Clock ticks to run after every accepted move
    #[arg(short, long, default_value_t = 1)]
    ticks_per_move: u32,

    /// Print snapshots as JSON instead of text
    #[arg(long)]
    json: bool,
}

struct Session {
    game: Game,
    ticks_per_move: u32,
    json: bool,
}

impl Session {
    fn show(&self, out: &mut impl Write) -> Result<()> {
        let snapshot = self.game.snapshot();
        if self.json {
            serde_json::to_writer(&mut *out, &snapshot).context("Could not encode snapshot")?;
            writeln!(out)?;
        } else {
            write!(out, "{}", render::render(&snapshot))?;
        }
        Ok(())
    }

    fn run_ticks(&mut self, count: u32) {
        for _ in 0..count {
            self.game.tick();
        }
    }

    /// Returns whether the board should be printed again.
    fn apply(&mut self, event: Event) -> Result<bool> {
        let outcome = self.game.handle(event)?;
        if let EventOutcome::Move(MoveOutcome::Flooded) = outcome {
            self.run_ticks(self.ticks_per_move);
        }
        log::debug!("{:?} -> {:?}", event, outcome);
        Ok(outcome.has_update())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("seed: {}", seed);

    let config = GameConfig::new(args.size, args.colors).context("Invalid board settings")?;
    let mut session = Session {
        game: Game::new(config, seed)?,
        ticks_per_move: args.ticks_per_move,
        json: args.json,
    };

    let mut out = io::stdout().lock();
    session.show(&mut out)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Could not read from stdin")?;
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };

        let redraw = match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(out, "{HELP}")?;
                false
            }
            Command::Show => true,
            Command::Ticks(count) => {
                session.run_ticks(count);
                true
            }
            Command::Click { x, y } => {
                match session.game.snapshot().locate(x, y, DEFAULT_CELL_PIXELS) {
                    Some((row, col)) => session.apply(Event::Select { row, col })?,
                    None => {
                        log::debug!("Click at ({}, {}) is off the board", x, y);
                        false
                    }
                }
            }
            Command::Event(event) => session.apply(event)?,
        };

        if redraw {
            session.show(&mut out)?;
        }
    }

    Ok(())
}
