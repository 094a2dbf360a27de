use floodit_core::{ColorIndex, Coord, Event};
use thiserror::Error;

pub(crate) const HELP: &str = "\
commands:
  ROW COL      click the cell at ROW, COL
  click X Y    click at pixel X, Y
  color N      pick palette entry N
  tick [N]     advance the clock N times (default 1, at most 10000)
  r | reset    start over on a new board
  show         print the board
  help         print this help
  quit         leave";

/// Upper bound for a single `tick N`; every tick is a pass over the whole board.
pub(crate) const MAX_TICKS: u32 = 10_000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum CommandError {
    #[error("Unknown command {0:?}, try \"help\"")]
    Unknown(String),
    #[error("Expected a number, got {0:?}")]
    NotANumber(String),
    #[error("Missing argument for {0:?}")]
    MissingArgument(&'static str),
    #[error("Too many arguments")]
    TooManyArguments,
    #[error("Cannot run {0} ticks at once, the limit is 10000")]
    TooManyTicks(u32),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Event(Event),
    Click { x: u32, y: u32 },
    Ticks(u32),
    Show,
    Help,
    Quit,
}

impl Command {
    pub(crate) fn parse(line: &str) -> Result<Self, CommandError> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(Self::Show);
        };
        let mut argument = |name| words.next().ok_or(CommandError::MissingArgument(name));

        let command = match head.to_ascii_lowercase().as_str() {
            "q" | "quit" | "exit" => Self::Quit,
            "h" | "help" | "?" => Self::Help,
            "s" | "show" => Self::Show,
            "r" => Self::Event(Event::Key(Event::RESET_KEY)),
            "reset" => Self::Event(Event::Reset),
            "t" | "tick" => match argument("tick") {
                Ok(count) => match number(count)? {
                    count if count > MAX_TICKS => return Err(CommandError::TooManyTicks(count)),
                    count => Self::Ticks(count),
                },
                Err(_) => Self::Ticks(1),
            },
            "c" | "color" => {
                let color: ColorIndex = number(argument("color")?)?;
                Self::Event(Event::SelectColor(color))
            }
            "click" => {
                let x = number(argument("click")?)?;
                let y = number(argument("click")?)?;
                Self::Click { x, y }
            }
            _ if head.starts_with(|c: char| c.is_ascii_digit()) => {
                let row: Coord = number(head)?;
                let col: Coord = number(argument("cell")?)?;
                Self::Event(Event::Select { row, col })
            }
            _ => return Err(CommandError::Unknown(head.to_owned())),
        };

        if words.next().is_some() {
            return Err(CommandError::TooManyArguments);
        }
        Ok(command)
    }
}

fn number<T: std::str::FromStr>(word: &str) -> Result<T, CommandError> {
    word.parse()
        .map_err(|_| CommandError::NotANumber(word.to_owned()))
}
