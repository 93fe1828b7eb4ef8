//! Line commands typed at the interactive prompt.

use crate::games::tictactoe::Position;
use crate::wager::BetChoice;
use std::str::FromStr;
use tracing::instrument;

/// One parsed prompt command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play the current turn at a square.
    Play(Position),
    /// Make a history entry active.
    Jump(usize),
    /// Start a new game.
    Reset,
    /// Bet on an outcome; the amount is validated by the wager.
    Bet(BetChoice, String),
    /// Auto-fill the empty squares.
    Fill,
    /// Flip the move-list order.
    Flip,
    /// Print the move list.
    Moves,
    /// Print the table.
    Board,
    /// Print the table as JSON.
    State,
    /// Print command help.
    Help,
    /// Leave.
    Quit,
}

/// A line that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CommandError {
    /// Blank line.
    #[display("Empty command")]
    Empty,
    /// First word is not a command.
    #[display("Unknown command {:?} (try \"help\")", _0)]
    Unknown(#[error(not(source))] String),
    /// Command is missing an argument.
    #[display("Usage: {}", _0)]
    Usage(#[error(not(source))] &'static str),
    /// Argument did not parse.
    #[display("Invalid {}: {:?}", what, value)]
    InvalidArgument {
        /// Which argument.
        what: &'static str,
        /// What was typed.
        value: String,
    },
}

/// Help text listing every command.
pub const HELP: &str = "\
Commands:
  play <0-8|label>        play the current turn (e.g. \"play 4\", \"play top-left\")
  jump <n>                go to history entry n (0 = game start)
  reset                   start a new game (keeps your points)
  bet <x|o|draw> <amount> bet on the outcome of this game
  fill                    auto-fill the empty squares
  flip                    flip the move-list order
  moves                   show the move list
  board                   show the table
  state                   dump the table as JSON
  help                    show this help
  quit                    leave";

impl FromStr for Command {
    type Err = CommandError;

    #[instrument]
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Empty);
        };
        let rest: Vec<&str> = words.collect();

        match head.to_lowercase().as_str() {
            "play" | "p" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("play <0-8|label>"));
                }
                let raw = rest.join(" ");
                Position::from_label_or_number(&raw)
                    .map(Command::Play)
                    .ok_or(CommandError::InvalidArgument {
                        what: "position",
                        value: raw,
                    })
            }
            "jump" | "j" => {
                let [raw] = rest.as_slice() else {
                    return Err(CommandError::Usage("jump <n>"));
                };
                raw.parse()
                    .map(Command::Jump)
                    .map_err(|_| CommandError::InvalidArgument {
                        what: "move index",
                        value: raw.to_string(),
                    })
            }
            "bet" | "b" => {
                let [choice, amount] = rest.as_slice() else {
                    return Err(CommandError::Usage("bet <x|o|draw> <amount>"));
                };
                let choice = BetChoice::from_str(choice).map_err(|_| {
                    CommandError::InvalidArgument {
                        what: "bet choice",
                        value: choice.to_string(),
                    }
                })?;
                Ok(Command::Bet(choice, amount.to_string()))
            }
            "reset" => Ok(Command::Reset),
            "fill" => Ok(Command::Fill),
            "flip" => Ok(Command::Flip),
            "moves" => Ok(Command::Moves),
            "board" | "show" => Ok(Command::Board),
            "state" => Ok(Command::State),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
