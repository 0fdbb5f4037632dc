use crate::view::Button;
use std::str::FromStr;
use thiserror::Error;

/// A line typed into the terminal front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Press one of the four buttons
    Press(Button),
    /// Add a custom amount (`add N`)
    Add(i64),
    /// Print the command list
    Help,
    /// Leave the program
    Quit,
}

/// Input that is not a command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    /// Empty line
    #[error("empty command, type `help` for the list of commands")]
    Empty,
    /// Unrecognised word
    #[error("unknown command `{0}`, type `help` for the list of commands")]
    Unknown(String),
    /// `add` followed by something that is not an integer
    #[error("`add` expects an integer amount, got `{0}`")]
    InvalidAmount(String),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut words = input.split_whitespace();
        let Some(head) = words.next() else {
            return Err(ParseCommandError::Empty);
        };
        let rest: Vec<&str> = words.collect();

        let command = match (head.to_ascii_lowercase().as_str(), rest.as_slice()) {
            ("+" | "inc" | "increment", []) => Self::Press(Button::Increment),
            ("-" | "dec" | "decrement", []) => Self::Press(Button::Decrement),
            ("add", []) => Self::Press(Button::AddAmount),
            ("add", [amount]) => Self::Add(
                amount
                    .parse()
                    .map_err(|_| ParseCommandError::InvalidAmount((*amount).to_string()))?,
            ),
            ("reset", []) => Self::Press(Button::Reset),
            ("?" | "h" | "help", []) => Self::Help,
            ("q" | "quit" | "exit", []) => Self::Quit,
            _ => return Err(ParseCommandError::Unknown(input.trim().to_string())),
        };

        Ok(command)
    }
}

/// Help text listing every command
pub const HELP: &str = "\
commands:
  +, inc      increment
  -, dec      decrement
  add         add the configured amount
  add N       add N (may be negative)
  reset       back to zero
  help        this list
  quit        leave";
