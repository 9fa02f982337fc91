use std::{fmt, num::ParseIntError, str::FromStr};

use tetonor_core::{InvalidGridSize, ParseDifficultyError, PuzzleConfig};

use crate::OperandSide;

/// A player action, applied with [`Game::apply`](crate::Game::apply).
///
/// Actions have a one-line text form used by scripts:
///
/// | text | action |
/// |---|---|
/// | `select 3` / `deselect` | [`SelectCell`](Self::SelectCell) |
/// | `select-a 3`, `select-b 3` | [`SelectOperand`](Self::SelectOperand) |
/// | `strip 5` / `unstrip` | [`SelectStripPosition`](Self::SelectStripPosition) |
/// | `a 7`, `b 9` | [`EnterOperand`](Self::EnterOperand) |
/// | `op` | [`ToggleOperation`](Self::ToggleOperation) |
/// | `n 12` | [`EnterStripNumber`](Self::EnterStripNumber) |
/// | `clear`, `clear-strip` | [`ClearCell`](Self::ClearCell), [`ClearStripPosition`](Self::ClearStripPosition) |
/// | `undo`, `redo`, `hint`, `pause`, `reset` | the matching action |
/// | `new 42 hard 16` | [`NewPuzzle`](Self::NewPuzzle) |
///
/// ```
/// use tetonor_game::{Action, OperandSide};
///
/// let action: Action = "b 9".parse().unwrap();
/// assert_eq!(action, Action::EnterOperand { side: OperandSide::B, value: 9 });
/// assert_eq!(action.to_string(), "b 9");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Action {
    /// Selects a grid cell, or clears the selection.
    SelectCell(Option<usize>),
    /// Selects one operand slot of a grid cell.
    SelectOperand {
        /// Grid cell index.
        index: usize,
        /// Operand slot.
        side: OperandSide,
    },
    /// Selects a strip position, or clears the selection.
    SelectStripPosition(Option<usize>),
    /// Writes an operand into the selected cell.
    EnterOperand {
        /// Operand slot.
        side: OperandSide,
        /// Operand value, `1..=50`.
        value: u8,
    },
    /// Cycles the selected cell's operation.
    ToggleOperation,
    /// Writes a value into the selected hidden strip position.
    EnterStripNumber(u8),
    /// Wipes the selected cell.
    ClearCell,
    /// Wipes the selected hidden strip position.
    ClearStripPosition,
    /// Undoes the last action.
    Undo,
    /// Redoes the last undone action.
    Redo,
    /// Reveals one outstanding cell or strip position.
    UseHint,
    /// Pauses or resumes.
    TogglePause,
    /// Restarts the current puzzle.
    Reset,
    /// Starts a different puzzle.
    NewPuzzle(PuzzleConfig),
}

/// Error returned when parsing the text form of an [`Action`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseActionError {
    /// The line holds no command.
    #[display("empty action")]
    Empty,
    /// The command word is not known.
    #[display("unknown action `{_0}`")]
    UnknownCommand(#[error(not(source))] String),
    /// An argument is missing.
    #[display("`{_0}` expects an argument")]
    MissingArgument(#[error(not(source))] &'static str),
    /// More arguments than the command takes.
    #[display("`{_0}` takes fewer arguments")]
    TrailingArgument(#[error(not(source))] &'static str),
    /// A numeric argument is malformed.
    #[display("invalid number: {_0}")]
    Number(ParseIntError),
    /// The difficulty of `new` is malformed.
    #[display("{_0}")]
    Difficulty(ParseDifficultyError),
    /// The grid size of `new` is malformed.
    #[display("{_0}")]
    GridSize(InvalidGridSize),
}

struct Args<'a> {
    command: &'static str,
    words: std::str::SplitWhitespace<'a>,
}

impl<'a> Args<'a> {
    fn next(&mut self) -> Result<&'a str, ParseActionError> {
        self.words
            .next()
            .ok_or(ParseActionError::MissingArgument(self.command))
    }

    fn number<T>(&mut self) -> Result<T, ParseActionError>
    where
        T: FromStr<Err = ParseIntError>,
    {
        self.next()?.parse().map_err(ParseActionError::Number)
    }

    fn finish(mut self, action: Action) -> Result<Action, ParseActionError> {
        match self.words.next() {
            Some(_) => Err(ParseActionError::TrailingArgument(self.command)),
            None => Ok(action),
        }
    }
}

const COMMANDS: [&str; 18] = [
    "select",
    "deselect",
    "select-a",
    "select-b",
    "strip",
    "unstrip",
    "a",
    "b",
    "op",
    "n",
    "clear",
    "clear-strip",
    "undo",
    "redo",
    "hint",
    "pause",
    "reset",
    "new",
];

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let word = words.next().ok_or(ParseActionError::Empty)?;
        let command = COMMANDS
            .into_iter()
            .find(|command| word.eq_ignore_ascii_case(command))
            .ok_or_else(|| ParseActionError::UnknownCommand(word.to_owned()))?;
        let mut args = Args { command, words };

        let action = match command {
            "select" => Self::SelectCell(Some(args.number()?)),
            "deselect" => Self::SelectCell(None),
            "select-a" | "select-b" => Self::SelectOperand {
                index: args.number()?,
                side: if command == "select-a" {
                    OperandSide::A
                } else {
                    OperandSide::B
                },
            },
            "strip" => Self::SelectStripPosition(Some(args.number()?)),
            "unstrip" => Self::SelectStripPosition(None),
            "a" | "b" => Self::EnterOperand {
                side: if command == "a" {
                    OperandSide::A
                } else {
                    OperandSide::B
                },
                value: args.number()?,
            },
            "op" => Self::ToggleOperation,
            "n" => Self::EnterStripNumber(args.number()?),
            "clear" => Self::ClearCell,
            "clear-strip" => Self::ClearStripPosition,
            "undo" => Self::Undo,
            "redo" => Self::Redo,
            "hint" => Self::UseHint,
            "pause" => Self::TogglePause,
            "reset" => Self::Reset,
            _ => {
                let seed = args.number()?;
                let difficulty = args.next()?.parse().map_err(ParseActionError::Difficulty)?;
                let size = args.next()?.parse().map_err(ParseActionError::GridSize)?;
                Self::NewPuzzle(PuzzleConfig::new(seed, difficulty, size))
            }
        };
        args.finish(action)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side_suffix = |side: OperandSide| match side {
            OperandSide::A => "a",
            OperandSide::B => "b",
        };
        match self {
            Self::SelectCell(Some(index)) => write!(f, "select {index}"),
            Self::SelectCell(None) => f.write_str("deselect"),
            Self::SelectOperand { index, side } => {
                write!(f, "select-{} {index}", side_suffix(*side))
            }
            Self::SelectStripPosition(Some(index)) => write!(f, "strip {index}"),
            Self::SelectStripPosition(None) => f.write_str("unstrip"),
            Self::EnterOperand { side, value } => write!(f, "{} {value}", side_suffix(*side)),
            Self::ToggleOperation => f.write_str("op"),
            Self::EnterStripNumber(value) => write!(f, "n {value}"),
            Self::ClearCell => f.write_str("clear"),
            Self::ClearStripPosition => f.write_str("clear-strip"),
            Self::Undo => f.write_str("undo"),
            Self::Redo => f.write_str("redo"),
            Self::UseHint => f.write_str("hint"),
            Self::TogglePause => f.write_str("pause"),
            Self::Reset => f.write_str("reset"),
            Self::NewPuzzle(config) => write!(
                f,
                "new {} {} {}",
                config.seed, config.difficulty, config.size
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use tetonor_core::{Difficulty, GridSize};

    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("select 3".parse(), Ok(Action::SelectCell(Some(3))));
        assert_eq!("deselect".parse(), Ok(Action::SelectCell(None)));
        assert_eq!(
            "select-b 2".parse(),
            Ok(Action::SelectOperand {
                index: 2,
                side: OperandSide::B
            })
        );
        assert_eq!("  STRIP   5 ".parse(), Ok(Action::SelectStripPosition(Some(5))));
        assert_eq!(
            "a 7".parse(),
            Ok(Action::EnterOperand {
                side: OperandSide::A,
                value: 7
            })
        );
        assert_eq!("n 12".parse(), Ok(Action::EnterStripNumber(12)));
        assert_eq!("hint".parse(), Ok(Action::UseHint));
        assert_eq!(
            "new 42 hard 8".parse(),
            Ok(Action::NewPuzzle(PuzzleConfig::new(
                42,
                Difficulty::Hard,
                GridSize::Small
            )))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Action>(), Err(ParseActionError::Empty));
        assert_eq!(
            "jump".parse::<Action>(),
            Err(ParseActionError::UnknownCommand("jump".to_owned()))
        );
        assert_eq!(
            "select".parse::<Action>(),
            Err(ParseActionError::MissingArgument("select"))
        );
        assert_eq!(
            "undo now".parse::<Action>(),
            Err(ParseActionError::TrailingArgument("undo"))
        );
        assert!(matches!(
            "a 300".parse::<Action>(),
            Err(ParseActionError::Number(_))
        ));
        assert!(matches!(
            "new 1 brutal 16".parse::<Action>(),
            Err(ParseActionError::Difficulty(_))
        ));
        assert!(matches!(
            "new 1 easy 12".parse::<Action>(),
            Err(ParseActionError::GridSize(_))
        ));
    }

    #[test]
    fn test_display_parses_back() {
        let actions = [
            Action::SelectCell(Some(1)),
            Action::SelectCell(None),
            Action::SelectOperand {
                index: 4,
                side: OperandSide::A,
            },
            Action::SelectStripPosition(None),
            Action::EnterOperand {
                side: OperandSide::B,
                value: 50,
            },
            Action::ToggleOperation,
            Action::EnterStripNumber(3),
            Action::ClearStripPosition,
            Action::Reset,
            Action::NewPuzzle(PuzzleConfig::new(9, Difficulty::Medium, GridSize::Classic)),
        ];
        for action in actions {
            assert_eq!(action.to_string().parse(), Ok(action));
        }
    }
}
