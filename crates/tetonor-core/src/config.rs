use std::{fmt, num::ParseIntError, str::FromStr};

use serde::{Deserialize, Serialize};

/// How much of the number strip is hidden from the player.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// The whole strip is visible.
    #[default]
    #[display("easy")]
    Easy,
    /// A quarter of the strip is hidden.
    #[display("medium")]
    Medium,
    /// Half of the strip is hidden.
    #[display("hard")]
    Hard,
}

impl Difficulty {
    /// All difficulties from easiest to hardest.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Number of hidden positions in a strip of `len` operands.
    ///
    /// Equal to `floor(len × ratio)` for the hidden ratios 0, 1/4 and 1/2.
    ///
    /// ```
    /// use tetonor_core::Difficulty;
    ///
    /// assert_eq!(Difficulty::Easy.hidden_count(16), 0);
    /// assert_eq!(Difficulty::Medium.hidden_count(14), 3);
    /// assert_eq!(Difficulty::Hard.hidden_count(16), 8);
    /// ```
    #[must_use]
    pub const fn hidden_count(self, len: usize) -> usize {
        match self {
            Self::Easy => 0,
            Self::Medium => len / 4,
            Self::Hard => len / 2,
        }
    }
}

/// Error returned when parsing an unknown difficulty name.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown difficulty `{name}` (expected easy, medium or hard)")]
pub struct ParseDifficultyError {
    #[error(not(source))]
    name: String,
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|difficulty| s.eq_ignore_ascii_case(&difficulty.to_string()))
            .ok_or_else(|| ParseDifficultyError { name: s.to_owned() })
    }
}

/// Number of grid cells in a puzzle.
///
/// Serialized as the plain cell count (`8` or `16`).
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::IsVariant,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum GridSize {
    /// 8 cells built from 4 pairs.
    Small,
    /// 16 cells built from 8 pairs.
    #[default]
    Classic,
}

impl GridSize {
    /// Number of grid cells.
    #[must_use]
    pub const fn cell_count(self) -> u8 {
        match self {
            Self::Small => 8,
            Self::Classic => 16,
        }
    }

    /// Number of operand pairs the generator must produce.
    #[must_use]
    pub const fn pair_count(self) -> usize {
        self.cell_count() as usize / 2
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cell_count())
    }
}

/// Error returned for a grid size other than 8 or 16.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidGridSize {
    /// The number is not a supported cell count.
    #[display("unsupported grid size {_0} (expected 8 or 16)")]
    Unsupported(#[error(not(source))] u8),
    /// The text is not a number or a size name.
    #[display("invalid grid size: {_0}")]
    Parse(ParseIntError),
}

impl TryFrom<u8> for GridSize {
    type Error = InvalidGridSize;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            8 => Ok(Self::Small),
            16 => Ok(Self::Classic),
            _ => Err(InvalidGridSize::Unsupported(value)),
        }
    }
}

impl From<GridSize> for u8 {
    fn from(size: GridSize) -> Self {
        size.cell_count()
    }
}

impl FromStr for GridSize {
    type Err = InvalidGridSize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("small") {
            return Ok(Self::Small);
        }
        if s.eq_ignore_ascii_case("classic") {
            return Ok(Self::Classic);
        }
        let value = s.parse::<u8>().map_err(InvalidGridSize::Parse)?;
        Self::try_from(value)
    }
}

/// The sole input needed to build a puzzle.
///
/// Identical configurations always generate identical puzzles.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Seed for the deterministic generator.
    pub seed: u32,
    /// Share of the strip to hide.
    pub difficulty: Difficulty,
    /// Grid size, which fixes the pair count.
    pub size: GridSize,
}

impl PuzzleConfig {
    /// Creates a configuration.
    #[must_use]
    pub const fn new(seed: u32, difficulty: Difficulty, size: GridSize) -> Self {
        Self {
            seed,
            difficulty,
            size,
        }
    }
}

/// How a puzzle session was started.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Free play with arbitrary seeds.
    #[default]
    #[display("practice")]
    Practice,
    /// The puzzle of the day.
    #[display("daily")]
    Daily,
    /// Played against the clock.
    #[display("timed")]
    Timed,
}

/// Stable identifier of a played puzzle, e.g. `2026-10-18-daily-hard-16-20261018`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PuzzleId {
    /// ISO-8601 calendar date (`YYYY-MM-DD`) the puzzle was played on.
    pub date: String,
    /// Session mode.
    pub mode: GameMode,
    /// Configuration the puzzle was generated from.
    pub config: PuzzleConfig,
}

impl PuzzleId {
    /// Creates an identifier.
    #[must_use]
    pub fn new(date: impl Into<String>, mode: GameMode, config: PuzzleConfig) -> Self {
        Self {
            date: date.into(),
            mode,
            config,
        }
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let PuzzleConfig {
            seed,
            difficulty,
            size,
        } = self.config;
        write!(f, "{}-{}-{difficulty}-{size}-{seed}", self.date, self.mode)
    }
}
