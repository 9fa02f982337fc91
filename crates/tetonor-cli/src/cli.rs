use std::{error::Error, fs, path::PathBuf};

use clap::{Args, Parser, Subcommand};
use tetonor_core::{Difficulty, GameMode, GridSize, PuzzleConfig, PuzzleId};
use tetonor_game::GameOptions;
use tetonor_generator::{
    DEFAULT_MAX_ATTEMPTS, PuzzleGenerator,
    seed::{self, ParseDateError},
};

/// Tetonor puzzle generator and action-script player.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Generate a puzzle and print it.
    Generate {
        #[command(flatten)]
        puzzle: PuzzleArgs,

        /// Print the whole generated puzzle, solution included, as JSON.
        #[arg(long)]
        json: bool,

        /// Also print the pairs and the full strip.
        #[arg(long)]
        solution: bool,
    },
    /// Apply an action script to a puzzle and report the outcome.
    Replay {
        #[command(flatten)]
        puzzle: PuzzleArgs,

        /// Script with one action per line; reads stdin when omitted.
        #[arg(long, value_name = "FILE")]
        script: Option<PathBuf>,

        /// Game options as a JSON file.
        #[arg(long, value_name = "FILE")]
        options: Option<PathBuf>,

        /// Hints available for the session.
        #[arg(long, value_name = "COUNT")]
        max_hints: Option<u8>,
    },
}

/// Where the puzzle configuration comes from.
#[derive(Debug, Args)]
pub(crate) struct PuzzleArgs {
    /// Puzzle seed. A random seed is used when no seed source is given.
    #[arg(long, value_name = "SEED", conflicts_with_all = ["phrase", "daily", "config"])]
    seed: Option<u32>,

    /// Phrase hashed into a seed.
    #[arg(long, value_name = "TEXT", conflicts_with_all = ["daily", "config"])]
    phrase: Option<String>,

    /// Play the daily puzzle of this date.
    #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_daily, conflicts_with = "config")]
    daily: Option<DailyDate>,

    /// Puzzle configuration as a JSON file, e.g. `{"seed":1,"difficulty":"hard","size":16}`.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Difficulty: easy, medium or hard. Set in the file when `--config` is used.
    #[arg(long, value_name = "LEVEL", default_value = "medium", conflicts_with = "config")]
    difficulty: Difficulty,

    /// Grid size: 8 or 16. Set in the file when `--config` is used.
    #[arg(long, value_name = "CELLS", default_value = "16", conflicts_with = "config")]
    size: GridSize,

    /// Pair attempts before generation settles for fewer pairs.
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,
}

#[derive(Debug, Clone)]
pub(crate) struct DailyDate {
    date: String,
    seed: u32,
}

fn parse_daily(date: &str) -> Result<DailyDate, ParseDateError> {
    Ok(DailyDate {
        seed: seed::parse_daily_seed(date)?,
        date: date.trim().to_owned(),
    })
}

impl PuzzleArgs {
    pub(crate) fn generator(&self) -> PuzzleGenerator {
        PuzzleGenerator::new().with_max_attempts(self.max_attempts)
    }

    /// Resolves the configuration, plus an identifier for daily puzzles.
    pub(crate) fn resolve(&self) -> Result<(PuzzleConfig, Option<PuzzleId>), Box<dyn Error>> {
        if let Some(path) = &self.config {
            let text = fs::read_to_string(path)?;
            let config = serde_json::from_str(&text)?;
            return Ok((config, None));
        }

        let with_seed = |seed| PuzzleConfig::new(seed, self.difficulty, self.size);
        let resolved = match (self.seed, &self.phrase, &self.daily) {
            (Some(seed), _, _) => (with_seed(seed), None),
            (None, Some(phrase), _) => (with_seed(seed::seed_from_phrase(phrase)), None),
            (None, None, Some(daily)) => {
                let config = with_seed(daily.seed);
                let id = PuzzleId::new(daily.date.clone(), GameMode::Daily, config);
                (config, Some(id))
            }
            (None, None, None) => {
                let seed = seed::random_seed();
                log::info!("using random seed {seed}");
                (with_seed(seed), None)
            }
        };
        Ok(resolved)
    }
}

/// Loads game options from `path` and applies the command-line overrides.
pub(crate) fn game_options(
    path: Option<&PathBuf>,
    max_hints: Option<u8>,
) -> Result<GameOptions, Box<dyn Error>> {
    let mut options = match path {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => GameOptions::default(),
    };
    if let Some(max_hints) = max_hints {
        options = options.max_hints(max_hints);
    }
    Ok(options)
}
