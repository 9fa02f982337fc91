//! Tetonor play sessions.
//!
//! [`Game`] is the state machine driven by player actions: selection, operand
//! and strip entry, clearing, undo/redo, hints, pause and restarts. It keeps the
//! generated puzzle immutable and records each edit in a bounded [`History`] of
//! [`Board`] snapshots.
//!
//! The [`validation`] module holds the pure predicates used to decide cell
//! correctness, completion and progress.
//!
//! # Example
//!
//! ```
//! use tetonor_core::{Difficulty, GridSize, PuzzleConfig};
//! use tetonor_game::{Action, Game};
//!
//! let mut game = Game::new(PuzzleConfig::new(5, Difficulty::Medium, GridSize::Classic));
//! for line in ["select 0", "a 4", "op"] {
//!     let action: Action = line.parse().unwrap();
//!     game.apply(action).unwrap();
//! }
//! assert_eq!(game.history_len(), 2);
//! assert!(game.progress() < 100);
//! ```

pub use self::{action::*, board::*, cell::*, error::*, game::*, history::*, options::*};

mod action;
mod board;
mod cell;
mod error;
mod game;
mod history;
mod options;
pub mod validation;
