//! Core data types for the Tetonor number puzzle.
//!
//! A Tetonor puzzle is built from a handful of operand [`Pair`]s. Every pair
//! contributes two challenges to the grid (its sum and its product) and both of
//! its operands to the ascending number strip.
//!
//! This crate holds the vocabulary shared by the generator and the game:
//!
//! - [`Pair`] and [`Operation`] - operands and how they combine
//! - [`Difficulty`], [`GridSize`] and [`PuzzleConfig`] - the construction input
//! - [`Correctness`] - tri-state validation outcome of a grid cell
//!
//! # Examples
//!
//! ```
//! use tetonor_core::{Difficulty, GridSize, Operation, Pair, PuzzleConfig};
//!
//! let pair = Pair::new(7, 3);
//! assert_eq!((pair.a, pair.b), (3, 7));
//! assert_eq!(pair.result(Operation::Sum), 10);
//! assert_eq!(pair.result(Operation::Product), 21);
//!
//! let config = PuzzleConfig::new(1, Difficulty::Hard, GridSize::Classic);
//! assert_eq!(config.size.pair_count(), 8);
//! ```

pub use self::{config::*, correctness::*, pair::*};

mod config;
mod correctness;
mod pair;

/// Smallest operand a pair may contain.
pub const MIN_OPERAND: u8 = 1;

/// Largest operand a pair may contain.
pub const MAX_OPERAND: u8 = 50;

/// Returns `true` if `value` is within the operand bounds.
#[must_use]
pub const fn is_valid_operand(value: u8) -> bool {
    value >= MIN_OPERAND && value <= MAX_OPERAND
}
