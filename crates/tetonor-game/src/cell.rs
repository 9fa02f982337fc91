use serde::{Deserialize, Serialize};
use tetonor_core::{Correctness, Operation};
use tetonor_generator::Challenge;

/// Which of the two operand slots of a grid cell.
#[derive(
    Debug,
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
pub enum OperandSide {
    /// The first operand slot.
    #[display("A")]
    A,
    /// The second operand slot.
    #[display("B")]
    B,
}

/// Display state of a grid cell, derived from its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum CellState {
    /// Nothing entered yet.
    Empty,
    /// Some, but not all, of the operands and the operation are entered.
    Partial,
    /// Complete and correct (or revealed by a hint).
    Correct,
    /// Complete but wrong.
    Incorrect,
}

/// A grid cell: a fixed challenge plus the player's answer.
///
/// The player answers with two operands and the operation combining them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    challenge: Challenge,
    operand_a: Option<u8>,
    operand_b: Option<u8>,
    operation: Option<Operation>,
    correctness: Correctness,
    revealed: bool,
}

impl GridCell {
    /// Creates an unanswered cell for `challenge`.
    #[must_use]
    pub const fn new(challenge: Challenge) -> Self {
        Self {
            challenge,
            operand_a: None,
            operand_b: None,
            operation: None,
            correctness: Correctness::Unknown,
            revealed: false,
        }
    }

    /// The fixed challenge behind this cell.
    #[must_use]
    pub const fn challenge(&self) -> &Challenge {
        &self.challenge
    }

    /// Index of the pair this cell was derived from.
    #[must_use]
    pub const fn pair_index(&self) -> usize {
        self.challenge.pair_index
    }

    /// The number shown in the cell.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.challenge.value
    }

    /// The operand entered in `side`, if any.
    #[must_use]
    pub const fn operand(&self, side: OperandSide) -> Option<u8> {
        match side {
            OperandSide::A => self.operand_a,
            OperandSide::B => self.operand_b,
        }
    }

    /// The operation chosen by the player, if any.
    #[must_use]
    pub const fn operation(&self) -> Option<Operation> {
        self.operation
    }

    /// Stored validation outcome.
    #[must_use]
    pub const fn correctness(&self) -> Correctness {
        self.correctness
    }

    /// Returns `true` if a hint revealed this cell. Revealed cells are read-only.
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Returns `true` if both operands and the operation are entered.
    #[must_use]
    pub const fn is_filled(&self) -> bool {
        self.operand_a.is_some() && self.operand_b.is_some() && self.operation.is_some()
    }

    /// Returns `true` if no player field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.operand_a.is_none() && self.operand_b.is_none() && self.operation.is_none()
    }

    /// Returns the state to render for this cell.
    #[must_use]
    pub const fn state(&self) -> CellState {
        match self.correctness {
            Correctness::Correct => CellState::Correct,
            Correctness::Incorrect => CellState::Incorrect,
            Correctness::Unknown if self.is_empty() => CellState::Empty,
            Correctness::Unknown => CellState::Partial,
        }
    }

    pub(crate) fn set_operand(&mut self, side: OperandSide, value: Option<u8>) {
        match side {
            OperandSide::A => self.operand_a = value,
            OperandSide::B => self.operand_b = value,
        }
    }

    pub(crate) fn set_operation(&mut self, operation: Option<Operation>) {
        self.operation = operation;
    }

    pub(crate) fn set_correctness(&mut self, correctness: Correctness) {
        self.correctness = correctness;
    }

    pub(crate) fn clear(&mut self) {
        debug_assert!(!self.revealed);
        *self = Self::new(self.challenge);
    }

    pub(crate) fn reveal(&mut self, a: u8, b: u8) {
        self.operand_a = Some(a);
        self.operand_b = Some(b);
        self.operation = Some(self.challenge.operation);
        self.correctness = Correctness::Correct;
        self.revealed = true;
    }
}
