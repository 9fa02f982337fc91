use serde::{Deserialize, Serialize};
use tetonor_generator::GeneratedPuzzle;

use crate::GridCell;

/// The player-editable part of a puzzle: grid answers and strip entries.
///
/// A board is also the unit of undo history. Snapshots own their vectors, so
/// later edits never reach a stored snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub(crate) grid: Vec<GridCell>,
    pub(crate) strip_input: Vec<Option<u8>>,
}

impl Board {
    /// Creates the starting board of `puzzle`.
    ///
    /// Visible strip positions are pre-filled with their solution value.
    #[must_use]
    pub fn new(puzzle: &GeneratedPuzzle) -> Self {
        Self {
            grid: puzzle.grid.iter().copied().map(GridCell::new).collect(),
            strip_input: puzzle.strip.values.clone(),
        }
    }

    /// Grid cells in display order.
    #[must_use]
    pub fn grid(&self) -> &[GridCell] {
        &self.grid
    }

    /// Strip entries, one per strip position.
    #[must_use]
    pub fn strip_input(&self) -> &[Option<u8>] {
        &self.strip_input
    }
}
