/// Why an action was rejected.
///
/// A rejected action is a no-op: the game state is exactly as it was before the
/// call. Callers that do not care why may ignore the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ActionBlocked {
    /// The puzzle is solved; only a new puzzle can change it.
    #[display("puzzle is already completed")]
    Completed,
    /// The game is paused.
    #[display("game is paused")]
    Paused,
    /// The action needs a selected grid cell.
    #[display("no grid cell is selected")]
    NoCellSelected,
    /// The action needs a selected strip position.
    #[display("no strip position is selected")]
    NoStripSelected,
    /// A selection index is past the end of the grid or strip.
    #[display("index {index} is out of range (length {len})")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Length of the indexed sequence.
        len: usize,
    },
    /// The value is outside the operand bounds.
    #[display("value {_0} is outside 1..=50")]
    OperandOutOfRange(#[error(not(source))] u8),
    /// The selected cell was revealed by a hint and is read-only.
    #[display("cell was revealed by a hint")]
    RevealedCell,
    /// The selected strip position is visible and cannot be edited.
    #[display("strip position is not hidden")]
    VisibleStripSlot,
    /// There is no action to undo.
    #[display("nothing to undo")]
    NothingToUndo,
    /// There is no undone action to redo.
    #[display("nothing to redo")]
    NothingToRedo,
    /// The hint budget is spent.
    #[display("no hints remaining")]
    NoHintsRemaining,
    /// Every cell and strip position is already correct.
    #[display("nothing left to reveal")]
    NoHintTarget,
}
