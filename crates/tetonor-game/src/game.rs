use tetonor_core::{Operation, Pair, PuzzleConfig, is_valid_operand};
use tetonor_generator::{GeneratedPuzzle, PuzzleGenerator};

use crate::{
    Action, ActionBlocked, Board, GameOptions, GridCell, History, OperandSide, validation,
};

/// What the player currently points at.
///
/// Grid and strip selections exclude each other.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Selection {
    /// Nothing is selected.
    #[default]
    None,
    /// A grid cell, optionally narrowed to one operand slot.
    Cell {
        /// Grid cell index.
        index: usize,
        /// Selected operand slot, if any.
        operand: Option<OperandSide>,
    },
    /// A strip position.
    Strip {
        /// Strip index.
        index: usize,
    },
}

#[derive(Debug, Clone, Copy)]
enum HintTarget {
    Cell { index: usize, pair: Pair },
    Strip { index: usize, value: u8 },
}

/// A Tetonor play session.
///
/// Owns the generated puzzle, the player's board, the selection, the hint budget
/// and the undo history. Every action either applies completely or is rejected
/// with an [`ActionBlocked`] reason, leaving the session untouched.
///
/// Editing actions record the board from before the edit, so they can be undone.
/// Once the puzzle is solved the session is completed and refuses further edits
/// until [`reset`](Self::reset) or [`new_puzzle`](Self::new_puzzle).
///
/// # Example
///
/// ```
/// use tetonor_core::{Difficulty, GridSize, PuzzleConfig};
/// use tetonor_game::{ActionBlocked, Game, OperandSide};
///
/// let mut game = Game::new(PuzzleConfig::new(1, Difficulty::Easy, GridSize::Small));
/// assert_eq!(game.enter_operand_a(3), Err(ActionBlocked::NoCellSelected));
///
/// game.select_cell(Some(0)).unwrap();
/// game.enter_operand_a(3).unwrap();
/// assert_eq!(game.grid()[0].operand(OperandSide::A), Some(3));
///
/// game.undo().unwrap();
/// assert_eq!(game.grid()[0].operand(OperandSide::A), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    generator: PuzzleGenerator,
    options: GameOptions,
    puzzle: GeneratedPuzzle,
    board: Board,
    selection: Selection,
    paused: bool,
    completed: bool,
    hints_used: u8,
    hints_remaining: u8,
    history: History<Board>,
}

impl Game {
    /// Generates the puzzle for `config` and starts a session with default options.
    #[must_use]
    pub fn new(config: PuzzleConfig) -> Self {
        Self::with_options(config, GameOptions::default())
    }

    /// Generates the puzzle for `config` and starts a session with `options`.
    #[must_use]
    pub fn with_options(config: PuzzleConfig, options: GameOptions) -> Self {
        Self::with_generator(PuzzleGenerator::new(), config, options)
    }

    /// Starts a session whose puzzles, including later resets, come from `generator`.
    #[must_use]
    pub fn with_generator(
        generator: PuzzleGenerator,
        config: PuzzleConfig,
        options: GameOptions,
    ) -> Self {
        let puzzle = generator.generate(config);
        Self::start(generator, puzzle, options)
    }

    /// Starts a session on an already generated puzzle.
    #[must_use]
    pub fn from_puzzle(puzzle: GeneratedPuzzle, options: GameOptions) -> Self {
        Self::start(PuzzleGenerator::new(), puzzle, options)
    }

    fn start(generator: PuzzleGenerator, puzzle: GeneratedPuzzle, options: GameOptions) -> Self {
        let board = Board::new(&puzzle);
        Self {
            generator,
            options,
            board,
            puzzle,
            selection: Selection::None,
            paused: false,
            completed: false,
            hints_used: 0,
            hints_remaining: options.max_hints,
            history: History::new(options.history_capacity),
        }
    }

    /// Configuration of the current puzzle.
    #[must_use]
    pub fn config(&self) -> PuzzleConfig {
        self.puzzle.config
    }

    /// Session options.
    #[must_use]
    pub fn options(&self) -> GameOptions {
        self.options
    }

    /// The immutable generated puzzle.
    #[must_use]
    pub fn puzzle(&self) -> &GeneratedPuzzle {
        &self.puzzle
    }

    /// The operand pairs behind the grid.
    #[must_use]
    pub fn pairs(&self) -> &[Pair] {
        &self.puzzle.pairs
    }

    /// Grid cells, including the player's answers.
    #[must_use]
    pub fn grid(&self) -> &[GridCell] {
        &self.board.grid
    }

    /// The strip as shown: solution values for visible positions, `None` for hidden ones.
    #[must_use]
    pub fn strip(&self) -> &[Option<u8>] {
        &self.puzzle.strip.values
    }

    /// The full ascending strip.
    #[must_use]
    pub fn strip_solution(&self) -> &[u8] {
        &self.puzzle.strip.solution
    }

    /// The strip with the player's entries in hidden positions.
    #[must_use]
    pub fn strip_input(&self) -> &[Option<u8>] {
        &self.board.strip_input
    }

    /// The editable state recorded by the undo history.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current selection.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Index of the selected grid cell.
    #[must_use]
    pub fn selected_cell_index(&self) -> Option<usize> {
        match self.selection {
            Selection::Cell { index, .. } => Some(index),
            _ => None,
        }
    }

    /// Operand slot selected within the selected cell.
    #[must_use]
    pub fn selected_operand(&self) -> Option<OperandSide> {
        match self.selection {
            Selection::Cell { operand, .. } => operand,
            _ => None,
        }
    }

    /// Index of the selected strip position.
    #[must_use]
    pub fn selected_strip_index(&self) -> Option<usize> {
        match self.selection {
            Selection::Strip { index } => Some(index),
            _ => None,
        }
    }

    /// Returns `true` while the session is paused.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Returns `true` once the puzzle has been solved.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Hints spent on this puzzle.
    #[must_use]
    pub fn hints_used(&self) -> u8 {
        self.hints_used
    }

    /// Hints still available.
    #[must_use]
    pub fn hints_remaining(&self) -> u8 {
        self.hints_remaining
    }

    /// Number of stored history snapshots.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Index of the snapshot the next undo restores, `None` when there is none.
    #[must_use]
    pub fn history_index(&self) -> Option<usize> {
        self.history.index()
    }

    /// Returns `true` if [`undo`](Self::undo) would succeed.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.paused && !self.completed && self.history.can_undo()
    }

    /// Returns `true` if [`redo`](Self::redo) would succeed.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.paused && !self.completed && self.history.can_redo()
    }

    /// Percentage (0-100) of cells and hidden strip positions filled in.
    #[must_use]
    pub fn progress(&self) -> u8 {
        validation::progress(&self.puzzle, &self.board)
    }

    /// Returns `true` if the board solves the puzzle.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        validation::is_puzzle_solved(&self.puzzle, &self.board)
    }

    /// Selects a grid cell, or clears the selection with `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ActionBlocked::IndexOutOfRange`] if `index` is past the grid.
    pub fn select_cell(&mut self, index: Option<usize>) -> Result<(), ActionBlocked> {
        self.selection = match index {
            Some(index) => Selection::Cell {
                index: self.check_cell_index(index)?,
                operand: None,
            },
            None => Selection::None,
        };
        Ok(())
    }

    /// Selects the `side` operand slot of a grid cell.
    ///
    /// # Errors
    ///
    /// Returns [`ActionBlocked::IndexOutOfRange`] if `index` is past the grid.
    pub fn select_operand(&mut self, index: usize, side: OperandSide) -> Result<(), ActionBlocked> {
        self.selection = Selection::Cell {
            index: self.check_cell_index(index)?,
            operand: Some(side),
        };
        Ok(())
    }

    /// Selects the first operand slot of a grid cell.
    ///
    /// # Errors
    ///
    /// See [`select_operand`](Self::select_operand).
    pub fn select_operand_a(&mut self, index: usize) -> Result<(), ActionBlocked> {
        self.select_operand(index, OperandSide::A)
    }

    /// Selects the second operand slot of a grid cell.
    ///
    /// # Errors
    ///
    /// See [`select_operand`](Self::select_operand).
    pub fn select_operand_b(&mut self, index: usize) -> Result<(), ActionBlocked> {
        self.select_operand(index, OperandSide::B)
    }

    /// Selects a strip position, or clears the selection with `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ActionBlocked::IndexOutOfRange`] if `index` is past the strip.
    pub fn select_strip_position(&mut self, index: Option<usize>) -> Result<(), ActionBlocked> {
        self.selection = match index {
            Some(index) => {
                let len = self.board.strip_input.len();
                if index >= len {
                    return Err(ActionBlocked::IndexOutOfRange { index, len });
                }
                Selection::Strip { index }
            }
            None => Selection::None,
        };
        Ok(())
    }

    /// Writes `value` into the `side` operand of the selected cell.
    ///
    /// # Errors
    ///
    /// Rejected when the session is completed or paused, no cell is selected,
    /// `value` is outside `1..=50`, or the cell was revealed by a hint.
    pub fn enter_operand(&mut self, side: OperandSide, value: u8) -> Result<(), ActionBlocked> {
        let index = self.editable_cell()?;
        if !is_valid_operand(value) {
            return Err(ActionBlocked::OperandOutOfRange(value));
        }
        self.commit(|board| board.grid[index].set_operand(side, Some(value)));
        Ok(())
    }

    /// Writes the first operand of the selected cell.
    ///
    /// # Errors
    ///
    /// See [`enter_operand`](Self::enter_operand).
    pub fn enter_operand_a(&mut self, value: u8) -> Result<(), ActionBlocked> {
        self.enter_operand(OperandSide::A, value)
    }

    /// Writes the second operand of the selected cell.
    ///
    /// # Errors
    ///
    /// See [`enter_operand`](Self::enter_operand).
    pub fn enter_operand_b(&mut self, value: u8) -> Result<(), ActionBlocked> {
        self.enter_operand(OperandSide::B, value)
    }

    /// Cycles the selected cell's operation: none, sum, product, none.
    ///
    /// # Errors
    ///
    /// Rejected when the session is completed or paused, no cell is selected,
    /// or the cell was revealed by a hint.
    pub fn toggle_operation(&mut self) -> Result<(), ActionBlocked> {
        let index = self.editable_cell()?;
        self.commit(|board| {
            let cell = &mut board.grid[index];
            cell.set_operation(Operation::cycle(cell.operation()));
        });
        Ok(())
    }

    /// Writes `value` into the selected hidden strip position.
    ///
    /// # Errors
    ///
    /// Rejected when the session is completed or paused, no strip position is
    /// selected, the position is visible, or `value` is outside `1..=50`.
    pub fn enter_strip_number(&mut self, value: u8) -> Result<(), ActionBlocked> {
        let index = self.editable_strip_position()?;
        if !is_valid_operand(value) {
            return Err(ActionBlocked::OperandOutOfRange(value));
        }
        self.commit(|board| board.strip_input[index] = Some(value));
        Ok(())
    }

    /// Wipes the operands, operation and correctness of the selected cell.
    ///
    /// # Errors
    ///
    /// Rejected when the session is completed or paused, no cell is selected,
    /// or the cell was revealed by a hint.
    pub fn clear_cell(&mut self) -> Result<(), ActionBlocked> {
        let index = self.editable_cell()?;
        self.commit(|board| board.grid[index].clear());
        Ok(())
    }

    /// Wipes the selected hidden strip position.
    ///
    /// # Errors
    ///
    /// Rejected when the session is completed or paused, no strip position is
    /// selected, or the position is visible.
    pub fn clear_strip_position(&mut self) -> Result<(), ActionBlocked> {
        let index = self.editable_strip_position()?;
        self.commit(|board| board.strip_input[index] = None);
        Ok(())
    }

    /// Restores the board from before the last applied edit.
    ///
    /// # Errors
    ///
    /// Rejected when the session is completed or paused, or there is nothing to undo.
    pub fn undo(&mut self) -> Result<(), ActionBlocked> {
        self.ensure_playable()?;
        if !self.history.undo(&mut self.board) {
            return Err(ActionBlocked::NothingToUndo);
        }
        Ok(())
    }

    /// Re-applies the most recently undone edit.
    ///
    /// # Errors
    ///
    /// Rejected when the session is completed or paused, or there is nothing to redo.
    pub fn redo(&mut self) -> Result<(), ActionBlocked> {
        self.ensure_playable()?;
        if !self.history.redo(&mut self.board) {
            return Err(ActionBlocked::NothingToRedo);
        }
        Ok(())
    }

    /// Reveals one outstanding target and spends a hint.
    ///
    /// The first grid cell that is incomplete or wrong is filled with its pair's
    /// operands and marked revealed. If every cell is right, the first hidden strip
    /// position that differs from the solution is filled instead.
    ///
    /// # Errors
    ///
    /// Rejected when the session is completed or paused, no hints remain, or there
    /// is nothing left to reveal. A rejected hint costs nothing.
    pub fn use_hint(&mut self) -> Result<(), ActionBlocked> {
        self.ensure_playable()?;
        if self.hints_remaining == 0 {
            return Err(ActionBlocked::NoHintsRemaining);
        }
        let target = self.hint_target().ok_or(ActionBlocked::NoHintTarget)?;

        self.hints_used += 1;
        self.hints_remaining -= 1;
        self.commit(|board| match target {
            HintTarget::Cell { index, pair } => board.grid[index].reveal(pair.a, pair.b),
            HintTarget::Strip { index, value } => board.strip_input[index] = Some(value),
        });
        Ok(())
    }

    fn hint_target(&self) -> Option<HintTarget> {
        let cell_target = self.board.grid.iter().enumerate().find_map(|(index, cell)| {
            let outstanding = !cell.is_filled() || cell.correctness().is_incorrect();
            let pair = self.puzzle.pairs.get(cell.pair_index())?;
            outstanding.then_some(HintTarget::Cell { index, pair: *pair })
        });
        cell_target.or_else(|| {
            self.puzzle
                .strip
                .hidden_positions()
                .map(|index| (index, self.puzzle.strip.solution[index]))
                .find(|&(index, value)| self.board.strip_input[index] != Some(value))
                .map(|(index, value)| HintTarget::Strip { index, value })
        })
    }

    /// Pauses or resumes the session. Not recorded in history.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Restarts the current puzzle: fresh board, hints and history.
    pub fn reset(&mut self) {
        *self = Self::start(self.generator, self.puzzle.clone(), self.options);
    }

    /// Replaces the session with a freshly generated puzzle for `config`.
    pub fn new_puzzle(&mut self, config: PuzzleConfig) {
        *self = Self::with_generator(self.generator, config, self.options);
    }

    /// Applies `action` by routing it to the matching method.
    ///
    /// # Errors
    ///
    /// Returns the reason the action was rejected. The session is then unchanged.
    pub fn apply(&mut self, action: Action) -> Result<(), ActionBlocked> {
        let result = match action {
            Action::SelectCell(index) => self.select_cell(index),
            Action::SelectOperand { index, side } => self.select_operand(index, side),
            Action::SelectStripPosition(index) => self.select_strip_position(index),
            Action::EnterOperand { side, value } => self.enter_operand(side, value),
            Action::ToggleOperation => self.toggle_operation(),
            Action::EnterStripNumber(value) => self.enter_strip_number(value),
            Action::ClearCell => self.clear_cell(),
            Action::ClearStripPosition => self.clear_strip_position(),
            Action::Undo => self.undo(),
            Action::Redo => self.redo(),
            Action::UseHint => self.use_hint(),
            Action::TogglePause => {
                self.toggle_pause();
                Ok(())
            }
            Action::Reset => {
                self.reset();
                Ok(())
            }
            Action::NewPuzzle(config) => {
                self.new_puzzle(config);
                Ok(())
            }
        };
        if let Err(reason) = &result {
            log::trace!("rejected `{action}`: {reason}");
        }
        result
    }

    fn ensure_playable(&self) -> Result<(), ActionBlocked> {
        if self.completed {
            return Err(ActionBlocked::Completed);
        }
        if self.paused {
            return Err(ActionBlocked::Paused);
        }
        Ok(())
    }

    fn check_cell_index(&self, index: usize) -> Result<usize, ActionBlocked> {
        let len = self.board.grid.len();
        if index < len {
            Ok(index)
        } else {
            Err(ActionBlocked::IndexOutOfRange { index, len })
        }
    }

    fn editable_cell(&self) -> Result<usize, ActionBlocked> {
        self.ensure_playable()?;
        let index = self
            .selected_cell_index()
            .ok_or(ActionBlocked::NoCellSelected)?;
        if self.board.grid[index].is_revealed() {
            return Err(ActionBlocked::RevealedCell);
        }
        Ok(index)
    }

    fn editable_strip_position(&self) -> Result<usize, ActionBlocked> {
        self.ensure_playable()?;
        let index = self
            .selected_strip_index()
            .ok_or(ActionBlocked::NoStripSelected)?;
        if !self.puzzle.strip.is_hidden(index) {
            return Err(ActionBlocked::VisibleStripSlot);
        }
        Ok(index)
    }

    /// Records the current board, applies `edit`, then revalidates.
    fn commit(&mut self, edit: impl FnOnce(&mut Board)) {
        let snapshot = self.board.clone();
        edit(&mut self.board);
        self.history.push(snapshot);

        for cell in self.board.grid.iter_mut().filter(|cell| !cell.is_revealed()) {
            let correctness = validation::cell_correctness(cell, &self.puzzle.pairs);
            cell.set_correctness(correctness);
        }

        if validation::is_puzzle_solved(&self.puzzle, &self.board) {
            self.completed = true;
            log::debug!(
                "puzzle {} completed with {} hints",
                self.puzzle.config.seed,
                self.hints_used
            );
        }
    }
}
