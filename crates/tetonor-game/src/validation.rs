//! Pure correctness predicates over a puzzle and a board.

use tetonor_core::{Correctness, Pair};
use tetonor_generator::GeneratedPuzzle;

use crate::{Board, GridCell, OperandSide};

/// Returns `true` if the cell's answer solves its challenge.
///
/// Both operands and the operation must be entered, and applying the chosen
/// operation to the operands must give the pair's result for that operation.
/// The challenge's own operation is not required: the cell's pair answered with
/// either operation is correct, as are any operands reproducing the pair's sum
/// or product.
#[must_use]
pub fn validate_cell(cell: &GridCell, pairs: &[Pair]) -> bool {
    let (Some(a), Some(b), Some(operation)) = (
        cell.operand(OperandSide::A),
        cell.operand(OperandSide::B),
        cell.operation(),
    ) else {
        return false;
    };
    let Some(pair) = pairs.get(cell.pair_index()) else {
        return false;
    };
    operation.apply(a, b) == pair.result(operation)
}

/// Computes the stored correctness of a cell.
///
/// Incomplete cells are [`Correctness::Unknown`].
#[must_use]
pub fn cell_correctness(cell: &GridCell, pairs: &[Pair]) -> Correctness {
    if cell.is_filled() {
        Correctness::from(validate_cell(cell, pairs))
    } else {
        Correctness::Unknown
    }
}

/// Returns `true` if every strip entry equals the solution at its position.
#[must_use]
pub fn is_strip_solved(strip_input: &[Option<u8>], solution: &[u8]) -> bool {
    strip_input.len() == solution.len()
        && strip_input
            .iter()
            .zip(solution)
            .all(|(input, expected)| *input == Some(*expected))
}

/// Returns `true` if every grid cell is correct and the strip matches its solution.
#[must_use]
pub fn is_puzzle_solved(puzzle: &GeneratedPuzzle, board: &Board) -> bool {
    board
        .grid
        .iter()
        .all(|cell| validate_cell(cell, &puzzle.pairs))
        && is_strip_solved(&board.strip_input, &puzzle.strip.solution)
}

/// Percentage (0-100) of required inputs that are filled in.
///
/// Counts fully answered grid cells and filled hidden strip positions. Visible
/// strip positions are not counted. Returns 0 for a puzzle with nothing to fill.
#[must_use]
pub fn progress(puzzle: &GeneratedPuzzle, board: &Board) -> u8 {
    let filled_cells = board.grid.iter().filter(|cell| cell.is_filled()).count();
    let hidden = puzzle.strip.hidden_positions().collect::<Vec<_>>();
    let filled_hidden = hidden
        .iter()
        .filter(|&&i| board.strip_input.get(i).copied().flatten().is_some())
        .count();

    let total = board.grid.len() + hidden.len();
    if total == 0 {
        return 0;
    }
    let filled = filled_cells + filled_hidden;
    // round(100 × filled / total), halves rounded up
    let percent = (200 * filled + total) / (2 * total);
    u8::try_from(percent).unwrap_or(100)
}

/// Returns `true` if the entered strip values never decrease, ignoring blanks.
#[must_use]
pub fn is_strip_order_valid(values: &[Option<u8>]) -> bool {
    values.iter().flatten().is_sorted()
}

/// Indices of complete grid cells whose answer is wrong.
#[must_use]
pub fn grid_conflicts(board: &Board, pairs: &[Pair]) -> Vec<usize> {
    board
        .grid
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_filled() && !validate_cell(cell, pairs))
        .map(|(i, _)| i)
        .collect()
}

/// Indices of filled strip positions whose value differs from the solution.
#[must_use]
pub fn strip_conflicts(board: &Board, solution: &[u8]) -> Vec<usize> {
    board
        .strip_input
        .iter()
        .zip(solution)
        .enumerate()
        .filter(|(_, (input, expected))| input.is_some_and(|value| value != **expected))
        .map(|(i, _)| i)
        .collect()
}

/// Returns `true` if every grid cell is fully answered.
#[must_use]
pub fn is_grid_complete(board: &Board) -> bool {
    board.grid.iter().all(GridCell::is_filled)
}

/// Returns `true` if every strip position holds a value.
#[must_use]
pub fn is_strip_complete(board: &Board) -> bool {
    board.strip_input.iter().all(Option::is_some)
}

#[cfg(test)]
mod tests {
    use tetonor_core::{Difficulty, GridSize, Operation, PuzzleConfig};
    use tetonor_generator::PuzzleGenerator;

    use super::*;

    fn puzzle(difficulty: Difficulty) -> GeneratedPuzzle {
        PuzzleGenerator::new().generate(PuzzleConfig::new(3, difficulty, GridSize::Small))
    }

    fn answer(cell: &mut GridCell, a: u8, b: u8, operation: Operation) {
        cell.set_operand(OperandSide::A, Some(a));
        cell.set_operand(OperandSide::B, Some(b));
        cell.set_operation(Some(operation));
    }

    fn solve_board(puzzle: &GeneratedPuzzle) -> Board {
        let mut board = Board::new(puzzle);
        for cell in &mut board.grid {
            let pair = puzzle.pairs[cell.pair_index()];
            let operation = cell.challenge().operation;
            answer(cell, pair.a, pair.b, operation);
        }
        board.strip_input = puzzle.strip.solution.iter().copied().map(Some).collect();
        board
    }

    #[test]
    fn test_validate_cell_requires_all_fields() {
        let puzzle = puzzle(Difficulty::Easy);
        let mut cell = GridCell::new(puzzle.grid[0]);
        let pair = puzzle.pairs[cell.pair_index()];

        assert!(!validate_cell(&cell, &puzzle.pairs));
        cell.set_operand(OperandSide::A, Some(pair.a));
        cell.set_operand(OperandSide::B, Some(pair.b));
        assert!(!validate_cell(&cell, &puzzle.pairs));
        assert_eq!(cell_correctness(&cell, &puzzle.pairs), Correctness::Unknown);

        cell.set_operation(Some(cell.challenge().operation));
        assert!(validate_cell(&cell, &puzzle.pairs));
        assert_eq!(cell_correctness(&cell, &puzzle.pairs), Correctness::Correct);
    }

    #[test]
    fn test_validate_cell_accepts_alternative_operands() {
        let pairs = [Pair::new(4, 6)];
        let mut sum = GridCell::new(tetonor_generator::Challenge {
            pair_index: 0,
            operation: Operation::Sum,
            value: 10,
        });
        answer(&mut sum, 3, 7, Operation::Sum);
        assert!(validate_cell(&sum, &pairs));

        answer(&mut sum, 3, 7, Operation::Product);
        assert!(!validate_cell(&sum, &pairs));
        assert_eq!(cell_correctness(&sum, &pairs), Correctness::Incorrect);
    }

    #[test]
    fn test_validate_cell_checks_chosen_operation_against_pair() {
        let pairs = [Pair::new(4, 6)];
        let mut sum = GridCell::new(tetonor_generator::Challenge {
            pair_index: 0,
            operation: Operation::Sum,
            value: 10,
        });
        answer(&mut sum, 4, 6, Operation::Product);
        assert!(validate_cell(&sum, &pairs));
        assert_eq!(cell_correctness(&sum, &pairs), Correctness::Correct);

        answer(&mut sum, 2, 12, Operation::Product);
        assert!(validate_cell(&sum, &pairs));

        answer(&mut sum, 2, 12, Operation::Sum);
        assert!(!validate_cell(&sum, &pairs));
        assert_eq!(cell_correctness(&sum, &pairs), Correctness::Incorrect);
    }

    #[test]
    fn test_validate_cell_with_missing_pair() {
        let mut cell = GridCell::new(tetonor_generator::Challenge {
            pair_index: 3,
            operation: Operation::Sum,
            value: 10,
        });
        answer(&mut cell, 4, 6, Operation::Sum);
        assert!(!validate_cell(&cell, &[]));
    }

    #[test]
    fn test_puzzle_solved_true_and_false() {
        let puzzle = puzzle(Difficulty::Hard);
        let mut board = solve_board(&puzzle);
        assert!(is_puzzle_solved(&puzzle, &board));
        assert!(is_grid_complete(&board));
        assert!(is_strip_complete(&board));

        let cell = &mut board.grid[0];
        let (a, b) = (cell.operand(OperandSide::A), cell.operand(OperandSide::B));
        cell.set_operand(OperandSide::A, b.map(|b| b + 1));
        cell.set_operand(OperandSide::B, a);
        assert!(!is_puzzle_solved(&puzzle, &board));
        assert_eq!(grid_conflicts(&board, &puzzle.pairs), vec![0]);
    }

    #[test]
    fn test_puzzle_unsolved_with_wrong_strip_entry() {
        let puzzle = puzzle(Difficulty::Hard);
        let mut board = solve_board(&puzzle);
        let hidden = puzzle.strip.hidden_positions().next().unwrap();
        let expected = puzzle.strip.solution[hidden];
        board.strip_input[hidden] = Some(if expected == 50 { 49 } else { expected + 1 });

        assert!(!is_puzzle_solved(&puzzle, &board));
        assert_eq!(strip_conflicts(&board, &puzzle.strip.solution), vec![hidden]);
        board.strip_input[hidden] = None;
        assert!(!is_puzzle_solved(&puzzle, &board));
        assert!(!is_strip_complete(&board));
    }

    #[test]
    fn test_progress_counts_cells_and_hidden_strip() {
        let puzzle = puzzle(Difficulty::Hard);
        let mut board = Board::new(&puzzle);
        // 8 cells + 4 hidden strip positions
        assert_eq!(progress(&puzzle, &board), 0);

        let pair = puzzle.pairs[board.grid[0].pair_index()];
        let operation = board.grid[0].challenge().operation;
        answer(&mut board.grid[0], pair.a, pair.b, operation);
        assert_eq!(progress(&puzzle, &board), 8);

        let hidden = puzzle.strip.hidden_positions().next().unwrap();
        board.strip_input[hidden] = Some(1);
        assert_eq!(progress(&puzzle, &board), 17);

        assert_eq!(progress(&puzzle, &solve_board(&puzzle)), 100);
    }

    #[test]
    fn test_progress_ignores_partial_cells() {
        let puzzle = puzzle(Difficulty::Easy);
        let mut board = Board::new(&puzzle);
        board.grid[0].set_operand(OperandSide::A, Some(1));
        assert_eq!(progress(&puzzle, &board), 0);
    }

    #[test]
    fn test_progress_of_empty_puzzle() {
        let config = PuzzleConfig::new(3, Difficulty::Hard, GridSize::Small);
        let puzzle = PuzzleGenerator::new().with_max_attempts(0).generate(config);
        let board = Board::new(&puzzle);
        assert_eq!(progress(&puzzle, &board), 0);
    }

    #[test]
    fn test_strip_order() {
        assert!(is_strip_order_valid(&[Some(1), None, Some(3), Some(3)]));
        assert!(is_strip_order_valid(&[None, None]));
        assert!(!is_strip_order_valid(&[Some(5), None, Some(4)]));
    }
}
