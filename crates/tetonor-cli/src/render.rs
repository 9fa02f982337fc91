use tetonor_core::Correctness;
use tetonor_game::{Game, GridCell, OperandSide, validation};
use tetonor_generator::GeneratedPuzzle;

const GRID_COLUMNS: usize = 4;

fn strip_text(values: &[Option<u8>]) -> String {
    values
        .iter()
        .map(|value| value.map_or_else(|| "__".to_owned(), |v| format!("{v:>2}")))
        .collect::<Vec<_>>()
        .join(" ")
}

fn cell_text(cell: &GridCell) -> String {
    let operand = |side| {
        cell.operand(side)
            .map_or_else(|| " _".to_owned(), |v| format!("{v:>2}"))
    };
    let operation = cell
        .operation()
        .map_or_else(|| "?".to_owned(), |op| op.to_string());
    let mark = match cell.correctness() {
        Correctness::Unknown => ' ',
        Correctness::Correct if cell.is_revealed() => '*',
        Correctness::Correct => '✓',
        Correctness::Incorrect => '✗',
    };
    format!(
        "{:>4} = {} {operation} {}{mark}",
        cell.value(),
        operand(OperandSide::A),
        operand(OperandSide::B),
    )
}

pub(crate) fn print_puzzle(puzzle: &GeneratedPuzzle, solution: bool) {
    println!("Grid:");
    for row in puzzle.grid.chunks(GRID_COLUMNS) {
        let values = row
            .iter()
            .map(|challenge| format!("{:>4}", challenge.value))
            .collect::<Vec<_>>();
        println!("  {}", values.join(" "));
    }
    println!();

    println!("Strip:");
    println!("  {}", strip_text(&puzzle.strip.values));

    if solution {
        println!();
        println!("Pairs:");
        for pair in &puzzle.pairs {
            println!(
                "  {:>2} {:>2}  sum {:>3}  product {:>4}",
                pair.a, pair.b, pair.sum, pair.product
            );
        }
        println!();
        let full = puzzle.strip.solution.iter().copied().map(Some).collect::<Vec<_>>();
        println!("Solution strip:");
        println!("  {}", strip_text(&full));
    }

    if puzzle.is_degraded() {
        println!();
        println!(
            "Warning: only {} of {} pairs could be generated.",
            puzzle.pairs.len(),
            puzzle.config.size.pair_count()
        );
    }
}

pub(crate) fn print_game(game: &Game) {
    println!("Grid:");
    for row in game.grid().chunks(GRID_COLUMNS) {
        let cells = row.iter().map(cell_text).collect::<Vec<_>>();
        println!("  {}", cells.join("  "));
    }
    println!();

    println!("Strip:");
    println!("  {}", strip_text(game.strip_input()));
    if !validation::is_strip_order_valid(game.strip_input()) {
        println!("  (entries are not in ascending order)");
    }
    println!();

    let grid_conflicts = validation::grid_conflicts(game.board(), game.pairs());
    let strip_conflicts = validation::strip_conflicts(game.board(), game.strip_solution());
    if !grid_conflicts.is_empty() {
        println!("Wrong cells: {grid_conflicts:?}");
    }
    if !strip_conflicts.is_empty() {
        println!("Wrong strip positions: {strip_conflicts:?}");
    }

    println!("Progress: {}%", game.progress());
    println!(
        "Hints: {} used, {} remaining",
        game.hints_used(),
        game.hints_remaining()
    );
    println!(
        "History: {} entries (undo {}, redo {})",
        game.history_len(),
        if game.can_undo() { "yes" } else { "no" },
        if game.can_redo() { "yes" } else { "no" },
    );
    if game.is_paused() {
        println!("Paused");
    }
    if game.is_completed() {
        println!("Completed!");
    }
}
