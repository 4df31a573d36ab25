//! Terminal conditions and move generation over a board.

use crate::tic_tac_toe::{Board, Cell, Symbol, CELLS};

/// Index triples that win when all three cells hold the same symbol.
pub const WIN_TRIPLES: [[usize; 3]; 8] = [
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

pub fn is_win_for(symbol: Symbol, board: &Board) -> bool {
    let cells = board.cells();
    WIN_TRIPLES
        .iter()
        .any(|triple| triple.iter().all(|&i| cells[i] == Cell::Mark(symbol)))
}

/// A full board on which neither symbol has a triple.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && !is_win_for(Symbol::X, board) && !is_win_for(Symbol::O, board)
}

/// Empty cell indices in ascending order.
pub fn legal_moves(board: &Board) -> Vec<usize> {
    (0..CELLS).filter(|&i| board.is_empty(i)).collect()
}
