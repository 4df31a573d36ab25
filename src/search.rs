//! Move selection for computer-controlled players.
//!
//! Both strategies are pure functions of a board snapshot and the symbol to
//! move; neither keeps state between calls.

use log::{debug, trace};
use rand::seq::IteratorRandom;
use rand::Rng;

use crate::error::{Error, Result};
use crate::rules::{is_draw, is_win_for, legal_moves};
use crate::tic_tac_toe::{Board, Symbol};

const WIN_SCORE: i32 = 10;
const LOSS_SCORE: i32 = -10;
const DRAW_SCORE: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Uniformly random among the empty cells.
    Random,
    /// Full-depth minimax with alpha-beta pruning.
    Optimal,
}

impl Strategy {
    pub fn select_move<R: Rng + ?Sized>(
        self,
        board: &Board,
        symbol: Symbol,
        rng: &mut R,
    ) -> Result<usize> {
        let index = match self {
            Strategy::Random => random_move(board, rng)?,
            Strategy::Optimal => best_move(board, symbol)?,
        };
        debug!("{:?} strategy picked {} for {}", self, index, symbol);
        Ok(index)
    }
}

pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<usize> {
    legal_moves(board)
        .into_iter()
        .choose(rng)
        .ok_or(Error::NoLegalMove)
}

/// Returns the move that maximises the outcome for `symbol` against a
/// minimising opponent.
///
/// Scores are not discounted by depth, so a slow forced win counts the same
/// as an immediate one. Ties go to the lowest index.
pub fn best_move(board: &Board, symbol: Symbol) -> Result<usize> {
    let mut best: Option<(usize, i32)> = None;

    for index in legal_moves(board) {
        let mut next = board.snapshot();
        next.set(index, symbol);
        let score = minimax(&next, false, symbol, i32::MIN, i32::MAX);
        trace!("{} at {} scores {}", symbol, index, score);

        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }

    best.map(|(index, _)| index).ok_or(Error::NoLegalMove)
}

/// Minimax value of `board` from the point of view of `mover`.
///
/// On a maximising ply `mover` places next, otherwise its opponent does.
fn minimax(board: &Board, maximizing: bool, mover: Symbol, mut alpha: i32, mut beta: i32) -> i32 {
    let opponent = mover.opponent();
    if is_win_for(mover, board) {
        return WIN_SCORE;
    }
    if is_win_for(opponent, board) {
        return LOSS_SCORE;
    }
    if is_draw(board) {
        return DRAW_SCORE;
    }

    if maximizing {
        let mut best = i32::MIN;
        for index in legal_moves(board) {
            let mut next = board.snapshot();
            next.set(index, mover);
            best = best.max(minimax(&next, false, mover, alpha, beta));
            alpha = alpha.max(best);
            if alpha >= beta {
                break;
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for index in legal_moves(board) {
            let mut next = board.snapshot();
            next.set(index, opponent);
            best = best.min(minimax(&next, true, mover, alpha, beta));
            beta = beta.min(best);
            if alpha >= beta {
                break;
            }
        }
        best
    }
}
