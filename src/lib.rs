//! Tic-tac-toe with computer opponents.
//!
//! The crate is a synchronous core: a `Match` owns the board and turn order,
//! and a driver feeds it human moves or asks it to play computer moves. The
//! core never prints, sleeps or schedules anything on its own.

mod error;
mod game;
mod rules;
mod search;
mod tic_tac_toe;

pub use error::{Error, Result};
pub use game::{Control, Match, MatchState, Outcome, Phase, PlayerSpec};
pub use rules::{is_draw, is_win_for, legal_moves, WIN_TRIPLES};
pub use search::{best_move, random_move, Strategy};
pub use tic_tac_toe::{Board, Cell, Symbol, CELLS};
