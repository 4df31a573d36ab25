use derive_more::{Display, Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// A cell index outside `0..9`. Raised as a panic by `Board::set` and `Board::get`.
    #[display("cell index {index} is out of range 0..9")]
    IndexOutOfRange { index: usize },

    /// A search was started on a board with no empty cell.
    #[display("no legal move left on the board")]
    NoLegalMove,

    /// The two player specs do not cover X and O exactly once.
    #[display("players must be given for X and O exactly once")]
    InvalidPlayers,
}

pub type Result<T> = std::result::Result<T, Error>;
