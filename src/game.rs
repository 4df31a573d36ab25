//! Turn sequencing for a single match.

use std::fmt;

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{Error, Result};
use crate::rules::{is_draw, is_win_for};
use crate::search::Strategy;
use crate::tic_tac_toe::{Board, Symbol, CELLS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Moves arrive through `Match::apply_move`.
    Human,
    Computer(Strategy),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerSpec {
    pub symbol: Symbol,
    pub control: Control,
}

impl PlayerSpec {
    pub fn new(symbol: Symbol, control: Control) -> Self {
        Self { symbol, control }
    }

    pub fn human(symbol: Symbol) -> Self {
        Self::new(symbol, Control::Human)
    }

    pub fn computer(symbol: Symbol, strategy: Strategy) -> Self {
        Self::new(symbol, Control::Computer(strategy))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Symbol),
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Winner(symbol) => write!(f, "{} won!", symbol),
            Outcome::Draw => write!(f, "It's a draw!"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingMove(Symbol),
    Ended(Outcome),
}

/// What the driver sees of a match between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchState {
    pub running: bool,
    pub outcome: Option<Outcome>,
}

#[derive(Debug, Clone)]
pub struct Match {
    board: Board,
    phase: Phase,
    players: [PlayerSpec; 2],
    rng: StdRng,
}

impl Match {
    /// Starts a match with X to move on an empty board.
    ///
    /// Fails with `Error::InvalidPlayers` unless `x` is for X and `o` is for O.
    /// Computer players are not run here; call `restart` or `computer_turn`.
    pub fn new(x: PlayerSpec, o: PlayerSpec) -> Result<Self> {
        Self::with_rng(x, o, StdRng::from_entropy())
    }

    /// Like `new`, with a fixed seed for the random strategy.
    pub fn with_seed(x: PlayerSpec, o: PlayerSpec, seed: u64) -> Result<Self> {
        Self::with_rng(x, o, StdRng::seed_from_u64(seed))
    }

    fn with_rng(x: PlayerSpec, o: PlayerSpec, rng: StdRng) -> Result<Self> {
        Ok(Self {
            board: Board::new(),
            phase: Phase::AwaitingMove(Symbol::X),
            players: check_players(x, o)?,
            rng,
        })
    }

    /// Places the mark of the player to move at `index`.
    ///
    /// Out-of-range indices, occupied cells and moves after the end are
    /// ignored. Returns whether the move was applied.
    pub fn apply_move(&mut self, index: usize) -> bool {
        let symbol = match self.phase {
            Phase::AwaitingMove(symbol) => symbol,
            Phase::Ended(_) => return false,
        };
        if index >= CELLS || !self.board.is_empty(index) {
            return false;
        }

        self.board.set(index, symbol);
        debug!("{} plays {}", symbol, index);

        self.phase = if is_win_for(symbol, &self.board) {
            Phase::Ended(Outcome::Winner(symbol))
        } else if is_draw(&self.board) {
            Phase::Ended(Outcome::Draw)
        } else {
            Phase::AwaitingMove(symbol.opponent())
        };
        if let Phase::Ended(outcome) = self.phase {
            debug!("match ended: {:?}", outcome);
        }
        true
    }

    /// Lets the computer to move play one move.
    ///
    /// Returns the index played, or `None` if the match is over or the
    /// player to move is human.
    pub fn computer_turn(&mut self) -> Result<Option<usize>> {
        let symbol = match self.phase {
            Phase::AwaitingMove(symbol) => symbol,
            Phase::Ended(_) => return Ok(None),
        };
        let strategy = match self.player(symbol).control {
            Control::Computer(strategy) => strategy,
            Control::Human => return Ok(None),
        };

        let index = strategy.select_move(&self.board.snapshot(), symbol, &mut self.rng)?;
        self.apply_move(index);
        Ok(Some(index))
    }

    /// Clears the board and plays the first computer move, if X is a computer.
    pub fn restart(&mut self) -> Result<()> {
        self.board.reset();
        self.phase = Phase::AwaitingMove(Symbol::X);
        debug!("match restarted");
        self.computer_turn()?;
        Ok(())
    }

    /// Swaps in new players and restarts.
    pub fn set_players(&mut self, x: PlayerSpec, o: PlayerSpec) -> Result<()> {
        self.players = check_players(x, o)?;
        self.restart()
    }

    pub fn board_snapshot(&self) -> Board {
        self.board.snapshot()
    }

    pub fn state_snapshot(&self) -> MatchState {
        match self.phase {
            Phase::AwaitingMove(_) => MatchState {
                running: true,
                outcome: None,
            },
            Phase::Ended(outcome) => MatchState {
                running: false,
                outcome: Some(outcome),
            },
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn to_move(&self) -> Option<Symbol> {
        match self.phase {
            Phase::AwaitingMove(symbol) => Some(symbol),
            Phase::Ended(_) => None,
        }
    }

    pub fn player(&self, symbol: Symbol) -> PlayerSpec {
        match symbol {
            Symbol::X => self.players[0],
            Symbol::O => self.players[1],
        }
    }

    pub fn is_computer_turn(&self) -> bool {
        self.to_move()
            .map_or(false, |symbol| matches!(self.player(symbol).control, Control::Computer(_)))
    }
}

fn check_players(x: PlayerSpec, o: PlayerSpec) -> Result<[PlayerSpec; 2]> {
    if x.symbol != Symbol::X || o.symbol != Symbol::O {
        return Err(Error::InvalidPlayers);
    }
    Ok([x, o])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tic_tac_toe::Cell;

    fn humans() -> Match {
        Match::new(PlayerSpec::human(Symbol::X), PlayerSpec::human(Symbol::O)).unwrap()
    }

    #[test]
    fn test_new() {
        let game = humans();
        assert_eq!(game.board_snapshot(), Board::new());
        assert_eq!(game.phase(), Phase::AwaitingMove(Symbol::X));
        assert_eq!(
            game.state_snapshot(),
            MatchState {
                running: true,
                outcome: None
            }
        );
    }

    #[test]
    fn test_players_must_cover_both_symbols() {
        let x = PlayerSpec::human(Symbol::X);
        let o = PlayerSpec::computer(Symbol::O, Strategy::Optimal);
        assert!(Match::new(x, o).is_ok());
        assert_eq!(Match::new(o, x).unwrap_err(), Error::InvalidPlayers);
        assert_eq!(Match::new(x, x).unwrap_err(), Error::InvalidPlayers);
        assert_eq!(Match::new(o, o).unwrap_err(), Error::InvalidPlayers);
    }

    #[test]
    fn test_apply_move_toggles_turn() {
        let mut game = humans();
        assert!(game.apply_move(4));
        assert_eq!(game.board_snapshot().get(4), Cell::Mark(Symbol::X));
        assert_eq!(game.to_move(), Some(Symbol::O));

        assert!(game.apply_move(0));
        assert_eq!(game.board_snapshot().get(0), Cell::Mark(Symbol::O));
        assert_eq!(game.to_move(), Some(Symbol::X));
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut game = humans();
        game.apply_move(4);
        let board = game.board_snapshot();
        let phase = game.phase();

        assert!(!game.apply_move(4));
        assert_eq!(game.board_snapshot(), board);
        assert_eq!(game.phase(), phase);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut game = humans();
        assert!(!game.apply_move(9));
        assert!(!game.apply_move(usize::MAX));
        assert_eq!(game.board_snapshot(), Board::new());
        assert_eq!(game.to_move(), Some(Symbol::X));
    }

    #[test]
    fn test_moves_after_end_are_ignored() {
        let mut game = humans();
        for index in [0, 3, 1, 4, 2] {
            assert!(game.apply_move(index));
        }
        assert_eq!(game.phase(), Phase::Ended(Outcome::Winner(Symbol::X)));
        assert_eq!(game.to_move(), None);

        let board = game.board_snapshot();
        assert!(!game.apply_move(8));
        assert_eq!(game.board_snapshot(), board);
        assert_eq!(game.computer_turn(), Ok(None));
    }

    #[test]
    fn test_computer_turn_skips_humans() {
        let mut game = humans();
        assert!(!game.is_computer_turn());
        assert_eq!(game.computer_turn(), Ok(None));
        assert_eq!(game.board_snapshot(), Board::new());
    }

    #[test]
    fn test_computer_answers_human() {
        let mut game = Match::new(
            PlayerSpec::human(Symbol::X),
            PlayerSpec::computer(Symbol::O, Strategy::Optimal),
        )
        .unwrap();
        game.apply_move(0);
        assert!(game.is_computer_turn());

        let index = game.computer_turn().unwrap().unwrap();
        assert_eq!(game.board_snapshot().get(index), Cell::Mark(Symbol::O));
        assert_eq!(game.to_move(), Some(Symbol::X));
        assert!(!game.is_computer_turn());
    }

    #[test]
    fn test_restart_plays_first_computer_move() {
        let mut game = Match::with_seed(
            PlayerSpec::computer(Symbol::X, Strategy::Random),
            PlayerSpec::human(Symbol::O),
            11,
        )
        .unwrap();
        assert_eq!(game.board_snapshot(), Board::new());

        game.restart().unwrap();
        let marks = game
            .board_snapshot()
            .cells()
            .iter()
            .filter(|cell| **cell == Cell::Mark(Symbol::X))
            .count();
        assert_eq!(marks, 1);
        assert_eq!(game.to_move(), Some(Symbol::O));
        assert!(game.state_snapshot().running);
    }

    #[test]
    fn test_set_players_restarts() {
        let mut game = humans();
        game.apply_move(0);
        game.apply_move(1);

        game.set_players(PlayerSpec::human(Symbol::X), PlayerSpec::computer(Symbol::O, Strategy::Random))
            .unwrap();
        assert_eq!(game.board_snapshot(), Board::new());
        assert_eq!(game.player(Symbol::O).control, Control::Computer(Strategy::Random));

        let bad = game.set_players(PlayerSpec::human(Symbol::O), PlayerSpec::human(Symbol::O));
        assert_eq!(bad, Err(Error::InvalidPlayers));
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Winner(Symbol::X).to_string(), "X won!");
        assert_eq!(Outcome::Winner(Symbol::O).to_string(), "O won!");
        assert_eq!(Outcome::Draw.to_string(), "It's a draw!");
    }
}
