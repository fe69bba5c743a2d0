//! Round state machine
//!
//! Owns the board for the current round and tracks whose turn it is.
//! Every accepted move is followed by a win/draw check that may finish the round.

use tracing::debug;

use crate::models::board::Board;
use crate::models::constants::{GameResult, Mark};
use crate::models::errors::{GameError, Result};
use crate::models::position::Position;

/// Core game engine for a single round
pub struct GameEngine {
    board: Board,
    state: GameState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    AwaitingPlayerMove,
    AwaitingOpponentMove,
    Finished(GameResult),
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Creates an engine with an empty board, player to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            state: GameState::AwaitingPlayerMove,
        }
    }

    /// Returns an immutable reference to the board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current round state
    pub fn state(&self) -> GameState {
        self.state
    }

    /// The outcome once the round is finished
    pub fn result(&self) -> Option<GameResult> {
        match self.state {
            GameState::Finished(result) => Some(result),
            _ => None,
        }
    }

    /// Clears the board and hands the first move back to the player
    pub fn reset(&mut self) {
        self.board.clear();
        self.state = GameState::AwaitingPlayerMove;
    }

    /// Applies the human's move
    ///
    /// # Errors
    ///
    /// * `GameError::Occupied` when the cell already holds a mark; the board is unchanged
    /// * `GameError::WrongTurn` / `GameError::RoundOver` when it is not the player's turn
    pub fn apply_player_move(&mut self, pos: Position) -> Result<GameState> {
        self.apply(Mark::Player, pos)
    }

    /// Applies the opponent's move, with the same checks as `apply_player_move`
    pub fn apply_opponent_move(&mut self, pos: Position) -> Result<GameState> {
        self.apply(Mark::Opponent, pos)
    }

    fn apply(&mut self, mark: Mark, pos: Position) -> Result<GameState> {
        match (self.state, mark) {
            (GameState::Finished(_), _) => return Err(GameError::RoundOver),
            (GameState::AwaitingPlayerMove, Mark::Player)
            | (GameState::AwaitingOpponentMove, Mark::Opponent) => {}
            _ => return Err(GameError::WrongTurn),
        }

        self.board.place(pos, mark)?;
        debug!(?mark, %pos, "move applied");

        self.state = match check_outcome(&self.board, mark) {
            Some(result) => GameState::Finished(result),
            None => match mark {
                Mark::Player => GameState::AwaitingOpponentMove,
                Mark::Opponent => GameState::AwaitingPlayerMove,
            },
        };
        Ok(self.state)
    }
}

/// Resolves the board right after `last` moved
///
/// # Returns
///
/// * `Some(win)` if `last` completed a line
/// * `Some(GameResult::Draw)` if the board is full without a line
/// * `None` if play continues
pub fn check_outcome(board: &Board, last: Mark) -> Option<GameResult> {
    if board.has_won(last) {
        Some(GameResult::win_for(last))
    } else if board.is_full() {
        Some(GameResult::Draw)
    } else {
        None
    }
}
