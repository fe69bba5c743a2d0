use derive_more::Display;

use super::position::Position;

/// Game-specific error types.
///
/// The first four variants are user-input errors; their `Display` text is
/// the diagnostic shown before re-prompting.
#[derive(Debug, Display)]
pub enum GameError {
    /// Move input could not be read as two integers
    #[display("Input is invalid. Please try again and write in the format of (x, y).")]
    MalformedMove(String),
    /// Move coordinates outside 0-2
    #[display("Input is out of board range. Please try again and input coordinates in the range of 0-2.")]
    OutOfRange(String),
    /// Target cell already holds a mark
    #[display("Space occupied. Please pick a different space.")]
    Occupied(Position),
    /// Replay answer was not y or n
    #[display("Input is invalid. Please try again.")]
    InvalidReplay(String),
    /// A move was submitted for the side not on turn
    #[display("Move submitted out of turn")]
    WrongTurn,
    /// A move was submitted after the round was decided
    #[display("Round is already over")]
    RoundOver,
    /// The opponent was asked to move on a full board
    #[display("No legal move left for the opponent")]
    NoLegalMove,
    /// I/O error occurred
    #[display("I/O error: {_0}")]
    Io(std::io::Error),
}

/// Type alias for Results using GameError
pub type Result<T> = std::result::Result<T, GameError>;

impl GameError {
    /// True for errors caused by what the user typed; the loop re-prompts on these.
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            GameError::MalformedMove(_)
                | GameError::OutOfRange(_)
                | GameError::Occupied(_)
                | GameError::InvalidReplay(_)
        )
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::Io(err)
    }
}
