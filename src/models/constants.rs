pub const BOARD_SIZE: usize = 3;

/// Row separator printed between board rows.
pub const ROW_SEPARATOR: &str = "=============";
/// Separator printed after the outcome message of a round.
pub const ROUND_SEPARATOR: &str = "======================";

pub const MOVE_PROMPT: &str = "Enter Coordinates from 0 to 2 (x, y):";
pub const REPLAY_PROMPT: &str = "Play again? (y/n):";
pub const FAREWELL: &str = "Thank you for playing!";

/// The symbol occupying a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Player,
    Opponent,
}

impl Mark {
    pub fn symbol(&self) -> char {
        match self {
            Mark::Player => 'X',
            Mark::Opponent => 'O',
        }
    }

    pub const ALL: [Mark; 2] = [Mark::Player, Mark::Opponent];
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    PlayerWin,
    OpponentWin,
    Draw,
}

impl GameResult {
    /// The win result for the given mark.
    pub fn win_for(mark: Mark) -> Self {
        match mark {
            Mark::Player => GameResult::PlayerWin,
            Mark::Opponent => GameResult::OpponentWin,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            GameResult::PlayerWin => "You got three in a row, you win!",
            GameResult::OpponentWin => "Your opponent got three in a row, you lose!",
            GameResult::Draw => "It's a tie! Nobody wins!",
        }
    }
}
