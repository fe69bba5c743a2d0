//! Console Tic-Tac-Toe
//!
//! A 3x3 tic-tac-toe game played in the terminal against an opponent
//! that picks uniformly random empty cells.
//!
//! # Modules
//!
//! - [`game_engine`] - Round state machine and win/draw resolution
//! - [`models`] - Board, marks, positions and errors
//! - [`services`] - Move parsing, the random opponent and the session loop
//! - [`io`] - Input/output abstractions for testing
//! - [`ui`] - Board rendering and outcome messages
//! - [`cli`] - Command-line arguments
//!
//! # Example
//!
//! ```rust,no_run
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use tictactoe::io::TerminalIO;
//! use tictactoe::Game;
//!
//! let mut game = Game::new(StdRng::seed_from_u64(42), TerminalIO, TerminalIO);
//! let scoreboard = game.run().unwrap();
//! println!("{} rounds played", scoreboard.rounds());
//! ```

pub mod cli;
pub mod game_engine;
pub mod io;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use game_engine::{GameEngine, GameState};
pub use models::board::Board;
pub use models::constants::{GameResult, Mark};
pub use models::errors::GameError;
pub use models::position::Position;
pub use services::game::{Game, Scoreboard};
