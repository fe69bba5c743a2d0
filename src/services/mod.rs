//! Game services
//!
//! Input parsing, the random opponent and the session loop that ties
//! the engine to the console.

pub mod game;
pub mod input;
pub mod opponent;
