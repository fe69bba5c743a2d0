//! User interface and presentation
//!
//! Presenters format the board and round outcomes for the player,
//! separating presentation from game logic.

pub mod presenters;
