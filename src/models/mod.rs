//! Domain models
//!
//! Board, marks, positions and the error type. Models are plain data
//! with the rules that only need the board itself (placement, win lines).

pub mod board;
pub mod constants;
pub mod errors;
pub mod position;
