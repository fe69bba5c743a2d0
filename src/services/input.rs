//! Parsing of console answers: move coordinates and the replay choice.

use crate::models::errors::{GameError, Result};
use crate::models::position::Position;

/// Parse a move typed as `x<delim>y`, e.g. `1,2`, `1 2` or `(1, 2)`.
///
/// Only the syntax and the 0-2 range are checked here; occupancy is the
/// board's concern.
pub fn parse_move(input: &str) -> Result<Position> {
    let malformed = || GameError::MalformedMove(input.trim().to_string());

    let mut text = input.trim();
    if let Some(inner) = text.strip_prefix('(').and_then(|t| t.strip_suffix(')')) {
        text = inner.trim();
    }

    let (first, rest) = split_number(text).ok_or_else(malformed)?;

    let delim_len = rest
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(malformed)?;
    if delim_len == 0 {
        return Err(malformed());
    }
    // A trailing '-' on a longer delimiter is the sign of y: "1, -2".
    let delim = &rest[..delim_len];
    let rest = if delim.len() > 1 && delim.ends_with('-') {
        &rest[delim_len - 1..]
    } else {
        &rest[delim_len..]
    };

    let (second, tail) = split_number(rest).ok_or_else(malformed)?;
    if !tail.trim().is_empty() {
        return Err(malformed());
    }

    // Digits that overflow i64 cannot be read as a number at all.
    let x: i64 = first.parse().map_err(|_| malformed())?;
    let y: i64 = second.parse().map_err(|_| malformed())?;
    let out_of_range = || GameError::OutOfRange(format!("{}, {}", x, y));
    Position::new(x, y).ok_or_else(out_of_range)
}

/// Parse the answer to the replay prompt.
pub fn parse_replay(input: &str) -> Result<bool> {
    let mut chars = input.trim().chars();
    match (chars.next(), chars.next()) {
        (Some('y'), None) => Ok(true),
        (Some('n'), None) => Ok(false),
        _ => Err(GameError::InvalidReplay(input.trim().to_string())),
    }
}

/// Split a leading `-?[0-9]+` off `text`.
fn split_number(text: &str) -> Option<(&str, &str)> {
    let sign = usize::from(text.starts_with('-'));
    let digits = text[sign..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len() - sign);
    if digits == 0 {
        return None;
    }
    Some(text.split_at(sign + digits))
}
