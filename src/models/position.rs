use std::fmt;

use super::constants::BOARD_SIZE;

/// A cell on the 3x3 board.
/// Values range 0-2. (0,0) is upper-left, (2,2) is lower-right.
/// X is the column and increases left-to-right, Y is the row and increases top-to-bottom.
/// Only on-board positions can be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    x: usize,
    y: usize,
}

impl Position {
    /// Build a position from signed coordinates, returning `None` when
    /// either coordinate is off the board.
    pub fn new(x: i64, y: i64) -> Option<Self> {
        let range = 0..BOARD_SIZE as i64;
        if range.contains(&x) && range.contains(&y) {
            Some(Position {
                x: x as usize,
                y: y as usize,
            })
        } else {
            None
        }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    /// Every position in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Position { x, y }))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_board_range() {
        assert_eq!(Position::new(0, 2), Some(Position { x: 0, y: 2 }));
        assert_eq!(Position::new(2, 2), Some(Position { x: 2, y: 2 }));
    }

    #[test]
    fn new_rejects_off_board() {
        assert_eq!(Position::new(3, 0), None);
        assert_eq!(Position::new(0, -1), None);
        assert_eq!(Position::new(i64::MAX, 1), None);
    }

    #[test]
    fn accessors_return_column_and_row() {
        let pos = Position::new(2, 0).unwrap();
        assert_eq!((pos.x(), pos.y()), (2, 0));
    }

    #[test]
    fn every_constructible_position_is_on_board() {
        for x in -2i64..5 {
            for y in -2i64..5 {
                if let Some(pos) = Position::new(x, y) {
                    assert!(pos.x() < BOARD_SIZE && pos.y() < BOARD_SIZE);
                }
            }
        }
    }

    #[test]
    fn all_covers_nine_cells_row_major() {
        let all: Vec<Position> = Position::all().collect();
        assert_eq!(all.len(), 9);
        assert_eq!(all[0], Position { x: 0, y: 0 });
        assert_eq!(all[1], Position { x: 1, y: 0 });
        assert_eq!(all[8], Position { x: 2, y: 2 });
    }
}
