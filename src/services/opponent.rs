use rand::Rng;

use crate::models::board::Board;
use crate::models::constants::BOARD_SIZE;
use crate::models::position::Position;

/// Pick a uniformly random empty cell.
///
/// Draws a column and a row independently and redraws until the cell is
/// empty. Returns `None` only when the board is full.
pub fn choose_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    if board.is_full() {
        return None;
    }

    let side = BOARD_SIZE as i64;
    loop {
        let drawn = Position::new(rng.gen_range(0..side), rng.gen_range(0..side));
        if let Some(pos) = drawn.filter(|&p| !board.is_occupied(p)) {
            return Some(pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::constants::Mark;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn full_board_has_no_move() {
        let mut board = Board::new();
        for (i, pos) in Position::all().enumerate() {
            let mark = if i % 2 == 0 { Mark::Player } else { Mark::Opponent };
            board.place(pos, mark).unwrap();
        }
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(choose_move(&board, &mut rng), None);
    }

    #[test]
    fn single_free_cell_is_always_chosen() {
        let mut board = Board::new();
        let free = Position::new(2, 1).unwrap();
        for pos in Position::all().filter(|&p| p != free) {
            board.place(pos, Mark::Player).unwrap();
        }
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(choose_move(&board, &mut rng), Some(free));
        }
    }

    #[test]
    fn same_seed_same_choice() {
        let board = Board::new();
        let a = choose_move(&board, &mut StdRng::seed_from_u64(42));
        let b = choose_move(&board, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn every_empty_cell_is_reachable() {
        let board = Board::new();
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(choose_move(&board, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), 9);
    }
}
