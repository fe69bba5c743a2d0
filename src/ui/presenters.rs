use crate::io::OutputWriter;
use crate::models::board::Board;
use crate::models::constants::{GameResult, BOARD_SIZE, ROUND_SEPARATOR, ROW_SEPARATOR};

pub struct BoardPresenter;

impl BoardPresenter {
    /// Render the board: ` X || O ||   ` rows joined by a line of `=`.
    pub fn render(board: &Board) -> String {
        (0..BOARD_SIZE)
            .map(|y| {
                board
                    .row(y)
                    .iter()
                    .map(|cell| format!(" {} ", cell.map_or(' ', |m| m.symbol())))
                    .collect::<Vec<_>>()
                    .join("||")
            })
            .collect::<Vec<_>>()
            .join(format!("\n{}\n", ROW_SEPARATOR).as_str())
    }

    pub fn show(board: &Board, output: &mut dyn OutputWriter) {
        output.writeln(&Self::render(board));
        output.writeln("");
    }
}

pub struct ResultPresenter;

impl ResultPresenter {
    pub fn show_result(result: GameResult, output: &mut dyn OutputWriter) {
        output.writeln(result.message());
        output.writeln("");
        output.writeln(ROUND_SEPARATOR);
        output.writeln("");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::BufferedOutput;
    use crate::models::constants::Mark;
    use crate::models::position::Position;

    #[test]
    fn empty_board_layout() {
        let expected = "   ||   ||   \n=============\n   ||   ||   \n=============\n   ||   ||   ";
        assert_eq!(BoardPresenter::render(&Board::new()), expected);
    }

    #[test]
    fn marks_land_in_their_columns() {
        let mut board = Board::new();
        board.place(Position::new(0, 0).unwrap(), Mark::Player).unwrap();
        board.place(Position::new(2, 1).unwrap(), Mark::Opponent).unwrap();
        let rendered = BoardPresenter::render(&board);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], " X ||   ||   ");
        assert_eq!(lines[2], "   ||   || O ");
    }

    #[test]
    fn show_result_prints_message_and_separator() {
        let mut output = BufferedOutput::new();
        ResultPresenter::show_result(GameResult::Draw, &mut output);
        assert_eq!(
            output.text(),
            "It's a tie! Nobody wins!\n\n======================\n\n"
        );
    }
}
