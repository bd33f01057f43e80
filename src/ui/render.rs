use crate::game::Board;

/// Flatten the board into one printable string per grid row.
pub fn board_lines(board: &Board) -> Vec<String> {
    board
        .cells()
        .chunks(board.bounds.width)
        .map(|row| row.iter().map(|cell| cell.glyph()).collect())
        .collect()
}

/// Whole-board text form: every row newline-terminated, the last included.
pub fn board_text(board: &Board) -> String {
    board_lines(board).into_iter().map(|line| line + "\n").collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Board, Dimension, Direction, Game};

    #[test]
    fn output_is_height_lines_of_width_glyphs() {
        for bounds in [Dimension::new(5, 4), Dimension::new(3, 3), Dimension::new(31, 9)] {
            let lines = board_lines(&Board::new(bounds));
            assert_eq!(lines.len(), bounds.height);
            for line in &lines {
                assert_eq!(line.chars().count(), bounds.width);
            }
        }
    }

    #[test]
    fn five_by_four_board_renders_the_expected_frame() {
        let board = Board::new(Dimension::new(5, 4));
        assert_eq!(board_lines(&board), vec!["#####", "#   #", "#   #", "#####"]);
    }

    #[test]
    fn text_form_breaks_after_every_row_including_the_last() {
        let board = Board::new(Dimension::new(5, 4));
        let text = board_text(&board);
        assert_eq!(text, "#####\n#   #\n#   #\n#####\n");
        assert_eq!(text.matches('\n').count(), 4);
    }

    #[test]
    fn walked_board_renders_the_entity_where_it_stands() {
        let mut game = Game::new(Dimension::new(5, 4)).unwrap();
        assert_eq!(board_lines(&game.board), vec!["#####", "#   #", "# A #", "#####"]);

        game.step(Direction::Right).unwrap();
        assert_eq!(board_lines(&game.board), vec!["#####", "#   #", "#  >#", "#####"]);

        game.step(Direction::Up).unwrap();
        assert_eq!(board_lines(&game.board), vec!["#####", "#  A#", "#   #", "#####"]);
    }
}
