use std::io;

use crate::Position;
use crate::game::GameState;
use crate::term::Canvas;

pub const SNAKE_CHAR: char = '█';
pub const COLLECTIBLE_CHAR: char = '◆';
pub const FRAME_CHAR: char = '#';
pub const FRAME_SIDE_CHAR: char = '|';

/// Screen cell of board cell (0, 0) when the board is centered in `viewport`.
pub fn board_origin(viewport: (u16, u16), width: i32, height: i32) -> Position {
    let (view_w, view_h) = (viewport.0 as i32, viewport.1 as i32);
    Position::new(view_h / 2 - height / 2, view_w / 2 - width / 2)
}

/// Column at which `text` starts so that it is centered on `center_col`.
pub fn centered_col(center_col: i32, text: &str) -> i32 {
    center_col - text.chars().count() as i32 / 2
}

/// Repaints the whole play field and presents it.
pub fn draw_board<C: Canvas + ?Sized>(state: &GameState, canvas: &mut C) -> io::Result<()> {
    let config = state.config();
    canvas.clear();

    let origin = board_origin(canvas.viewport(), config.width, config.height);
    draw_frame(canvas, origin, config.width, config.height);
    canvas.draw_text(origin.row - 2, origin.col - 1, &format!("Score: {}", state.score()));

    for part in state.snake().segments() {
        let at = part.offset(origin);
        canvas.draw_cell(at.row, at.col, SNAKE_CHAR);
    }
    let at = state.collectible().offset(origin);
    canvas.draw_cell(at.row, at.col, COLLECTIBLE_CHAR);

    canvas.present()
}

/// Writes the final summary over whatever is on screen.
pub fn draw_game_over<C: Canvas + ?Sized>(state: &GameState, canvas: &mut C) -> io::Result<()> {
    let (view_w, view_h) = canvas.viewport();
    let (center_col, center_row) = (view_w as i32 / 2, view_h as i32 / 2);

    let lines = ["Game Over!!".to_string(), format!("Your score is {}", state.score())];
    for (i, line) in lines.iter().enumerate() {
        canvas.draw_text(center_row + i as i32, centered_col(center_col, line), line);
    }

    canvas.present()
}

// The frame sits one cell outside the play field on every side.
fn draw_frame<C: Canvas + ?Sized>(canvas: &mut C, origin: Position, width: i32, height: i32) {
    let (top, left) = (origin.row - 1, origin.col - 1);
    let (bottom, right) = (origin.row + height, origin.col + width);

    for col in left..=right {
        canvas.draw_cell(top, col, FRAME_CHAR);
        canvas.draw_cell(bottom, col, FRAME_CHAR);
    }
    for row in top + 1..bottom {
        canvas.draw_cell(row, left, FRAME_SIDE_CHAR);
        canvas.draw_cell(row, right, FRAME_SIDE_CHAR);
    }
}
