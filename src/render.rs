//! Frame composition
//!
//! A frame is drawn into any [`Canvas`]; the terminal shell uses a
//! [`FrameBuffer`] and flushes it in a single write.

use std::fmt;

use crate::consts::*;
use crate::sim::GameState;

/// A surface that can draw one character at an absolute `(row, col)`
pub trait Canvas {
    fn put(&mut self, row: i32, col: i32, ch: char);
}

/// In-memory character grid covering the arena and its borders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    w: usize,
    h: usize,
    cells: Vec<char>,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    pub const WIDTH: usize = MAX_X as usize + 1;
    pub const HEIGHT: usize = MAX_Y as usize + 1;

    pub fn new() -> Self {
        Self {
            w: Self::WIDTH,
            h: Self::HEIGHT,
            cells: vec![' '; Self::WIDTH * Self::HEIGHT],
        }
    }

    /// Blank every cell
    pub fn clear(&mut self) {
        self.cells.fill(' ');
    }

    /// Character at `(row, col)`, `None` outside the buffer
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row < self.h && col < self.w {
            Some(self.cells[row * self.w + col])
        } else {
            None
        }
    }

    /// Rows as strings, top to bottom
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.chunks(self.w).map(|row| row.iter().collect())
    }
}

impl Canvas for FrameBuffer {
    fn put(&mut self, row: i32, col: i32, ch: char) {
        if row >= 0 && col >= 0 && (row as usize) < self.h && (col as usize) < self.w {
            self.cells[row as usize * self.w + col as usize] = ch;
        }
    }
}

impl fmt::Display for FrameBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Ceiling and side walls
fn draw_board(canvas: &mut impl Canvas) {
    canvas.put(0, 0, '.');
    for col in 1..MAX_X {
        canvas.put(0, col, '-');
    }
    canvas.put(0, MAX_X, '.');

    for row in 1..=MAX_Y {
        canvas.put(row, 0, '|');
        canvas.put(row, MAX_X, '|');
    }
}

/// Draw a full frame: borders, intact blocks, ball, paddle (in that order)
pub fn draw_frame(state: &GameState, canvas: &mut impl Canvas) {
    draw_board(canvas);

    for (row, col, ch) in state.blocks.visible_cells() {
        canvas.put(row, col, ch);
    }

    canvas.put(state.ball.pos.y, state.ball.pos.x, BALL_GLYPH);

    for dx in 0..PAD_W {
        canvas.put(PAD_Y, state.paddle.x + dx, PADDLE_GLYPH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::BlockId;

    fn render(state: &GameState) -> FrameBuffer {
        let mut fb = FrameBuffer::new();
        draw_frame(state, &mut fb);
        fb
    }

    #[test]
    fn test_initial_frame() {
        let fb = render(&GameState::new());
        let lines: Vec<String> = fb.lines().collect();
        assert_eq!(lines.len(), FrameBuffer::HEIGHT);

        // Blocks drawn over the ceiling
        assert!(lines[0].starts_with(".---------------..---"));
        assert!(lines[1].starts_with("|               ||"));
        assert!(lines[3].starts_with("'---------------''"));

        // Ball just below the blocks on the left wall
        assert_eq!(fb.get(8, 0), Some('o'));
        // Paddle
        assert_eq!(&lines[PAD_Y as usize][20..23], "---");
        assert_eq!(fb.get(PAD_Y as usize, 23), Some(' '));
        // Right wall
        assert_eq!(fb.get(12, MAX_X as usize), Some('|'));
    }

    #[test]
    fn test_broken_block_reveals_border() {
        let mut state = GameState::new();
        state.blocks.break_block(BlockId { row: 0, col: 0 });
        let fb = render(&state);

        assert_eq!(fb.get(0, 0), Some('.'));
        assert_eq!(fb.get(0, 5), Some('-'));
        assert_eq!(fb.get(1, 0), Some('|'));
        assert_eq!(fb.get(1, 5), Some(' '));
        assert_eq!(fb.get(2, 16), Some(' '));
        // Next block still there
        assert_eq!(fb.get(1, 17), Some('|'));
    }

    #[test]
    fn test_out_of_range_put_is_ignored() {
        let mut fb = FrameBuffer::new();
        fb.put(-1, 0, 'x');
        fb.put(0, FrameBuffer::WIDTH as i32, 'x');
        fb.put(FrameBuffer::HEIGHT as i32, 0, 'x');
        assert!(fb.lines().all(|l| !l.contains('x')));
    }

    #[test]
    fn test_get_out_of_range() {
        let fb = FrameBuffer::new();
        assert_eq!(fb.get(0, 0), Some(' '));
        assert_eq!(fb.get(FrameBuffer::HEIGHT, 0), None);
        assert_eq!(fb.get(0, FrameBuffer::WIDTH), None);
    }

    #[test]
    fn test_clear() {
        let mut fb = render(&GameState::new());
        fb.clear();
        assert!(fb.lines().all(|l| l.trim().is_empty()));
    }
}
