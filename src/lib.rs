//! Term Breakout - A Breakout game on a terminal cell grid
//!
//! Core modules:
//! - `sim`: Deterministic simulation (block grid, collisions, game state)
//! - `render`: Frame composition into a character grid
//! - `game`: Real-time driver (tick pacing, input polling, presentation)
//! - `terminal`: crossterm-backed shell

pub mod game;
pub mod render;
pub mod sim;
pub mod terminal;

pub use game::{Command, Exit, Shell, announce, run};
pub use render::{Canvas, FrameBuffer, draw_frame};
pub use sim::{GameResult, GameState, Intent, tick};

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Real-time duration of one tick (~33 Hz)
    pub const TICK: Duration = Duration::from_millis(30);
    /// Ticks per physics tick - the ball moves once every `BALL_DELAY` ticks
    pub const BALL_DELAY: u32 = 4;

    /// Arena dimensions (right wall column and bottom row)
    pub const MAX_X: i32 = 67;
    pub const MAX_Y: i32 = 24;
    /// Paddle row, one above the floor
    pub const PAD_Y: i32 = 23;
    /// Paddle width in cells
    pub const PAD_W: i32 = 3;
    pub const PAD_START_X: i32 = 20;

    /// Block dimensions and layout
    pub const BLOCK_W: i32 = 17;
    pub const BLOCK_H: i32 = 4;
    pub const BLOCK_ROWS: usize = 2;
    pub const BLOCK_COLS: usize = 4;

    /// Glyphs for the moving pieces
    pub const BALL_GLYPH: char = 'o';
    pub const PADDLE_GLYPH: char = '-';
}
