//! Game state and core simulation types

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::grid::BlockGrid;
use crate::consts::*;

/// Outcome of a game. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Playing,
    Won,
    Lost,
}

impl GameResult {
    pub fn is_over(self) -> bool {
        self != GameResult::Playing
    }
}

/// The ball. `x` is the column, `y` the row; each direction component is -1 or +1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: IVec2,
    pub dir: IVec2,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            // Left wall, just below the blocks, heading down-right
            pos: IVec2::new(0, BLOCK_ROWS as i32 * BLOCK_H),
            dir: IVec2::ONE,
        }
    }
}

impl Ball {
    /// Cell the ball would enter this physics tick
    pub fn prospective(&self) -> IVec2 {
        self.pos + self.dir
    }
}

/// The player's paddle, always on row `PAD_Y`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paddle {
    /// Leftmost column
    pub x: i32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self { x: PAD_START_X }
    }
}

impl Paddle {
    pub const MIN_X: i32 = 1;
    pub const MAX_X: i32 = MAX_X - PAD_W;

    /// Move by `delta` columns, staying fully inside the walls
    pub fn shift(&mut self, delta: i32) {
        self.x = (self.x + delta).clamp(Self::MIN_X, Self::MAX_X);
    }

    /// Whether column `x` on the paddle row deflects the ball.
    ///
    /// The range is one cell wider than the drawn paddle on the right.
    pub fn covers(&self, x: i32) -> bool {
        (self.x..=self.x + PAD_W).contains(&x)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub blocks: BlockGrid,
    pub ball: Ball,
    pub paddle: Paddle,
    pub result: GameResult,
    /// Ticks since the last physics tick
    pub delay_count: u32,
    /// Tick counter
    pub time_ticks: u64,
    /// Physics tick counter
    pub physics_ticks: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh game: all blocks intact, ball and paddle at their start positions
    pub fn new() -> Self {
        Self {
            blocks: BlockGrid::new(),
            ball: Ball::default(),
            paddle: Paddle::default(),
            result: GameResult::Playing,
            delay_count: 0,
            time_ticks: 0,
            physics_ticks: 0,
        }
    }
}
