//! Collision detection and response on the cell grid
//!
//! Each axis is resolved on its own against the single cell the ball is about
//! to enter. A diagonal hit on a block corner region therefore shows up as up
//! to two separate axis events, each of which may break one block.

use super::grid::{BlockGrid, Glyph};
use super::state::Paddle;
use crate::consts::*;

/// Result of resolving the vertical axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YResolution {
    /// Ball stays in play with this vertical direction
    Continue(i32),
    /// Ball passed the floor without touching the paddle
    BallLost,
}

/// Break the block under `(row, col)` if it is intact and its glyph matches.
/// Returns true on a hit.
fn strike(grid: &mut BlockGrid, row: i32, col: i32, hit: fn(Glyph) -> bool) -> bool {
    let Some(id) = grid.owner_of(row, col) else {
        return false;
    };
    match grid.shape_at(row, col) {
        Some(glyph) if hit(glyph) => {
            grid.break_block(id);
            log::debug!("Block ({}, {}) broken at ({}, {})", id.row, id.col, row, col);
            true
        }
        _ => false,
    }
}

/// New horizontal direction for a ball entering `(next_y, next_x)`.
///
/// Side walls flip the direction. So does the left or right side of an intact
/// block, which is broken in the process.
pub fn resolve_x(dir_x: i32, next_y: i32, next_x: i32, grid: &mut BlockGrid) -> i32 {
    if next_x >= MAX_X || next_x <= 0 {
        return -dir_x;
    }
    if strike(grid, next_y, next_x, Glyph::is_vertical_edge) {
        return -dir_x;
    }
    dir_x
}

/// New vertical direction for a ball entering `(next_y, next_x)`.
///
/// The ceiling and the paddle flip the direction regardless of its sign. The
/// top or bottom side of an intact block flips it and breaks the block.
/// Dropping below `MAX_Y` loses the ball.
pub fn resolve_y(
    dir_y: i32,
    next_y: i32,
    next_x: i32,
    paddle: &Paddle,
    grid: &mut BlockGrid,
) -> YResolution {
    if next_y <= 0 || (next_y == PAD_Y && paddle.covers(next_x)) {
        if next_y == PAD_Y {
            log::debug!("Paddle save at column {}", next_x);
        }
        return YResolution::Continue(-dir_y);
    }
    if strike(grid, next_y, next_x, Glyph::is_horizontal_edge) {
        return YResolution::Continue(-dir_y);
    }
    if next_y > MAX_Y {
        return YResolution::BallLost;
    }
    YResolution::Continue(dir_y)
}
