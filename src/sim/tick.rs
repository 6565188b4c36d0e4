//! Simulation tick
//!
//! Advances the game by one tick: the paddle moves every tick, the ball only
//! on every `BALL_DELAY`-th one.

use glam::IVec2;

use super::collision::{YResolution, resolve_x, resolve_y};
use super::state::{GameResult, GameState};
use crate::consts::*;

/// Directional input for a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    None,
}

impl Intent {
    /// Paddle displacement in columns
    pub fn delta(self) -> i32 {
        match self {
            Intent::MoveLeft => -1,
            Intent::MoveRight => 1,
            Intent::None => 0,
        }
    }
}

/// Advance the game state by one tick and return the resulting outcome.
///
/// Once the game is over, further ticks leave the state untouched.
pub fn tick(state: &mut GameState, intent: Intent) -> GameResult {
    if state.result.is_over() {
        return state.result;
    }

    state.time_ticks += 1;
    state.paddle.shift(intent.delta());

    state.delay_count += 1;
    if state.delay_count >= BALL_DELAY {
        state.delay_count = 0;
        if !step_ball(state) {
            state.result = GameResult::Lost;
            log::info!("Ball lost after {} ticks", state.time_ticks);
            return state.result;
        }
    }

    if state.blocks.all_broken() {
        state.result = GameResult::Won;
        log::info!("All blocks cleared after {} ticks", state.time_ticks);
    }
    state.result
}

/// Move the ball one cell. Returns false if the ball was lost.
///
/// Both axes are resolved against the same prospective cell before either
/// moves. An axis that bounced stays put this tick.
fn step_ball(state: &mut GameState) -> bool {
    state.physics_ticks += 1;
    let ball = state.ball;
    let next = ball.prospective();

    let dir_x = resolve_x(ball.dir.x, next.y, next.x, &mut state.blocks);
    let dir_y = match resolve_y(ball.dir.y, next.y, next.x, &state.paddle, &mut state.blocks) {
        YResolution::Continue(dir_y) => dir_y,
        YResolution::BallLost => return false,
    };

    let moved = IVec2::new(
        if dir_x == ball.dir.x { next.x } else { ball.pos.x },
        if dir_y == ball.dir.y { next.y } else { ball.pos.y },
    );
    state.ball.pos = moved;
    state.ball.dir = IVec2::new(dir_x, dir_y);

    log::trace!(
        "Physics tick {}: ball {:?} dir {:?}",
        state.physics_ticks,
        state.ball.pos,
        state.ball.dir
    );
    true
}
