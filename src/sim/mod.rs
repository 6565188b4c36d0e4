//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One grid cell of ball movement per physics tick
//! - No wall-clock time, no randomness
//! - No rendering or terminal dependencies

pub mod collision;
pub mod grid;
pub mod state;
pub mod tick;

pub use collision::{YResolution, resolve_x, resolve_y};
pub use grid::{BlockGrid, BlockId, Glyph};
pub use state::{Ball, GameResult, GameState, Paddle};
pub use tick::{Intent, tick};
