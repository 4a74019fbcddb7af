//! Breakout - paddle, ball and a wall of bricks
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, collisions, frame update)
//! - `scene`: Renderable scene handed to whatever draws the game
//! - `settings`: Session parameters
//! - `error`: Configuration errors

pub mod error;
pub mod scene;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use scene::{Color, Scene};
pub use settings::SessionConfig;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const WIN_W: f32 = 1200.0;
    pub const WIN_H: f32 = 800.0;

    /// Brick grid
    pub const BRICK_W: f32 = 60.0;
    pub const BRICK_H: f32 = 20.0;
    pub const BRICK_SPACING: f32 = 10.0;
    pub const BRICK_ROWS: u32 = 7;
    /// Lower-left corner of the first brick
    pub const BRICK_ORIGIN_X: f32 = 5.0;
    pub const BRICK_ORIGIN_Y: f32 = WIN_H - 210.0 - BRICK_SPACING;
    /// Largest brick grid a session accepts
    pub const MAX_BRICKS: u32 = 10_000;

    /// Paddle defaults
    pub const PADDLE_W: f32 = 60.0;
    pub const PADDLE_H: f32 = 10.0;
    pub const PADDLE_X: f32 = WIN_W / 2.0 - PADDLE_W / 2.0;
    pub const PADDLE_Y: f32 = 100.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_X: f32 = WIN_W / 2.0;
    pub const BALL_Y: f32 = 400.0;
    /// Distance travelled per tick at session start
    pub const BALL_START_SPEED: f32 = 0.2;
    /// Launch heading (radians, down and to the left)
    pub const BALL_START_ANGLE: f32 = -2.3;
    /// Speed gained per destroyed brick
    pub const BALL_SPEED_STEP: f32 = 0.005;
    /// Maximum ball speed
    pub const BALL_MAX_SPEED: f32 = 1.0;
}
