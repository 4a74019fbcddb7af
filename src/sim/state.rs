//! Session state
//!
//! One `GameState` owns everything in play for a single session: ball,
//! paddle, arena and the surviving bricks.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::ball::Ball;
use super::brick::{Brick, layout_grid};
use super::collision::Collidable;
use super::paddle::Paddle;
use crate::error::ConfigError;
use crate::scene::Scene;
use crate::settings::SessionConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball in motion
    Playing,
    /// Ball crossed the baseline; session is over
    Ended,
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Parameters the session was built from (used by `reset`)
    pub config: SessionConfig,
    pub phase: GamePhase,
    /// Ticks executed while playing
    pub time_ticks: u64,
    /// Bricks broken this session
    pub bricks_destroyed: u32,
    pub ball: Ball,
    pub paddle: Paddle,
    pub arena: Arena,
    /// Surviving bricks in layout order
    pub bricks: Vec<Brick>,
}

impl GameState {
    /// Build a fresh session, rejecting configs that would give degenerate geometry
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let state = Self {
            phase: GamePhase::Playing,
            time_ticks: 0,
            bricks_destroyed: 0,
            ball: Ball::from_config(&config),
            paddle: spawn_paddle(&config),
            arena: Arena::new(config.playfield_width, config.playfield_height),
            bricks: spawn_bricks(&config),
            config,
        };

        log::info!(
            "Session started: {}x{} playfield, {} bricks",
            state.config.playfield_width,
            state.config.playfield_height,
            state.bricks.len()
        );

        Ok(state)
    }

    /// Start over with the same parameters
    pub fn reset(&mut self) {
        self.phase = GamePhase::Playing;
        self.time_ticks = 0;
        self.bricks_destroyed = 0;
        self.ball = Ball::from_config(&self.config);
        self.paddle = spawn_paddle(&self.config);
        self.bricks = spawn_bricks(&self.config);
        log::info!("Session reset ({} bricks)", self.bricks.len());
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Ended
    }

    /// Test every brick against the ball, dropping the ones that were hit
    ///
    /// Survivors keep their relative order. The ball speeds up once per
    /// broken brick. Returns how many bricks broke.
    pub fn resolve_bricks(&mut self) -> usize {
        let ball = &mut self.ball;
        let before = self.bricks.len();

        self.bricks.retain(|brick| {
            let hit = brick.collision(ball);
            if hit {
                ball.accelerate();
                log::debug!("Brick {} destroyed, ball speed {:.3}", brick.id, ball.speed);
            }
            !hit
        });

        let destroyed = before - self.bricks.len();
        self.bricks_destroyed += destroyed as u32;
        destroyed
    }

    /// Snapshot for the renderer
    pub fn scene(&self) -> Scene {
        Scene {
            phase: self.phase,
            paddle: self.paddle.shape(),
            ball: self.ball.shape(),
            bricks: self.bricks.iter().map(Brick::shape).collect(),
        }
    }
}

fn spawn_paddle(config: &SessionConfig) -> Paddle {
    let mut paddle = Paddle::new(
        config.paddle_start,
        Vec2::new(config.paddle_width, config.paddle_height),
        config.playfield_width,
    );
    paddle.color = config.paddle_color;
    paddle
}

fn spawn_bricks(config: &SessionConfig) -> Vec<Brick> {
    layout_grid(
        config.brick_origin,
        Vec2::new(config.brick_width, config.brick_height),
        config.brick_spacing,
        config.brick_columns(),
        config.brick_rows,
        config.brick_color,
    )
}
