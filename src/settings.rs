//! Session parameters
//!
//! Fixed at session start. Missing JSON fields fall back to the defaults in
//! [`crate::consts`].

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::scene::Color;

/// Everything needed to build a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    // === Playfield ===
    pub playfield_width: f32,
    pub playfield_height: f32,

    // === Bricks ===
    pub brick_width: f32,
    pub brick_height: f32,
    /// Gap between neighbouring bricks (both axes)
    pub brick_spacing: f32,
    pub brick_rows: u32,
    /// Lower-left corner of brick 0; rows stack upward from here
    pub brick_origin: Vec2,
    pub brick_color: Color,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Lower-left corner of the paddle at session start
    pub paddle_start: Vec2,
    pub paddle_color: Color,

    // === Ball ===
    pub ball_radius: f32,
    pub ball_start: Vec2,
    /// Initial heading; normalized when the session is built
    pub ball_direction: Vec2,
    pub ball_speed: f32,
    pub ball_speed_step: f32,
    pub ball_max_speed: f32,
    pub ball_color: Color,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            playfield_width: WIN_W,
            playfield_height: WIN_H,

            brick_width: BRICK_W,
            brick_height: BRICK_H,
            brick_spacing: BRICK_SPACING,
            brick_rows: BRICK_ROWS,
            brick_origin: Vec2::new(BRICK_ORIGIN_X, BRICK_ORIGIN_Y),
            brick_color: Color::BRICK,

            paddle_width: PADDLE_W,
            paddle_height: PADDLE_H,
            paddle_start: Vec2::new(PADDLE_X, PADDLE_Y),
            paddle_color: Color::PADDLE,

            ball_radius: BALL_RADIUS,
            ball_start: Vec2::new(BALL_X, BALL_Y),
            ball_direction: Vec2::from_angle(BALL_START_ANGLE),
            ball_speed: BALL_START_SPEED,
            ball_speed_step: BALL_SPEED_STEP,
            ball_max_speed: BALL_MAX_SPEED,
            ball_color: Color::BALL,
        }
    }
}

impl SessionConfig {
    /// Parse a config from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded session config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of bricks per row (saturates at `u32::MAX`)
    pub fn brick_columns(&self) -> u32 {
        (self.playfield_width / (self.brick_width + self.brick_spacing)).floor() as u32
    }

    /// Total bricks in the grid, `None` past `MAX_BRICKS`
    pub fn brick_count(&self) -> Option<u32> {
        self.brick_columns()
            .checked_mul(self.brick_rows)
            .filter(|&count| count <= MAX_BRICKS)
    }

    /// Reject anything that would produce degenerate geometry
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("playfield_width", self.playfield_width)?;
        positive("playfield_height", self.playfield_height)?;
        positive("brick_width", self.brick_width)?;
        positive("brick_height", self.brick_height)?;
        positive("paddle_width", self.paddle_width)?;
        positive("paddle_height", self.paddle_height)?;
        positive("ball_radius", self.ball_radius)?;

        non_negative("brick_spacing", self.brick_spacing)?;
        non_negative("ball_speed", self.ball_speed)?;
        non_negative("ball_speed_step", self.ball_speed_step)?;
        non_negative("ball_max_speed", self.ball_max_speed)?;

        if self.paddle_width > self.playfield_width {
            return Err(ConfigError::PaddleTooWide {
                paddle_width: self.paddle_width,
                playfield_width: self.playfield_width,
            });
        }

        if self.brick_count().is_none() {
            return Err(ConfigError::TooManyBricks {
                columns: self.brick_columns(),
                rows: self.brick_rows,
                max: MAX_BRICKS,
            });
        }

        if self.ball_direction.try_normalize().is_none() {
            return Err(ConfigError::InvalidDirection {
                x: self.ball_direction.x,
                y: self.ball_direction.y,
            });
        }

        let (width, height) = (self.playfield_width, self.playfield_height);

        let ball = self.ball_start;
        inside(
            "ball_start",
            ball,
            ball.x > 0.0 && ball.x < width && ball.y > 0.0 && ball.y < height,
        )?;

        // Must already sit where pointer clamping would keep it
        let paddle = self.paddle_start;
        inside(
            "paddle_start",
            paddle,
            (0.0..=width - self.paddle_width).contains(&paddle.x)
                && (0.0..=height - self.paddle_height).contains(&paddle.y),
        )?;

        let origin = self.brick_origin;
        inside(
            "brick_origin",
            origin,
            (0.0..width).contains(&origin.x) && (0.0..height).contains(&origin.y),
        )?;

        Ok(())
    }
}

fn inside(field: &'static str, point: Vec2, within: bool) -> Result<(), ConfigError> {
    if point.is_finite() && within {
        Ok(())
    } else {
        Err(ConfigError::OutsidePlayfield {
            field,
            x: point.x,
            y: point.y,
        })
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositiveDimension { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NegativeParameter { field, value })
    }
}
