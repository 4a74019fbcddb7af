//! The ball

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Circle, Segment};
use crate::scene::{CircleShape, Color};
use crate::settings::SessionConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub circle: Circle,
    /// Unit heading
    pub direction: Vec2,
    /// Distance travelled per tick
    pub speed: f32,
    /// Added to `speed` per destroyed brick
    pub speed_step: f32,
    pub max_speed: f32,
    pub color: Color,
}

impl Ball {
    /// Ball with the default speed step, cap and color
    pub fn new(center: Vec2, radius: f32, direction: Vec2, speed: f32) -> Self {
        Self::from_config(&SessionConfig {
            ball_start: center,
            ball_radius: radius,
            ball_direction: direction,
            ball_speed: speed,
            ..Default::default()
        })
    }

    /// Ball at its session start position
    pub fn from_config(config: &SessionConfig) -> Self {
        Self {
            circle: Circle::new(config.ball_start, config.ball_radius),
            direction: config.ball_direction.normalize_or_zero(),
            speed: config.ball_speed,
            speed_step: config.ball_speed_step,
            max_speed: config.ball_max_speed,
            color: config.ball_color,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.circle.center
    }

    /// Current velocity (heading scaled by speed)
    pub fn velocity(&self) -> Vec2 {
        self.direction * self.speed
    }

    /// Advance one tick along the current heading
    pub fn advance(&mut self) {
        self.circle.center += self.direction * self.speed;
    }

    /// Speed up after a brick hit, never past `max_speed`
    pub fn accelerate(&mut self) {
        if self.speed < self.max_speed {
            self.speed = (self.speed + self.speed_step).min(self.max_speed);
        }
    }

    /// Bounce off an axis-aligned segment
    ///
    /// Vertical segments flip the x heading, anything else flips y. This is
    /// an axis flip, not a reflection about the segment normal.
    pub fn redirect(&mut self, segment: &Segment) {
        if segment.is_vertical() {
            self.direction.x = -self.direction.x;
        } else {
            self.direction.y = -self.direction.y;
        }
    }

    pub fn shape(&self) -> CircleShape {
        CircleShape {
            circle: self.circle,
            color: self.color,
        }
    }
}
