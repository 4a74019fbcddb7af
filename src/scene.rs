//! Renderable scene produced once per tick
//!
//! The simulation does not draw anything. A renderer takes a [`Scene`] and
//! pushes the shapes it lists, in order: bricks, paddle, ball.

use serde::{Deserialize, Serialize};

use crate::sim::{Circle, GamePhase, Rect};

/// Linear RGBA color, components in 0-1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BRICK: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const PADDLE: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const BALL: Color = Color::rgb(0.5, 1.0, 0.5);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

/// Filled axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectShape {
    pub rect: Rect,
    pub color: Color,
}

/// Filled circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleShape {
    pub circle: Circle,
    pub color: Color,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub phase: GamePhase,
    pub paddle: RectShape,
    pub ball: CircleShape,
    /// Surviving bricks in layout order
    pub bricks: Vec<RectShape>,
}

impl Scene {
    /// Total shape count (handy for sizing vertex buffers)
    pub fn shape_count(&self) -> usize {
        self.bricks.len() + 2
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
