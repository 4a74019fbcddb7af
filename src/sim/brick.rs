//! Bricks

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::collision::{Collidable, bounce_off_rect};
use super::geometry::Rect;
use crate::scene::{Color, RectShape};

/// A single brick in the wall
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    /// Position in the layout (row-major)
    pub id: u32,
    pub rect: Rect,
    pub color: Color,
}

impl Brick {
    pub fn new(id: u32, rect: Rect, color: Color) -> Self {
        Self { id, rect, color }
    }

    pub fn shape(&self) -> RectShape {
        RectShape {
            rect: self.rect,
            color: self.color,
        }
    }
}

impl Collidable for Brick {
    /// True means the brick is destroyed
    fn collision(&self, ball: &mut Ball) -> bool {
        bounce_off_rect(&self.rect, ball)
    }
}

/// Lay out a `columns` x `rows` grid, row-major, rows stacking upward
///
/// Callers bound the grid size (`SessionConfig::validate` caps it).
pub fn layout_grid(
    origin: Vec2,
    size: Vec2,
    spacing: f32,
    columns: u32,
    rows: u32,
    color: Color,
) -> Vec<Brick> {
    let mut bricks = Vec::with_capacity(columns as usize * rows as usize);
    let pitch = size + Vec2::splat(spacing);

    for row in 0..rows {
        for col in 0..columns {
            let min = origin + Vec2::new(col as f32, row as f32) * pitch;
            let id = bricks.len() as u32;
            bricks.push(Brick::new(id, Rect::from_origin_size(min, size), color));
        }
    }

    bricks
}
