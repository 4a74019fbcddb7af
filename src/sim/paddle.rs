//! The player's paddle

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::collision::{Collidable, bounce_off_rect};
use super::geometry::Rect;
use crate::scene::{Color, RectShape};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    pub color: Color,
    /// Right-most x the paddle's left edge may reach
    max_x: f32,
}

impl Paddle {
    /// Place the paddle with its lower-left corner at `origin`
    pub fn new(origin: Vec2, size: Vec2, playfield_width: f32) -> Self {
        Self {
            rect: Rect::from_origin_size(origin, size),
            color: Color::PADDLE,
            max_x: (playfield_width - size.x).max(0.0),
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.rect.width()
    }

    /// Follow the pointer horizontally
    ///
    /// Holds position while the pointer is outside the playfield. The left
    /// edge is clamped so the whole paddle stays on screen; height and y are
    /// never touched.
    pub fn update_position(&mut self, pointer_x: f32, pointer_inside: bool) {
        if !pointer_inside || !pointer_x.is_finite() {
            return;
        }

        let x = pointer_x.clamp(0.0, self.max_x);
        let width = self.width();
        self.rect.min.x = x;
        self.rect.max.x = x + width;
    }

    pub fn shape(&self) -> RectShape {
        RectShape {
            rect: self.rect,
            color: self.color,
        }
    }
}

impl Collidable for Paddle {
    fn collision(&self, ball: &mut Ball) -> bool {
        bounce_off_rect(&self.rect, ball)
    }
}
