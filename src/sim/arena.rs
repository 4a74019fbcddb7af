//! Arena boundary
//!
//! Left, right and top walls bounce the ball. The bottom wall is the
//! baseline: touching it loses the ball.

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::collision::Collidable;
use super::geometry::{Rect, Segment};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arena {
    pub bounds: Rect,
    /// Left, right, top, bottom
    walls: [Segment; 4],
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        let bounds = Rect::new(0.0, 0.0, width, height);
        Self {
            bounds,
            walls: bounds.edges(),
        }
    }

    /// Left, right and top: the walls that bounce
    pub fn bouncing_walls(&self) -> &[Segment] {
        &self.walls[..3]
    }

    /// Bottom wall; touching it loses the ball
    pub fn baseline(&self) -> &Segment {
        &self.walls[3]
    }
}

impl Collidable for Arena {
    /// True means the ball crossed the baseline
    fn collision(&self, ball: &mut Ball) -> bool {
        for wall in self.bouncing_walls() {
            if wall.intersect_circle(&ball.circle).is_some() {
                ball.redirect(wall);
            }
        }

        self.baseline().intersect_circle(&ball.circle).is_some()
    }
}
