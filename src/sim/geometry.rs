//! Geometry primitives for the playfield
//!
//! Y grows upward: a rectangle's "top" edge sits at `max.y`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A finite line segment from `a` to `b`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
}

impl Segment {
    pub fn new(a: Vec2, b: Vec2) -> Self {
        debug_assert!(a != b, "degenerate segment at {a}");
        Self { a, b }
    }

    /// Exact test on the x extent; only axis-aligned segments are ever built
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.b.x - self.a.x == 0.0
    }

    /// Point on the segment nearest to `p`
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        let line_vec = self.b - self.a;
        let len_sq = line_vec.length_squared();
        if len_sq == 0.0 {
            return self.a;
        }
        let t = ((p - self.a).dot(line_vec) / len_sq).clamp(0.0, 1.0);
        self.a + line_vec * t
    }

    /// Contact point if the circle overlaps the segment
    ///
    /// Touching counts: a circle whose edge lies exactly on the segment (or on
    /// one of its endpoints) is a hit.
    pub fn intersect_circle(&self, circle: &Circle) -> Option<Vec2> {
        let closest = self.closest_point(circle.center);
        if closest.distance_squared(circle.center) <= circle.radius * circle.radius {
            Some(closest)
        } else {
            None
        }
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Build from two opposite corners in any order
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            min: Vec2::new(x0.min(x1), y0.min(y1)),
            max: Vec2::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Build from the lower-left corner and a size
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self::new(origin.x, origin.y, origin.x + size.x, origin.y + size.y)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Coarse overlap test against a circle (boundary-inclusive)
    pub fn intersects_circle(&self, circle: &Circle) -> bool {
        let closest = circle.center.clamp(self.min, self.max);
        closest.distance_squared(circle.center) <= circle.radius * circle.radius
    }

    /// The four boundary edges: left, right, top, bottom
    pub fn edges(&self) -> [Segment; 4] {
        let (min, max) = (self.min, self.max);
        [
            Segment::new(min, Vec2::new(min.x, max.y)),
            Segment::new(Vec2::new(max.x, min.y), max),
            Segment::new(Vec2::new(min.x, max.y), max),
            Segment::new(min, Vec2::new(max.x, min.y)),
        ]
    }
}

/// A circle (the ball's extent)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        debug_assert!(radius > 0.0, "circle radius must be positive");
        Self { center, radius }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_hit_middle() {
        let seg = Segment::new(Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0));
        let circle = Circle::new(Vec2::new(50.0, 5.0), 8.0);

        let contact = seg.intersect_circle(&circle).unwrap();
        assert!((contact - Vec2::new(50.0, 0.0)).length() < 0.001);
    }

    #[test]
    fn test_segment_is_finite() {
        // Same line as the segment, but past the endpoint
        let seg = Segment::new(Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0));
        let circle = Circle::new(Vec2::new(120.0, 0.0), 8.0);
        assert!(seg.intersect_circle(&circle).is_none());
    }

    #[test]
    fn test_segment_tangent_at_endpoint_collides() {
        let seg = Segment::new(Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0));
        let circle = Circle::new(Vec2::new(108.0, 0.0), 8.0);
        assert_eq!(seg.intersect_circle(&circle), Some(Vec2::new(100.0, 0.0)));
    }

    #[test]
    fn test_segment_vertical() {
        assert!(Segment::new(Vec2::new(3.0, 0.0), Vec2::new(3.0, 10.0)).is_vertical());
        assert!(!Segment::new(Vec2::new(0.0, 3.0), Vec2::new(10.0, 3.0)).is_vertical());
    }

    #[test]
    fn test_rect_normalizes_corners() {
        let rect = Rect::new(60.0, 20.0, 0.0, 0.0);
        assert_eq!(rect.min, Vec2::ZERO);
        assert_eq!(rect.max, Vec2::new(60.0, 20.0));
        assert_eq!(rect.width(), 60.0);
        assert_eq!(rect.height(), 20.0);
    }

    #[test]
    fn test_rect_edges_order() {
        let rect = Rect::new(0.0, 0.0, 60.0, 20.0);
        let [left, right, top, bottom] = rect.edges();

        assert!(left.is_vertical() && left.a.x == 0.0);
        assert!(right.is_vertical() && right.a.x == 60.0);
        assert!(!top.is_vertical() && top.a.y == 20.0);
        assert!(!bottom.is_vertical() && bottom.a.y == 0.0);
    }

    #[test]
    fn test_rect_circle_coarse() {
        let rect = Rect::new(0.0, 0.0, 60.0, 20.0);

        assert!(rect.intersects_circle(&Circle::new(Vec2::new(30.0, 10.0), 1.0)));
        assert!(rect.intersects_circle(&Circle::new(Vec2::new(30.0, 27.0), 8.0)));
        assert!(!rect.intersects_circle(&Circle::new(Vec2::new(30.0, 40.0), 8.0)));
        // Near the corner, diagonal distance is what matters
        assert!(!rect.intersects_circle(&Circle::new(Vec2::new(67.0, 27.0), 8.0)));
    }
}
