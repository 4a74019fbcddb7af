//! Ball contact against the things it can hit
//!
//! Bricks, the paddle and the arena boundary share one capability: test the
//! ball, bounce it if needed, and report whether a contact happened. What a
//! contact *means* differs: a brick breaks, the paddle just bounces, the
//! arena reports a lost ball.

use super::ball::Ball;
use super::geometry::Rect;

/// Something the ball can collide with
pub trait Collidable {
    /// Test the ball and redirect it on contact
    ///
    /// Returns true when the caller has something to act on (brick broken,
    /// ball lost). The paddle returns true on any bounce.
    fn collision(&self, ball: &mut Ball) -> bool;
}

/// Bounce the ball off every rectangle edge it touches
///
/// The coarse rectangle test runs first so bricks nowhere near the ball
/// cost a single clamp. A ball sitting on a corner touches two edges and is
/// redirected by both, which sends it straight back the way it came.
///
/// A ball wholly inside the rectangle touches no edge and is not a contact.
pub fn bounce_off_rect(rect: &Rect, ball: &mut Ball) -> bool {
    if !rect.intersects_circle(&ball.circle) {
        return false;
    }

    let mut touched = false;
    for edge in rect.edges() {
        if edge.intersect_circle(&ball.circle).is_some() {
            ball.redirect(&edge);
            touched = true;
        }
    }

    touched
}
