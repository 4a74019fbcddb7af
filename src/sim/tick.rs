//! Per-tick frame update
//!
//! One call to [`tick`] is one logical frame. Wall-clock pacing belongs to
//! whoever drives the loop.

use glam::Vec2;

use super::collision::Collidable;
use super::state::{GamePhase, GameState};

/// Input for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Pointer position in playfield coordinates
    pub pointer: Vec2,
    /// Whether the pointer is over the playfield
    pub pointer_inside: bool,
}

impl TickInput {
    /// Pointer over the playfield at `x`
    pub fn at(x: f32) -> Self {
        Self {
            pointer: Vec2::new(x, 0.0),
            pointer_inside: true,
        }
    }
}

/// Advance the session by one tick
///
/// Order matters: arena walls, paddle, bricks, paddle movement, then ball
/// movement. A baseline hit ends the session immediately and nothing else
/// runs that tick. Ticking an ended session does nothing.
pub fn tick(state: &mut GameState, input: &TickInput) -> GamePhase {
    if state.phase == GamePhase::Ended {
        return state.phase;
    }

    if state.arena.collision(&mut state.ball) {
        state.phase = GamePhase::Ended;
        log::info!(
            "Ball lost after {} ticks ({} bricks destroyed, {} left)",
            state.time_ticks,
            state.bricks_destroyed,
            state.bricks.len()
        );
        return state.phase;
    }

    state.time_ticks += 1;

    if state.paddle.collision(&mut state.ball) {
        log::trace!("Paddle hit at tick {}", state.time_ticks);
    }

    state.resolve_bricks();

    state
        .paddle
        .update_position(input.pointer.x, input.pointer_inside);

    state.ball.advance();

    state.phase
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Color;
    use crate::settings::SessionConfig;
    use crate::sim::ball::Ball;
    use crate::sim::brick::Brick;
    use crate::sim::geometry::Rect;

    fn state() -> GameState {
        GameState::new(SessionConfig::default()).unwrap()
    }

    #[test]
    fn test_tick_moves_ball() {
        let mut state = state();
        let start = state.ball.center();
        let velocity = state.ball.velocity();

        assert_eq!(tick(&mut state, &TickInput::default()), GamePhase::Playing);
        assert!((state.ball.center() - (start + velocity)).length() < 1e-4);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_tick_moves_paddle() {
        let mut state = state();
        tick(&mut state, &TickInput::at(200.0));

        assert_eq!(state.paddle.rect.min.x, 200.0);
    }

    #[test]
    fn test_baseline_ends_session() {
        let mut state = state();
        state.ball = Ball::new(Vec2::new(600.0, 6.0), 8.0, Vec2::NEG_Y, 0.2);
        let bricks = state.bricks.len();
        let paddle = state.paddle.rect;

        assert_eq!(tick(&mut state, &TickInput::at(200.0)), GamePhase::Ended);

        // Nothing else ran this tick
        assert_eq!(state.ball.center(), Vec2::new(600.0, 6.0));
        assert_eq!(state.ball.direction, Vec2::NEG_Y);
        assert_eq!(state.paddle.rect, paddle);
        assert_eq!(state.bricks.len(), bricks);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.scene().phase, GamePhase::Ended);
    }

    #[test]
    fn test_ball_falls_until_lost() {
        let mut state = state();
        state.bricks.clear();
        state.ball = Ball::new(Vec2::new(100.0, 50.0), 8.0, Vec2::NEG_Y, 1.0);
        // Paddle out of the way
        let input = TickInput::at(900.0);

        let mut ticks = 0;
        while tick(&mut state, &input) == GamePhase::Playing {
            ticks += 1;
            assert!(ticks < 100, "ball never reached the baseline");
        }

        // First tick where the circle touches y = 0
        assert_eq!(state.ball.center().y, 8.0);
        assert!(state.is_over());
    }

    #[test]
    fn test_ended_session_is_frozen() {
        let mut state = state();
        state.phase = GamePhase::Ended;
        let center = state.ball.center();

        assert_eq!(tick(&mut state, &TickInput::at(10.0)), GamePhase::Ended);
        assert_eq!(state.ball.center(), center);
        assert_eq!(state.paddle.rect.min.x, 570.0);
    }

    #[test]
    fn test_paddle_sends_ball_back_up() {
        let mut state = state();
        state.ball = Ball::new(Vec2::new(600.0, 117.0), 8.0, Vec2::NEG_Y, 0.5);
        let input = TickInput::at(570.0);

        tick(&mut state, &input);
        assert_eq!(state.ball.direction, Vec2::Y);
    }

    #[test]
    fn test_vertical_ball_on_paddle_keeps_flipping() {
        // Straight down onto the paddle middle: each step stays in contact
        // with the top edge, so the heading flips every tick
        let mut state = state();
        state.ball = Ball::new(Vec2::new(600.0, 117.2), 8.0, Vec2::NEG_Y, 0.2);
        let input = TickInput::at(570.0);

        for _ in 0..200 {
            assert_eq!(tick(&mut state, &input), GamePhase::Playing);
            let y = state.ball.center().y;
            assert!((117.0..=117.6).contains(&y), "ball left the paddle at y = {y}");
        }
    }

    #[test]
    fn test_brick_break_speeds_up_ball() {
        let mut state = state();
        state.bricks = vec![
            Brick::new(0, Rect::new(100.0, 500.0, 160.0, 520.0), Color::BRICK),
            Brick::new(1, Rect::new(200.0, 500.0, 260.0, 520.0), Color::BRICK),
        ];
        state.ball = Ball::new(Vec2::new(230.0, 494.0), 8.0, Vec2::Y, 0.2);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.bricks.len(), 1);
        assert_eq!(state.bricks[0].id, 0);
        assert_eq!(state.bricks_destroyed, 1);
        assert!((state.ball.speed - 0.205).abs() < 1e-6);
        assert_eq!(state.ball.direction, Vec2::NEG_Y);
        assert_eq!(state.scene().bricks.len(), 1);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = state();
        let mut state2 = state();

        for i in 0..5_000 {
            let input = TickInput::at((i % 1200) as f32);
            tick(&mut state1, &input);
            tick(&mut state2, &input);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.ball.center(), state2.ball.center());
        assert_eq!(state1.bricks.len(), state2.bricks.len());
    }
}
