//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `tick` is one logical frame, no wall-clock time
//! - Stable iteration order (bricks in layout order)
//! - No rendering or platform dependencies

pub mod arena;
pub mod ball;
pub mod brick;
pub mod collision;
pub mod geometry;
pub mod paddle;
pub mod state;
pub mod tick;

pub use arena::Arena;
pub use ball::Ball;
pub use brick::{Brick, layout_grid};
pub use collision::{Collidable, bounce_off_rect};
pub use geometry::{Circle, Rect, Segment};
pub use paddle::Paddle;
pub use state::{GamePhase, GameState};
pub use tick::{TickInput, tick};
