//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame, no wall-clock time
//! - Stable iteration order (by ball and hole index)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod shot;
pub mod state;
pub mod tick;

pub use collision::{Reflection, ball_in_hole, resolve_arena_collision};
pub use shot::{AimPreview, aim_power, shot_velocity};
pub use state::{Aim, Arena, Ball, GameEvent, GameState, Hole};
pub use tick::{TickInput, advance_frame, tick};
