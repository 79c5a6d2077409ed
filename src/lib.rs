//! Twini Golf - synchronized twin-ball mini golf
//!
//! Core modules:
//! - `sim`: Deterministic simulation (friction, wall/barrier reflection, holes, shots)
//! - `settings`: Data-driven tuning loaded from JSON

pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration defaults
pub mod consts {
    /// Arena dimensions (the game window)
    pub const ARENA_WIDTH: f32 = 640.0;
    pub const ARENA_HEIGHT: f32 = 480.0;

    /// Side length of the ball's bounding box
    pub const BALL_EXTENT: f32 = 16.0;
    /// Side length of the hole's bounding box
    pub const HOLE_EXTENT: f32 = 16.0;

    /// Linear speed lost per frame
    pub const FRICTION: f32 = 0.015;
    /// Drag distance per unit of launch speed
    pub const SHOT_DIVISOR: f32 = 50.0;
    /// Center-to-center distance at which a ball drops
    pub const CAPTURE_RADIUS: f32 = 8.0;
    /// Drag magnitude that fills the power meter
    pub const MAX_BALL_SPEED: f32 = 400.0;

    /// Spawn points, left playfield first
    pub const BALL_SPAWNS: [[f32; 2]; 2] = [[160.0, 360.0], [480.0, 360.0]];
    /// Hole positions for the first level
    pub const HOLE_POSITIONS: [[f32; 2]; 2] = [[160.0, 64.0], [496.0, 80.0]];
}

/// Reduce a speed by a fixed friction step, never going below zero
#[inline]
pub fn decay_speed(speed: f32, friction: f32) -> f32 {
    (speed - friction).max(0.0)
}

/// Apply linear friction to a velocity, keeping its direction.
///
/// A zero velocity is returned unchanged; it is never normalized.
#[inline]
pub fn decay_velocity(vel: Vec2, friction: f32) -> Vec2 {
    let speed = vel.length();
    if speed > 0.0 {
        (vel / speed) * decay_speed(speed, friction)
    } else {
        Vec2::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decay_speed_clamps_at_zero() {
        assert_eq!(decay_speed(0.01, 0.015), 0.0);
        assert_eq!(decay_speed(0.0, 0.015), 0.0);
        assert!((decay_speed(1.0, 0.25) - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_decay_velocity_keeps_direction() {
        let v = decay_velocity(Vec2::new(3.0, 4.0), 1.0);
        assert!((v.length() - 4.0).abs() < 1e-5);
        assert!((v.x / v.y - 0.75).abs() < 1e-5);
    }

    #[test]
    fn test_decay_velocity_zero_guard() {
        let v = decay_velocity(Vec2::ZERO, 0.015);
        assert_eq!(v, Vec2::ZERO);
        assert!(!v.x.is_nan() && !v.y.is_nan());
    }
}
