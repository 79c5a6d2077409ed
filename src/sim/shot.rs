//! Shot input: drag gesture to launch velocity
//!
//! One gesture drives every ball still in play with the same velocity,
//! regardless of where each ball sits.

use glam::Vec2;

use super::state::{Aim, Ball, GameEvent, GameState};

/// Launch velocity for a press/release pair: `-(release - press) / divisor`
#[inline]
pub fn shot_velocity(press: Vec2, release: Vec2, divisor: f32) -> Vec2 {
    -(release - press) / divisor
}

/// Power meter fill for a drag vector, clamped to `[0, 1]`.
///
/// Uses the raw drag length (not divided by the shot divisor).
#[inline]
pub fn aim_power(pull: Vec2, max_speed: f32) -> f32 {
    (pull.length() / max_speed).clamp(0.0, 1.0)
}

/// Read-only view of a gesture for the power meter and aim arrow
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimPreview {
    /// Meter fill, 0..=1
    pub power: f32,
    /// Unit launch direction, zero for a zero-length drag
    pub direction: Vec2,
    /// Velocity the balls would receive if released now
    pub velocity: Vec2,
}

impl GameState {
    /// Shots are accepted when the reference ball rests and a ball is still in play
    pub fn can_shoot(&self) -> bool {
        let resting = self.reference_ball().is_some_and(|b| !b.is_moving());
        resting && self.balls.iter().any(|b| !b.captured)
    }

    /// Pointer down
    pub fn begin_aim(&mut self, point: Vec2) {
        self.aim = Some(Aim {
            press: point,
            current: point,
        });
    }

    /// Pointer moved while held
    pub fn update_aim(&mut self, point: Vec2) {
        if let Some(aim) = self.aim.as_mut() {
            aim.current = point;
        }
    }

    /// Pointer up: fire the shot if gating allows.
    ///
    /// The gesture ends either way. A release without a press is ignored.
    pub fn end_aim(&mut self, point: Vec2) -> Option<GameEvent> {
        let aim = self.aim.take()?;
        if !self.can_shoot() {
            log::debug!("Shot rejected: reference ball still moving or all balls holed");
            return None;
        }

        let vel = shot_velocity(aim.press, point, self.settings.shot_divisor);
        for ball in self.balls.iter_mut().filter(|b| !b.captured) {
            ball.vel = vel;
        }
        self.strokes += 1;
        log::info!("Stroke {}: launch velocity ({:.3}, {:.3})", self.strokes, vel.x, vel.y);

        Some(GameEvent::ShotTaken {
            stroke: self.strokes,
        })
    }

    /// Live gesture feedback, only while a shot could be taken
    pub fn aim_preview(&self) -> Option<AimPreview> {
        let aim = self.aim?;
        if self.reference_ball().is_none_or(Ball::is_moving) {
            return None;
        }
        let pull = aim.pull();
        Some(AimPreview {
            power: aim_power(pull, self.settings.max_ball_speed),
            direction: pull.normalize_or_zero(),
            velocity: pull / self.settings.shot_divisor,
        })
    }
}
