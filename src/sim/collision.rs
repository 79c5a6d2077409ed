//! Collision detection and response
//!
//! Walls and the center barrier are tested against a look-ahead position,
//! not against overlap. The look-ahead uses the velocity decayed one more
//! time by friction, so a ball that would stop short of a wall never bounces.

use glam::Vec2;

use super::state::Arena;
use crate::decay_velocity;

/// Which surfaces flipped the velocity this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reflection {
    /// Left or right outer wall
    pub wall_x: bool,
    /// Top or bottom outer wall
    pub wall_y: bool,
    /// Center barrier
    pub barrier: bool,
}

impl Reflection {
    pub fn any(&self) -> bool {
        self.wall_x || self.wall_y || self.barrier
    }
}

/// Outer wall test on one axis.
///
/// `pos` is the current box origin, `next` the look-ahead origin and
/// `bound` the far wall; the near wall is at 0.
#[inline]
fn crosses_outer_wall(pos: f32, next: f32, extent: f32, bound: f32) -> bool {
    if pos + extent < bound && next + extent > bound {
        true
    } else {
        pos > 0.0 && next < 0.0
    }
}

/// Center barrier test, x axis only
#[inline]
fn crosses_barrier(x: f32, next_x: f32, extent: f32, barrier_x: f32) -> bool {
    (x + extent < barrier_x && next_x > barrier_x - extent) || (x > barrier_x && next_x < barrier_x)
}

/// Reflect a ball's already-decayed velocity off the arena.
///
/// Returns the committed velocity (each axis possibly sign-flipped) and
/// the surfaces that fired. Position is not touched. The barrier flip is
/// applied on top of any wall flip, so two flips cancel.
pub fn resolve_arena_collision(pos: Vec2, vel: Vec2, friction: f32, arena: &Arena) -> (Vec2, Reflection) {
    let next = pos + decay_velocity(vel, friction);
    let extent = arena.ball_extent;

    let mut out = vel;
    let mut hit = Reflection::default();

    if crosses_outer_wall(pos.x, next.x, extent, arena.width) {
        out.x = -out.x;
        hit.wall_x = true;
    }
    if crosses_outer_wall(pos.y, next.y, extent, arena.height) {
        out.y = -out.y;
        hit.wall_y = true;
    }
    if crosses_barrier(pos.x, next.x, extent, arena.center_barrier_x()) {
        out.x = -out.x;
        hit.barrier = true;
    }

    (out, hit)
}

/// Check whether a ball center is inside a hole's capture radius
#[inline]
pub fn ball_in_hole(ball_center: Vec2, hole_center: Vec2, capture_radius: f32) -> bool {
    ball_center.distance(hole_center) < capture_radius
}
