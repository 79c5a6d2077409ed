//! Fixed-frame simulation tick
//!
//! Core game loop that advances the simulation deterministically.
//! Per frame and per ball, in index order: friction, wall/barrier
//! reflection, position update. Holes are tested afterwards, in index order.

use glam::Vec2;

use super::collision::{ball_in_hole, resolve_arena_collision};
use super::state::{GameEvent, GameState};

/// Input commands collected between two frames
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer went down here
    pub press: Option<Vec2>,
    /// Pointer is held here
    pub drag: Option<Vec2>,
    /// Pointer was released here
    pub release: Option<Vec2>,
    /// Put the balls back on their spawn points
    pub reset: bool,
}

/// Advance every ball by one frame and test the holes
pub fn advance_frame(state: &mut GameState) -> Vec<GameEvent> {
    let friction = state.settings.friction;
    let arena = state.arena();

    for (i, ball) in state.balls.iter_mut().enumerate() {
        if ball.captured {
            continue;
        }
        ball.apply_friction(friction);

        let (vel, hit) = resolve_arena_collision(ball.pos, ball.vel, friction, &arena);
        if hit.any() {
            log::debug!("Ball {} reflected at ({:.1}, {:.1}): {:?}", i, ball.pos.x, ball.pos.y, hit);
        }
        ball.vel = vel;

        ball.advance();
    }

    let events = capture_balls(state);

    state.frame += 1;
    log::trace!("Frame {} done", state.frame);
    events
}

/// Drop uncaptured balls that sit inside a hole.
///
/// Holes are visited in order, so the first hole in range keeps the ball.
fn capture_balls(state: &mut GameState) -> Vec<GameEvent> {
    let radius = state.settings.capture_radius;
    let arena = state.arena();
    let mut events = Vec::new();

    for (h, hole) in state.holes.iter().enumerate() {
        let hole_center = hole.center(arena.hole_extent);
        for (b, ball) in state.balls.iter_mut().enumerate() {
            if ball.captured {
                continue;
            }
            if ball_in_hole(ball.center(arena.ball_extent), hole_center, radius) {
                ball.capture();
                log::info!("Ball {} dropped into hole {}", b, h);
                events.push(GameEvent::BallCaptured { ball: b, hole: h });
            }
        }
    }

    events
}

/// Apply one frame of input, then advance the simulation.
///
/// Reset lands before any gesture so it always sits on a frame boundary.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.reset {
        state.reset_balls();
    }
    if let Some(point) = input.press {
        state.begin_aim(point);
    }
    if let Some(point) = input.drag {
        state.update_aim(point);
    }
    if let Some(point) = input.release {
        events.extend(state.end_aim(point));
    }

    events.extend(advance_frame(state));
    events
}
