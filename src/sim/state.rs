//! Game state and core simulation types
//!
//! Everything the renderer reads after a frame lives here: balls, holes,
//! the in-progress aim gesture and the stroke counter.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Settings;
use crate::decay_velocity;

/// Static playfield geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    /// Ball bounding-box side
    pub ball_extent: f32,
    /// Hole bounding-box side
    pub hole_extent: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32, ball_extent: f32, hole_extent: f32) -> Self {
        Self {
            width,
            height,
            ball_extent,
            hole_extent,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.arena_width,
            settings.arena_height,
            settings.ball_extent,
            settings.hole_extent,
        )
    }

    /// X of the vertical wall dividing the two playfields
    #[inline]
    pub fn center_barrier_x(&self) -> f32 {
        self.width / 2.0
    }
}

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left of the bounding box
    pub pos: Vec2,
    pub vel: Vec2,
    /// Dropped into a hole; frozen until reset
    pub captured: bool,
    init_pos: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            captured: false,
            init_pos: pos,
        }
    }

    /// Spawn position, restored on reset
    pub fn initial_pos(&self) -> Vec2 {
        self.init_pos
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    pub fn is_moving(&self) -> bool {
        self.speed() > 0.0
    }

    /// Center of the bounding box
    #[inline]
    pub fn center(&self, extent: f32) -> Vec2 {
        self.pos + Vec2::splat(extent / 2.0)
    }

    /// Apply one frame of linear friction (skipped once captured)
    pub fn apply_friction(&mut self, friction: f32) {
        if !self.captured {
            self.vel = decay_velocity(self.vel, friction);
        }
    }

    /// Move by the committed velocity (skipped once captured)
    pub fn advance(&mut self) {
        if !self.captured {
            self.pos += self.vel;
        }
    }

    /// Freeze in a hole
    pub fn capture(&mut self) {
        self.captured = true;
        self.vel = Vec2::ZERO;
    }

    /// Back to spawn, at rest, out of the hole
    pub fn reset(&mut self) {
        self.vel = Vec2::ZERO;
        self.pos = self.init_pos;
        self.captured = false;
    }
}

/// A hole the balls are aimed at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    /// Top-left of the hole's bounding box
    pub pos: Vec2,
}

impl Hole {
    pub fn new(pos: Vec2) -> Self {
        Self { pos }
    }

    #[inline]
    pub fn center(&self, extent: f32) -> Vec2 {
        self.pos + Vec2::splat(extent / 2.0)
    }

    pub fn relocate(&mut self, pos: Vec2) {
        self.pos = pos;
    }
}

/// A drag gesture in progress
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aim {
    /// Where the pointer went down
    pub press: Vec2,
    /// Latest pointer position
    pub current: Vec2,
}

impl Aim {
    /// Launch direction scaled by drag length (press minus current)
    #[inline]
    pub fn pull(&self) -> Vec2 {
        self.press - self.current
    }
}

/// Discrete events for audio/HUD collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A gesture was accepted; `stroke` is the new stroke count
    ShotTaken { stroke: u32 },
    /// Ball index `ball` dropped into hole index `hole`
    BallCaptured { ball: usize, hole: usize },
}

/// Complete simulation context owned by the frame loop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Tuning and geometry; the arena is derived from it on every read
    pub settings: Settings,
    /// Fixed order: index 0 is the reference ball for shot gating
    pub balls: Vec<Ball>,
    /// Fixed order: earlier holes win capture ties
    pub holes: Vec<Hole>,
    /// Gesture in progress, if the pointer is held
    pub aim: Option<Aim>,
    /// Accepted shots since the state was created
    pub strokes: u32,
    /// Simulation frame counter
    pub frame: u64,
}

impl GameState {
    /// Build balls and holes from the settings layout
    pub fn new(settings: Settings) -> Self {
        let balls = settings.ball_spawns.iter().map(|&p| Ball::new(p)).collect();
        let holes = settings.hole_positions.iter().map(|&p| Hole::new(p)).collect();
        Self {
            settings,
            balls,
            holes,
            aim: None,
            strokes: 0,
            frame: 0,
        }
    }

    /// Playfield geometry from the current settings
    pub fn arena(&self) -> Arena {
        Arena::from_settings(&self.settings)
    }

    /// Ball whose motion gates new shots
    pub fn reference_ball(&self) -> Option<&Ball> {
        self.balls.first()
    }

    pub fn any_moving(&self) -> bool {
        self.balls.iter().any(Ball::is_moving)
    }

    pub fn all_captured(&self) -> bool {
        self.balls.iter().all(|b| b.captured)
    }

    /// Return every ball to its spawn point
    pub fn reset_balls(&mut self) {
        for ball in &mut self.balls {
            ball.reset();
        }
        log::info!("Balls reset");
    }

    /// Move holes for a new level.
    ///
    /// Refused while any ball is rolling so a shot never sees a hole move.
    pub fn place_holes(&mut self, positions: &[Vec2]) -> bool {
        if self.any_moving() {
            log::warn!("Ignoring hole relocation while balls are moving");
            return false;
        }
        self.holes.truncate(positions.len());
        for (i, &pos) in positions.iter().enumerate() {
            match self.holes.get_mut(i) {
                Some(hole) => hole.relocate(pos),
                None => self.holes.push(Hole::new(pos)),
            }
        }
        true
    }
}
