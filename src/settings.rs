//! Game settings and tuning
//!
//! Every physics constant lives here so the simulation never reads a magic
//! number. Settings are plain JSON; a missing field falls back to the default.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while reading settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings json: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Simulation tuning.
///
/// Positive `capture_radius`, `ball_extent` and `hole_extent` are a
/// precondition; they are not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,
    /// Ball bounding-box side, used for edge offsets
    pub ball_extent: f32,
    /// Hole bounding-box side, used to find the hole center
    pub hole_extent: f32,

    // === Physics ===
    /// Speed lost per frame (linear, not exponential)
    pub friction: f32,
    /// Launch velocity = -drag / shot_divisor
    pub shot_divisor: f32,
    pub capture_radius: f32,
    /// Drag magnitude mapped to a full power meter
    pub max_ball_speed: f32,

    // === Layout ===
    /// Ball spawn points, one per playfield
    pub ball_spawns: Vec<Vec2>,
    /// Hole positions, same order as the balls they are aimed for
    pub hole_positions: Vec<Vec2>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            ball_extent: BALL_EXTENT,
            hole_extent: HOLE_EXTENT,

            friction: FRICTION,
            shot_divisor: SHOT_DIVISOR,
            capture_radius: CAPTURE_RADIUS,
            max_ball_speed: MAX_BALL_SPEED,

            ball_spawns: BALL_SPAWNS.iter().map(|&p| Vec2::from(p)).collect(),
            hole_positions: HOLE_POSITIONS.iter().map(|&p| Vec2::from(p)).collect(),
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize settings to pretty JSON
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!(
            "Loaded settings from {} ({} balls, {} holes)",
            path.display(),
            settings.ball_spawns.len(),
            settings.hole_positions.len()
        );
        Ok(settings)
    }
}
