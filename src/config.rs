//! Simulation parameters
//!
//! Everything the arena is seeded with lives here as named configuration
//! rather than scattered constants, so headless tests and alternate runners
//! can shrink or reshape the arena freely.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Arena setup parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Number of autonomous orbs spawned at init
    pub orb_count: usize,
    /// Arena extents (width, height)
    pub bounds: Vec2,
    /// Orb radius (player circle uses the same radius)
    pub radius: f32,
    /// Per-axis distance moved each tick; also the player input step
    pub speed: f32,
    /// Counter every orb starts with; hits zero -> despawn
    pub initial_counter: u8,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            orb_count: ORB_COUNT,
            bounds: Vec2::new(ARENA_WIDTH, ARENA_HEIGHT),
            radius: ORB_RADIUS,
            speed: ORB_SPEED,
            initial_counter: INITIAL_COUNTER,
        }
    }
}

impl ArenaConfig {
    /// Center-to-center distance at which two orbs touch
    #[inline]
    pub fn diameter(&self) -> f32 {
        2.0 * self.radius
    }

    /// Parse a config from JSON (runner `--config` files)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Dump the config as pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_consts() {
        let config = ArenaConfig::default();
        assert_eq!(config.orb_count, 10);
        assert_eq!(config.bounds, Vec2::new(640.0, 480.0));
        assert_eq!(config.radius, 20.0);
        assert_eq!(config.speed, 1.0);
        assert_eq!(config.initial_counter, 9);
        assert_eq!(config.diameter(), 40.0);
    }

    #[test]
    fn test_json_round_trip() {
        let config = ArenaConfig {
            orb_count: 4,
            bounds: Vec2::new(320.0, 240.0),
            radius: 10.0,
            speed: 2.0,
            initial_counter: 3,
        };
        let json = config.to_json().unwrap();
        let parsed = ArenaConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(ArenaConfig::from_json("{\"orb_count\": \"ten\"}").is_err());
    }
}
