//! Chroma Arena - a bounded-arena simulation of color-dueling orbs
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, color duels)
//! - `config`: Named simulation parameters with serde support
//!
//! Rendering and input sampling are external adapters: they read orb/player
//! state once per tick and feed directional flags into [`sim::TickInput`].

pub mod config;
pub mod sim;

pub use config::ArenaConfig;

/// Default simulation parameters
pub mod consts {
    /// Simulation rate (ticks per second) for paced runners
    pub const TICK_HZ: u32 = 60;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 640.0;
    pub const ARENA_HEIGHT: f32 = 480.0;

    /// Orb defaults
    pub const ORB_COUNT: usize = 10;
    pub const ORB_RADIUS: f32 = 20.0;
    /// Distance moved per tick, per axis (also the player step size)
    pub const ORB_SPEED: f32 = 1.0;
    /// Duel losses an orb survives before despawning
    pub const INITIAL_COUNTER: u8 = 9;
}
