//! Deterministic simulation module
//!
//! All arena logic lives here. This module must be pure and deterministic:
//! - Fixed tick only
//! - Seeded RNG only (spawn-time randomness, nothing mid-run)
//! - Stable iteration order (spawn order, ids ascending)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::resolve_pairs;
pub use state::{ArenaEvent, ArenaState, ContactMemory, Orb, OrbColor, Player};
pub use tick::{TickInput, tick};
