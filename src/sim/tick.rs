//! Fixed-rate simulation tick
//!
//! One tick = player input, motion step, pairwise collision resolution,
//! removal. The entity list is only ever mutated in the removal step, after
//! the full pairwise scan has finished.

use std::collections::BTreeSet;

use glam::Vec2;

use super::collision::resolve_pairs;
use super::state::{ArenaEvent, ArenaState, Orb};

/// Directional input flags for a single tick (deterministic)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// Advance the arena by one tick.
///
/// Order is fixed: player input, motion step, collision resolve, removal.
/// `state.events` afterwards holds everything that happened this tick.
pub fn tick(state: &mut ArenaState, input: &TickInput) {
    state.events.clear();

    state.apply_player_input(input);

    advance_orbs(&mut state.orbs, state.config.bounds, state.config.radius);

    let removals = resolve_pairs(
        &mut state.orbs,
        &mut state.memory,
        state.config.diameter(),
        &mut state.events,
    );
    apply_removals(state, &removals);

    state.ticks += 1;
}

/// Motion step: integrate, then reflect velocity on wall contact.
///
/// Move-then-check, so an orb can sit up to one step past the wall band on
/// the tick it reflects; the reflection stops any further drift.
pub fn advance_orbs(orbs: &mut [Orb], bounds: Vec2, radius: f32) {
    for orb in orbs {
        orb.pos += orb.vel;
        if orb.pos.x <= radius || orb.pos.x >= bounds.x - radius {
            orb.vel.x = -orb.vel.x;
        }
        if orb.pos.y <= radius || orb.pos.y >= bounds.y - radius {
            orb.vel.y = -orb.vel.y;
        }
    }
}

/// Remove marked orbs, highest index first so pending indices stay valid.
fn apply_removals(state: &mut ArenaState, removals: &BTreeSet<usize>) {
    for &index in removals.iter().rev() {
        let orb = state.orbs.remove(index);
        state.memory.forget(orb.id);
        log::info!(
            "orb {} ({:?}) despawned at tick {}, {} left",
            orb.id,
            orb.color,
            state.ticks,
            state.orbs.len()
        );
        state.events.push(ArenaEvent::Despawn {
            id: orb.id,
            color: orb.color,
        });
    }
}
