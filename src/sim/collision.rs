//! Pairwise collision resolution and the color-duel rule
//!
//! The heart of the simulation: a single pass over every unordered orb pair
//! applies one of two mutually exclusive rules per tick:
//!
//! 1. Overlap: remember the distance and reflect one velocity axis on both
//!    orbs (the axis with the larger positional delta).
//! 2. Separation edge: the pair was overlapping last time we looked and is
//!    apart now - resolve the color duel and forget the pair.
//!
//! The resolver never mutates the orb list itself; it returns the indices of
//! orbs whose counter hit zero, to be removed after the full scan.

use std::collections::BTreeSet;

use super::state::{ArenaEvent, ContactMemory, Orb};

/// Run the pairwise scan over `orbs`.
///
/// `diameter` is the contact distance (`2 * radius`). Orbs marked for removal
/// keep participating in the remaining pairs of the same scan; indices in the
/// returned set refer to `orbs` as passed in.
pub fn resolve_pairs(
    orbs: &mut [Orb],
    memory: &mut ContactMemory,
    diameter: f32,
    events: &mut Vec<ArenaEvent>,
) -> BTreeSet<usize> {
    let mut removals = BTreeSet::new();

    for i in 0..orbs.len() {
        for j in (i + 1)..orbs.len() {
            let (head, tail) = orbs.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];

            let delta = b.pos - a.pos;
            let distance = delta.length();

            if distance <= diameter {
                memory.record(a.id, b.id, distance);
                // Approximate elastic bounce: reflect the axis the pair is
                // most separated along, on both orbs. Ties go to y.
                if delta.x.abs() > delta.y.abs() {
                    a.vel.x = -a.vel.x;
                    b.vel.x = -b.vel.x;
                } else {
                    a.vel.y = -a.vel.y;
                    b.vel.y = -b.vel.y;
                }
                events.push(ArenaEvent::Contact { a: a.id, b: b.id });
            } else if memory.last(a.id, b.id).is_some() {
                // Recorded distances are always <= diameter, so a live entry
                // plus distance > diameter is exactly the separation edge.
                duel(a, b, i, j, &mut removals, events);
                memory.clear(a.id, b.id);
            }
        }
    }

    removals
}

/// Resolve the color duel for a separating pair.
///
/// The dominance cycle picks the loser regardless of operand order; same
/// colors are a no-op. The loser's counter floors at zero, and the 1 -> 0
/// transition marks the loser for removal.
fn duel(
    a: &mut Orb,
    b: &mut Orb,
    i: usize,
    j: usize,
    removals: &mut BTreeSet<usize>,
    events: &mut Vec<ArenaEvent>,
) {
    let (winner_id, loser, loser_index) = if a.color.beats(b.color) {
        (a.id, b, j)
    } else if b.color.beats(a.color) {
        (b.id, a, i)
    } else {
        return;
    };

    if loser.counter > 0 {
        loser.counter -= 1;
        log::debug!(
            "duel: orb {} beat orb {} ({:?}, counter now {})",
            winner_id,
            loser.id,
            loser.color,
            loser.counter
        );
        events.push(ArenaEvent::Duel {
            winner: winner_id,
            loser: loser.id,
        });
        if loser.counter == 0 {
            removals.insert(loser_index);
        }
    }
}
