//! Arena state and core simulation types
//!
//! Everything that must survive a save/restore for determinism lives here.

use std::collections::BTreeMap;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::ArenaConfig;

use super::tick::TickInput;

/// Orb colors, ordered by the dominance cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrbColor {
    Red,
    Green,
    Blue,
}

/// Dominance table: (winner, loser) pairs of the color cycle.
/// Red beats Green, Green beats Blue, Blue beats Red.
const DOMINANCE: [(OrbColor, OrbColor); 3] = [
    (OrbColor::Red, OrbColor::Green),
    (OrbColor::Green, OrbColor::Blue),
    (OrbColor::Blue, OrbColor::Red),
];

impl OrbColor {
    pub const ALL: [OrbColor; 3] = [OrbColor::Red, OrbColor::Green, OrbColor::Blue];

    /// True if `self` wins a duel against `other`.
    ///
    /// For differing colors exactly one of `a.beats(b)` / `b.beats(a)` holds;
    /// same colors beat neither way.
    #[inline]
    pub fn beats(self, other: OrbColor) -> bool {
        DOMINANCE.contains(&(self, other))
    }
}

/// An autonomous moving orb
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Orb {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: OrbColor,
    /// Remaining duel losses; the orb despawns when this reaches 0
    pub counter: u8,
}

/// The player-controlled circle
///
/// Moves by clamped directional input and is drawn like an orb, but takes no
/// part in collision resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
}

impl Player {
    /// Move by `delta`, applied independently per axis and only if that axis
    /// stays within `[radius, bound - radius]`. A move that would cross a
    /// boundary is dropped on that axis, not clamped part-way.
    pub fn try_move(&mut self, delta: Vec2, bounds: Vec2, radius: f32) {
        let x = self.pos.x + delta.x;
        if x >= radius && x <= bounds.x - radius {
            self.pos.x = x;
        }
        let y = self.pos.y + delta.y;
        if y >= radius && y <= bounds.y - radius {
            self.pos.y = y;
        }
    }
}

/// Per-pair overlap memory
///
/// Keyed by the unordered orb-id pair `(min, max)`, so an orb overlapping two
/// neighbors in the same tick keeps independent memory for each pair. Absence
/// of an entry means "never overlapped" (the infinite sentinel); entries only
/// ever hold distances at or below the contact diameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<((u32, u32), f32)>", into = "Vec<((u32, u32), f32)>")]
pub struct ContactMemory {
    map: BTreeMap<(u32, u32), f32>,
}

impl ContactMemory {
    #[inline]
    fn key(a: u32, b: u32) -> (u32, u32) {
        if a < b { (a, b) } else { (b, a) }
    }

    /// Record the latest overlapping distance for a pair
    pub fn record(&mut self, a: u32, b: u32, distance: f32) {
        self.map.insert(Self::key(a, b), distance);
    }

    /// Last overlapping distance for a pair, if the pair was overlapping
    pub fn last(&self, a: u32, b: u32) -> Option<f32> {
        self.map.get(&Self::key(a, b)).copied()
    }

    /// Clear a pair's memory (separation handled, or spurious)
    pub fn clear(&mut self, a: u32, b: u32) {
        self.map.remove(&Self::key(a, b));
    }

    /// Drop every entry involving `id` (orb despawned)
    pub fn forget(&mut self, id: u32) {
        self.map.retain(|&(a, b), _| a != id && b != id);
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

// BTreeMap with tuple keys doesn't survive serde_json; ship it as an entry list.
impl From<Vec<((u32, u32), f32)>> for ContactMemory {
    fn from(entries: Vec<((u32, u32), f32)>) -> Self {
        Self {
            map: entries.into_iter().collect(),
        }
    }
}

impl From<ContactMemory> for Vec<((u32, u32), f32)> {
    fn from(memory: ContactMemory) -> Self {
        memory.map.into_iter().collect()
    }
}

/// Per-tick simulation events, for render/telemetry adapters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ArenaEvent {
    /// Two orbs are overlapping this tick (velocity axis reflected)
    Contact { a: u32, b: u32 },
    /// A separating pair resolved a color duel
    Duel { winner: u32, loser: u32 },
    /// An orb's counter hit zero and it was removed
    Despawn { id: u32, color: OrbColor },
}

/// Complete arena state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArenaState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter
    pub ticks: u64,
    /// Setup parameters this arena was spawned with
    pub config: ArenaConfig,
    /// Autonomous orbs, spawn order (ids ascending)
    pub orbs: Vec<Orb>,
    /// Player circle
    pub player: Player,
    /// Overlap memory for the separation-edge rule
    pub memory: ContactMemory,
    /// Events from the most recent tick (rebuilt every tick)
    #[serde(skip)]
    pub events: Vec<ArenaEvent>,
}

impl ArenaState {
    /// Spawn a fresh arena from `config` and `seed`.
    ///
    /// Orb positions are uniform in `[radius, bound - radius]` per axis with
    /// no initial-overlap check; velocities are `speed` per axis with random
    /// signs; colors are drawn uniformly from the palette.
    pub fn new(config: ArenaConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let min = config.radius;
        let max_x = config.bounds.x - config.radius;
        let max_y = config.bounds.y - config.radius;

        let orbs = (0..config.orb_count)
            .map(|i| Orb {
                id: i as u32,
                pos: Vec2::new(
                    rng.random_range(min..=max_x),
                    rng.random_range(min..=max_y),
                ),
                vel: Vec2::new(
                    if rng.random::<bool>() { config.speed } else { -config.speed },
                    if rng.random::<bool>() { config.speed } else { -config.speed },
                ),
                color: OrbColor::ALL[rng.random_range(0..OrbColor::ALL.len())],
                counter: config.initial_counter,
            })
            .collect();

        let player = Player {
            pos: Vec2::new(
                rng.random_range(min..=max_x),
                rng.random_range(min..=max_y),
            ),
        };

        Self {
            seed,
            ticks: 0,
            config,
            orbs,
            player,
            memory: ContactMemory::default(),
            events: Vec::new(),
        }
    }

    /// Move the player one step per active directional flag.
    ///
    /// Each flag is applied independently, so opposing flags cancel in the
    /// open field but not against a wall (the blocked direction is dropped).
    pub fn apply_player_input(&mut self, input: &TickInput) {
        let step = self.config.speed;
        let bounds = self.config.bounds;
        let radius = self.config.radius;
        if input.left {
            self.player.try_move(Vec2::new(-step, 0.0), bounds, radius);
        }
        if input.right {
            self.player.try_move(Vec2::new(step, 0.0), bounds, radius);
        }
        if input.up {
            self.player.try_move(Vec2::new(0.0, -step), bounds, radius);
        }
        if input.down {
            self.player.try_move(Vec2::new(0.0, step), bounds, radius);
        }
    }
}
