//! Game state and core simulation types
//!
//! All per-session gameplay state lives here. The state is deterministic:
//! a seeded RNG drives spawn positions, and the clock is supplied by the
//! caller as monotonic nanoseconds.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::rect::Rect;
use crate::consts::*;

/// The player-controlled catcher
#[derive(Debug, Clone)]
pub struct Catcher {
    pub rect: Rect,
}

impl Default for Catcher {
    fn default() -> Self {
        // Centered horizontally, resting just above the field floor
        Self {
            rect: Rect::new(
                Vec2::new(
                    FIELD_WIDTH / 2.0 - SPRITE_SIZE / 2.0,
                    CATCHER_FLOOR_OFFSET,
                ),
                Vec2::splat(SPRITE_SIZE),
            ),
        }
    }
}

impl Catcher {
    /// Center the catcher on a pointer position (field-space x)
    pub fn center_on(&mut self, x: f32) {
        self.rect.pos.x = x - SPRITE_SIZE / 2.0;
    }

    /// Shift horizontally (held-key movement)
    pub fn shift(&mut self, dx: f32) {
        self.rect.pos.x += dx;
    }

    /// Constrain to the field: `0 <= x <= FIELD_WIDTH - SPRITE_SIZE`
    pub fn clamp_to_field(&mut self) {
        self.rect.pos.x = self.rect.pos.x.clamp(0.0, FIELD_WIDTH - SPRITE_SIZE);
    }
}

/// A falling raindrop
#[derive(Debug, Clone)]
pub struct Raindrop {
    pub id: u32,
    pub rect: Rect,
}

impl Raindrop {
    /// Advance the fall by one frame
    pub fn fall(&mut self, dt: f32) {
        self.rect.pos.y -= FALL_SPEED * dt;
    }

    /// True once the top edge has passed below the field floor
    pub fn below_field(&self) -> bool {
        self.rect.top() < 0.0
    }
}

/// Something that happened during a tick and may need a side effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A new raindrop entered the field
    Spawned { id: u32 },
    /// A raindrop overlapped the catcher and was removed
    Caught { id: u32 },
    /// A raindrop fell past the floor and was removed
    Missed { id: u32 },
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG for spawn positions
    rng: Pcg32,
    /// Player catcher
    pub catcher: Catcher,
    /// Active raindrops; order is irrelevant, removal is swap-remove
    pub drops: Vec<Raindrop>,
    /// Monotonic timestamp of the most recent spawn (nanoseconds)
    pub last_spawn_ns: u64,
    /// Frame tick counter
    pub time_ticks: u64,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new session state and spawn the first raindrop
    pub fn new(seed: u64, now_ns: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            catcher: Catcher::default(),
            drops: Vec::new(),
            last_spawn_ns: 0,
            time_ticks: 0,
            next_id: 1,
        };
        state.spawn_raindrop(now_ns);
        state
    }

    /// Allocate a new entity ID
    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn a raindrop at a uniformly random x along the top edge and
    /// record the spawn timestamp. Returns the new drop's ID.
    pub fn spawn_raindrop(&mut self, now_ns: u64) -> u32 {
        let id = self.next_entity_id();
        let x = self.rng.random_range(0.0..=FIELD_WIDTH - SPRITE_SIZE);
        self.drops.push(Raindrop {
            id,
            rect: Rect::new(Vec2::new(x, FIELD_HEIGHT), Vec2::splat(SPRITE_SIZE)),
        });
        self.last_spawn_ns = now_ns;
        id
    }
}
