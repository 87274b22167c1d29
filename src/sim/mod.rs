//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Clock readings and frame deltas supplied by the caller
//! - No rendering or platform dependencies

pub mod rect;
pub mod state;
pub mod tick;

pub use rect::Rect;
pub use state::{Catcher, GameEvent, GameState, Raindrop};
pub use tick::{TickInput, tick};
