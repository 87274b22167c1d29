//! Raincatch - a falling-raindrop catching game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, per-frame tick, AABB overlap)
//! - `view`: Fixed orthographic view of the field + pointer unprojection
//! - `platform`: Backend trait for rendering/audio/input/clock collaborators
//! - `audio`: Sound effect and music playback with volume control
//! - `session`: The host-driven create/render/dispose lifecycle
//! - `settings`: Audio/demo preferences persisted as JSON

pub mod audio;
pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;
pub mod view;

pub use session::Session;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Play field width (logical units)
    pub const FIELD_WIDTH: f32 = 800.0;
    /// Play field height (logical units)
    pub const FIELD_HEIGHT: f32 = 480.0;

    /// Catcher and raindrop sprites are both square, this many units a side
    pub const SPRITE_SIZE: f32 = 64.0;
    /// The catcher rests this far above the field floor
    pub const CATCHER_FLOOR_OFFSET: f32 = 20.0;

    /// Horizontal catcher speed from held keys (units per second)
    pub const CATCHER_SPEED: f32 = 200.0;
    /// Vertical raindrop fall speed (units per second)
    pub const FALL_SPEED: f32 = 200.0;

    /// Minimum wall-clock interval between raindrop spawns (nanoseconds)
    pub const SPAWN_INTERVAL_NS: u64 = 1_000_000_000;

    /// Frame clear color (dark blue, RGBA)
    pub const CLEAR_COLOR: [f32; 4] = [0.0, 0.0, 0.3, 1.0];
}
