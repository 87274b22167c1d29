//! Platform abstraction layer
//!
//! The session talks to the outside world through the [`Backend`] trait:
//! - Asset loading (textures, sounds, music) by name
//! - A begin/end-delimited draw batch with a projection matrix
//! - Fire-and-forget audio playback
//! - Polled input and a monotonic clock
//!
//! Only asset loading is fallible. Everything after `create` is assumed to
//! succeed; backends deal with their own device failures.

pub mod headless;

use anyhow::Result;
use glam::{Mat4, Vec2};

/// Polled input snapshot for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct RawInput {
    /// Active pointer/touch position in surface pixels, y-down
    pub pointer: Option<Vec2>,
    /// "Move left" key held
    pub left_held: bool,
    /// "Move right" key held
    pub right_held: bool,
}

/// Host-side collaborators: renderer, audio, input and clock
pub trait Backend {
    type Texture;
    type Sound;
    type Music;

    // --- Assets ---
    fn load_texture(&mut self, name: &str) -> Result<Self::Texture>;
    fn load_sound(&mut self, name: &str) -> Result<Self::Sound>;
    fn load_music(&mut self, name: &str) -> Result<Self::Music>;

    // --- Audio ---
    /// Play a sound effect; overlapping invocations are allowed
    fn play_sound(&mut self, sound: &Self::Sound, volume: f32);
    /// Start a music track looping
    fn start_music(&mut self, music: &Self::Music, volume: f32);
    fn stop_music(&mut self, music: &Self::Music);

    // --- Rendering ---
    /// Clear the frame buffer to an RGBA color
    fn clear(&mut self, color: [f32; 4]);
    fn set_projection(&mut self, projection: Mat4);
    fn begin_batch(&mut self);
    /// Draw a texture with its bottom-left corner at a field position
    fn draw(&mut self, texture: &Self::Texture, pos: Vec2);
    fn end_batch(&mut self);

    // --- Input and clock ---
    fn poll_input(&mut self) -> RawInput;
    /// Monotonic timestamp in nanoseconds
    fn now_ns(&self) -> u64;
}
