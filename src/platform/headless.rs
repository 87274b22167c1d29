//! Recording backend with no real window, speaker or clock
//!
//! Drives the session in tests and in the native demo binary. Every draw
//! and sound call is recorded for assertions; the clock only moves when
//! the caller advances it, so timing-sensitive behavior is exact.

use anyhow::Result;
use glam::{Mat4, Vec2};

use super::{Backend, RawInput};

/// Opaque asset handle: an ID plus the name it was loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handle {
    pub id: u32,
    pub name: String,
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub texture: String,
    pub pos: Vec2,
}

/// A backend that records instead of rendering
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    next_id: u32,
    clock_ns: u64,
    /// Input returned by the next poll; scripted by the driver
    pub input: RawInput,
    /// Draw calls of the current (or last completed) batch
    pub draw_calls: Vec<DrawCall>,
    /// Total draws across all frames
    pub draws_total: u64,
    /// Clear color of the last frame
    pub last_clear: Option<[f32; 4]>,
    /// Projection of the last frame
    pub last_projection: Option<Mat4>,
    /// Names of every sound played, in order
    pub sounds_played: Vec<String>,
    /// Name of the currently looping music track
    pub music_playing: Option<String>,
    batch_open: bool,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward
    pub fn advance_clock(&mut self, ns: u64) {
        self.clock_ns += ns;
    }

    fn alloc(&mut self, name: &str) -> Handle {
        self.next_id += 1;
        Handle {
            id: self.next_id,
            name: name.to_owned(),
        }
    }
}

impl Backend for HeadlessBackend {
    type Texture = Handle;
    type Sound = Handle;
    type Music = Handle;

    fn load_texture(&mut self, name: &str) -> Result<Handle> {
        Ok(self.alloc(name))
    }

    fn load_sound(&mut self, name: &str) -> Result<Handle> {
        Ok(self.alloc(name))
    }

    fn load_music(&mut self, name: &str) -> Result<Handle> {
        Ok(self.alloc(name))
    }

    fn play_sound(&mut self, sound: &Handle, _volume: f32) {
        self.sounds_played.push(sound.name.clone());
    }

    fn start_music(&mut self, music: &Handle, _volume: f32) {
        self.music_playing = Some(music.name.clone());
    }

    fn stop_music(&mut self, music: &Handle) {
        if self.music_playing.as_deref() == Some(music.name.as_str()) {
            self.music_playing = None;
        }
    }

    fn clear(&mut self, color: [f32; 4]) {
        self.last_clear = Some(color);
    }

    fn set_projection(&mut self, projection: Mat4) {
        self.last_projection = Some(projection);
    }

    fn begin_batch(&mut self) {
        debug_assert!(!self.batch_open, "begin_batch while a batch is open");
        self.batch_open = true;
        self.draw_calls.clear();
    }

    fn draw(&mut self, texture: &Handle, pos: Vec2) {
        debug_assert!(self.batch_open, "draw outside a batch");
        self.draw_calls.push(DrawCall {
            texture: texture.name.clone(),
            pos,
        });
        self.draws_total += 1;
    }

    fn end_batch(&mut self) {
        debug_assert!(self.batch_open, "end_batch without begin_batch");
        self.batch_open = false;
    }

    fn poll_input(&mut self) -> RawInput {
        self.input
    }

    fn now_ns(&self) -> u64 {
        self.clock_ns
    }
}
