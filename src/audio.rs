//! Audio playback
//!
//! Owns the sound and music handles plus the volume/mute state, and maps
//! game sound effects onto the backend. Playback is fire-and-forget.

use anyhow::Result;

use crate::platform::Backend;
use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// A raindrop landed in the catcher
    Catch,
}

/// Audio mixer for the game
pub struct AudioMixer<B: Backend> {
    catch_sound: B::Sound,
    rain_music: B::Music,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
}

impl<B: Backend> AudioMixer<B> {
    /// Load the sound effect and the background track
    pub fn load(backend: &mut B, settings: &Settings) -> Result<Self> {
        let catch_sound = backend.load_sound("drop.wav")?;
        let rain_music = backend.load_music("rain.mp3")?;
        Ok(Self {
            catch_sound,
            rain_music,
            master_volume: settings.master_volume,
            sfx_volume: settings.sfx_volume,
            music_volume: settings.music_volume,
            muted: settings.muted,
        })
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_sfx_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    fn effective_music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.music_volume
        }
    }

    /// Start the background track looping
    pub fn start_music(&self, backend: &mut B) {
        backend.start_music(&self.rain_music, self.effective_music_volume());
    }

    /// Stop the background track
    pub fn stop_music(&self, backend: &mut B) {
        backend.stop_music(&self.rain_music);
    }

    /// Play a sound effect
    pub fn play(&self, backend: &mut B, effect: SoundEffect) {
        let vol = self.effective_sfx_volume();
        if vol <= 0.0 {
            return;
        }
        match effect {
            SoundEffect::Catch => backend.play_sound(&self.catch_sound, vol),
        }
    }
}
