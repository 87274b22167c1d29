//! The game session loop
//!
//! One [`Session`] per process run, driven by a caller-owned loop through
//! the three-call lifecycle contract: `create` once, `render` once per
//! frame, `dispose` once at shutdown. The session exclusively owns its
//! asset handles; they are acquired in `create` and released with it.

use anyhow::Result;

use crate::audio::{AudioMixer, SoundEffect};
use crate::consts::CLEAR_COLOR;
use crate::platform::Backend;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickInput, tick};
use crate::view::View;

/// A running game session
pub struct Session<B: Backend> {
    catcher_texture: B::Texture,
    drop_texture: B::Texture,
    mixer: AudioMixer<B>,
    view: View,
    settings: Settings,
    state: GameState,
    caught: u64,
    missed: u64,
}

impl<B: Backend> Session<B> {
    /// Acquire assets, start the background music and set up the field
    pub fn create(backend: &mut B, settings: Settings, seed: u64) -> Result<Self> {
        log::info!("Session starting with seed {seed}");

        let catcher_texture = backend.load_texture("bucket.png")?;
        let drop_texture = backend.load_texture("droplet.png")?;
        let mixer = AudioMixer::load(backend, &settings)?;
        mixer.start_music(backend);

        let state = GameState::new(seed, backend.now_ns());

        Ok(Self {
            catcher_texture,
            drop_texture,
            mixer,
            view: View::default(),
            settings,
            state,
            caught: 0,
            missed: 0,
        })
    }

    /// Advance and draw one frame
    ///
    /// `dt` is the host-supplied elapsed seconds since the previous frame.
    pub fn render(&mut self, backend: &mut B, dt: f32) {
        let raw = backend.poll_input();
        let input = TickInput {
            target_x: raw.pointer.map(|p| self.view.unproject(p).x),
            move_left: raw.left_held,
            move_right: raw.right_held,
            idle_mode: self.settings.autopilot,
        };

        let events = tick(&mut self.state, &input, dt, backend.now_ns());
        for event in &events {
            match event {
                GameEvent::Caught { .. } => {
                    self.caught += 1;
                    self.mixer.play(backend, SoundEffect::Catch);
                }
                GameEvent::Missed { .. } => self.missed += 1,
                GameEvent::Spawned { .. } => {}
            }
        }

        backend.clear(CLEAR_COLOR);
        backend.set_projection(self.view.projection());
        backend.begin_batch();
        backend.draw(&self.catcher_texture, self.state.catcher.rect.pos);
        for drop in &self.state.drops {
            backend.draw(&self.drop_texture, drop.rect.pos);
        }
        backend.end_batch();
    }

    /// The output surface changed size
    pub fn resize(&mut self, width: u32, height: u32) {
        self.view.resize(width, height);
    }

    /// Stop the music and release the session's assets
    pub fn dispose(self, backend: &mut B) {
        self.mixer.stop_music(backend);
        log::info!(
            "Session over after {} frames: {} caught, {} missed",
            self.state.time_ticks,
            self.caught,
            self.missed
        );
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn caught(&self) -> u64 {
        self.caught
    }

    pub fn missed(&self) -> u64 {
        self.missed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::platform::RawInput;
    use crate::platform::headless::HeadlessBackend;
    use glam::Vec2;

    const DT: f32 = 1.0 / 60.0;
    const DT_NS: u64 = 16_666_667;

    fn session(backend: &mut HeadlessBackend) -> Session<HeadlessBackend> {
        Session::create(backend, Settings::default(), 42).unwrap()
    }

    #[test]
    fn test_create_starts_music_and_spawns() {
        let mut backend = HeadlessBackend::new();
        let session = session(&mut backend);
        assert_eq!(backend.music_playing.as_deref(), Some("rain.mp3"));
        assert_eq!(session.state().drops.len(), 1);
    }

    #[test]
    fn test_render_draws_catcher_then_drops() {
        let mut backend = HeadlessBackend::new();
        let mut session = session(&mut backend);

        backend.advance_clock(DT_NS);
        session.render(&mut backend, DT);

        assert_eq!(backend.last_clear, Some(CLEAR_COLOR));
        assert!(backend.last_projection.is_some());
        assert_eq!(backend.draw_calls.len(), 2);
        assert_eq!(backend.draw_calls[0].texture, "bucket.png");
        assert_eq!(backend.draw_calls[1].texture, "droplet.png");
    }

    #[test]
    fn test_pointer_is_unprojected_to_field() {
        let mut backend = HeadlessBackend::new();
        let mut session = session(&mut backend);
        // Surface twice the field size: pixel 200 is field 100
        session.resize(1600, 960);
        backend.input = RawInput {
            pointer: Some(Vec2::new(200.0, 0.0)),
            ..Default::default()
        };

        backend.advance_clock(DT_NS);
        session.render(&mut backend, DT);

        assert_eq!(
            session.state().catcher.rect.pos.x,
            100.0 - SPRITE_SIZE / 2.0
        );
    }

    #[test]
    fn test_dispose_stops_music() {
        let mut backend = HeadlessBackend::new();
        let session = session(&mut backend);
        session.dispose(&mut backend);
        assert!(backend.music_playing.is_none());
    }
}
