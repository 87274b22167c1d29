//! Raincatch entry point
//!
//! Runs a headless autopilot demo: the recording backend stands in for a
//! real window and speaker, the clock is stepped at 60 fps, and the
//! autopilot steers the catcher.

use std::time::{SystemTime, UNIX_EPOCH};

use raincatch::Settings;
use raincatch::platform::headless::HeadlessBackend;
use raincatch::session::Session;

/// Demo length: 30 seconds at 60 fps
const FRAMES: u32 = 1800;
const DT: f32 = 1.0 / 60.0;
const DT_NS: u64 = 16_666_667;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Raincatch starting (headless demo)");

    let mut settings = Settings::load_from("raincatch-settings.json");
    settings.autopilot = true;

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    let mut backend = HeadlessBackend::new();
    let mut session = Session::create(&mut backend, settings, seed)?;

    for _ in 0..FRAMES {
        backend.advance_clock(DT_NS);
        session.render(&mut backend, DT);
    }

    log::info!(
        "Demo finished: {} caught, {} missed, {} still falling",
        session.caught(),
        session.missed(),
        session.state().drops.len()
    );
    session.dispose(&mut backend);

    Ok(())
}
