//! Meteor Dodge headless runner
//!
//! Mobile hosts embed the library and supply their own surface and touch
//! events. This binary drives the same loop natively against a recording
//! surface with a scripted finger, which is handy for smoke testing tuning
//! files: `meteor-dodge [tuning.json]`.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Meteor Dodge (headless) starting...");

    if let Err(e) = headless::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web hosts embed the library directly
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    use meteor_dodge::controls::{TouchEvent, TouchPhase, Zone};
    use meteor_dodge::platform::SystemClock;
    use meteor_dodge::renderer::DrawList;
    use meteor_dodge::sim::Viewport;
    use meteor_dodge::{Game, GameLoop, Result, Tuning};

    const VIEWPORT: (f32, f32) = (1080.0, 1920.0);

    pub fn run() -> Result<()> {
        let tuning = match std::env::args().nth(1) {
            Some(path) => Tuning::load(path)?,
            None => Tuning::default(),
        };
        let pacing = tuning.pacing;
        let viewport = Viewport::new(VIEWPORT.0, VIEWPORT.1)?;
        let seed: u64 = rand::random();

        let (game, mut input) = Game::new(viewport, tuning, seed, Arc::new(SystemClock::new()))?;
        let layout = *input.controls().layout();
        let mut game_loop = GameLoop::spawn(game, DrawList::new(), pacing)?;

        // Scripted finger: pace back and forth, hopping at each turn
        let center = |zone: Zone| {
            let r = layout.rect(zone);
            ((r.left + r.right) / 2.0, (r.top + r.bottom) / 2.0)
        };
        for (i, zone) in [Zone::Right, Zone::Left, Zone::Right, Zone::Left]
            .into_iter()
            .enumerate()
        {
            let (x, y) = center(zone);
            input.on_touch(&TouchEvent::single(TouchPhase::Down, 1, x, y));

            let (jx, jy) = center(Zone::Jump);
            input.on_touch(&TouchEvent::single(TouchPhase::PointerDown, 2, jx, jy));
            input.on_touch(&TouchEvent::single(TouchPhase::PointerUp, 2, jx, jy));

            thread::sleep(Duration::from_millis(750));
            input.on_touch(&TouchEvent::single(TouchPhase::Up, 1, x, y));
            log::debug!("Script step {} done", i);
        }

        let Some((game, surface)) = game_loop.teardown() else {
            log::warn!("Loop ended abnormally, no summary available");
            return Ok(());
        };

        let state = game.state();
        log::info!(
            "Phase {:?}, score {} (grade {}), {}s survived, {} frames drawn",
            state.phase,
            state.score,
            state.grade().as_str(),
            state.elapsed_secs,
            surface.frames
        );
        Ok(())
    }
}
