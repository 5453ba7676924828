//! Dedicated simulation thread
//!
//! One thread runs update then render back to back until the stop flag is
//! raised. The flag is only checked between iterations, so teardown always
//! waits for the in-flight tick and frame to finish.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SUBSTEPS, TICK_HZ};
use crate::error::Result;
use crate::game::Game;
use crate::renderer::Surface;

/// Longest frame the pacer will catch up on
const MAX_FRAME: Duration = Duration::from_millis(100);

/// How ticks are scheduled against the wall clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pacing {
    /// One tick per frame, no sleeping; speed depends on the host
    Uncapped,
    /// Fixed timestep at `hz` ticks per second
    Fixed { hz: u32 },
}

impl Default for Pacing {
    fn default() -> Self {
        Pacing::Fixed { hz: TICK_HZ }
    }
}

impl Pacing {
    pub fn step(&self) -> Option<Duration> {
        match self {
            Pacing::Uncapped => None,
            Pacing::Fixed { hz } => Some(Duration::from_secs(1) / (*hz).max(1)),
        }
    }
}

/// Fixed-timestep accumulator
#[derive(Debug, Clone)]
pub struct Pacer {
    step: Option<Duration>,
    accumulator: Duration,
    last: Option<Duration>,
}

impl Pacer {
    pub fn new(pacing: Pacing) -> Self {
        Self {
            step: pacing.step(),
            accumulator: Duration::ZERO,
            last: None,
        }
    }

    /// Ticks to run this frame, given clock reading `now`
    pub fn ticks_due(&mut self, now: Duration) -> u32 {
        let Some(step) = self.step else {
            return 1;
        };
        let Some(last) = self.last.replace(now) else {
            return 0;
        };

        let mut frame = now.saturating_sub(last);
        if frame > MAX_FRAME {
            log::warn!("Frame took {:?}, dropping the excess", frame);
            frame = MAX_FRAME;
        }
        self.accumulator += frame;

        let mut substeps = 0;
        while self.accumulator >= step && substeps < MAX_SUBSTEPS {
            self.accumulator -= step;
            substeps += 1;
        }
        substeps
    }

    /// Time left until the next tick is due
    pub fn until_next(&self) -> Duration {
        self.step
            .map_or(Duration::ZERO, |step| step.saturating_sub(self.accumulator))
    }
}

/// Handle to the running simulation thread
pub struct GameLoop<S> {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<(Game, S)>>,
}

impl<S: Surface + Send + 'static> GameLoop<S> {
    /// Move the game and its surface onto a new thread and start ticking
    pub fn spawn(game: Game, surface: S, pacing: Pacing) -> Result<Self> {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let handle = thread::Builder::new()
            .name("game-loop".into())
            .spawn(move || run(game, surface, pacing, &flag))?;
        log::info!("Game loop started ({:?})", pacing);

        Ok(Self {
            stop,
            handle: Some(handle),
        })
    }
}

impl<S> GameLoop<S> {
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Signal the loop and block until it exits. Hands the game and surface
    /// back; `None` if already torn down or the thread panicked.
    pub fn teardown(&mut self) -> Option<(Game, S)> {
        let handle = self.handle.take()?;
        self.stop.store(true, Ordering::Release);
        match handle.join() {
            Ok(parts) => Some(parts),
            Err(_) => {
                log::error!("Game loop thread panicked");
                None
            }
        }
    }
}

impl<S> Drop for GameLoop<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn run<S: Surface>(mut game: Game, mut surface: S, pacing: Pacing, stop: &AtomicBool) -> (Game, S) {
    let mut pacer = Pacer::new(pacing);
    let mut ticks: u64 = 0;

    while !stop.load(Ordering::Acquire) {
        for _ in 0..pacer.ticks_due(game.now()) {
            game.update();
            ticks += 1;
        }
        game.render(&mut surface);

        let wait = pacer.until_next();
        if !wait.is_zero() {
            thread::sleep(wait);
        }
    }

    log::info!("Game loop stopped after {} ticks", ticks);
    (game, surface)
}
