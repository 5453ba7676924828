//! Host-facing game API
//!
//! [`Game`] lives on the simulation thread and owns the session;
//! [`InputHandle`] lives on the input thread and owns the button tracking.
//! The two only share an [`InputLatch`].

use std::sync::Arc;
use std::time::Duration;

use crate::controls::{ControlLayout, TouchControls, TouchEvent, TouchPhase, Zone};
use crate::error::Result;
use crate::platform::{Clock, InputLatch};
use crate::renderer::{self, Surface};
use crate::sim::{GamePhase, GameState, Viewport, tick};
use crate::tuning::Tuning;

pub struct Game {
    state: GameState,
    layout: ControlLayout,
    latch: Arc<InputLatch>,
    clock: Arc<dyn Clock>,
}

impl Game {
    /// Build a session and the input handle that feeds it
    pub fn new(
        viewport: Viewport,
        tuning: Tuning,
        seed: u64,
        clock: Arc<dyn Clock>,
    ) -> Result<(Self, InputHandle)> {
        let state = GameState::new(viewport, tuning, seed, clock.now())?;
        let controls = TouchControls::new(viewport, &state.tuning);
        let latch = Arc::new(InputLatch::new());
        latch.publish_phase(state.phase);

        let game = Self {
            state,
            layout: *controls.layout(),
            latch: Arc::clone(&latch),
            clock,
        };
        Ok((game, InputHandle { controls, latch }))
    }

    /// Run one tick with whatever input arrived since the last one
    pub fn update(&mut self) {
        let input = self.latch.take_tick_input();
        tick(&mut self.state, &input, self.clock.now());
        self.latch.publish_phase(self.state.phase);
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        renderer::render(&self.state, &self.layout, self.latch.pressed_mask(), surface);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn now(&self) -> Duration {
        self.clock.now()
    }
}

/// Input-thread side: turns raw touches into latch writes
pub struct InputHandle {
    controls: TouchControls,
    latch: Arc<InputLatch>,
}

impl InputHandle {
    pub fn on_touch(&mut self, event: &TouchEvent) {
        let releasing = matches!(
            event.phase,
            TouchPhase::Up | TouchPhase::PointerUp | TouchPhase::Cancel
        );

        match self.latch.phase() {
            GamePhase::Running => self.dispatch(event),
            // Lifted fingers still need releasing so nothing stays held
            GamePhase::Paused if releasing => self.dispatch(event),
            GamePhase::Paused => {}
            GamePhase::ScoreDisplay => {
                if event.phase == TouchPhase::Down {
                    log::debug!("Restart requested");
                    self.latch.request_restart();
                } else if releasing {
                    self.dispatch(event);
                }
            }
        }

        // Actions only say what changed; a lifted finger can leave the
        // other movement button held without emitting anything
        self.latch.set_movement(
            self.controls.is_pressed(Zone::Left),
            self.controls.is_pressed(Zone::Right),
        );
        self.latch.set_pressed_mask(self.controls.pressed_mask());
    }

    fn dispatch(&mut self, event: &TouchEvent) {
        for action in self.controls.handle(event) {
            log::trace!("Control action {:?}", action);
            self.latch.apply(action);
        }
    }

    pub fn controls(&self) -> &TouchControls {
        &self.controls
    }
}
