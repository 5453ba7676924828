//! Cross-thread input latch
//!
//! The input thread writes, the simulation thread drains once per tick.
//! Movement flags are levels (last write wins). Jump and restart are edges:
//! they stay set until exactly one tick consumes them, so a tap between two
//! ticks is never lost. The simulation publishes the phase and pressed
//! buttons back so the input side can route taps and the renderer can
//! highlight held buttons.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::controls::ControlAction;
use crate::sim::{GamePhase, TickInput};

#[derive(Debug, Default)]
pub struct InputLatch {
    move_left: AtomicBool,
    move_right: AtomicBool,
    jump: AtomicBool,
    restart: AtomicBool,
    /// [`crate::controls::Zone::bit`] mask
    pressed: AtomicU8,
    phase: AtomicU8,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a control action from the input thread
    pub fn apply(&self, action: ControlAction) {
        match action {
            ControlAction::Left => self.move_left.store(true, Ordering::Release),
            ControlAction::Right => self.move_right.store(true, Ordering::Release),
            ControlAction::Jump => self.jump.store(true, Ordering::Release),
            ControlAction::Stop => {
                self.move_left.store(false, Ordering::Release);
                self.move_right.store(false, Ordering::Release);
            }
        }
    }

    /// Overwrite the movement levels with the buttons actually held
    pub fn set_movement(&self, left: bool, right: bool) {
        self.move_left.store(left, Ordering::Release);
        self.move_right.store(right, Ordering::Release);
    }

    pub fn request_restart(&self) {
        self.restart.store(true, Ordering::Release);
    }

    /// Read levels and consume edges for one tick
    pub fn take_tick_input(&self) -> TickInput {
        TickInput {
            move_left: self.move_left.load(Ordering::Acquire),
            move_right: self.move_right.load(Ordering::Acquire),
            jump: self.jump.swap(false, Ordering::AcqRel),
            restart: self.restart.swap(false, Ordering::AcqRel),
        }
    }

    pub fn set_pressed_mask(&self, mask: u8) {
        self.pressed.store(mask, Ordering::Release);
    }

    pub fn pressed_mask(&self) -> u8 {
        self.pressed.load(Ordering::Acquire)
    }

    pub fn publish_phase(&self, phase: GamePhase) {
        self.phase.store(phase.as_u8(), Ordering::Release);
    }

    pub fn phase(&self) -> GamePhase {
        GamePhase::from_u8(self.phase.load(Ordering::Acquire)).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_levels_persist_edges_consume() {
        let latch = InputLatch::new();
        latch.apply(ControlAction::Left);
        latch.apply(ControlAction::Jump);

        let first = latch.take_tick_input();
        assert!(first.move_left);
        assert!(first.jump);

        let second = latch.take_tick_input();
        assert!(second.move_left);
        assert!(!second.jump);
    }

    #[test]
    fn test_stop_clears_both_directions() {
        let latch = InputLatch::new();
        latch.apply(ControlAction::Left);
        latch.apply(ControlAction::Right);
        latch.apply(ControlAction::Stop);
        let input = latch.take_tick_input();
        assert!(!input.move_left && !input.move_right);
    }

    #[test]
    fn test_set_movement_overwrites_levels() {
        let latch = InputLatch::new();
        latch.apply(ControlAction::Left);
        latch.set_movement(false, true);

        let input = latch.take_tick_input();
        assert!(!input.move_left);
        assert!(input.move_right);
    }

    #[test]
    fn test_restart_edge() {
        let latch = InputLatch::new();
        latch.request_restart();
        assert!(latch.take_tick_input().restart);
        assert!(!latch.take_tick_input().restart);
    }

    #[test]
    fn test_phase_published() {
        let latch = InputLatch::new();
        assert_eq!(latch.phase(), GamePhase::Running);
        latch.publish_phase(GamePhase::ScoreDisplay);
        assert_eq!(latch.phase(), GamePhase::ScoreDisplay);
    }

    #[test]
    fn test_jump_from_other_thread_is_not_lost() {
        let latch = Arc::new(InputLatch::new());
        let writer = Arc::clone(&latch);
        thread::spawn(move || writer.apply(ControlAction::Jump))
            .join()
            .unwrap();
        assert!(latch.take_tick_input().jump);
    }
}
