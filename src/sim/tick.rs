//! Simulation tick
//!
//! Advances the session by one step. Wall-clock readings come in as
//! arguments so the whole state machine can be driven from tests.

use std::time::Duration;

use rand::Rng;

use super::state::{GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Left button held (level)
    pub move_left: bool,
    /// Right button held (level)
    pub move_right: bool,
    /// Jump pressed since the last tick (edge)
    pub jump: bool,
    /// Tap on the score screen since the last tick (edge)
    pub restart: bool,
}

/// Advance the game state by one tick at clock reading `now`
pub fn tick(state: &mut GameState, input: &TickInput, now: Duration) {
    match state.phase {
        GamePhase::Running => run(state, input, now),

        GamePhase::Paused => {
            let delay = state.tuning.game_over_delay();
            let elapsed = state
                .paused_at
                .map_or(delay, |at| now.saturating_sub(at));
            if elapsed >= delay {
                state.phase = GamePhase::ScoreDisplay;
                log::info!(
                    "Final score {} (grade {}), survived {}s",
                    state.score,
                    state.grade().as_str(),
                    state.elapsed_secs
                );
            }
        }

        GamePhase::ScoreDisplay => {
            if input.restart {
                state.reset(now);
            }
        }
    }
}

fn run(state: &mut GameState, input: &TickInput, now: Duration) {
    state.time_ticks += 1;
    state.elapsed_secs = now.saturating_sub(state.started_at).as_secs();

    // Player
    state.player.set_movement(input.move_left, input.move_right);
    if input.jump {
        state.player.jump();
    }
    state.player.update(state.viewport);

    // Spawn: one draw per tick, out of 100
    if state.rng().random_range(0..100) < state.tuning.spawn_rate {
        state.spawn_obstacle();
    }

    // Meteorites
    let viewport = state.viewport;
    let mut fallen = 0;
    let mut hit = None;
    for obstacle in &mut state.obstacles {
        obstacle.update();

        if obstacle.has_fallen_past(viewport) {
            fallen += 1;
            continue;
        }

        if state.player.collides_with(obstacle) {
            hit = Some(obstacle.id);
            break;
        }
    }

    if fallen > 0 {
        state.obstacles.retain(|o| !o.has_fallen_past(viewport));
        state.score += fallen;
        log::trace!("{} meteorite(s) landed, score {}", fallen, state.score);
    }

    if let Some(id) = hit {
        state.phase = GamePhase::Paused;
        state.paused_at = Some(now);
        log::info!(
            "Hit by meteorite {} after {}s with score {}",
            id,
            state.elapsed_secs,
            state.score
        );
    }
}
