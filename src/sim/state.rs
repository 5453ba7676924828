//! Game session state and core simulation types

use std::time::Duration;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::geometry::Viewport;
use super::grade::Grade;
use super::obstacle::Obstacle;
use super::player::Player;
use crate::error::Result;
use crate::tuning::Tuning;

/// Top-level state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Running = 0,
    /// Frozen after a hit, waiting out the game-over delay
    Paused = 1,
    /// Final score and grade, waiting for a tap
    ScoreDisplay = 2,
}

impl GamePhase {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(GamePhase::Running),
            1 => Some(GamePhase::Paused),
            2 => Some(GamePhase::ScoreDisplay),
            _ => None,
        }
    }
}

/// Complete session state. Only the tick mutates it.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub viewport: Viewport,
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Meteorites that fell past the bottom this run
    pub score: u32,
    /// Whole seconds survived this run
    pub elapsed_secs: u64,
    /// Running ticks this run
    pub time_ticks: u64,
    /// Clock reading when the run started
    pub started_at: Duration,
    /// Clock reading when the collision freeze began
    pub paused_at: Option<Duration>,
    pub player: Player,
    /// Active meteorites in spawn order
    pub obstacles: Vec<Obstacle>,
    next_id: u32,
}

impl GameState {
    /// Start a new session at clock reading `now`
    pub fn new(viewport: Viewport, tuning: Tuning, seed: u64, now: Duration) -> Result<Self> {
        tuning.validate()?;
        let player = Player::new(viewport, &tuning);
        log::info!(
            "Session started: viewport {}x{}, seed {}",
            viewport.width(),
            viewport.height(),
            seed
        );

        Ok(Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            viewport,
            tuning,
            phase: GamePhase::Running,
            score: 0,
            elapsed_secs: 0,
            time_ticks: 0,
            started_at: now,
            paused_at: None,
            player,
            obstacles: Vec::new(),
            next_id: 1,
        })
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    pub(crate) fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    /// Spawn one meteorite above the viewport
    pub fn spawn_obstacle(&mut self) {
        let id = self.next_entity_id();
        let obstacle = Obstacle::spawn(id, &mut self.rng, self.viewport, &self.tuning);
        log::debug!(
            "Spawned meteorite {} at x={:.1} vel=({:.2}, {:.2})",
            id,
            obstacle.pos().x,
            obstacle.velocity().x,
            obstacle.velocity().y
        );
        self.obstacles.push(obstacle);
    }

    /// Throw the run away and start over. The RNG stream carries on so
    /// consecutive runs differ.
    pub fn reset(&mut self, now: Duration) {
        log::info!(
            "Restarting: previous run scored {} in {}s",
            self.score,
            self.elapsed_secs
        );
        self.score = 0;
        self.obstacles.clear();
        self.player = Player::new(self.viewport, &self.tuning);
        self.started_at = now;
        self.paused_at = None;
        self.elapsed_secs = 0;
        self.time_ticks = 0;
        self.phase = GamePhase::Running;
    }

    pub fn grade(&self) -> Grade {
        Grade::from_score(self.score)
    }
}
