//! Game balance and layout tuning
//!
//! Every gameplay constant lives here so a host can ship a JSON override
//! without rebuilding. Missing fields fall back to [`crate::consts`].

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{GameError, Result};
use crate::runner::Pacing;

/// Game tuning knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    /// Horizontal speed (pixels per tick)
    pub player_move_speed: f32,
    /// Jump impulse (negative is up)
    pub player_jump_speed: f32,
    /// Gravity (pixels per tick²)
    pub gravity: f32,
    /// Ticks per walking-animation frame
    pub animation_frame_rate: u32,
    /// Walking frames in the sprite sheet
    pub player_walk_frames: u8,
    /// Player width as a fraction of viewport width
    pub player_width_ratio: f32,
    /// Player sprite height / width, taken from the decoded asset
    pub player_aspect: f32,
    /// Gap between the ground line and the viewport bottom
    pub ground_offset: f32,

    // === Meteorites ===
    /// Spawn chance per tick, out of 100
    pub spawn_rate: u32,
    pub meteorite_min_speed_y: f32,
    pub meteorite_max_speed_y: f32,
    pub meteorite_max_speed_x: f32,
    /// Meteorite width as a fraction of viewport width
    pub meteorite_width_ratio: f32,
    /// Hitbox inset per side, as a fraction of meteorite width
    pub hitbox_padding_ratio: f32,
    /// Height / width of each sprite variant, taken from the decoded assets
    pub meteorite_aspects: Vec<f32>,

    // === Controls ===
    pub button_size_ratio: f32,
    pub button_margin_ratio: f32,

    // === Flow ===
    /// Freeze after a hit before the score screen (milliseconds)
    pub game_over_delay_ms: u64,
    /// Loop pacing
    pub pacing: Pacing,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_move_speed: PLAYER_MOVE_SPEED,
            player_jump_speed: PLAYER_JUMP_SPEED,
            gravity: GRAVITY,
            animation_frame_rate: ANIMATION_FRAME_RATE,
            player_walk_frames: PLAYER_WALK_FRAMES,
            player_width_ratio: PLAYER_WIDTH_RATIO,
            player_aspect: 1.0,
            ground_offset: GROUND_OFFSET,

            spawn_rate: METEORITE_SPAWN_RATE,
            meteorite_min_speed_y: METEORITE_MIN_SPEED_Y,
            meteorite_max_speed_y: METEORITE_MAX_SPEED_Y,
            meteorite_max_speed_x: METEORITE_MAX_SPEED_X,
            meteorite_width_ratio: METEORITE_WIDTH_RATIO,
            hitbox_padding_ratio: METEORITE_HITBOX_PADDING_RATIO,
            meteorite_aspects: vec![1.0; METEORITE_VARIANTS],

            button_size_ratio: BUTTON_SIZE_RATIO,
            button_margin_ratio: BUTTON_MARGIN_RATIO,

            game_over_delay_ms: GAME_OVER_DELAY_MS,
            pacing: Pacing::default(),
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate a JSON tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::debug!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Delay between the collision freeze and the score screen
    pub fn game_over_delay(&self) -> Duration {
        Duration::from_millis(self.game_over_delay_ms)
    }

    /// Reject values that would produce degenerate layouts or physics
    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("player_move_speed", self.player_move_speed),
            ("player_jump_speed", self.player_jump_speed),
            ("gravity", self.gravity),
            ("player_width_ratio", self.player_width_ratio),
            ("player_aspect", self.player_aspect),
            ("ground_offset", self.ground_offset),
            ("meteorite_min_speed_y", self.meteorite_min_speed_y),
            ("meteorite_max_speed_y", self.meteorite_max_speed_y),
            ("meteorite_max_speed_x", self.meteorite_max_speed_x),
            ("meteorite_width_ratio", self.meteorite_width_ratio),
            ("hitbox_padding_ratio", self.hitbox_padding_ratio),
            ("button_size_ratio", self.button_size_ratio),
            ("button_margin_ratio", self.button_margin_ratio),
        ];
        if let Some((name, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(invalid(format!("{name} must be finite")));
        }

        if self.player_move_speed < 0.0 {
            return Err(invalid("player_move_speed must not be negative"));
        }
        if self.player_jump_speed >= 0.0 {
            return Err(invalid("player_jump_speed must be negative (upward)"));
        }
        if self.gravity <= 0.0 {
            return Err(invalid("gravity must be positive"));
        }
        if self.animation_frame_rate == 0 {
            return Err(invalid("animation_frame_rate must be at least 1"));
        }
        if self.player_walk_frames == 0 {
            return Err(invalid("player_walk_frames must be at least 1"));
        }
        if !(self.player_width_ratio > 0.0 && self.player_width_ratio <= 1.0) {
            return Err(invalid("player_width_ratio must be in (0, 1]"));
        }
        if self.player_aspect <= 0.0 {
            return Err(invalid("player_aspect must be positive"));
        }
        if self.ground_offset < 0.0 {
            return Err(invalid("ground_offset must not be negative"));
        }

        if self.spawn_rate > 100 {
            return Err(invalid("spawn_rate is out of 100"));
        }
        if self.meteorite_min_speed_y <= 0.0 {
            return Err(invalid("meteorite_min_speed_y must be positive"));
        }
        if self.meteorite_min_speed_y > self.meteorite_max_speed_y {
            return Err(invalid("meteorite_min_speed_y exceeds meteorite_max_speed_y"));
        }
        if self.meteorite_max_speed_x < 0.0 {
            return Err(invalid("meteorite_max_speed_x must not be negative"));
        }
        if !(self.meteorite_width_ratio > 0.0 && self.meteorite_width_ratio <= 1.0) {
            return Err(invalid("meteorite_width_ratio must be in (0, 1]"));
        }
        if !(0.0..0.5).contains(&self.hitbox_padding_ratio) {
            return Err(invalid("hitbox_padding_ratio must be in [0, 0.5)"));
        }
        if self.meteorite_aspects.is_empty() {
            return Err(invalid("at least one meteorite variant is required"));
        }
        if self
            .meteorite_aspects
            .iter()
            .any(|a| !a.is_finite() || *a <= 0.0)
        {
            return Err(invalid("meteorite aspects must be finite and positive"));
        }

        if self.button_size_ratio <= 0.0 || self.button_margin_ratio < 0.0 {
            return Err(invalid("button ratios must be positive"));
        }
        // left + right on one side, jump on the other, all with margins
        if 3.0 * (self.button_size_ratio + self.button_margin_ratio) > 1.0 {
            return Err(invalid("control buttons do not fit the viewport width"));
        }

        if let Pacing::Fixed { hz: 0 } = self.pacing {
            return Err(invalid("fixed pacing needs a non-zero rate"));
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> GameError {
    GameError::InvalidTuning(msg.into())
}
