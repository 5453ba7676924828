//! Meteor Dodge - a touch-driven arcade game
//!
//! Core modules:
//! - `sim`: Simulation (player physics, meteorites, collisions, game state)
//! - `controls`: On-screen button hit-testing and multi-touch tracking
//! - `renderer`: Drawing-surface abstraction and frame composition
//! - `platform`: Clock and cross-thread input latch
//! - `runner`: Dedicated simulation thread with orderly teardown
//! - `tuning`: Data-driven game balance

pub mod controls;
pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod runner;
pub mod sim;
pub mod tuning;

pub use error::{GameError, Result};
pub use game::{Game, InputHandle};
pub use runner::{GameLoop, Pacing};
pub use tuning::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Horizontal player speed (pixels per tick)
    pub const PLAYER_MOVE_SPEED: f32 = 15.0;
    /// Initial jump velocity (negative is up)
    pub const PLAYER_JUMP_SPEED: f32 = -45.0;
    /// Downward acceleration (pixels per tick²)
    pub const GRAVITY: f32 = 3.5;
    /// Ticks between animation frame changes
    pub const ANIMATION_FRAME_RATE: u32 = 4;
    /// Number of walking frames in the player sprite sheet
    pub const PLAYER_WALK_FRAMES: u8 = 4;
    /// Player width as a fraction of viewport width
    pub const PLAYER_WIDTH_RATIO: f32 = 0.1;
    /// Gap between the player's feet and the viewport bottom
    pub const GROUND_OFFSET: f32 = 50.0;

    /// Meteorite spawn chance per tick, out of 100
    pub const METEORITE_SPAWN_RATE: u32 = 2;
    pub const METEORITE_MIN_SPEED_Y: f32 = 10.0;
    pub const METEORITE_MAX_SPEED_Y: f32 = 25.0;
    /// Horizontal drift is drawn from [-MAX, MAX]
    pub const METEORITE_MAX_SPEED_X: f32 = 10.0;
    /// Meteorite width as a fraction of viewport width
    pub const METEORITE_WIDTH_RATIO: f32 = 0.08;
    /// Hitbox inset on every side, as a fraction of meteorite width
    pub const METEORITE_HITBOX_PADDING_RATIO: f32 = 0.15;
    /// Number of meteorite sprite variants
    pub const METEORITE_VARIANTS: usize = 5;

    /// Control button size (fraction of viewport width)
    pub const BUTTON_SIZE_RATIO: f32 = 0.15;
    pub const BUTTON_MARGIN_RATIO: f32 = 0.05;

    /// Freeze after a hit before the score screen appears
    pub const GAME_OVER_DELAY_MS: u64 = 2000;

    /// Default simulation rate for fixed pacing
    pub const TICK_HZ: u32 = 60;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
}
