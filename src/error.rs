//! Crate-wide error type.
//!
//! Everything inside the tick is infallible; errors only come from
//! construction (bad geometry or tuning) and from the platform edges
//! (reading a tuning file, spawning the loop thread).

use std::io;

#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Invalid viewport {width}x{height}: dimensions must be finite and positive")]
    InvalidViewport { width: f32, height: f32 },

    #[error("Invalid tuning: {0}")]
    InvalidTuning(String),

    #[error("Tuning parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
