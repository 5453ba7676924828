//! Simulation module
//!
//! All gameplay logic lives here. No rendering, threading or platform code:
//! - Time comes in as a clock reading per tick
//! - Seeded RNG only
//! - Entities are mutated only inside `tick`

pub mod geometry;
pub mod grade;
pub mod obstacle;
pub mod player;
pub mod state;
pub mod tick;

pub use geometry::{Rect, Viewport};
pub use grade::Grade;
pub use obstacle::Obstacle;
pub use player::{Player, PlayerFrame, PlayerPose};
pub use state::{GamePhase, GameState};
pub use tick::{TickInput, tick};
