//! Rendering module
//!
//! The game never touches pixels. A frame is a short list of clear, sprite
//! and text commands issued against a host-provided [`Surface`]; decoded and
//! pre-scaled bitmaps live on the host side, keyed by [`SpriteId`].

pub mod draw_list;
pub mod frame;

pub use draw_list::{DrawCommand, DrawList};
pub use frame::render;

use glam::Vec2;

use crate::controls::Zone;
use crate::sim::Rect;

/// RGBA, 0-1 per channel
pub type Color = [f32; 4];

pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];

/// Host-side bitmap identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    /// Walking frame by index; frame 0 is also the idle pose
    PlayerWalk(u8),
    PlayerJump,
    /// Meteorite sprite variant
    Meteorite(u8),
    /// Control button icon, highlighted while held
    Button { zone: Zone, pressed: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Text styling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub align: TextAlign,
    pub color: Color,
    pub bold: bool,
}

impl TextStyle {
    pub fn new(size: f32, align: TextAlign) -> Self {
        Self {
            size,
            align,
            color: BLACK,
            bold: true,
        }
    }
}

/// Drawing target supplied by the host
pub trait Surface {
    fn clear(&mut self, color: Color);

    /// Blit a sprite into `dest`, flipped horizontally about its own width
    /// when `mirrored`
    fn draw_sprite(&mut self, sprite: SpriteId, dest: Rect, mirrored: bool);

    /// Draw text with its baseline at `pos`
    fn draw_text(&mut self, text: &str, pos: Vec2, style: TextStyle);

    /// Called once the frame is complete
    fn present(&mut self) {}
}
