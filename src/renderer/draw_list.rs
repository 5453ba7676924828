//! Recording surface
//!
//! Keeps the last frame's commands. Useful headless and in tests.

use glam::Vec2;

use super::{Color, SpriteId, Surface, TextStyle};
use crate::sim::Rect;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Sprite {
        sprite: SpriteId,
        dest: Rect,
        mirrored: bool,
    },
    Text {
        text: String,
        pos: Vec2,
        style: TextStyle,
    },
}

#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    /// Frames presented so far
    pub frames: u64,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn sprites(&self) -> impl Iterator<Item = (SpriteId, Rect, bool)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Sprite {
                sprite,
                dest,
                mirrored,
            } => Some((*sprite, *dest, *mirrored)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for DrawList {
    fn clear(&mut self, color: Color) {
        // A clear starts a new frame
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn draw_sprite(&mut self, sprite: SpriteId, dest: Rect, mirrored: bool) {
        self.commands.push(DrawCommand::Sprite {
            sprite,
            dest,
            mirrored,
        });
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, style: TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            style,
        });
    }

    fn present(&mut self) {
        self.frames += 1;
    }
}
