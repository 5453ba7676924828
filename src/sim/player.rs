//! The player-controlled dinosaur
//!
//! Per-tick horizontal motion, jump/gravity integration against a fixed
//! ground line, and the walking animation counter.

use glam::Vec2;

use super::geometry::{Rect, Viewport};
use super::obstacle::Obstacle;
use crate::tuning::Tuning;

/// Which sprite frame the player shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerFrame {
    /// Walking frame by index (0 doubles as the idle frame)
    Walk(u8),
    Jump,
}

/// Sprite selection for the current tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerPose {
    pub frame: PlayerFrame,
    /// Flip horizontally about the sprite's own width
    pub mirrored: bool,
}

/// Physics constants copied out of [`Tuning`] at construction
#[derive(Debug, Clone, Copy)]
struct PlayerParams {
    move_speed: f32,
    jump_speed: f32,
    gravity: f32,
    animation_frame_rate: u32,
    walk_frames: u8,
    ground_offset: f32,
}

#[derive(Debug, Clone)]
pub struct Player {
    pos: Vec2,
    size: Vec2,
    y_vel: f32,
    moving_left: bool,
    moving_right: bool,
    jumping: bool,
    grounded: bool,
    frame_index: u8,
    frame_counter: u32,
    bounds: Rect,
    params: PlayerParams,
}

impl Player {
    /// Spawn standing on the ground line, centered horizontally
    pub fn new(viewport: Viewport, tuning: &Tuning) -> Self {
        let width = viewport.width() * tuning.player_width_ratio;
        let size = Vec2::new(width, width * tuning.player_aspect);
        let params = PlayerParams {
            move_speed: tuning.player_move_speed,
            jump_speed: tuning.player_jump_speed,
            gravity: tuning.gravity,
            animation_frame_rate: tuning.animation_frame_rate,
            walk_frames: tuning.player_walk_frames,
            ground_offset: tuning.ground_offset,
        };
        let pos = Vec2::new(
            viewport.width() / 2.0 - size.x / 2.0,
            viewport.height() - size.y - params.ground_offset,
        );

        Self {
            pos,
            size,
            y_vel: 0.0,
            moving_left: false,
            moving_right: false,
            jumping: false,
            grounded: true,
            frame_index: 0,
            frame_counter: 0,
            bounds: Rect::from_pos_size(pos, size),
            params,
        }
    }

    /// Y coordinate of the top edge while standing
    pub fn ground_y(&self, viewport: Viewport) -> f32 {
        viewport.height() - self.size.y - self.params.ground_offset
    }

    /// Set the level-triggered movement flags
    pub fn set_movement(&mut self, left: bool, right: bool) {
        self.moving_left = left;
        self.moving_right = right;
    }

    /// Advance one tick
    pub fn update(&mut self, viewport: Viewport) {
        // Horizontal; left wins when both are held
        if self.moving_left {
            self.pos.x -= self.params.move_speed;
        } else if self.moving_right {
            self.pos.x += self.params.move_speed;
        }
        self.pos.x = self.pos.x.clamp(0.0, (viewport.width() - self.size.x).max(0.0));

        // Vertical
        if !self.grounded {
            self.y_vel += self.params.gravity;
            self.pos.y += self.y_vel;
        }
        let ground_y = self.ground_y(viewport);
        if self.pos.y >= ground_y {
            self.pos.y = ground_y;
            self.y_vel = 0.0;
            self.grounded = true;
            self.jumping = false;
        }

        // Animation
        self.frame_counter += 1;
        if self.frame_counter >= self.params.animation_frame_rate {
            self.frame_index = if self.is_moving() {
                (self.frame_index + 1) % self.params.walk_frames
            } else {
                0
            };
            self.frame_counter = 0;
        }

        self.bounds = Rect::from_pos_size(self.pos, self.size);
    }

    /// Start a jump; ignored while airborne
    pub fn jump(&mut self) {
        if self.grounded {
            self.jumping = true;
            self.grounded = false;
            self.y_vel = self.params.jump_speed;
        }
    }

    pub fn collides_with(&self, obstacle: &Obstacle) -> bool {
        self.bounds.intersects(&obstacle.hitbox())
    }

    /// Jumping beats walking, walking beats idle; facing left mirrors
    pub fn pose(&self) -> PlayerPose {
        let frame = if self.jumping {
            PlayerFrame::Jump
        } else if self.is_moving() {
            PlayerFrame::Walk(self.frame_index)
        } else {
            PlayerFrame::Walk(0)
        };
        PlayerPose {
            frame,
            mirrored: self.moving_left,
        }
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.moving_left || self.moving_right
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn velocity_y(&self) -> f32 {
        self.y_vel
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn is_jumping(&self) -> bool {
        self.jumping
    }

    pub fn frame_index(&self) -> u8 {
        self.frame_index
    }
}
