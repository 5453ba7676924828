//! Screen-space geometry
//!
//! Top-left origin, y grows downward, units are surface pixels.

use glam::Vec2;

use crate::error::{GameError, Result};

/// Axis-aligned rectangle stored as edges
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle from a top-left corner and a size
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, pos.x + size.x, pos.y + size.y)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Strict overlap: rectangles that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }

    /// Half-open containment (left/top edges inclusive, right/bottom exclusive)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left && point.x < self.right && point.y >= self.top && point.y < self.bottom
    }

    /// Shrink every side by `padding`
    pub fn inset(&self, padding: f32) -> Self {
        Self::new(
            self.left + padding,
            self.top + padding,
            self.right - padding,
            self.bottom - padding,
        )
    }
}

/// Drawable area dimensions, validated once at surface creation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Result<Self> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(GameError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 15.0, 15.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 20.0, 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_contained_rect_intersects() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 60.0, 60.0);
        assert!(outer.intersects(&inner));
    }

    #[test]
    fn test_contains_is_half_open() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Vec2::new(0.0, 0.0)));
        assert!(r.contains(Vec2::new(9.9, 9.9)));
        assert!(!r.contains(Vec2::new(10.0, 5.0)));
        assert!(!r.contains(Vec2::new(5.0, 10.0)));
    }

    #[test]
    fn test_inset() {
        let r = Rect::new(0.0, 0.0, 100.0, 50.0).inset(10.0);
        assert_eq!(r, Rect::new(10.0, 10.0, 90.0, 40.0));
        assert_eq!(r.width(), 80.0);
        assert_eq!(r.height(), 30.0);
    }

    #[test]
    fn test_viewport_rejects_degenerate() {
        assert!(Viewport::new(0.0, 100.0).is_err());
        assert!(Viewport::new(100.0, -1.0).is_err());
        assert!(Viewport::new(f32::NAN, 100.0).is_err());
        assert!(Viewport::new(f32::INFINITY, 100.0).is_err());
        assert!(Viewport::new(1080.0, 1920.0).is_ok());
    }
}
