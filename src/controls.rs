//! On-screen control buttons
//!
//! Three fixed zones along the bottom of the screen: left and right in the
//! bottom-left corner, jump in the bottom-right. Each pointer is tracked by
//! id from press to release so several fingers can hold buttons at once.
//! Presses only register on down events; dragging a finger into or out of
//! a zone does nothing until it lifts.

use std::collections::{HashMap, HashSet};

use glam::Vec2;

use crate::sim::{Rect, Viewport};
use crate::tuning::Tuning;

/// Platform pointer identifier
pub type PointerId = i32;

/// A control button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    Left,
    Right,
    Jump,
}

impl Zone {
    pub const ALL: [Zone; 3] = [Zone::Left, Zone::Right, Zone::Jump];

    /// Bit used in pressed-zone masks
    pub fn bit(self) -> u8 {
        match self {
            Zone::Left => 1 << 0,
            Zone::Right => 1 << 1,
            Zone::Jump => 1 << 2,
        }
    }

    pub fn is_movement(self) -> bool {
        matches!(self, Zone::Left | Zone::Right)
    }
}

/// Semantic output of the controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Left,
    Right,
    Jump,
    /// No finger is left on a movement button
    Stop,
}

/// Raw pointer event kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// First finger down
    Down,
    /// Additional finger down
    PointerDown,
    Move,
    /// Last finger up
    Up,
    /// A non-last finger up
    PointerUp,
    /// Gesture aborted by the platform; every pointer is released
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub id: PointerId,
    pub pos: Vec2,
}

/// One platform touch event: every active pointer plus which one changed
#[derive(Debug, Clone, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub pointers: Vec<TouchPoint>,
    /// Index into `pointers` of the pointer this event is about
    pub action_index: usize,
}

impl TouchEvent {
    /// Event carrying a single pointer
    pub fn single(phase: TouchPhase, id: PointerId, x: f32, y: f32) -> Self {
        Self {
            phase,
            pointers: vec![TouchPoint {
                id,
                pos: Vec2::new(x, y),
            }],
            action_index: 0,
        }
    }

    /// The pointer that went down or up
    pub fn action_pointer(&self) -> Option<&TouchPoint> {
        self.pointers.get(self.action_index)
    }
}

/// Button rectangles, computed once from the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlLayout {
    pub left: Rect,
    pub right: Rect,
    pub jump: Rect,
}

impl ControlLayout {
    pub fn new(viewport: Viewport, tuning: &Tuning) -> Self {
        let size = viewport.width() * tuning.button_size_ratio;
        let margin = viewport.width() * tuning.button_margin_ratio;
        let top = viewport.height() - margin - size;
        let bottom = top + size;

        Self {
            left: Rect::new(margin, top, margin + size, bottom),
            right: Rect::new(margin * 2.0 + size, top, margin * 2.0 + size * 2.0, bottom),
            jump: Rect::new(
                viewport.width() - margin - size,
                top,
                viewport.width() - margin,
                bottom,
            ),
        }
    }

    pub fn rect(&self, zone: Zone) -> Rect {
        match zone {
            Zone::Left => self.left,
            Zone::Right => self.right,
            Zone::Jump => self.jump,
        }
    }

    /// Zone under a point, checked left, right, jump
    pub fn zone_at(&self, pos: Vec2) -> Option<Zone> {
        Zone::ALL.into_iter().find(|z| self.rect(*z).contains(pos))
    }
}

/// Multi-touch button state
#[derive(Debug, Clone)]
pub struct TouchControls {
    layout: ControlLayout,
    /// Pointers holding left or right
    movement: HashMap<PointerId, Zone>,
    /// Pointers holding jump
    jump: HashSet<PointerId>,
    /// Zones drawn as pressed
    pressed: HashSet<Zone>,
}

impl TouchControls {
    pub fn new(viewport: Viewport, tuning: &Tuning) -> Self {
        Self {
            layout: ControlLayout::new(viewport, tuning),
            movement: HashMap::new(),
            jump: HashSet::new(),
            pressed: HashSet::new(),
        }
    }

    pub fn layout(&self) -> &ControlLayout {
        &self.layout
    }

    /// Translate a raw event into actions, in emission order
    pub fn handle(&mut self, event: &TouchEvent) -> Vec<ControlAction> {
        let mut actions = Vec::new();
        match event.phase {
            TouchPhase::Down | TouchPhase::PointerDown => {
                if let Some(p) = event.action_pointer() {
                    actions.extend(self.press(p.id, p.pos));
                }
            }
            TouchPhase::Up | TouchPhase::PointerUp => {
                if let Some(p) = event.action_pointer() {
                    actions.extend(self.release(p.id));
                }
            }
            TouchPhase::Cancel => {
                if !self.movement.is_empty() {
                    actions.push(ControlAction::Stop);
                }
                self.reset();
            }
            TouchPhase::Move => {}
        }
        actions
    }

    /// Register a pointer going down at `pos`
    pub fn press(&mut self, id: PointerId, pos: Vec2) -> Option<ControlAction> {
        if self.is_tracked(id) {
            log::debug!("Pointer {} pressed twice, ignoring", id);
            return None;
        }

        let zone = self.layout.zone_at(pos)?;
        self.pressed.insert(zone);
        if zone.is_movement() {
            self.movement.insert(id, zone);
        } else {
            self.jump.insert(id);
        }

        Some(match zone {
            Zone::Left => ControlAction::Left,
            Zone::Right => ControlAction::Right,
            Zone::Jump => ControlAction::Jump,
        })
    }

    /// Register a pointer lifting; unknown ids are ignored
    pub fn release(&mut self, id: PointerId) -> Option<ControlAction> {
        if let Some(zone) = self.movement.remove(&id) {
            if !self.movement.values().any(|z| *z == zone) {
                self.pressed.remove(&zone);
            }
            if self.movement.is_empty() {
                return Some(ControlAction::Stop);
            }
            return None;
        }

        if self.jump.remove(&id) && self.jump.is_empty() {
            self.pressed.remove(&Zone::Jump);
        }
        None
    }

    pub fn is_tracked(&self, id: PointerId) -> bool {
        self.movement.contains_key(&id) || self.jump.contains(&id)
    }

    pub fn is_pressed(&self, zone: Zone) -> bool {
        self.pressed.contains(&zone)
    }

    /// Pressed zones as a [`Zone::bit`] mask
    pub fn pressed_mask(&self) -> u8 {
        self.pressed.iter().fold(0, |mask, z| mask | z.bit())
    }

    /// Forget every pointer without emitting anything. A gesture cancel goes
    /// through here after emitting its own `Stop`.
    pub fn reset(&mut self) {
        self.movement.clear();
        self.jump.clear();
        self.pressed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1000 wide: size 150, margin 50, row y 1800..1950
    fn controls() -> TouchControls {
        let viewport = Viewport::new(1000.0, 2000.0).unwrap();
        TouchControls::new(viewport, &Tuning::default())
    }

    const LEFT: (f32, f32) = (100.0, 1850.0);
    const RIGHT: (f32, f32) = (300.0, 1850.0);
    const JUMP: (f32, f32) = (850.0, 1850.0);

    fn down(id: PointerId, at: (f32, f32)) -> TouchEvent {
        TouchEvent::single(TouchPhase::Down, id, at.0, at.1)
    }

    fn up(id: PointerId) -> TouchEvent {
        TouchEvent::single(TouchPhase::Up, id, 0.0, 0.0)
    }

    #[test]
    fn test_layout() {
        let c = controls();
        let layout = c.layout();
        assert_eq!(layout.left, Rect::new(50.0, 1800.0, 200.0, 1950.0));
        assert_eq!(layout.right, Rect::new(250.0, 1800.0, 400.0, 1950.0));
        assert_eq!(layout.jump, Rect::new(800.0, 1800.0, 950.0, 1950.0));
        assert_eq!(layout.zone_at(Vec2::new(500.0, 1850.0)), None);
    }

    #[test]
    fn test_press_and_release_left() {
        let mut c = controls();
        assert_eq!(c.handle(&down(1, LEFT)), vec![ControlAction::Left]);
        assert!(c.is_pressed(Zone::Left));
        assert_eq!(c.handle(&up(1)), vec![ControlAction::Stop]);
        assert!(!c.is_pressed(Zone::Left));
        assert_eq!(c.pressed_mask(), 0);
    }

    #[test]
    fn test_jump_release_does_not_stop_movement() {
        let mut c = controls();
        assert_eq!(c.handle(&down(1, LEFT)), vec![ControlAction::Left]);

        let jump = TouchEvent::single(TouchPhase::PointerDown, 2, JUMP.0, JUMP.1);
        assert_eq!(c.handle(&jump), vec![ControlAction::Jump]);
        assert_eq!(c.pressed_mask(), Zone::Left.bit() | Zone::Jump.bit());

        let lift_jump = TouchEvent::single(TouchPhase::PointerUp, 2, JUMP.0, JUMP.1);
        assert!(c.handle(&lift_jump).is_empty());
        assert!(!c.is_pressed(Zone::Jump));
        assert!(c.is_pressed(Zone::Left));

        assert_eq!(c.handle(&up(1)), vec![ControlAction::Stop]);
    }

    #[test]
    fn test_two_fingers_on_movement() {
        let mut c = controls();
        c.handle(&down(1, LEFT));
        let right = TouchEvent::single(TouchPhase::PointerDown, 2, RIGHT.0, RIGHT.1);
        assert_eq!(c.handle(&right), vec![ControlAction::Right]);

        // Left lifts, right still held: no stop
        assert!(c.release(1).is_none());
        assert!(!c.is_pressed(Zone::Left));
        assert!(c.is_pressed(Zone::Right));

        assert_eq!(c.release(2), Some(ControlAction::Stop));
    }

    #[test]
    fn test_same_zone_two_fingers() {
        let mut c = controls();
        c.press(1, Vec2::new(LEFT.0, LEFT.1));
        c.press(2, Vec2::new(LEFT.0 + 10.0, LEFT.1));
        assert!(c.release(1).is_none());
        assert!(c.is_pressed(Zone::Left));
        assert_eq!(c.release(2), Some(ControlAction::Stop));
        assert!(!c.is_pressed(Zone::Left));
    }

    #[test]
    fn test_unknown_release_is_noop() {
        let mut c = controls();
        assert!(c.handle(&up(42)).is_empty());
        c.handle(&down(1, LEFT));
        assert!(c.handle(&up(42)).is_empty());
        assert!(c.is_pressed(Zone::Left));
    }

    #[test]
    fn test_outside_zones_untracked() {
        let mut c = controls();
        assert!(c.handle(&down(1, (500.0, 500.0))).is_empty());
        assert!(!c.is_tracked(1));
        assert!(c.handle(&up(1)).is_empty());
    }

    #[test]
    fn test_move_never_presses() {
        let mut c = controls();
        c.handle(&down(1, (500.0, 500.0)));
        let drag = TouchEvent::single(TouchPhase::Move, 1, LEFT.0, LEFT.1);
        assert!(c.handle(&drag).is_empty());
        assert!(!c.is_pressed(Zone::Left));

        // Dragging off a held button keeps it held
        c.handle(&down(2, RIGHT));
        let drag = TouchEvent::single(TouchPhase::Move, 2, 500.0, 500.0);
        assert!(c.handle(&drag).is_empty());
        assert!(c.is_pressed(Zone::Right));
    }

    #[test]
    fn test_cancel_releases_everything_with_one_stop() {
        let mut c = controls();
        c.press(1, Vec2::new(LEFT.0, LEFT.1));
        c.press(2, Vec2::new(RIGHT.0, RIGHT.1));
        c.press(3, Vec2::new(JUMP.0, JUMP.1));

        let cancel = TouchEvent {
            phase: TouchPhase::Cancel,
            pointers: Vec::new(),
            action_index: 0,
        };
        assert_eq!(c.handle(&cancel), vec![ControlAction::Stop]);
        assert_eq!(c.pressed_mask(), 0);
        assert!(!c.is_tracked(1) && !c.is_tracked(2) && !c.is_tracked(3));
    }

    #[test]
    fn test_cancel_with_only_jump_held_emits_nothing() {
        let mut c = controls();
        c.press(4, Vec2::new(JUMP.0, JUMP.1));

        let cancel = TouchEvent {
            phase: TouchPhase::Cancel,
            pointers: Vec::new(),
            action_index: 0,
        };
        assert!(c.handle(&cancel).is_empty());
        assert!(!c.is_pressed(Zone::Jump));
        assert!(!c.is_tracked(4));
    }

    #[test]
    fn test_duplicate_press_ignored() {
        let mut c = controls();
        assert_eq!(c.press(1, Vec2::new(LEFT.0, LEFT.1)), Some(ControlAction::Left));
        assert_eq!(c.press(1, Vec2::new(JUMP.0, JUMP.1)), None);
        assert!(!c.is_pressed(Zone::Jump));
    }

    #[test]
    fn test_action_index_selects_pointer() {
        let mut c = controls();
        c.handle(&down(1, LEFT));
        let event = TouchEvent {
            phase: TouchPhase::PointerDown,
            pointers: vec![
                TouchPoint {
                    id: 1,
                    pos: Vec2::new(LEFT.0, LEFT.1),
                },
                TouchPoint {
                    id: 2,
                    pos: Vec2::new(JUMP.0, JUMP.1),
                },
            ],
            action_index: 1,
        };
        assert_eq!(c.handle(&event), vec![ControlAction::Jump]);
    }
}
