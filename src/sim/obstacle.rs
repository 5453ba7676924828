//! Falling meteorites
//!
//! A meteorite gets its size, sprite variant and velocity once at spawn and
//! then drifts in a straight line. Despawning is the tick's job.

use glam::Vec2;
use rand::Rng;

use super::geometry::{Rect, Viewport};
use crate::tuning::Tuning;

#[derive(Debug, Clone)]
pub struct Obstacle {
    pub id: u32,
    pos: Vec2,
    vel: Vec2,
    size: Vec2,
    /// Sprite variant index into the configured meteorite sprites
    variant: u8,
    /// Hitbox inset per side
    padding: f32,
}

impl Obstacle {
    pub fn new(id: u32, pos: Vec2, size: Vec2, vel: Vec2, variant: u8, padding: f32) -> Self {
        Self {
            id,
            pos,
            vel,
            size,
            variant,
            padding,
        }
    }

    /// Spawn just above the viewport with a random variant and velocity
    pub fn spawn<R: Rng>(id: u32, rng: &mut R, viewport: Viewport, tuning: &Tuning) -> Self {
        let variant = rng.random_range(0..tuning.meteorite_aspects.len());
        let width = viewport.width() * tuning.meteorite_width_ratio;
        let size = Vec2::new(width, width * tuning.meteorite_aspects[variant]);

        let x = rng.random::<f32>() * (viewport.width() - size.x).max(0.0);
        let pos = Vec2::new(x, -size.y);

        let vy = rng.random_range(tuning.meteorite_min_speed_y..=tuning.meteorite_max_speed_y);
        let max_x = tuning.meteorite_max_speed_x;
        let vx = rng.random_range(-max_x..=max_x);

        Self::new(
            id,
            pos,
            size,
            Vec2::new(vx, vy),
            variant as u8,
            width * tuning.hitbox_padding_ratio,
        )
    }

    /// Advance one tick; no wrapping or reflection
    pub fn update(&mut self) {
        self.pos += self.vel;
    }

    /// Sprite rectangle
    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Collision rectangle, strictly inside the sprite
    pub fn hitbox(&self) -> Rect {
        self.bounds().inset(self.padding)
    }

    /// True once the top edge has reached the viewport bottom
    pub fn has_fallen_past(&self, viewport: Viewport) -> bool {
        self.pos.y >= viewport.height()
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn velocity(&self) -> Vec2 {
        self.vel
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn variant(&self) -> u8 {
        self.variant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn viewport() -> Viewport {
        Viewport::new(1000.0, 2000.0).unwrap()
    }

    #[test]
    fn test_spawn_ranges() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        for id in 0..500 {
            let o = Obstacle::spawn(id, &mut rng, viewport(), &tuning);
            assert_eq!(o.size().x, 80.0);
            assert!(o.pos().x >= 0.0 && o.pos().x <= 1000.0 - 80.0);
            assert_eq!(o.pos().y, -o.size().y);
            assert!(o.bounds().bottom <= 0.0, "spawned on screen");
            let v = o.velocity();
            assert!(v.y >= tuning.meteorite_min_speed_y && v.y <= tuning.meteorite_max_speed_y);
            assert!(v.x.abs() <= tuning.meteorite_max_speed_x);
            assert!((o.variant() as usize) < tuning.meteorite_aspects.len());
        }
    }

    #[test]
    fn test_height_follows_variant_aspect() {
        let tuning = Tuning {
            meteorite_aspects: vec![1.5],
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(1);
        let o = Obstacle::spawn(1, &mut rng, viewport(), &tuning);
        assert_eq!(o.variant(), 0);
        assert_eq!(o.size(), Vec2::new(80.0, 120.0));
    }

    #[test]
    fn test_linear_motion_is_exact() {
        let mut o = Obstacle::new(
            1,
            Vec2::new(100.0, -80.0),
            Vec2::new(80.0, 80.0),
            Vec2::new(-2.5, 12.25),
            0,
            12.0,
        );
        for _ in 0..40 {
            o.update();
        }
        assert_eq!(o.pos(), Vec2::new(100.0 - 2.5 * 40.0, -80.0 + 12.25 * 40.0));
        assert_eq!(o.velocity(), Vec2::new(-2.5, 12.25));
    }

    #[test]
    fn test_drifts_off_screen_sideways() {
        let mut o = Obstacle::new(
            1,
            Vec2::new(0.0, 0.0),
            Vec2::new(80.0, 80.0),
            Vec2::new(-10.0, 10.0),
            0,
            0.0,
        );
        for _ in 0..20 {
            o.update();
        }
        assert_eq!(o.pos().x, -200.0);
    }

    #[test]
    fn test_hitbox_is_inset() {
        let o = Obstacle::new(
            1,
            Vec2::new(100.0, 100.0),
            Vec2::new(80.0, 80.0),
            Vec2::ZERO,
            0,
            12.0,
        );
        assert_eq!(o.bounds(), Rect::new(100.0, 100.0, 180.0, 180.0));
        assert_eq!(o.hitbox(), Rect::new(112.0, 112.0, 168.0, 168.0));
    }

    #[test]
    fn test_has_fallen_past_at_bottom_edge() {
        let vp = viewport();
        let o = Obstacle::new(1, Vec2::new(0.0, 1999.0), Vec2::splat(80.0), Vec2::ZERO, 0, 0.0);
        assert!(!o.has_fallen_past(vp));
        let o = Obstacle::new(1, Vec2::new(0.0, 2000.0), Vec2::splat(80.0), Vec2::ZERO, 0, 0.0);
        assert!(o.has_fallen_past(vp));
    }

    proptest! {
        #[test]
        fn prop_velocity_never_changes(seed in any::<u64>(), ticks in 0usize..200) {
            let tuning = Tuning::default();
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut o = Obstacle::spawn(1, &mut rng, viewport(), &tuning);
            let start = o.pos();
            let vel = o.velocity();
            for _ in 0..ticks {
                o.update();
                prop_assert_eq!(o.velocity(), vel);
            }
            let expected = start + vel * ticks as f32;
            prop_assert!((o.pos() - expected).length() < 0.1);
        }
    }
}
