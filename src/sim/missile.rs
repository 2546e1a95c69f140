//! Missile state machine
//!
//! One projectile from launch to faded shockwave. Transitions are strictly
//! forward: Rising -> Falling -> Exploding -> Shockwave, then removal.

use glam::Vec2;
use rand::Rng;

use crate::consts::*;
use crate::surface::PixelSurface;

/// Lifecycle phase of a missile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissileState {
    /// Climbing; gravity bleeds off vertical speed
    Rising,
    /// Past apex, accelerating toward the ground row
    Falling,
    /// Detonated; debris jitter around the impact point
    Exploding,
    /// Expanding ring; missile is removed once the ring fades
    Shockwave,
}

/// A single projectile
#[derive(Debug, Clone)]
pub struct Missile {
    /// Continuous position; drawn at the floored pixel
    pub pos: Vec2,
    pub vel: Vec2,
    pub state: MissileState,
    /// Frames since detonation
    pub explode_ticks: u32,
    pub shockwave_radius: i32,
    /// Fixed at the moment of ground contact, never moves afterward
    pub impact: (i32, i32),
}

impl Missile {
    /// Launch from the ground row at `start_x` with randomized drift and
    /// climb speed.
    pub fn launch<R: Rng>(start_x: i32, rng: &mut R) -> Self {
        Self {
            pos: Vec2::new(start_x as f32, GROUND_ROW as f32),
            vel: Vec2::new(
                rng.random_range(-LAUNCH_VX_SPREAD..=LAUNCH_VX_SPREAD),
                rng.random_range(LAUNCH_VY_MIN..=LAUNCH_VY_MAX),
            ),
            state: MissileState::Rising,
            explode_ticks: 0,
            shockwave_radius: 0,
            impact: (0, GROUND_ROW),
        }
    }

    /// Advance one frame. Returns `false` exactly once, on the tick where the
    /// shockwave outgrows its bound; the swarm must drop the missile then.
    pub fn update(&mut self) -> bool {
        match self.state {
            MissileState::Rising => {
                self.pos += self.vel;
                self.vel.y += GRAVITY;
                if self.vel.y >= 0.0 {
                    self.state = MissileState::Falling;
                }
            }
            MissileState::Falling => {
                self.pos += self.vel;
                self.vel.y += GRAVITY;
                if self.pos.y >= GROUND_ROW as f32 {
                    self.pos.y = GROUND_ROW as f32;
                    self.state = MissileState::Exploding;
                    self.explode_ticks = 0;
                    self.impact = (self.pos.x.floor() as i32, GROUND_ROW);
                }
            }
            MissileState::Exploding => {
                self.explode_ticks += 1;
                if self.explode_ticks > EXPLODE_DURATION_TICKS {
                    self.state = MissileState::Shockwave;
                    self.shockwave_radius = 0;
                }
            }
            MissileState::Shockwave => {
                self.shockwave_radius += 1;
                if self.shockwave_radius > SHOCKWAVE_MAX_RADIUS {
                    return false;
                }
            }
        }
        true
    }

    /// Draw the current phase. Debris jitter is the only randomized part.
    pub fn draw<S: PixelSurface, R: Rng>(&self, surface: &mut S, rng: &mut R) {
        match self.state {
            MissileState::Rising | MissileState::Falling => {
                surface.set_pixel(self.pos.x.floor() as i32, self.pos.y.floor() as i32, true);
            }
            MissileState::Exploding => {
                let (ix, iy) = self.impact;
                for _ in 0..DEBRIS_PIXELS {
                    let dx = rng.random_range(-DEBRIS_JITTER..=DEBRIS_JITTER);
                    let dy = rng.random_range(-DEBRIS_JITTER..=0);
                    surface.set_pixel(ix + dx, iy + dy, rng.random());
                }
            }
            MissileState::Shockwave => {
                let (cx, cy) = self.impact;
                let r = self.shockwave_radius as f32;
                for deg in (0..360).step_by(SHOCKWAVE_STEP_DEGREES as usize) {
                    let rad = (deg as f32).to_radians();
                    let px = (cx as f32 + r * rad.cos()).floor() as i32;
                    let py = (cy as f32 + r * rad.sin()).floor() as i32;
                    surface.set_pixel(px, py, true);
                }
            }
        }
    }

    pub fn finished(&self) -> bool {
        self.shockwave_radius > SHOCKWAVE_MAX_RADIUS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::FrameBuffer;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn state_rank(s: MissileState) -> u8 {
        match s {
            MissileState::Rising => 0,
            MissileState::Falling => 1,
            MissileState::Exploding => 2,
            MissileState::Shockwave => 3,
        }
    }

    #[test]
    fn test_kinematics_reach_ground() {
        // Launch at x=30 with vy=-1.5 and no drift. Rising lasts ~22 ticks
        // (1.5 / 0.07), the fall roughly mirrors it.
        let mut m = Missile {
            pos: Vec2::new(30.0, GROUND_ROW as f32),
            vel: Vec2::new(0.0, -1.5),
            state: MissileState::Rising,
            explode_ticks: 0,
            shockwave_radius: 0,
            impact: (0, GROUND_ROW),
        };

        let mut ticks = 0;
        while m.state != MissileState::Exploding {
            assert!(m.update());
            ticks += 1;
            assert!(ticks < 100, "never reached the ground");
        }
        assert!((42..=46).contains(&ticks), "impact after {} ticks", ticks);
        assert_eq!(m.impact, (30, GROUND_ROW));
        assert_eq!(m.pos.y, GROUND_ROW as f32);
    }

    #[test]
    fn test_impact_point_set_once() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut m = Missile::launch(20, &mut rng);

        while m.state != MissileState::Exploding {
            assert!(m.update());
        }
        let impact = m.impact;

        while m.update() {}
        assert_eq!(m.impact, impact);
    }

    #[test]
    fn test_rising_draws_single_pixel() {
        let mut rng = Pcg32::seed_from_u64(3);
        let m = Missile::launch(12, &mut rng);
        let mut fb = FrameBuffer::new(64, 8);
        m.draw(&mut fb, &mut rng);
        assert_eq!(fb.lit_pixels(), vec![(12, 7)]);
    }

    #[test]
    fn test_shockwave_ring_centered_on_impact() {
        let mut m = Missile {
            pos: Vec2::new(32.0, GROUND_ROW as f32),
            vel: Vec2::ZERO,
            state: MissileState::Shockwave,
            explode_ticks: EXPLODE_DURATION_TICKS + 1,
            shockwave_radius: 3,
            impact: (32, GROUND_ROW),
        };
        let mut fb = FrameBuffer::new(64, 8);
        let mut rng = Pcg32::seed_from_u64(0);
        m.draw(&mut fb, &mut rng);

        for (x, y) in fb.lit_pixels() {
            let dx = (x - 32) as f32;
            let dy = (y - GROUND_ROW) as f32;
            let dist = (dx * dx + dy * dy).sqrt();
            // Floored ring points sit within a pixel of the ideal circle
            assert!(
                (dist - 3.0).abs() < 1.5,
                "({}, {}) off the radius-3 ring",
                x,
                y
            );
        }
        assert!(fb.lit_count() > 0);

        // Points below the ground row were clipped by the surface
        assert!(fb.lit_pixels().iter().all(|&(_, y)| y <= GROUND_ROW));

        // Radius 9 ends the missile
        for _ in 0..5 {
            m.update();
        }
        assert!(m.finished());
    }

    proptest! {
        /// States only move forward, and update() reports removal exactly
        /// once, on the tick where the radius first exceeds the bound.
        #[test]
        fn missile_states_strictly_forward(seed in any::<u64>(), x in 8i32..=56) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut m = Missile::launch(x, &mut rng);
            let mut last = state_rank(m.state);
            let mut seen = vec![last];

            for _ in 0..1000 {
                let live = m.update();
                let rank = state_rank(m.state);
                prop_assert!(rank >= last, "state went backward");
                if rank != last {
                    seen.push(rank);
                }
                last = rank;
                if !live {
                    break;
                }
            }

            // Every phase visited in order, no skips
            prop_assert_eq!(seen, vec![0, 1, 2, 3]);
            prop_assert!(m.finished());
            prop_assert_eq!(m.shockwave_radius, SHOCKWAVE_MAX_RADIUS + 1);
        }
    }
}
