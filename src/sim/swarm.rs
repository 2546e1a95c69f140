//! Missile swarm orchestration
//!
//! Owns the live missiles, paces launches, and runs the fixed frame budget.
//! When the budget is exhausted the finale sweep runs exactly once.

use rand::Rng;

use crate::clock::FrameClock;
use crate::config::{FinaleConfig, SwarmConfig};
use crate::consts::WIDTH;
use crate::sim::finale::run_finale;
use crate::sim::missile::Missile;
use crate::surface::PixelSurface;

/// Bounded collection of live missiles plus launch cadence
#[derive(Debug)]
pub struct MissileSwarm {
    pub missiles: Vec<Missile>,
    /// Frames until the next permitted launch
    pub launch_countdown: i32,
    /// Frames simulated so far
    pub frame: u32,
    capacity: usize,
    frame_limit: u32,
}

impl MissileSwarm {
    pub fn new(config: &SwarmConfig) -> Self {
        Self {
            missiles: Vec::with_capacity(config.capacity),
            launch_countdown: 0,
            frame: 0,
            capacity: config.capacity,
            frame_limit: config.frame_limit,
        }
    }

    pub fn live_count(&self) -> usize {
        self.missiles.len()
    }

    /// Frame budget exhausted?
    pub fn finished(&self) -> bool {
        self.frame >= self.frame_limit
    }

    /// Advance one frame: maybe launch, then update every missile and drop
    /// the finished ones.
    pub fn step<R: Rng>(&mut self, config: &SwarmConfig, rng: &mut R) {
        if self.launch_countdown <= 0 && self.missiles.len() < self.capacity {
            let start_x = rng.random_range(config.launch_margin..=WIDTH - config.launch_margin);
            self.missiles.push(Missile::launch(start_x, rng));
            self.launch_countdown = rng.random_range(config.countdown_min..=config.countdown_max);
        } else {
            self.launch_countdown -= 1;
        }

        self.missiles.retain_mut(|m| m.update());
        self.frame += 1;
    }

    /// Draw all survivors.
    pub fn draw<S: PixelSurface, R: Rng>(&self, surface: &mut S, rng: &mut R) {
        for missile in &self.missiles {
            missile.draw(surface, rng);
        }
    }
}

/// Run the full missile sequence: the swarm for its frame budget, then the
/// finale sweep, then return to the caller.
pub fn run_missile_sequence<S, C, R>(
    surface: &mut S,
    clock: &mut C,
    rng: &mut R,
    swarm_config: &SwarmConfig,
    finale_config: &FinaleConfig,
) where
    S: PixelSurface,
    C: FrameClock,
    R: Rng,
{
    log::info!(
        "Missile sequence: {} frames, capacity {}",
        swarm_config.frame_limit,
        swarm_config.capacity
    );

    let mut swarm = MissileSwarm::new(swarm_config);
    while !swarm.finished() {
        surface.clear();
        swarm.step(swarm_config, rng);
        swarm.draw(surface, rng);
        surface.present();
        clock.wait(swarm_config.frame_interval());
    }

    run_finale(surface, clock, finale_config);
}
