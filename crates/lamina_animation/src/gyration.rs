//! Damped random wander.
//!
//! A gyrating field drifts toward a randomly chosen point inside a
//! per-axis limit box, accelerating toward it and carrying velocity
//! with 10% per-frame damping. Every `time_limit_ms` the target is
//! re-rolled, so the field never settles. Used for ambient idle
//! motion such as a slow floating rotation.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use lamina_core::{FieldBinding, LayerState, Tick, Vec3};

const VELOCITY_DAMPING: f64 = 0.9;
const DEFAULT_MAX_ACCELERATION: f64 = 0.0025;
const DEFAULT_TIME_LIMIT_MS: u64 = 600;

/// Perpetual random motion of one layer field within `limits`.
#[derive(Debug)]
pub struct GyrationAnimation {
    binding: FieldBinding,
    limits: Vec3,
    acceleration: Vec3,
    velocity: Vec3,
    max_acceleration: f64,
    time_limit_ms: u64,
    last_retarget: Tick,
    rng: SmallRng,
}

impl GyrationAnimation {
    pub fn new(binding: FieldBinding, limits: Vec3) -> Self {
        Self::with_rng(binding, limits, SmallRng::from_entropy())
    }

    /// Deterministic variant for tests and replay.
    pub fn with_seed(binding: FieldBinding, limits: Vec3, seed: u64) -> Self {
        Self::with_rng(binding, limits, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(binding: FieldBinding, limits: Vec3, rng: SmallRng) -> Self {
        Self {
            binding,
            limits,
            acceleration: Vec3::ZERO,
            velocity: Vec3::ZERO,
            max_acceleration: DEFAULT_MAX_ACCELERATION,
            time_limit_ms: DEFAULT_TIME_LIMIT_MS,
            last_retarget: 0,
            rng,
        }
    }

    /// Maps a single vigor knob in `[0, 1]` onto both tunables:
    /// retarget period shrinks from 600 ms toward 300 ms and peak
    /// acceleration grows from 0 toward 0.005 as vigor rises.
    pub fn set_vigor(&mut self, vigor: f64) {
        self.time_limit_ms = (300.0 + 300.0 * (1.0 - vigor)) as u64;
        self.max_acceleration = 0.005 * vigor;
    }

    pub fn limits(&self) -> Vec3 {
        self.limits
    }

    /// Advances one frame: maybe re-roll the target, damp and
    /// integrate velocity, write the field back.
    pub fn update(&mut self, state: &mut LayerState, tick: Tick) {
        let current = (self.binding.get)(state);

        if tick.saturating_sub(self.last_retarget) > self.time_limit_ms {
            // Targets are quantized to percent steps of each limit.
            let target = Vec3::new(
                self.roll() * self.limits.x,
                self.roll() * self.limits.y,
                self.roll() * self.limits.z,
            );
            self.acceleration = (target - current) * self.max_acceleration;
            self.last_retarget = tick;
        }

        self.velocity = self.velocity * VELOCITY_DAMPING + self.acceleration;
        (self.binding.set)(state, current + self.velocity);
    }

    fn roll(&mut self) -> f64 {
        self.rng.gen_range(0..100) as f64 / 100.0
    }
}
