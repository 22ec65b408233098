//! Fixed-duration cosine-eased tweens.
//!
//! An [`EasedAnimation`] owns a start value, a target, a duration and
//! a start tick. Sampling is pure: the same tick always yields the
//! same value, and once the elapsed time strictly exceeds the
//! duration the sample is the exact target (no floating-point
//! near-miss at the end of a tween).

use std::f64::consts::PI;

use lamina_core::{Interpolate, Tick};

/// A tween over any interpolatable value.
#[derive(Clone, Copy, Debug)]
pub struct EasedAnimation<T> {
    start_value: T,
    target_value: T,
    duration_ms: u64,
    start_tick: Tick,
    running: bool,
}

impl<T: Interpolate + PartialEq> EasedAnimation<T> {
    pub fn new(initial: T, duration_ms: u64) -> Self {
        Self {
            start_value: initial,
            target_value: initial,
            duration_ms,
            start_tick: 0,
            running: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn target(&self) -> T {
        self.target_value
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Begins the tween at `now`. No-op if already running, so a
    /// retarget mid-flight keeps the original start tick.
    pub fn start(&mut self, now: Tick) {
        if self.running {
            return;
        }
        self.start_tick = now;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Rebases the tween onto a fresh start value and target without
    /// touching the start tick.
    pub fn retarget(&mut self, current: T, target: T) {
        self.start_value = current;
        self.target_value = target;
    }

    /// Full restart: new endpoints and a new start tick.
    pub fn reset(&mut self, current: T, target: T, now: Tick) {
        self.start_value = current;
        self.target_value = target;
        self.start_tick = now;
    }

    /// Samples the tween at `tick`. Returns the value and whether the
    /// tween has completed. Completion is strict: exactly at the
    /// duration boundary the eased value (which equals the target) is
    /// still reported as in flight; one tick later the exact target
    /// is written and `true` is returned. A zero duration completes
    /// on the first sample.
    pub fn sample(&self, tick: Tick) -> (T, bool) {
        let dtick = tick.saturating_sub(self.start_tick);
        if self.duration_ms == 0 || dtick > self.duration_ms {
            return (self.target_value, true);
        }
        let nd = dtick as f64 / self.duration_ms as f64;
        let v = (1.0 - (nd * PI).cos()) / 2.0;
        (self.start_value.lerp(self.target_value, v), false)
    }
}

// ─── ad-hoc animations ──────────────────────────────────────────────

/// Anything the animator can drive once per frame.
///
/// Implementors are owned by the caller; the animator holds only a
/// weak reference and prunes entries that are dropped or finished.
pub trait Animatable {
    /// Advances to `tick`. Returns `true` when the animation has
    /// reached its target and should be stopped.
    fn update(&mut self, tick: Tick) -> bool;

    fn stop(&mut self);

    fn is_running(&self) -> bool;
}

/// An eased tween over an arbitrary scalar reachable through a
/// getter/setter pair, for properties that are not part of the core
/// layer state (a shader uniform, a sound volume).
pub struct PropertyAnimation {
    get: Box<dyn Fn() -> f64>,
    set: Box<dyn FnMut(f64)>,
    anim: EasedAnimation<f64>,
}

impl PropertyAnimation {
    pub const DEFAULT_DURATION_MS: u64 = 1000;

    /// Captures the current value through `get` and starts a tween
    /// toward `target` at `now`.
    pub fn new(
        get: Box<dyn Fn() -> f64>,
        set: Box<dyn FnMut(f64)>,
        target: f64,
        duration_ms: u64,
        now: Tick,
    ) -> Self {
        let start = get();
        let mut anim = EasedAnimation::new(start, duration_ms);
        anim.reset(start, target, now);
        anim.start(now);
        Self { get, set, anim }
    }

    pub fn target(&self) -> f64 {
        self.anim.target()
    }

    pub fn current(&self) -> f64 {
        (self.get)()
    }
}

impl Animatable for PropertyAnimation {
    fn update(&mut self, tick: Tick) -> bool {
        if !self.anim.is_running() {
            return false;
        }
        let (value, done) = self.anim.sample(tick);
        (self.set)(value);
        done
    }

    fn stop(&mut self) {
        self.anim.stop();
    }

    fn is_running(&self) -> bool {
        self.anim.is_running()
    }
}

impl std::fmt::Debug for PropertyAnimation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyAnimation")
            .field("anim", &self.anim)
            .finish_non_exhaustive()
    }
}
