//! Rate-limited linear coasting.
//!
//! Unlike a tween, coasting has no duration: each frame the value
//! moves toward the target by at most `max_speed` units per second,
//! and an axis keeps stepping until a frame in which it no longer
//! changes. Arrival therefore depends on frame pacing rather than a
//! schedule, which is what gives rotation and scale changes their
//! mechanical, constant-speed feel.

use lamina_core::Vec3;

/// Per-axis activity flags for a coasting value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AxisFlags {
    pub x: bool,
    pub y: bool,
    pub z: bool,
}

impl AxisFlags {
    pub const INACTIVE: AxisFlags = AxisFlags {
        x: false,
        y: false,
        z: false,
    };

    pub fn any(&self) -> bool {
        self.x || self.y || self.z
    }

    pub fn set_all(&mut self) {
        self.x = true;
        self.y = true;
        self.z = true;
    }

    pub fn clear(&mut self) {
        *self = Self::INACTIVE;
    }
}

/// Clips a signed delta to the `[min, max]` band, leaving values
/// already inside the band untouched.
fn clip(delta: f64, min: f64, max: f64) -> f64 {
    if delta > 0.0 && delta > max {
        max
    } else if delta < 0.0 && delta < min {
        min
    } else {
        delta
    }
}

/// Advances `src` toward `dst` on every active axis, limited to
/// `max_speed` units per second over a `delta_ms` frame. An axis
/// whose value did not change this frame is deactivated. Returns
/// `None` when no axis is active, so callers can skip the state
/// write entirely.
pub fn rate_limited_step(
    src: Vec3,
    dst: Vec3,
    flags: &mut AxisFlags,
    delta_ms: u64,
    max_speed: f64,
) -> Option<Vec3> {
    if !flags.any() {
        return None;
    }
    let dt = delta_ms as f64 / 1000.0;

    let x = if flags.x {
        src.x + clip(dst.x - src.x, -max_speed, max_speed) * dt
    } else {
        src.x
    };
    let y = if flags.y {
        src.y + clip(dst.y - src.y, -max_speed, max_speed) * dt
    } else {
        src.y
    };
    let z = if flags.z {
        src.z + clip(dst.z - src.z, -max_speed, max_speed) * dt
    } else {
        src.z
    };

    flags.x = flags.x && x != src.x;
    flags.y = flags.y && y != src.y;
    flags.z = flags.z && z != src.z;

    Some(Vec3::new(x, y, z))
}
