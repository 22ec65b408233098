//! The screen-to-world boundary.
//!
//! Everything camera-specific stays on the host side of this trait;
//! hit-testing and dispatch only ever need "where does this screen
//! sample land on the plane at depth z".

use lamina_core::{Vec2, Vec3};

/// Maps screen-space samples onto world-space planes.
pub trait Projector {
    /// Returns the world-space point where `screen` lands on the
    /// plane at `reference_depth`.
    fn unproject(&self, screen: Vec2, reference_depth: f64) -> Vec3;
}

/// Identity mapping at every depth: screen coordinates are world
/// coordinates. Suitable for 2D hosts and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct OrthographicProjector;

impl Projector for OrthographicProjector {
    fn unproject(&self, screen: Vec2, reference_depth: f64) -> Vec3 {
        Vec3::new(screen.x, screen.y, reference_depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orthographic_is_identity_in_xy() {
        let p = OrthographicProjector;
        let out = p.unproject(Vec2::new(3.0, -7.0), -12.0);
        assert_eq!(out, Vec3::new(3.0, -7.0, -12.0));
    }
}
