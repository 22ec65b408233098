//! Transform math shared by the layer tree, the animators, and hit-testing.
//!
//! All scalars are `f64`. Equality on these types is exact floating-point
//! equality on purpose: the animation guards ("is this target already the
//! committed value?") and the rate-limited axis deactivation ("did this axis
//! stop changing?") are defined in terms of exact comparison.

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

// ─────────────────────────────────────────────────────────────────────────────
// Vectors
// ─────────────────────────────────────────────────────────────────────────────

/// 2D vector / point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    pub const ONE: Vec2 = Vec2 { x: 1.0, y: 1.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > 0.0 {
            Self::new(self.x / len, self.y / len)
        } else {
            Self::ZERO
        }
    }

    pub fn dot(&self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }
}

/// 3D vector / point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
    pub const ONE: Vec3 = Vec3 {
        x: 1.0,
        y: 1.0,
        z: 1.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The x/y components as a 2D point.
    pub const fn xy(&self) -> Vec2 {
        Vec2 {
            x: self.x,
            y: self.y,
        }
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > 0.0 {
            Self::new(self.x / len, self.y / len, self.z / len)
        } else {
            Self::ZERO
        }
    }

    pub fn dot(&self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

macro_rules! impl_vec_ops {
    ($ty:ident { $($field:ident),+ }) => {
        impl Add for $ty {
            type Output = $ty;
            fn add(self, rhs: $ty) -> $ty {
                $ty { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl Sub for $ty {
            type Output = $ty;
            fn sub(self, rhs: $ty) -> $ty {
                $ty { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl Mul<f64> for $ty {
            type Output = $ty;
            fn mul(self, rhs: f64) -> $ty {
                $ty { $($field: self.$field * rhs),+ }
            }
        }

        impl Neg for $ty {
            type Output = $ty;
            fn neg(self) -> $ty {
                $ty { $($field: -self.$field),+ }
            }
        }

        impl AddAssign for $ty {
            fn add_assign(&mut self, rhs: $ty) {
                $(self.$field += rhs.$field;)+
            }
        }

        impl SubAssign for $ty {
            fn sub_assign(&mut self, rhs: $ty) {
                $(self.$field -= rhs.$field;)+
            }
        }

        impl MulAssign<f64> for $ty {
            fn mul_assign(&mut self, rhs: f64) {
                $(self.$field *= rhs;)+
            }
        }
    };
}

impl_vec_ops!(Vec2 { x, y });
impl_vec_ops!(Vec3 { x, y, z });

// ─────────────────────────────────────────────────────────────────────────────
// Interpolation
// ─────────────────────────────────────────────────────────────────────────────

/// Linear interpolation between two values of the same type.
///
/// `t` is not clamped; callers own the progress curve.
pub trait Interpolate: Copy {
    fn lerp(self, other: Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

impl Interpolate for Vec2 {
    fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

impl Interpolate for Vec3 {
    fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Bounds
// ─────────────────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle stored as min/max scalars.
///
/// A bounds value may be "inverted" (min greater than max); such a rectangle
/// contains nothing and acts as the identity for [`Bounds::enclose`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub const ZERO: Bounds = Bounds {
        min_x: 0.0,
        min_y: 0.0,
        max_x: 0.0,
        max_y: 0.0,
    };

    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Containment test with inclusive edges.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// Translate all four edges by `d`.
    pub fn offset(&self, d: Vec2) -> Self {
        Self {
            min_x: self.min_x + d.x,
            min_y: self.min_y + d.y,
            max_x: self.max_x + d.x,
            max_y: self.max_y + d.y,
        }
    }

    /// Multiply all four scalars by `s`.
    pub fn scaled(&self, s: f64) -> Self {
        Self {
            min_x: self.min_x * s,
            min_y: self.min_y * s,
            max_x: self.max_x * s,
            max_y: self.max_y * s,
        }
    }

    /// Min/max fold of two rectangles.
    pub fn enclose(&self, other: Bounds) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));

        let mut c = a;
        c += b;
        c *= 0.5;
        assert_eq!(c, Vec3::new(2.5, 3.5, 4.5));
    }

    #[test]
    fn test_normalize() {
        let v = Vec3::new(3.0, 0.0, 4.0);
        let n = v.normalize();
        assert!((n.length() - 1.0).abs() < 1e-12);

        // Zero-length input stays zero rather than producing NaN
        assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Vec3::new(0.0, 10.0, -5.0);
        let b = Vec3::new(10.0, 0.0, 5.0);

        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Vec3::new(5.0, 5.0, 0.0));
        assert_eq!(0.0f64.lerp(8.0, 0.25), 2.0);
    }

    #[test]
    fn test_bounds_contains() {
        let b = Bounds::new(-1.0, -1.0, 1.0, 1.0);
        assert!(b.contains(Vec2::ZERO));
        assert!(b.contains(Vec2::new(1.0, -1.0))); // edges are inclusive
        assert!(!b.contains(Vec2::new(1.1, 0.0)));
    }

    #[test]
    fn test_bounds_offset_scale_enclose() {
        let b = Bounds::new(-1.0, -1.0, 1.0, 1.0);

        let moved = b.offset(Vec2::new(10.0, 10.0));
        assert_eq!(moved, Bounds::new(9.0, 9.0, 11.0, 11.0));

        let scaled = b.scaled(2.0);
        assert_eq!(scaled, Bounds::new(-2.0, -2.0, 2.0, 2.0));

        let joined = b.enclose(moved);
        assert_eq!(joined, Bounds::new(-1.0, -1.0, 11.0, 11.0));
    }

    #[test]
    fn test_inverted_bounds_is_enclose_identity() {
        let inverted = Bounds::new(1000.0, 1000.0, -1000.0, -1000.0);
        let b = Bounds::new(-3.0, 2.0, 5.0, 7.0);
        assert_eq!(inverted.enclose(b), b);
        assert!(!inverted.contains(Vec2::ZERO));
    }
}
