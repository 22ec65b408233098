//! The animatable state block of a layer.
//!
//! `LayerState` is split out of the tree node so that the layer can own an
//! animator and the animator can mutate the state without borrowing the node
//! twice. All motion models write into this struct and nothing else.

use crate::geometry::Vec3;

/// Transform and opacity state of a single layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerState {
    /// Position relative to the parent layer.
    pub position: Vec3,
    /// Pure rendering nudge; not part of the logical position and excluded
    /// from world-origin accumulation, so hit geometry follows `position`
    /// alone.
    pub position_offset: Vec3,
    /// Rotation in degrees per axis.
    pub rotation: Vec3,
    pub scale: Vec3,
    /// Opacity in `[0, 1]`. Exactly `1.0` routes the layer to the opaque
    /// draw stage; anything else routes it to the transparent stage.
    pub opacity: f64,
}

impl Default for LayerState {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            position_offset: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            opacity: 1.0,
        }
    }
}

/// Getter/setter pair bound to one `Vec3` field of a `LayerState`.
///
/// This is the delegate-pair shape the animators are parameterized over,
/// so a motion model can drive position, rotation, or scale without a
/// variant per field.
#[derive(Clone, Copy)]
pub struct FieldBinding {
    pub get: fn(&LayerState) -> Vec3,
    pub set: fn(&mut LayerState, Vec3),
}

impl FieldBinding {
    pub fn position() -> Self {
        Self {
            get: |s| s.position,
            set: |s, v| s.position = v,
        }
    }

    pub fn rotation() -> Self {
        Self {
            get: |s| s.rotation,
            set: |s, v| s.rotation = v,
        }
    }

    pub fn scale() -> Self {
        Self {
            get: |s| s.scale,
            set: |s, v| s.scale = v,
        }
    }
}

impl std::fmt::Debug for FieldBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldBinding").finish_non_exhaustive()
    }
}
