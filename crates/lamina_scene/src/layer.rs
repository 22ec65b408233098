//! Layer nodes.
//!
//! A [`Layer`] holds its transform state, its local bounds, its own
//! [`Animator`] and an optional delegate. Tree structure (parent
//! backref, child list) is stored on the node but mutated only
//! through [`crate::Scene`], which owns the arena and keeps the
//! backrefs consistent.

use slotmap::new_key_type;
use smallvec::SmallVec;

use lamina_animation::Animator;
use lamina_core::{Bounds, LayerState, Vec2, Vec3};

use crate::delegate::LayerDelegate;

new_key_type! {
    /// Generational handle to a layer in a [`crate::Scene`] arena.
    pub struct LayerKey;
}

pub struct Layer {
    tag: u32,
    pub(crate) parent: Option<LayerKey>,
    pub(crate) children: SmallVec<[LayerKey; 4]>,
    hidden: bool,
    auto_bounds: bool,
    bounds: Bounds,
    pub(crate) state: LayerState,
    pub(crate) animator: Animator,
    pub(crate) delegate: Option<Box<dyn LayerDelegate>>,
}

impl Layer {
    pub(crate) fn new(tag: u32) -> Self {
        let state = LayerState::default();
        let animator = Animator::new(&state);
        Self {
            tag,
            parent: None,
            children: SmallVec::new(),
            hidden: false,
            auto_bounds: false,
            bounds: Bounds::ZERO,
            state,
            animator,
            delegate: None,
        }
    }

    /// Scene-assigned identifier, unique for the life of the scene
    /// and never reused.
    pub fn tag(&self) -> u32 {
        self.tag
    }

    pub fn parent(&self) -> Option<LayerKey> {
        self.parent
    }

    pub fn children(&self) -> &[LayerKey] {
        &self.children
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn auto_bounds(&self) -> bool {
        self.auto_bounds
    }

    /// Enables recomputation of local bounds from child extents at
    /// the end of each frame traversal.
    pub fn set_auto_bounds(&mut self, on: bool) {
        self.auto_bounds = on;
    }

    /// Effective bounds: the local rectangle with all four edges
    /// multiplied by the x component of scale. Non-uniform scales
    /// affect rendering but not hit geometry.
    pub fn bounds(&self) -> Bounds {
        self.bounds.scaled(self.state.scale.x)
    }

    pub fn local_bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    pub(crate) fn set_bounds_internal(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// Whether a point in this layer's plane falls inside its
    /// effective bounds. Edges are inclusive.
    pub fn contains_point(&self, local: Vec2) -> bool {
        self.bounds().contains(local)
    }

    pub fn state(&self) -> &LayerState {
        &self.state
    }

    pub fn position(&self) -> Vec3 {
        self.state.position
    }

    /// Writes position directly. Direct writes snap: the animator is
    /// re-anchored on the new value and any motion in flight stops.
    pub fn set_position(&mut self, position: Vec3) {
        self.state.position = position;
        self.animator.sync(&self.state);
    }

    /// Snaps by the given delta. Relative position moves are
    /// immediate, unlike relative rotation which coasts.
    pub fn set_relative_position(&mut self, dx: f64, dy: f64, dz: f64) {
        self.state.position += Vec3::new(dx, dy, dz);
        self.animator.sync(&self.state);
    }

    pub fn position_offset(&self) -> Vec3 {
        self.state.position_offset
    }

    /// The rendering nudge: shifts where the layer draws without
    /// moving its logical position, and is never animated.
    pub fn set_position_offset(&mut self, offset: Vec3) {
        self.state.position_offset = offset;
    }

    pub fn rotation(&self) -> Vec3 {
        self.state.rotation
    }

    /// Writes rotation directly, snapping as [`Layer::set_position`]
    /// does.
    pub fn set_rotation(&mut self, rotation: Vec3) {
        self.state.rotation = rotation;
        self.animator.sync(&self.state);
    }

    /// Adjusts the rotation coast target by the given deltas. Each
    /// non-zero axis starts (or continues) rate-limited coasting
    /// toward its new target; zero axes are left untouched, so
    /// repeated relative nudges on one axis never disturb the others.
    pub fn set_relative_rotation(&mut self, dx: f64, dy: f64, dz: f64) {
        let target = self.animator.target_rotation();
        if dx != 0.0 {
            self.animator.coast_rotation_x(target.x + dx);
        }
        if dy != 0.0 {
            self.animator.coast_rotation_y(target.y + dy);
        }
        if dz != 0.0 {
            self.animator.coast_rotation_z(target.z + dz);
        }
    }

    pub fn scale(&self) -> Vec3 {
        self.state.scale
    }

    pub fn set_scale(&mut self, scale: Vec3) {
        self.state.scale = scale;
        self.animator.sync(&self.state);
    }

    /// Uniform scale on all three axes.
    pub fn set_scale_uniform(&mut self, s: f64) {
        self.set_scale(Vec3::new(s, s, s));
    }

    pub fn opacity(&self) -> f64 {
        self.state.opacity
    }

    /// Writes opacity directly, cancelling any fade in flight.
    pub fn set_opacity(&mut self, opacity: f64) {
        self.state.opacity = opacity;
        self.animator.sync(&self.state);
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut Animator {
        &mut self.animator
    }

    pub fn set_delegate(&mut self, delegate: Box<dyn LayerDelegate>) {
        self.delegate = Some(delegate);
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    pub fn has_delegate(&self) -> bool {
        self.delegate.is_some()
    }
}

impl std::fmt::Debug for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Layer")
            .field("tag", &self.tag)
            .field("parent", &self.parent)
            .field("children", &self.children)
            .field("hidden", &self.hidden)
            .field("auto_bounds", &self.auto_bounds)
            .field("bounds", &self.bounds)
            .field("state", &self.state)
            .field("delegate", &self.delegate.is_some())
            .finish()
    }
}
