//! Per-layer animation facade.
//!
//! Each layer owns one [`Animator`] which bundles:
//!
//! - four built-in eased tweens (position, rotation, scale, opacity),
//! - coasting targets with per-axis flags for the rate-limited
//!   rotation and scale models,
//! - an optional gyration, and
//! - a weak list of externally-owned ad-hoc animations.
//!
//! The animator never reads the clock itself; [`Animator::update`] is
//! called once per displayed frame with the scene tick and frame
//! delta.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::trace;

use lamina_core::{FieldBinding, LayerState, Tick, Vec3};

use crate::eased::{Animatable, EasedAnimation, PropertyAnimation};
use crate::gyration::GyrationAnimation;
use crate::linear::{rate_limited_step, AxisFlags};

/// Degrees per second a coasting rotation may cover.
pub const ROTATION_MAX_SPEED: f64 = 360.0;
/// Scale units per second a coasting scale may cover.
pub const SCALE_MAX_SPEED: f64 = 5.85;
/// Duration of the built-in position, rotation and scale tweens.
pub const DEFAULT_DURATION_MS: u64 = 1000;
/// Opacity fades run longer than spatial tweens.
pub const OPACITY_DURATION_MS: u64 = 1500;

pub struct Animator {
    position_anim: EasedAnimation<Vec3>,
    rotation_anim: EasedAnimation<Vec3>,
    scale_anim: EasedAnimation<Vec3>,
    opacity_anim: EasedAnimation<f64>,

    // Coasting targets, mirrored from the last request per axis.
    target_position: Vec3,
    target_rotation: Vec3,
    target_scale: Vec3,
    position_axes: AxisFlags,
    rotation_axes: AxisFlags,
    scale_axes: AxisFlags,

    gyration: Option<GyrationAnimation>,
    ad_hoc: Vec<Weak<RefCell<dyn Animatable>>>,
}

impl Animator {
    pub fn new(state: &LayerState) -> Self {
        Self {
            position_anim: EasedAnimation::new(state.position, DEFAULT_DURATION_MS),
            rotation_anim: EasedAnimation::new(state.rotation, DEFAULT_DURATION_MS),
            scale_anim: EasedAnimation::new(state.scale, DEFAULT_DURATION_MS),
            opacity_anim: EasedAnimation::new(state.opacity, OPACITY_DURATION_MS),
            target_position: state.position,
            target_rotation: state.rotation,
            target_scale: state.scale,
            position_axes: AxisFlags::INACTIVE,
            rotation_axes: AxisFlags::INACTIVE,
            scale_axes: AxisFlags::INACTIVE,
            gyration: None,
            ad_hoc: Vec::new(),
        }
    }

    // ─── eased tweens ───────────────────────────────────────────────

    /// Tweens position from `committed` (the layer's current value)
    /// to `target`. Requesting the value the layer already holds
    /// cancels any tween in flight; re-requesting the target of a
    /// running tween is a no-op. A retarget mid-flight rebases the
    /// start value onto `committed` but keeps the original start
    /// tick, so the tween still ends on its original schedule.
    ///
    /// The coast mirror is left untouched: a coast with active axes
    /// keeps its own target and resumes once the tween stops
    /// overwriting the field.
    pub fn animate_position(&mut self, committed: Vec3, target: Vec3, now: Tick) {
        if committed == target {
            self.position_anim.stop();
            return;
        }
        if self.position_anim.is_running() && self.position_anim.target() == target {
            return;
        }
        self.position_anim.retarget(committed, target);
        self.position_anim.start(now);
    }

    /// Same contract as [`Animator::animate_position`].
    pub fn animate_rotation(&mut self, committed: Vec3, target: Vec3, now: Tick) {
        if committed == target {
            self.rotation_anim.stop();
            return;
        }
        if self.rotation_anim.is_running() && self.rotation_anim.target() == target {
            return;
        }
        self.rotation_anim.retarget(committed, target);
        self.rotation_anim.start(now);
    }

    /// Same contract as [`Animator::animate_position`].
    pub fn animate_scale(&mut self, committed: Vec3, target: Vec3, now: Tick) {
        if committed == target {
            self.scale_anim.stop();
            return;
        }
        if self.scale_anim.is_running() && self.scale_anim.target() == target {
            return;
        }
        self.scale_anim.retarget(committed, target);
        self.scale_anim.start(now);
    }

    /// Opacity differs from the spatial tweens: a retarget always
    /// restarts the fade from the freshly sampled committed value
    /// with a new start tick, so an interrupted fade never jumps.
    pub fn animate_opacity(&mut self, committed: f64, target: f64, now: Tick) {
        if self.opacity_anim.is_running() && self.opacity_anim.target() == target {
            return;
        }
        self.opacity_anim.stop();
        if committed == target {
            return;
        }
        self.opacity_anim.reset(committed, target, now);
        self.opacity_anim.start(now);
    }

    // ─── coasting ───────────────────────────────────────────────────

    /// Activates rate-limited coasting toward `target` on all three
    /// rotation axes.
    pub fn coast_rotation(&mut self, target: Vec3) {
        self.target_rotation = target;
        self.rotation_axes.set_all();
    }

    pub fn coast_rotation_x(&mut self, x: f64) {
        self.target_rotation.x = x;
        self.rotation_axes.x = true;
    }

    pub fn coast_rotation_y(&mut self, y: f64) {
        self.target_rotation.y = y;
        self.rotation_axes.y = true;
    }

    pub fn coast_rotation_z(&mut self, z: f64) {
        self.target_rotation.z = z;
        self.rotation_axes.z = true;
    }

    /// Activates rate-limited coasting toward `target` on all three
    /// scale axes.
    pub fn coast_scale(&mut self, target: Vec3) {
        self.target_scale = target;
        self.scale_axes.set_all();
    }

    pub fn coast_scale_x(&mut self, x: f64) {
        self.target_scale.x = x;
        self.scale_axes.x = true;
    }

    pub fn coast_scale_y(&mut self, y: f64) {
        self.target_scale.y = y;
        self.scale_axes.y = true;
    }

    pub fn coast_scale_z(&mut self, z: f64) {
        self.target_scale.z = z;
        self.scale_axes.z = true;
    }

    /// Records a per-axis position target. Position has no coasting
    /// model; the mirror is target bookkeeping only and the layer
    /// does not move until a tween is started.
    pub fn set_position_target_x(&mut self, x: f64) {
        self.target_position.x = x;
        self.position_axes.x = true;
    }

    pub fn set_position_target_y(&mut self, y: f64) {
        self.target_position.y = y;
        self.position_axes.y = true;
    }

    pub fn set_position_target_z(&mut self, z: f64) {
        self.target_position.z = z;
        self.position_axes.z = true;
    }

    pub fn target_position(&self) -> Vec3 {
        self.target_position
    }

    pub fn target_rotation(&self) -> Vec3 {
        self.target_rotation
    }

    pub fn target_scale(&self) -> Vec3 {
        self.target_scale
    }

    // ─── gyration ───────────────────────────────────────────────────

    pub fn start_gyration(&mut self, binding: FieldBinding, limits: Vec3) {
        self.gyration = Some(GyrationAnimation::new(binding, limits));
    }

    /// Deterministic variant for tests and replay.
    pub fn start_gyration_seeded(&mut self, binding: FieldBinding, limits: Vec3, seed: u64) {
        self.gyration = Some(GyrationAnimation::with_seed(binding, limits, seed));
    }

    pub fn stop_gyration(&mut self) {
        self.gyration = None;
    }

    pub fn is_gyrating(&self) -> bool {
        self.gyration.is_some()
    }

    /// Adjusts gyration vigor in `[0, 1]`. No-op when no gyration is
    /// running.
    pub fn set_gyration_vigor(&mut self, vigor: f64) {
        if let Some(gyr) = self.gyration.as_mut() {
            gyr.set_vigor(vigor);
        }
    }

    // ─── ad-hoc animations ──────────────────────────────────────────

    /// Builds, starts and registers an eased tween over an arbitrary
    /// external scalar. The caller keeps the returned strong handle;
    /// dropping it detaches the animation on the next frame.
    pub fn add_property_animation(
        &mut self,
        get: Box<dyn Fn() -> f64>,
        set: Box<dyn FnMut(f64)>,
        target: f64,
        now: Tick,
    ) -> Rc<RefCell<PropertyAnimation>> {
        let anim = Rc::new(RefCell::new(PropertyAnimation::new(
            get,
            set,
            target,
            PropertyAnimation::DEFAULT_DURATION_MS,
            now,
        )));
        let coerced: Rc<RefCell<dyn Animatable>> = anim.clone();
        let weak: Weak<RefCell<dyn Animatable>> = Rc::downgrade(&coerced);
        self.ad_hoc.push(weak);
        anim
    }

    /// Registers an externally-built animation for frame driving.
    pub fn register(&mut self, anim: Weak<RefCell<dyn Animatable>>) {
        self.ad_hoc.push(anim);
    }

    /// Removes one ad-hoc animation by identity without stopping it.
    pub fn remove_animation(&mut self, target: &Rc<RefCell<dyn Animatable>>) {
        let target = Rc::downgrade(target);
        self.ad_hoc.retain(|w| !w.ptr_eq(&target));
    }

    pub fn ad_hoc_count(&self) -> usize {
        self.ad_hoc.len()
    }

    // ─── frame driving ──────────────────────────────────────────────

    /// Advances every active animation to `tick` and writes results
    /// into `state`. Order within a frame: coasting first, then
    /// gyration, then the built-in tweens (a tween therefore
    /// overrides a coast targeting the same field), then ad-hoc
    /// animations.
    pub fn update(&mut self, state: &mut LayerState, delta_ms: u64, tick: Tick) {
        if let Some(v) = rate_limited_step(
            state.rotation,
            self.target_rotation,
            &mut self.rotation_axes,
            delta_ms,
            ROTATION_MAX_SPEED,
        ) {
            state.rotation = v;
        }
        if let Some(v) = rate_limited_step(
            state.scale,
            self.target_scale,
            &mut self.scale_axes,
            delta_ms,
            SCALE_MAX_SPEED,
        ) {
            state.scale = v;
        }

        if let Some(gyr) = self.gyration.as_mut() {
            gyr.update(state, tick);
        }

        if self.position_anim.is_running() {
            let (v, done) = self.position_anim.sample(tick);
            state.position = v;
            if done {
                trace!(target = ?v, "position tween complete");
                self.position_anim.stop();
            }
        }
        if self.rotation_anim.is_running() {
            let (v, done) = self.rotation_anim.sample(tick);
            state.rotation = v;
            if done {
                self.rotation_anim.stop();
            }
        }
        if self.scale_anim.is_running() {
            let (v, done) = self.scale_anim.sample(tick);
            state.scale = v;
            if done {
                self.scale_anim.stop();
            }
        }
        if self.opacity_anim.is_running() {
            let (v, done) = self.opacity_anim.sample(tick);
            state.opacity = v;
            if done {
                self.opacity_anim.stop();
            }
        }

        if !self.ad_hoc.is_empty() {
            self.drive_ad_hoc(tick);
        }
    }

    fn drive_ad_hoc(&mut self, tick: Tick) {
        let mut completed: Vec<Rc<RefCell<dyn Animatable>>> = Vec::new();
        for weak in &self.ad_hoc {
            if let Some(anim) = weak.upgrade() {
                if anim.borrow_mut().update(tick) {
                    completed.push(anim);
                }
            }
        }
        for anim in completed {
            anim.borrow_mut().stop();
        }
        // Drop entries that were freed by their owner or have
        // finished.
        self.ad_hoc
            .retain(|w| w.upgrade().map_or(false, |a| a.borrow().is_running()));
    }

    /// Re-anchors every mirror on the committed state and cancels all
    /// built-in motion. Called when a field is set directly so a
    /// stale tween cannot fight the explicit write.
    pub fn sync(&mut self, state: &LayerState) {
        self.position_anim = EasedAnimation::new(state.position, DEFAULT_DURATION_MS);
        self.rotation_anim = EasedAnimation::new(state.rotation, DEFAULT_DURATION_MS);
        self.scale_anim = EasedAnimation::new(state.scale, DEFAULT_DURATION_MS);
        self.opacity_anim = EasedAnimation::new(state.opacity, OPACITY_DURATION_MS);
        self.target_position = state.position;
        self.target_rotation = state.rotation;
        self.target_scale = state.scale;
        self.position_axes.clear();
        self.rotation_axes.clear();
        self.scale_axes.clear();
    }

    /// Halts every animation this animator drives, including ad-hoc
    /// ones it only weakly references.
    pub fn stop_all(&mut self) {
        self.position_anim.stop();
        self.rotation_anim.stop();
        self.scale_anim.stop();
        self.opacity_anim.stop();
        self.position_axes.clear();
        self.rotation_axes.clear();
        self.scale_axes.clear();
        self.gyration = None;
        for weak in self.ad_hoc.drain(..) {
            if let Some(anim) = weak.upgrade() {
                anim.borrow_mut().stop();
            }
        }
    }

    pub fn is_animating(&self) -> bool {
        self.position_anim.is_running()
            || self.rotation_anim.is_running()
            || self.scale_anim.is_running()
            || self.opacity_anim.is_running()
            || self.rotation_axes.any()
            || self.scale_axes.any()
            || self.gyration.is_some()
            || !self.ad_hoc.is_empty()
    }

    pub fn is_animating_position(&self) -> bool {
        self.position_anim.is_running()
    }

    pub fn is_animating_opacity(&self) -> bool {
        self.opacity_anim.is_running()
    }
}

impl std::fmt::Debug for Animator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Animator")
            .field("position_anim", &self.position_anim)
            .field("rotation_anim", &self.rotation_anim)
            .field("scale_anim", &self.scale_anim)
            .field("opacity_anim", &self.opacity_anim)
            .field("gyration", &self.gyration)
            .field("ad_hoc", &self.ad_hoc.len())
            .finish()
    }
}
