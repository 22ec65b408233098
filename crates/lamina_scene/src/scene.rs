//! The scene context: arena, clock, and frame traversal.

use slotmap::SlotMap;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, trace};

use lamina_animation::eased::PropertyAnimation;
use lamina_core::{Bounds, FieldBinding, Tick, Vec3};

use crate::delegate::LayerDelegate;
use crate::error::SceneError;
use crate::layer::{Layer, LayerKey};

/// Frame traversal stages. A host renders one frame by calling
/// [`Scene::display`] once per stage in order, passing the frame
/// delta on the first call and zero on the rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderStage {
    /// Animation-only pass; fires no delegate hooks.
    PreDraw,
    /// Opaque pass: fires `draw` on fully opaque layers.
    Draw,
    /// Transparent pass: fires `draw` on layers with opacity below 1.
    DrawTransparent,
    /// Fires `post_draw` on every visible layer.
    PostDraw,
}

/// Seed for the auto-bounds fold. Inverted on purpose so the first
/// enclosed child replaces it, at the cost of only working for
/// content within 1000 units of the origin.
const AUTO_BOUNDS_SEED: Bounds = Bounds::new(1000.0, 1000.0, -1000.0, -1000.0);

/// The retained layer tree plus everything frame-scoped: the tag
/// counter, the step-driven clock, and the debug-draw toggle.
pub struct Scene {
    layers: SlotMap<LayerKey, Layer>,
    root: LayerKey,
    next_tag: u32,
    now_ms: Tick,
    debug_draw: bool,
}

impl Scene {
    /// Creates a scene with a fresh root layer at the origin.
    pub fn new() -> Self {
        let mut layers = SlotMap::with_key();
        let root = layers.insert(Layer::new(0));
        Self {
            layers,
            root,
            next_tag: 1,
            now_ms: 0,
            debug_draw: false,
        }
    }

    pub fn root(&self) -> LayerKey {
        self.root
    }

    /// Scene time in milliseconds. Advances only through
    /// [`Scene::display`] deltas.
    pub fn now_ms(&self) -> Tick {
        self.now_ms
    }

    pub fn debug_draw(&self) -> bool {
        self.debug_draw
    }

    pub fn set_debug_draw(&mut self, on: bool) {
        self.debug_draw = on;
    }

    pub fn layer(&self, key: LayerKey) -> Option<&Layer> {
        self.layers.get(key)
    }

    pub fn layer_mut(&mut self, key: LayerKey) -> Option<&mut Layer> {
        self.layers.get_mut(key)
    }

    pub fn contains(&self, key: LayerKey) -> bool {
        self.layers.contains_key(key)
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    // ─── structure ──────────────────────────────────────────────────

    /// Creates a detached layer. Attach it with
    /// [`Scene::add_sublayer`].
    pub fn create_layer(&mut self) -> LayerKey {
        let tag = self.next_tag;
        self.next_tag += 1;
        let key = self.layers.insert(Layer::new(tag));
        debug!(tag, "layer created");
        key
    }

    pub fn create_layer_at(&mut self, position: Vec3) -> LayerKey {
        let key = self.create_layer();
        // A fresh layer has no animations to cancel, so write state
        // directly and re-anchor the animator.
        let Layer {
            state, animator, ..
        } = &mut self.layers[key];
        state.position = position;
        animator.sync(state);
        key
    }

    pub fn create_layer_with_bounds(&mut self, bounds: Bounds) -> LayerKey {
        let key = self.create_layer();
        self.layers[key].set_bounds_internal(bounds);
        key
    }

    /// Appends `child` to `parent`'s child list, detaching it from
    /// any previous parent first. Cycles are not detected; attaching
    /// an ancestor under its own descendant will hang traversal.
    pub fn add_sublayer(&mut self, parent: LayerKey, child: LayerKey) -> Result<(), SceneError> {
        if !self.layers.contains_key(parent) || !self.layers.contains_key(child) {
            return Err(SceneError::Missing);
        }
        if self.layers[child].parent.is_some() {
            self.remove_from_parent(child)?;
        }
        self.layers[child].parent = Some(parent);
        self.layers[parent].children.push(child);
        debug!(
            parent = self.layers[parent].tag(),
            child = self.layers[child].tag(),
            "sublayer attached"
        );
        Ok(())
    }

    /// Detaches `child` from its parent. The layer stays alive in the
    /// arena as an orphan and can be re-attached later.
    pub fn remove_from_parent(&mut self, child: LayerKey) -> Result<(), SceneError> {
        let parent = self
            .layers
            .get(child)
            .ok_or(SceneError::Missing)?
            .parent
            .ok_or(SceneError::Detached)?;
        if let Some(p) = self.layers.get_mut(parent) {
            p.children.retain(|k| *k != child);
        }
        self.layers[child].parent = None;
        debug!(tag = self.layers[child].tag(), "sublayer detached");
        Ok(())
    }

    /// Destroys a layer and its whole subtree: detaches from the
    /// parent, stops every animation in the subtree, and frees the
    /// arena slots. Keys into the subtree stop resolving.
    pub fn destroy_layer(&mut self, key: LayerKey) -> Result<(), SceneError> {
        if !self.layers.contains_key(key) {
            return Err(SceneError::Missing);
        }
        if self.layers[key].parent.is_some() {
            self.remove_from_parent(key)?;
        }

        let mut stack: SmallVec<[LayerKey; 8]> = SmallVec::new();
        stack.push(key);
        while let Some(k) = stack.pop() {
            if let Some(mut layer) = self.layers.remove(k) {
                layer.animator.stop_all();
                debug!(tag = layer.tag(), "layer destroyed");
                stack.extend(layer.children.iter().copied());
            }
        }
        Ok(())
    }

    /// Depth-first pre-order search for a tag, starting at `from`
    /// itself. First match wins; children are searched in insertion
    /// order.
    pub fn layer_with_tag(&self, from: LayerKey, tag: u32) -> Option<LayerKey> {
        let layer = self.layers.get(from)?;
        if layer.tag() == tag {
            return Some(from);
        }
        for child in &layer.children {
            if let Some(found) = self.layer_with_tag(*child, tag) {
                return Some(found);
            }
        }
        None
    }

    /// Maps a point in `key`'s coordinate space into world space by
    /// accumulating `position` down the ancestor chain. The rendering
    /// nudge (`position_offset`) is not part of the logical position
    /// and does not participate. Pass [`Vec3::ZERO`] to get the
    /// layer's world origin.
    pub fn convert_from_world(&self, key: LayerKey, point: Vec3) -> Vec3 {
        let mut acc = point;
        let mut cursor = Some(key);
        while let Some(k) = cursor {
            let Some(layer) = self.layers.get(k) else { break };
            acc += layer.state.position;
            cursor = layer.parent;
        }
        acc
    }

    // ─── frame traversal ────────────────────────────────────────────

    /// Walks the visible tree for one render stage. A non-zero
    /// `delta_ms` advances the scene clock and every visible layer's
    /// animations before any hook fires; hosts therefore pass the
    /// frame delta on exactly one stage per frame and zero on the
    /// others.
    ///
    /// Hidden layers are skipped with their whole subtree, in every
    /// stage. After a layer's children are traversed, an auto-bounds
    /// layer refolds its local bounds from its non-hidden children.
    pub fn display(&mut self, delta_ms: u64, stage: RenderStage) {
        if delta_ms != 0 {
            self.now_ms += delta_ms;
        }
        let root = self.root;
        self.display_layer(root, delta_ms, stage);
    }

    fn display_layer(&mut self, key: LayerKey, delta_ms: u64, stage: RenderStage) {
        let now = self.now_ms;
        let Some(layer) = self.layers.get_mut(key) else {
            return;
        };
        if layer.is_hidden() {
            return;
        }

        if delta_ms != 0 {
            let Layer {
                state, animator, ..
            } = &mut *layer;
            animator.update(state, delta_ms, now);
        }

        let opacity = layer.state.opacity;
        let z = layer.state.position.z;
        if self.debug_draw {
            trace!(tag = layer.tag(), ?stage, opacity, "display layer");
        }

        // Layers pushed toward the camera (z > 0) skip their own draw
        // hooks but still traverse and still post-draw.
        match stage {
            RenderStage::PreDraw => {}
            RenderStage::Draw => {
                if opacity == 1.0 && z <= 0.0 {
                    self.with_delegate(key, |d, scene| d.draw(scene, key));
                }
            }
            RenderStage::DrawTransparent => {
                if opacity != 1.0 && z <= 0.0 {
                    self.with_delegate(key, |d, scene| d.draw(scene, key));
                }
            }
            RenderStage::PostDraw => {
                self.with_delegate(key, |d, scene| d.post_draw(scene, key));
            }
        }

        let children: SmallVec<[LayerKey; 4]> = self
            .layers
            .get(key)
            .map(|l| l.children.clone())
            .unwrap_or_default();
        for child in &children {
            self.display_layer(*child, delta_ms, stage);
        }

        self.refold_auto_bounds(key, &children);
    }

    fn refold_auto_bounds(&mut self, key: LayerKey, children: &[LayerKey]) {
        let Some(layer) = self.layers.get(key) else {
            return;
        };
        if !layer.auto_bounds() {
            return;
        }
        let mut folded = AUTO_BOUNDS_SEED;
        for child in children {
            let Some(c) = self.layers.get(*child) else {
                continue;
            };
            if c.is_hidden() {
                continue;
            }
            folded = folded.enclose(c.bounds().offset(c.state.position.xy()));
        }
        if let Some(layer) = self.layers.get_mut(key) {
            layer.set_bounds_internal(folded);
        }
    }

    /// Runs a closure with `key`'s delegate temporarily detached, so
    /// the delegate can mutate the scene, including the receiving
    /// layer. A delegate installed from inside the callback replaces
    /// the detached one.
    pub fn with_delegate<R>(
        &mut self,
        key: LayerKey,
        f: impl FnOnce(&mut dyn LayerDelegate, &mut Scene) -> R,
    ) -> Option<R> {
        let mut delegate = self.layers.get_mut(key)?.delegate.take()?;
        let out = f(delegate.as_mut(), self);
        if let Some(layer) = self.layers.get_mut(key) {
            if layer.delegate.is_none() {
                layer.delegate = Some(delegate);
            }
        }
        Some(out)
    }

    // ─── animation entry points ─────────────────────────────────────
    //
    // These supply the scene clock, which layers cannot see on their
    // own.

    pub fn animate_position(&mut self, key: LayerKey, target: Vec3) -> Result<(), SceneError> {
        let now = self.now_ms;
        let layer = self.layers.get_mut(key).ok_or(SceneError::Missing)?;
        layer.animator.animate_position(layer.state.position, target, now);
        Ok(())
    }

    pub fn animate_rotation(&mut self, key: LayerKey, target: Vec3) -> Result<(), SceneError> {
        let now = self.now_ms;
        let layer = self.layers.get_mut(key).ok_or(SceneError::Missing)?;
        layer.animator.animate_rotation(layer.state.rotation, target, now);
        Ok(())
    }

    pub fn animate_scale(&mut self, key: LayerKey, target: Vec3) -> Result<(), SceneError> {
        let now = self.now_ms;
        let layer = self.layers.get_mut(key).ok_or(SceneError::Missing)?;
        layer.animator.animate_scale(layer.state.scale, target, now);
        Ok(())
    }

    pub fn animate_opacity(&mut self, key: LayerKey, target: f64) -> Result<(), SceneError> {
        let now = self.now_ms;
        let layer = self.layers.get_mut(key).ok_or(SceneError::Missing)?;
        layer.animator.animate_opacity(layer.state.opacity, target, now);
        Ok(())
    }

    /// Starts rate-limited coasting of rotation toward `target` on
    /// all axes.
    pub fn coast_rotation(&mut self, key: LayerKey, target: Vec3) -> Result<(), SceneError> {
        let layer = self.layers.get_mut(key).ok_or(SceneError::Missing)?;
        layer.animator.coast_rotation(target);
        Ok(())
    }

    /// Starts rate-limited coasting of scale toward `target` on all
    /// axes.
    pub fn coast_scale(&mut self, key: LayerKey, target: Vec3) -> Result<(), SceneError> {
        let layer = self.layers.get_mut(key).ok_or(SceneError::Missing)?;
        layer.animator.coast_scale(target);
        Ok(())
    }

    /// Nudges the rotation coast target by per-axis deltas; see
    /// [`Layer::set_relative_rotation`].
    pub fn set_relative_rotation(
        &mut self,
        key: LayerKey,
        dx: f64,
        dy: f64,
        dz: f64,
    ) -> Result<(), SceneError> {
        let layer = self.layers.get_mut(key).ok_or(SceneError::Missing)?;
        layer.set_relative_rotation(dx, dy, dz);
        Ok(())
    }

    /// Tweens an arbitrary external scalar. The returned handle keeps
    /// the animation alive; dropping it detaches the animation on the
    /// next displayed frame.
    pub fn add_property_animation(
        &mut self,
        key: LayerKey,
        get: Box<dyn Fn() -> f64>,
        set: Box<dyn FnMut(f64)>,
        target: f64,
    ) -> Result<Rc<RefCell<PropertyAnimation>>, SceneError> {
        let now = self.now_ms;
        let layer = self.layers.get_mut(key).ok_or(SceneError::Missing)?;
        Ok(layer.animator.add_property_animation(get, set, target, now))
    }

    /// Starts perpetual random motion of one layer field within
    /// `limits`.
    pub fn start_gyration(
        &mut self,
        key: LayerKey,
        binding: FieldBinding,
        limits: Vec3,
    ) -> Result<(), SceneError> {
        let layer = self.layers.get_mut(key).ok_or(SceneError::Missing)?;
        layer.animator.start_gyration(binding, limits);
        Ok(())
    }

    pub fn stop_gyration(&mut self, key: LayerKey) -> Result<(), SceneError> {
        let layer = self.layers.get_mut(key).ok_or(SceneError::Missing)?;
        layer.animator.stop_gyration();
        Ok(())
    }

    /// Adjusts gyration vigor in `[0, 1]` for a gyrating layer.
    pub fn set_gyration_vigor(&mut self, key: LayerKey, vigor: f64) -> Result<(), SceneError> {
        let layer = self.layers.get_mut(key).ok_or(SceneError::Missing)?;
        layer.animator.set_gyration_vigor(vigor);
        Ok(())
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lamina_core::Vec2;

    fn attached_layer(scene: &mut Scene, parent: LayerKey) -> LayerKey {
        let key = scene.create_layer();
        scene.add_sublayer(parent, key).unwrap();
        key
    }

    #[test]
    fn test_root_exists_and_is_detached() {
        let scene = Scene::new();
        let root = scene.root();
        assert!(scene.contains(root));
        assert_eq!(scene.layer(root).unwrap().parent(), None);
    }

    #[test]
    fn test_tags_are_unique_and_never_reused() {
        let mut scene = Scene::new();
        let a = scene.create_layer();
        let tag_a = scene.layer(a).unwrap().tag();
        scene.destroy_layer(a).unwrap();
        let b = scene.create_layer();
        assert_ne!(scene.layer(b).unwrap().tag(), tag_a);
    }

    #[test]
    fn test_attach_detach_keeps_backrefs_consistent() {
        let mut scene = Scene::new();
        let root = scene.root();
        let a = attached_layer(&mut scene, root);
        assert_eq!(scene.layer(a).unwrap().parent(), Some(root));
        assert_eq!(scene.layer(root).unwrap().children(), &[a]);

        scene.remove_from_parent(a).unwrap();
        assert_eq!(scene.layer(a).unwrap().parent(), None);
        assert!(scene.layer(root).unwrap().children().is_empty());
        // The orphan is still alive and can be re-attached.
        assert!(scene.contains(a));
        scene.add_sublayer(root, a).unwrap();
        assert_eq!(scene.layer(a).unwrap().parent(), Some(root));
    }

    #[test]
    fn test_reattach_moves_between_parents() {
        let mut scene = Scene::new();
        let root = scene.root();
        let p1 = attached_layer(&mut scene, root);
        let p2 = attached_layer(&mut scene, root);
        let child = attached_layer(&mut scene, p1);

        scene.add_sublayer(p2, child).unwrap();
        assert!(scene.layer(p1).unwrap().children().is_empty());
        assert_eq!(scene.layer(p2).unwrap().children(), &[child]);
    }

    #[test]
    fn test_remove_detached_is_error() {
        let mut scene = Scene::new();
        let root = scene.root();
        assert_eq!(scene.remove_from_parent(root), Err(SceneError::Detached));
        let orphan = scene.create_layer();
        assert_eq!(scene.remove_from_parent(orphan), Err(SceneError::Detached));
    }

    #[test]
    fn test_destroy_removes_whole_subtree() {
        let mut scene = Scene::new();
        let root = scene.root();
        let a = attached_layer(&mut scene, root);
        let b = attached_layer(&mut scene, a);
        let c = attached_layer(&mut scene, b);

        scene.destroy_layer(a).unwrap();
        assert!(!scene.contains(a));
        assert!(!scene.contains(b));
        assert!(!scene.contains(c));
        assert!(scene.layer(root).unwrap().children().is_empty());
        assert_eq!(scene.animate_position(b, Vec3::ZERO), Err(SceneError::Missing));
    }

    #[test]
    fn test_layer_with_tag_pre_order_first_match() {
        let mut scene = Scene::new();
        let root = scene.root();
        let a = attached_layer(&mut scene, root);
        let a1 = attached_layer(&mut scene, a);
        let b = attached_layer(&mut scene, root);

        let tag_a1 = scene.layer(a1).unwrap().tag();
        let tag_b = scene.layer(b).unwrap().tag();
        // Depth first: a's subtree is exhausted before b is visited.
        assert_eq!(scene.layer_with_tag(root, tag_a1), Some(a1));
        assert_eq!(scene.layer_with_tag(root, tag_b), Some(b));
        assert_eq!(scene.layer_with_tag(a, tag_b), None);
        assert_eq!(scene.layer_with_tag(root, 9999), None);
    }

    #[test]
    fn test_convert_from_world_accumulates_positions() {
        let mut scene = Scene::new();
        let root = scene.root();
        let a = attached_layer(&mut scene, root);
        let b = attached_layer(&mut scene, a);
        scene.layer_mut(a).unwrap().set_position(Vec3::new(10.0, 0.0, -5.0));
        scene.layer_mut(b).unwrap().set_position(Vec3::new(0.0, 2.0, 0.0));

        let origin = scene.convert_from_world(b, Vec3::ZERO);
        assert_eq!(origin, Vec3::new(10.0, 2.0, -5.0));
    }

    #[test]
    fn test_convert_from_world_ignores_render_offset() {
        let mut scene = Scene::new();
        let root = scene.root();
        let a = attached_layer(&mut scene, root);
        scene.layer_mut(a).unwrap().set_position(Vec3::new(10.0, 0.0, 0.0));
        scene
            .layer_mut(a)
            .unwrap()
            .set_position_offset(Vec3::new(1.0, 1.0, 0.0));

        // The nudge shifts rendering only; the logical origin stays
        // at the accumulated position.
        let origin = scene.convert_from_world(a, Vec3::ZERO);
        assert_eq!(origin, Vec3::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn test_clock_advances_only_with_nonzero_delta() {
        let mut scene = Scene::new();
        scene.display(16, RenderStage::PreDraw);
        scene.display(0, RenderStage::Draw);
        scene.display(0, RenderStage::DrawTransparent);
        scene.display(0, RenderStage::PostDraw);
        assert_eq!(scene.now_ms(), 16);
        scene.display(16, RenderStage::PreDraw);
        assert_eq!(scene.now_ms(), 32);
    }

    #[test]
    fn test_display_advances_animations() {
        let mut scene = Scene::new();
        let root = scene.root();
        let a = attached_layer(&mut scene, root);
        scene.animate_position(a, Vec3::new(10.0, 0.0, 0.0)).unwrap();

        for _ in 0..70 {
            scene.display(16, RenderStage::PreDraw);
            scene.display(0, RenderStage::Draw);
        }
        assert_eq!(scene.layer(a).unwrap().position(), Vec3::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn test_hidden_subtree_not_animated() {
        let mut scene = Scene::new();
        let root = scene.root();
        let a = attached_layer(&mut scene, root);
        let b = attached_layer(&mut scene, a);
        scene.animate_position(b, Vec3::new(10.0, 0.0, 0.0)).unwrap();
        scene.layer_mut(a).unwrap().set_hidden(true);

        scene.display(500, RenderStage::PreDraw);
        assert_eq!(scene.layer(b).unwrap().position(), Vec3::ZERO);
    }

    #[test]
    fn test_auto_bounds_folds_children() {
        let mut scene = Scene::new();
        let root = scene.root();
        let parent = attached_layer(&mut scene, root);
        scene.layer_mut(parent).unwrap().set_auto_bounds(true);

        let a = attached_layer(&mut scene, parent);
        scene
            .layer_mut(a)
            .unwrap()
            .set_bounds(Bounds::new(-1.0, -1.0, 1.0, 1.0));
        let b = attached_layer(&mut scene, parent);
        scene
            .layer_mut(b)
            .unwrap()
            .set_bounds(Bounds::new(-1.0, -1.0, 1.0, 1.0));
        scene.layer_mut(b).unwrap().set_position(Vec3::new(10.0, 10.0, 0.0));

        scene.display(16, RenderStage::PreDraw);
        assert_eq!(
            scene.layer(parent).unwrap().local_bounds(),
            Bounds::new(-1.0, -1.0, 11.0, 11.0)
        );
    }

    #[test]
    fn test_auto_bounds_ignores_hidden_children() {
        let mut scene = Scene::new();
        let root = scene.root();
        let parent = attached_layer(&mut scene, root);
        scene.layer_mut(parent).unwrap().set_auto_bounds(true);

        let a = attached_layer(&mut scene, parent);
        scene
            .layer_mut(a)
            .unwrap()
            .set_bounds(Bounds::new(-2.0, -2.0, 2.0, 2.0));
        let b = attached_layer(&mut scene, parent);
        scene
            .layer_mut(b)
            .unwrap()
            .set_bounds(Bounds::new(-50.0, -50.0, 50.0, 50.0));
        scene.layer_mut(b).unwrap().set_hidden(true);

        scene.display(16, RenderStage::PreDraw);
        assert_eq!(
            scene.layer(parent).unwrap().local_bounds(),
            Bounds::new(-2.0, -2.0, 2.0, 2.0)
        );
    }

    #[test]
    fn test_draw_stage_routing_by_opacity_and_depth() {
        use crate::delegate::LayerDelegate;
        use std::cell::RefCell;

        struct DrawLog {
            log: Rc<RefCell<Vec<&'static str>>>,
        }
        impl LayerDelegate for DrawLog {
            fn draw(&mut self, _: &mut Scene, _: LayerKey) {
                self.log.borrow_mut().push("draw");
            }
            fn post_draw(&mut self, _: &mut Scene, _: LayerKey) {
                self.log.borrow_mut().push("post_draw");
            }
        }

        let mut scene = Scene::new();
        let root = scene.root();
        let a = attached_layer(&mut scene, root);
        let log = Rc::new(RefCell::new(Vec::new()));
        scene
            .layer_mut(a)
            .unwrap()
            .set_delegate(Box::new(DrawLog { log: Rc::clone(&log) }));

        let frame = |scene: &mut Scene| {
            scene.display(16, RenderStage::PreDraw);
            scene.display(0, RenderStage::Draw);
            scene.display(0, RenderStage::DrawTransparent);
            scene.display(0, RenderStage::PostDraw);
        };

        // Fully opaque: draws once, in the opaque pass.
        frame(&mut scene);
        assert_eq!(*log.borrow(), vec!["draw", "post_draw"]);

        // Translucent: draws once, in the transparent pass.
        log.borrow_mut().clear();
        scene.layer_mut(a).unwrap().set_opacity(0.5);
        frame(&mut scene);
        assert_eq!(*log.borrow(), vec!["draw", "post_draw"]);

        // Pushed toward the camera: draw suppressed, post_draw not.
        log.borrow_mut().clear();
        scene.layer_mut(a).unwrap().set_position(Vec3::new(0.0, 0.0, 1.0));
        frame(&mut scene);
        assert_eq!(*log.borrow(), vec!["post_draw"]);
    }

    #[test]
    fn test_scene_set_relative_rotation_coasts() {
        let mut scene = Scene::new();
        let root = scene.root();
        let a = attached_layer(&mut scene, root);
        scene.set_relative_rotation(a, 0.0, 0.0, 90.0).unwrap();

        scene.display(100, RenderStage::PreDraw);
        let rot = scene.layer(a).unwrap().rotation();
        // 360 deg/s over 100 ms.
        assert!((rot.z - 36.0).abs() < 1e-9);
        assert_eq!(rot.x, 0.0);
    }

    #[test]
    fn test_contains_point_after_scale() {
        let mut scene = Scene::new();
        let a = scene.create_layer_with_bounds(Bounds::new(-1.0, -1.0, 1.0, 1.0));
        scene.layer_mut(a).unwrap().set_scale_uniform(2.0);
        assert!(scene.layer(a).unwrap().contains_point(Vec2::new(1.5, 1.5)));
        assert!(!scene.layer(a).unwrap().contains_point(Vec2::new(2.5, 0.0)));
    }
}
