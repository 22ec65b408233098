//! The host hook surface.
//!
//! A layer's behavior lives in its delegate rather than a subclass:
//! hosts implement [`LayerDelegate`] for drawing and input handling
//! and attach it with [`crate::Layer::set_delegate`]. Every method
//! has a default body, so a delegate implements only what it cares
//! about.
//!
//! Pointer and scroll handlers return [`Propagation`] to decide
//! whether dispatch keeps delivering the event to layers deeper in
//! the hit list. Draw hooks return nothing.

use lamina_core::{LayerEvent, Propagation};

use crate::layer::LayerKey;
use crate::scene::Scene;

/// Per-layer host callbacks.
///
/// Handlers receive the owning [`Scene`] mutably, so a delegate may
/// restructure the tree or start animations from inside a callback.
/// The receiving layer's own delegate is detached for the duration of
/// the call; replacing it from inside the callback sticks.
#[allow(unused_variables)]
pub trait LayerDelegate {
    /// Renders the layer. Fired during the opaque draw stage when the
    /// layer is fully opaque, and during the transparent stage
    /// otherwise.
    fn draw(&mut self, scene: &mut Scene, layer: LayerKey) {}

    /// Fired for every layer after all draw stages, for effects that
    /// must come last.
    fn post_draw(&mut self, scene: &mut Scene, layer: LayerKey) {}

    fn key_down(&mut self, scene: &mut Scene, layer: LayerKey, event: &LayerEvent) -> Propagation {
        Propagation::Continue
    }

    fn pointer_down(
        &mut self,
        scene: &mut Scene,
        layer: LayerKey,
        event: &LayerEvent,
    ) -> Propagation {
        Propagation::Continue
    }

    fn pointer_up(
        &mut self,
        scene: &mut Scene,
        layer: LayerKey,
        event: &LayerEvent,
    ) -> Propagation {
        Propagation::Continue
    }

    fn pointer_moved(
        &mut self,
        scene: &mut Scene,
        layer: LayerKey,
        event: &LayerEvent,
    ) -> Propagation {
        Propagation::Continue
    }

    fn pointer_dragged(
        &mut self,
        scene: &mut Scene,
        layer: LayerKey,
        event: &LayerEvent,
    ) -> Propagation {
        Propagation::Continue
    }

    fn pointer_entered(
        &mut self,
        scene: &mut Scene,
        layer: LayerKey,
        event: &LayerEvent,
    ) -> Propagation {
        Propagation::Continue
    }

    fn pointer_exited(
        &mut self,
        scene: &mut Scene,
        layer: LayerKey,
        event: &LayerEvent,
    ) -> Propagation {
        Propagation::Continue
    }

    fn scroll_wheel(
        &mut self,
        scene: &mut Scene,
        layer: LayerKey,
        event: &LayerEvent,
    ) -> Propagation {
        Propagation::Continue
    }
}
