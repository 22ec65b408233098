//! Per-device pointer dispatch.
//!
//! The dispatcher remembers, for each device slot, which layers the
//! pointer is currently inside. Each motion or drag sample is
//! reconciled against a fresh hit list: newly hit layers get an
//! *entered* delivery and join the residency list, already-resident
//! layers get *moved* and/or *dragged*, and resident layers missing
//! from the hit list get *exited* and leave. Within one residency
//! span a layer sees at most one entered and exactly one exited.

use smallvec::SmallVec;
use tracing::{trace, warn};

use lamina_core::{EventFlags, InputEvent, LayerEvent, Propagation, Vec2};
use lamina_scene::{LayerKey, Scene};

use crate::hit::{convert_point_to_layer, hit_test};
use crate::projector::Projector;

/// Number of pointer device slots tracked independently.
pub const DEVICE_SLOTS: usize = 24;

type Residency = SmallVec<[LayerKey; 8]>;

/// Routes raw input samples to layer delegates.
pub struct Dispatcher {
    resident: [Residency; DEVICE_SLOTS],
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            resident: std::array::from_fn(|_| Residency::new()),
        }
    }

    /// Layers the given device is currently resident in, in entry
    /// order. Empty for out-of-range devices.
    pub fn resident_layers(&self, device: usize) -> &[LayerKey] {
        self.resident
            .get(device)
            .map(|r| r.as_slice())
            .unwrap_or(&[])
    }

    /// Routes one raw sample. Key events broadcast to the whole tree;
    /// everything else goes through hit-testing against the sample's
    /// screen location.
    pub fn dispatch(&mut self, scene: &mut Scene, projector: &dyn Projector, event: &InputEvent) {
        if event.flags.contains(EventFlags::KEY) {
            self.broadcast_key(scene, event);
        }

        if event.flags.contains(EventFlags::SCROLL) {
            for key in hit_test(scene, projector, event.screen_location) {
                let evt = routed(scene, projector, key, event);
                deliver(scene, key, |d, s| d.scroll_wheel(s, key, &evt));
            }
        } else if event.flags.contains(EventFlags::BUTTON_DOWN) {
            // Presses go to every intersecting layer; continuation is
            // not consulted.
            for key in hit_test(scene, projector, event.screen_location) {
                let evt = routed(scene, projector, key, event);
                deliver(scene, key, |d, s| d.pointer_down(s, key, &evt));
            }
        } else if event.flags.contains(EventFlags::BUTTON_UP) {
            // Releases stop at the first handler that claims them.
            for key in hit_test(scene, projector, event.screen_location) {
                let evt = routed(scene, projector, key, event);
                if deliver(scene, key, |d, s| d.pointer_up(s, key, &evt)).is_stop() {
                    break;
                }
            }
        } else if event.flags.contains(EventFlags::MOTION)
            || event.flags.contains(EventFlags::BUTTON_DRAGGED)
        {
            self.track_motion(scene, projector, event);
        }
    }

    fn broadcast_key(&mut self, scene: &mut Scene, event: &InputEvent) {
        // Same walk order as hit-testing: root first, siblings in
        // reverse insertion order. Hidden layers hear keys too.
        let mut stack = vec![scene.root()];
        while let Some(key) = stack.pop() {
            let mut evt = LayerEvent::from_input(event);
            evt.local_location = event.screen_location;
            deliver(scene, key, |d, s| d.key_down(s, key, &evt));
            if let Some(layer) = scene.layer(key) {
                stack.extend(layer.children().iter().copied());
            }
        }
    }

    fn track_motion(&mut self, scene: &mut Scene, projector: &dyn Projector, event: &InputEvent) {
        let device = event.device;
        if device >= DEVICE_SLOTS {
            warn!(device, "device id out of range, dropping event");
            return;
        }

        let hits = hit_test(scene, projector, event.screen_location);
        trace!(device, hits = hits.len(), "pointer sample");

        for key in &hits {
            let key = *key;
            if !self.resident[device].contains(&key) {
                self.resident[device].push(key);
                let mut evt = routed(scene, projector, key, event);
                evt.flags |= EventFlags::ENTERED;
                // An entered handler may claim the sample, halting
                // delivery to the rest of the hit list. Exits below
                // still run.
                if deliver(scene, key, |d, s| d.pointer_entered(s, key, &evt)).is_stop() {
                    break;
                }
            } else {
                if event.flags.contains(EventFlags::MOTION) {
                    let evt = routed(scene, projector, key, event);
                    deliver(scene, key, |d, s| d.pointer_moved(s, key, &evt));
                }
                if event.flags.contains(EventFlags::BUTTON_DRAGGED) {
                    let evt = routed(scene, projector, key, event);
                    deliver(scene, key, |d, s| d.pointer_dragged(s, key, &evt));
                }
            }
        }

        // Reconcile: residents no longer hit leave the list with an
        // exited delivery. Residents destroyed since the last sample
        // are pruned without any delivery, their delegate is gone.
        let current: Residency = self.resident[device].clone();
        let mut retained = Residency::new();
        for key in current {
            if !scene.contains(key) {
                continue;
            }
            if hits.contains(&key) {
                retained.push(key);
            } else {
                let mut evt = routed(scene, projector, key, event);
                evt.flags |= EventFlags::EXITED;
                deliver(scene, key, |d, s| d.pointer_exited(s, key, &evt));
            }
        }
        self.resident[device] = retained;
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

fn routed(
    scene: &Scene,
    projector: &dyn Projector,
    key: LayerKey,
    event: &InputEvent,
) -> LayerEvent {
    let mut evt = LayerEvent::from_input(event);
    evt.local_location = if scene.contains(key) {
        convert_point_to_layer(scene, projector, key, event.screen_location)
    } else {
        Vec2::ZERO
    };
    evt
}

/// Runs one delegate handler; a missing layer or absent delegate
/// counts as `Continue`.
fn deliver(
    scene: &mut Scene,
    key: LayerKey,
    f: impl FnOnce(&mut dyn lamina_scene::LayerDelegate, &mut Scene) -> Propagation,
) -> Propagation {
    scene
        .with_delegate(key, f)
        .unwrap_or(Propagation::Continue)
}
