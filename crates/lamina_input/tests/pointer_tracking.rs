//! Randomized pointer tracking: drives a wandering pointer over a
//! grid of layers and checks the residency bookkeeping after every
//! sample.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use lamina_core::{Bounds, EventFlags, InputEvent, LayerEvent, Propagation, Vec2, Vec3};
use lamina_input::{hit_test, Dispatcher, OrthographicProjector};
use lamina_scene::{LayerDelegate, LayerKey, Scene};

#[derive(Default)]
struct Counts {
    entered: i32,
    exited: i32,
    moved: i32,
}

struct Counter {
    tag: u32,
    counts: Rc<RefCell<HashMap<u32, Counts>>>,
}

impl Counter {
    fn bump(&self, f: impl FnOnce(&mut Counts)) -> Propagation {
        f(self.counts.borrow_mut().entry(self.tag).or_default());
        Propagation::Continue
    }
}

impl LayerDelegate for Counter {
    fn pointer_entered(&mut self, _: &mut Scene, _: LayerKey, _: &LayerEvent) -> Propagation {
        self.bump(|c| c.entered += 1)
    }
    fn pointer_exited(&mut self, _: &mut Scene, _: LayerKey, _: &LayerEvent) -> Propagation {
        self.bump(|c| c.exited += 1)
    }
    fn pointer_moved(&mut self, _: &mut Scene, _: LayerKey, _: &LayerEvent) -> Propagation {
        self.bump(|c| c.moved += 1)
    }
}

/// A 3x3 grid of 20-unit layers spaced 30 apart, so neighbors do not
/// overlap but a wandering pointer crosses many boundaries.
fn build_grid(scene: &mut Scene, counts: &Rc<RefCell<HashMap<u32, Counts>>>) -> Vec<LayerKey> {
    let root = scene.root();
    let mut keys = Vec::new();
    for gx in 0..3 {
        for gy in 0..3 {
            let key = scene.create_layer_with_bounds(Bounds::new(-10.0, -10.0, 10.0, 10.0));
            scene
                .layer_mut(key)
                .unwrap()
                .set_position(Vec3::new(gx as f64 * 30.0, gy as f64 * 30.0, 0.0));
            let tag = scene.layer(key).unwrap().tag();
            scene.layer_mut(key).unwrap().set_delegate(Box::new(Counter {
                tag,
                counts: Rc::clone(counts),
            }));
            scene.add_sublayer(root, key).unwrap();
            keys.push(key);
        }
    }
    keys
}

#[test]
fn test_random_walk_keeps_residency_consistent() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let counts: Rc<RefCell<HashMap<u32, Counts>>> = Rc::new(RefCell::new(HashMap::new()));
    let mut scene = Scene::new();
    let keys = build_grid(&mut scene, &counts);
    let mut dispatcher = Dispatcher::new();
    let mut rng = SmallRng::seed_from_u64(0x1a314a);

    let mut pos = Vec2::new(30.0, 30.0);
    for _ in 0..2000 {
        pos.x += rng.gen_range(-8.0..8.0);
        pos.y += rng.gen_range(-8.0..8.0);
        pos.x = pos.x.clamp(-20.0, 80.0);
        pos.y = pos.y.clamp(-20.0, 80.0);

        let event = InputEvent {
            flags: EventFlags::MOTION,
            screen_location: pos,
            ..Default::default()
        };
        dispatcher.dispatch(&mut scene, &OrthographicProjector, &event);

        // Residency must be exactly the current hit set, minus the
        // hit list's unconditional root entry when the root itself
        // missed.
        let hits = hit_test(&scene, &OrthographicProjector, pos);
        for key in &keys {
            let resident = dispatcher.resident_layers(0).contains(key);
            assert_eq!(resident, hits.contains(key));
        }

        // Every layer's entered count leads its exited count by
        // exactly its residency (0 or 1).
        let counts = counts.borrow();
        for key in &keys {
            let tag = scene.layer(*key).unwrap().tag();
            if let Some(c) = counts.get(&tag) {
                let open = c.entered - c.exited;
                let resident = dispatcher.resident_layers(0).contains(key);
                assert_eq!(open, i32::from(resident));
                assert!(open == 0 || open == 1);
            }
        }
    }

    // Sanity: the walk actually crossed boundaries.
    let counts = counts.borrow();
    let total_entered: i32 = counts.values().map(|c| c.entered).sum();
    let total_moved: i32 = counts.values().map(|c| c.moved).sum();
    assert!(total_entered > 5);
    assert!(total_moved > 50);
}
