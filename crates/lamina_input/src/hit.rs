//! Stack-based hit-testing.

use lamina_core::{Vec2, Vec3};
use lamina_scene::{LayerKey, Scene};

use crate::projector::Projector;

/// Converts a screen sample into `key`'s local plane: the sample is
/// unprojected at the layer's world depth, then translated by the
/// layer's world origin.
pub fn convert_point_to_layer(
    scene: &Scene,
    projector: &dyn Projector,
    key: LayerKey,
    screen: Vec2,
) -> Vec2 {
    let origin = scene.convert_from_world(key, Vec3::ZERO);
    let world = projector.unproject(screen, origin.z);
    Vec2::new(world.x - origin.x, world.y - origin.y)
}

/// Collects every layer whose effective bounds contain the screen
/// sample in its local plane.
///
/// The root goes into the result unconditionally before any
/// containment test, so callers always have a fallback target; if the
/// root's own bounds also contain the point it appears a second time.
/// The walk uses an explicit stack with children pushed in insertion
/// order, so siblings are visited in reverse insertion order - later
/// siblings (drawn on top) hit first. Hidden layers are skipped with
/// their whole subtree.
pub fn hit_test(scene: &Scene, projector: &dyn Projector, screen: Vec2) -> Vec<LayerKey> {
    let mut result = Vec::new();
    let root = scene.root();
    let Some(root_layer) = scene.layer(root) else {
        return result;
    };
    result.push(root);
    if root_layer.is_hidden() {
        return result;
    }

    let mut stack = vec![root];
    while let Some(key) = stack.pop() {
        let Some(layer) = scene.layer(key) else {
            continue;
        };
        let local = convert_point_to_layer(scene, projector, key, screen);
        if layer.contains_point(local) {
            result.push(key);
        }
        for child in layer.children() {
            if scene.layer(*child).is_some_and(|c| !c.is_hidden()) {
                stack.push(*child);
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projector::OrthographicProjector;
    use lamina_core::Bounds;

    fn sized_child(scene: &mut Scene, parent: LayerKey, pos: Vec3, half: f64) -> LayerKey {
        let key = scene.create_layer_with_bounds(Bounds::new(-half, -half, half, half));
        scene.layer_mut(key).unwrap().set_position(pos);
        scene.add_sublayer(parent, key).unwrap();
        key
    }

    #[test]
    fn test_root_always_first_even_on_miss() {
        let scene = Scene::new();
        let hits = hit_test(&scene, &OrthographicProjector, Vec2::new(500.0, 500.0));
        assert_eq!(hits, vec![scene.root()]);
    }

    #[test]
    fn test_root_duplicated_when_its_bounds_hit() {
        let mut scene = Scene::new();
        let root = scene.root();
        scene
            .layer_mut(root)
            .unwrap()
            .set_bounds(Bounds::new(-10.0, -10.0, 10.0, 10.0));
        let hits = hit_test(&scene, &OrthographicProjector, Vec2::ZERO);
        assert_eq!(hits, vec![root, root]);
    }

    #[test]
    fn test_siblings_hit_in_reverse_insertion_order() {
        let mut scene = Scene::new();
        let root = scene.root();
        let a = sized_child(&mut scene, root, Vec3::ZERO, 1.0);
        let b = sized_child(&mut scene, root, Vec3::ZERO, 1.0);
        let hits = hit_test(&scene, &OrthographicProjector, Vec2::ZERO);
        // Root (unconditional), then b before a.
        assert_eq!(hits, vec![root, b, a]);
    }

    #[test]
    fn test_hidden_subtree_never_hit() {
        let mut scene = Scene::new();
        let root = scene.root();
        let a = sized_child(&mut scene, root, Vec3::ZERO, 1.0);
        let inner = sized_child(&mut scene, a, Vec3::ZERO, 1.0);
        scene.layer_mut(a).unwrap().set_hidden(true);
        let hits = hit_test(&scene, &OrthographicProjector, Vec2::ZERO);
        assert!(!hits.contains(&a));
        assert!(!hits.contains(&inner));
    }

    #[test]
    fn test_containment_uses_world_origin() {
        let mut scene = Scene::new();
        let root = scene.root();
        let a = sized_child(&mut scene, root, Vec3::new(100.0, 0.0, 0.0), 5.0);
        let inner = sized_child(&mut scene, a, Vec3::new(0.0, 50.0, 0.0), 5.0);

        let hits = hit_test(&scene, &OrthographicProjector, Vec2::new(100.0, 50.0));
        assert!(hits.contains(&inner));
        assert!(!hits.contains(&a));
    }

    #[test]
    fn test_convert_point_ignores_render_offset() {
        let mut scene = Scene::new();
        let root = scene.root();
        let a = sized_child(&mut scene, root, Vec3::new(10.0, 20.0, 0.0), 1.0);
        scene
            .layer_mut(a)
            .unwrap()
            .set_position_offset(Vec3::new(1.0, 0.0, 0.0));
        // The rendering nudge does not move hit geometry: the layer's
        // logical origin is still its position.
        let local =
            convert_point_to_layer(&scene, &OrthographicProjector, a, Vec2::new(10.0, 20.0));
        assert_eq!(local, Vec2::ZERO);
    }
}
