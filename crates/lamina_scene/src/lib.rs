//! Retained-mode layer tree for the Lamina scene graph.
//!
//! A [`Scene`] owns every [`Layer`] in a slotmap arena and exposes:
//!
//! - **Tree structure** - attach, detach and destroy operations with
//!   parent backrefs and insertion-ordered child lists.
//! - **Frame traversal** - [`Scene::display`] walks the visible tree
//!   once per render stage, advancing animations and firing delegate
//!   draw hooks.
//! - **Delegate hooks** - hosts implement [`LayerDelegate`] to draw
//!   and to receive routed input, instead of subclassing.
//! - **A step-driven clock** - scene time advances only with the
//!   frame deltas passed to `display`, so replaying the same deltas
//!   reproduces the same animation states bit for bit.
//!
//! Layer keys are generational: a key held across a destroy simply
//! stops resolving, it can never alias a newer layer.

pub mod delegate;
pub mod error;
pub mod layer;
pub mod scene;

pub use delegate::LayerDelegate;
pub use error::SceneError;
pub use layer::{Layer, LayerKey};
pub use scene::{RenderStage, Scene};
