//! Input routing for the Lamina scene graph.
//!
//! Raw device samples ([`lamina_core::InputEvent`]) become per-layer
//! deliveries in three steps:
//!
//! - **Projection** ([`Projector`]) - the host maps a screen-space
//!   sample onto the world plane at a layer's depth. The library
//!   ships [`OrthographicProjector`] for tests and simple hosts; a
//!   perspective host supplies its own.
//! - **Hit-testing** ([`hit_test`]) - an explicit-stack tree walk
//!   collecting every layer whose bounds contain the sample, root
//!   first, siblings in reverse insertion order.
//! - **Dispatch** ([`Dispatcher`]) - per-device residency tracking
//!   turning motion samples into entered/moved/dragged/exited
//!   deliveries, plus press, release, scroll and key routing.

pub mod dispatch;
pub mod hit;
pub mod projector;

pub use dispatch::{Dispatcher, DEVICE_SLOTS};
pub use hit::{convert_point_to_layer, hit_test};
pub use projector::{OrthographicProjector, Projector};
