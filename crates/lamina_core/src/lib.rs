//! Lamina Core Types
//!
//! This crate provides the foundational primitives for the Lamina
//! scene-graph library:
//!
//! - **Transform Math**: 2D/3D vectors and min/max bounds rectangles
//! - **Layer State**: the animatable transform/opacity block of a layer
//! - **Input Events**: raw device samples and the events routed to layers
//!
//! Everything here is deliberately host-agnostic: no clock, no windowing,
//! no rendering. Time enters the system only as tick values supplied by
//! the host each frame.

pub mod events;
pub mod geometry;
pub mod state;

pub use events::{Button, EventFlags, InputEvent, KeyCode, LayerEvent, Propagation};
pub use geometry::{Bounds, Interpolate, Vec2, Vec3};
pub use state::{FieldBinding, LayerState};

/// Milliseconds since host startup, as supplied by the host's tick source.
pub type Tick = u64;
