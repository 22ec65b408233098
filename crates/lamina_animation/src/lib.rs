//! Animation system for the Lamina scene graph.
//!
//! Three motion models drive layer state between frames:
//!
//! - **Eased tweens** ([`EasedAnimation`]) - fixed-duration cosine
//!   interpolation from a captured start value to a target, with an
//!   exact target write on completion.
//! - **Rate-limited coasting** ([`rate_limited_step`]) - linear
//!   approach toward a target clipped to a per-second maximum speed,
//!   stepped every frame until an axis stops moving.
//! - **Gyration** ([`GyrationAnimation`]) - damped random wander
//!   within per-axis limits, retargeting on a timer.
//!
//! [`Animator`] bundles all three behind one per-layer facade and
//! additionally drives externally-owned [`Animatable`] objects by
//! weak reference.
//!
//! All timing is tick-driven: callers pass the scene clock in, and no
//! wall time is read anywhere in this crate.

pub mod animator;
pub mod eased;
pub mod gyration;
pub mod linear;

pub use animator::Animator;
pub use eased::{Animatable, EasedAnimation, PropertyAnimation};
pub use gyration::GyrationAnimation;
pub use linear::{rate_limited_step, AxisFlags};
