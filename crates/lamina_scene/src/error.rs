use thiserror::Error;

/// Structural errors from scene tree operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SceneError {
    /// The layer has no parent to detach from.
    #[error("layer is not attached to a parent")]
    Detached,

    /// The layer key does not resolve, it was destroyed or never
    /// belonged to this scene.
    #[error("layer does not exist in this scene")]
    Missing,
}
