//! # Camera
//!
//! First-person style camera state and its derived view/projection
//! matrices, plus the GPU uniform staging type.

pub mod fly_camera;
pub mod uniform;

// Re-export main types
pub use fly_camera::{FlyCamera, CAM_SPEED};
pub use uniform::CameraUniform;

/// Projection kind a camera is constructed with.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Projection {
    /// Symmetric 60 degree frustum, 1:1 aspect, depth 0.5 to 50.
    Perspective,
    /// The box `[-1, 1] x [-1, 1] x [1, 10]`.
    Orthographic,
}
