//! # Keel Prelude
//!
//! One-stop import for the commonly used types.
//!
//! ## Usage
//!
//! ```rust
//! use keel::prelude::*;
//!
//! let mut camera = FlyCamera::new(Projection::Perspective);
//! camera.move_forward();
//!
//! let sphere = generate_sphere(3, NormalMode::Smooth);
//! let view = camera.view_matrix();
//! ```

// Re-export math types
pub use crate::math::{Mat4, Vec3, Vec4};

// Re-export camera types
pub use crate::camera::{CameraUniform, FlyCamera, Projection, CAM_SPEED};

// Re-export geometry types and generators
pub use crate::geometry::{
    generate_cube, generate_cylinder, generate_sphere, load_obj, Material, Mesh, NormalMode,
    ObjError, Vertex3D,
};

// Re-export lighting types
pub use crate::lighting::PointLight;
