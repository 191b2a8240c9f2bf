// src/lib.rs
//! Keel
//!
//! Geometry tessellation and camera transform core for real-time
//! rendering. Keel builds the plain numeric data a renderer consumes
//! (flat vertex/normal/index buffers and row-major 4x4 matrices) and
//! stops there: windowing, GPU resource management, and shader plumbing
//! belong to the host.
//!
//! - Procedural shapes: subdivided cube, cylinder, icosphere
//! - OBJ import with vertex welding for indexed drawing
//! - First-person camera with derived view/projection matrices
//! - Row-major affine and projection matrix construction

pub mod camera;
pub mod geometry;
pub mod lighting;
pub mod math;
pub mod prelude;

// Re-export main types for convenience
pub use camera::{FlyCamera, Projection};
pub use geometry::{generate_cube, generate_cylinder, generate_sphere, load_obj, Mesh, NormalMode};
pub use math::{Mat4, Vec3, Vec4};
