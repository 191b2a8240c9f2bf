//! # Math Primitives
//!
//! Vector and matrix types shared by the camera and geometry modules.
//! Everything here is a plain value type: pure functions, no allocation,
//! no error paths. Degenerate inputs (zero-length vectors, collapsed view
//! bases) are tolerated silently rather than raised; see the individual
//! operations for the exact policy.

pub mod mat;
pub mod vec;

pub use mat::Mat4;
pub use vec::{Vec3, Vec4};
