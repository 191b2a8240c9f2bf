//! Point light description.
//!
//! Like [`Material`](crate::geometry::Material), this is plain data handed
//! to a shading layer, not an evaluated lighting model.

/// A point light with intensity and an ambient term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    /// World-space position.
    pub position: [f32; 3],
    /// Light intensity RGB.
    pub intensity: [f32; 3],
    /// Ambient intensity RGB.
    pub ambient: [f32; 3],
}

impl PointLight {
    pub fn new(position: [f32; 3], intensity: [f32; 3], ambient: [f32; 3]) -> Self {
        Self {
            position,
            intensity,
            ambient,
        }
    }
}

impl Default for PointLight {
    /// A white light overhead with a dim ambient floor.
    fn default() -> Self {
        Self::new([0.0, 5.0, 0.0], [1.0, 1.0, 1.0], [0.1, 0.1, 0.1])
    }
}
