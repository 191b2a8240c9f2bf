//! Phong material description.
//!
//! Plain reflectance data consumed by a shading layer; this crate does not
//! evaluate the lighting model itself.

/// Ambient/diffuse/specular reflectance for the Phong illumination model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Ambient reflectance RGB.
    pub ambient: [f32; 3],
    /// Ambient coefficient.
    pub ka: f32,
    /// Diffuse reflectance RGB.
    pub diffuse: [f32; 3],
    /// Diffuse coefficient.
    pub kd: f32,
    /// Specular reflectance RGB.
    pub specular: [f32; 3],
    /// Specular coefficient.
    pub ks: f32,
    /// Specular exponent (shininess).
    pub specular_exponent: f32,
}

impl Material {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        ambient: [f32; 3],
        ka: f32,
        diffuse: [f32; 3],
        kd: f32,
        specular: [f32; 3],
        ks: f32,
        specular_exponent: f32,
    ) -> Self {
        Self {
            ambient,
            ka,
            diffuse,
            kd,
            specular,
            ks,
            specular_exponent,
        }
    }
}

impl Default for Material {
    /// A neutral grey plastic-like material.
    fn default() -> Self {
        Self::new(
            [0.2, 0.2, 0.2],
            1.0,
            [0.8, 0.8, 0.8],
            1.0,
            [1.0, 1.0, 1.0],
            1.0,
            32.0,
        )
    }
}
