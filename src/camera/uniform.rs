//! GPU uniform staging for camera matrices.

use super::fly_camera::FlyCamera;
use crate::math::Mat4;

/// Camera data in the layout shaders consume.
///
/// The matrix is stored row-major, exactly as [`Mat4`] holds it. Upload
/// with your API's row-major flag (`transpose = true` in
/// `glUniformMatrix4fv` terms) or transpose before writing the buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    /// The eye position in homogeneous coordinates.
    ///
    /// Homogeneous coordinates are used to fulfill the 16 byte alignment
    /// requirement.
    pub view_position: [f32; 4],

    /// The combined view-projection matrix, row-major.
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    /// Snapshots a camera's eye position and combined view-projection
    /// matrix.
    pub fn from_camera(camera: &FlyCamera) -> Self {
        let [x, y, z] = camera.eye();
        Self {
            view_position: [x, y, z, 1.0],
            view_proj: (camera.proj_matrix() * camera.view_matrix()).to_array(),
        }
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self {
            view_position: [0.0; 4],
            view_proj: Mat4::identity().to_array(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Projection;

    #[test]
    fn snapshot_carries_homogeneous_eye_position() {
        let mut camera = FlyCamera::new(Projection::Perspective);
        camera.set_eye(1.0, 2.0, 3.0);
        let uniform = CameraUniform::from_camera(&camera);
        assert_eq!(uniform.view_position, [1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn snapshot_composes_projection_after_view() {
        let camera = FlyCamera::new(Projection::Perspective);
        // View is the identity for the default camera, so the snapshot is
        // exactly the projection matrix.
        let uniform = CameraUniform::from_camera(&camera);
        assert_eq!(
            uniform.view_proj,
            Mat4::perspective(60.0, 1.0, 1.0, 0.5, 50.0).to_array()
        );
    }
}
