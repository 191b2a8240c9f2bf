//! First-person camera with keyboard-step movement and mouse look.

use super::Projection;
use crate::math::{Mat4, Vec3, Vec4};

/// Distance moved per movement call, and degrees of rotation per pixel of
/// mouse travel. A fixed per-call step, not time-scaled: hosts that want
/// frame-rate independent movement call the step methods from a fixed-rate
/// tick.
pub const CAM_SPEED: f32 = 0.1;

/// A free-look camera.
///
/// Holds the eye position and the look/up/right direction vectors as
/// homogeneous points, together with cached view and projection matrices.
/// Every mutating method rebuilds the view matrix before returning, so
/// [`FlyCamera::view_matrix`] is never stale.
///
/// The stored basis is not re-orthonormalized on mutation; the view matrix
/// builder re-derives an orthonormal basis from `eye`, `look`, and `up` on
/// every rebuild, so accumulated drift in the stored vectors does not skew
/// rendering.
#[derive(Debug, Clone)]
pub struct FlyCamera {
    eye: Vec4,
    look: Vec4,
    up: Vec4,
    right: Vec4,
    view_matrix: Mat4,
    proj_matrix: Mat4,
    mouse_old_x: i32,
    mouse_old_y: i32,
}

impl FlyCamera {
    /// Creates a camera at the origin looking down `-Z` with `+Y` up,
    /// using the fixed default frustum of the given projection kind.
    pub fn new(projection: Projection) -> Self {
        let eye = Vec4::point(0.0, 0.0, 0.0);
        let look = Vec4::point(0.0, 0.0, -1.0);
        let up = Vec4::point(0.0, 1.0, 0.0);
        let right = Vec4::point(1.0, 0.0, 0.0);

        let proj_matrix = match projection {
            Projection::Perspective => Mat4::perspective(60.0, 1.0, 1.0, 0.5, 50.0),
            Projection::Orthographic => Mat4::orthographic(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0),
        };

        let mut camera = Self {
            eye,
            look,
            up,
            right,
            view_matrix: Mat4::identity(),
            proj_matrix,
            mouse_old_x: 0,
            mouse_old_y: 0,
        };
        camera.rebuild_view();
        camera
    }

    /// The cached world-to-camera matrix. See the
    /// [`math::mat`](crate::math::mat) module docs for the row-major
    /// transpose-at-upload convention.
    pub fn view_matrix(&self) -> Mat4 {
        self.view_matrix
    }

    /// The cached projection matrix for the kind this camera was
    /// constructed with.
    pub fn proj_matrix(&self) -> Mat4 {
        self.proj_matrix
    }

    pub fn move_forward(&mut self) {
        self.advance(self.look.xyz(), CAM_SPEED);
    }

    pub fn move_backward(&mut self) {
        self.advance(self.look.xyz(), -CAM_SPEED);
    }

    pub fn strafe_right(&mut self) {
        self.advance(self.right.xyz(), CAM_SPEED);
    }

    pub fn strafe_left(&mut self) {
        self.advance(self.right.xyz(), -CAM_SPEED);
    }

    pub fn move_up(&mut self) {
        self.advance(self.up.xyz(), CAM_SPEED);
    }

    pub fn move_down(&mut self) {
        self.advance(self.up.xyz(), -CAM_SPEED);
    }

    /// Records the mouse position a subsequent [`FlyCamera::look_around`]
    /// drag is measured from. Pure state update, no matrix rebuild.
    pub fn set_initial_mouse(&mut self, x: i32, y: i32) {
        self.mouse_old_x = x;
        self.mouse_old_y = y;
    }

    /// FPS-style mouse look: yaws and pitches the camera by the mouse
    /// travel since the last recorded position, scaled by [`CAM_SPEED`]
    /// degrees per pixel.
    ///
    /// Yaw (horizontal travel) rotates both `look` and `right` about `up`;
    /// pitch (vertical travel) rotates `look` only, about `right`. Leaving
    /// `right` unaffected by pitch keeps repeated pitching from rolling
    /// the camera.
    pub fn look_around(&mut self, x: i32, y: i32) {
        let delta_x = (x - self.mouse_old_x) as f32 * CAM_SPEED;
        let delta_y = (y - self.mouse_old_y) as f32 * CAM_SPEED;

        let yaw = Mat4::rotation(-delta_x, self.up.xyz());
        let pitch = Mat4::rotation(-delta_y, self.right.xyz());

        self.look = yaw * (pitch * self.look);
        self.right = yaw * self.right;
        self.rebuild_view();

        self.mouse_old_x = x;
        self.mouse_old_y = y;
    }

    pub fn eye(&self) -> [f32; 3] {
        self.eye.xyz().to_array()
    }

    pub fn look(&self) -> [f32; 3] {
        self.look.xyz().to_array()
    }

    pub fn up(&self) -> [f32; 3] {
        self.up.xyz().to_array()
    }

    pub fn right(&self) -> [f32; 3] {
        self.right.xyz().to_array()
    }

    pub fn set_eye(&mut self, x: f32, y: f32, z: f32) {
        self.eye = Vec4::point(x, y, z);
        self.rebuild_view();
    }

    pub fn set_look(&mut self, x: f32, y: f32, z: f32) {
        self.look = Vec4::point(x, y, z);
        self.rebuild_view();
    }

    pub fn set_up(&mut self, x: f32, y: f32, z: f32) {
        self.up = Vec4::point(x, y, z);
        self.rebuild_view();
    }

    pub fn set_right(&mut self, x: f32, y: f32, z: f32) {
        self.right = Vec4::point(x, y, z);
        self.rebuild_view();
    }

    /// Moves the eye along `direction` and rebuilds the view matrix.
    fn advance(&mut self, direction: Vec3, amount: f32) {
        let eye = self.eye.xyz() + direction * amount;
        self.eye = Vec4::point(eye.x, eye.y, eye.z);
        self.rebuild_view();
    }

    /// `look` is a direction, so the look-at target is `eye + look`.
    fn rebuild_view(&mut self) {
        self.view_matrix = Mat4::look_at(
            self.eye.xyz(),
            self.eye.xyz() + self.look.xyz(),
            self.up.xyz(),
        );
    }
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new(Projection::Perspective)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_vec3_eq(a: [f32; 3], b: [f32; 3]) {
        for i in 0..3 {
            assert!((a[i] - b[i]).abs() < EPS, "component {i}: {a:?} vs {b:?}");
        }
    }

    #[test]
    fn new_camera_looks_down_negative_z() {
        let camera = FlyCamera::new(Projection::Perspective);
        assert_vec3_eq(camera.eye(), [0.0, 0.0, 0.0]);
        assert_vec3_eq(camera.look(), [0.0, 0.0, -1.0]);
        assert_vec3_eq(camera.up(), [0.0, 1.0, 0.0]);
        assert_vec3_eq(camera.right(), [1.0, 0.0, 0.0]);
        // From the origin looking down -Z the view matrix is the identity.
        assert_eq!(camera.view_matrix(), Mat4::identity());
    }

    #[test]
    fn projection_kind_selects_default_frustum() {
        let persp = FlyCamera::new(Projection::Perspective);
        assert_eq!(persp.proj_matrix(), Mat4::perspective(60.0, 1.0, 1.0, 0.5, 50.0));
        let ortho = FlyCamera::new(Projection::Orthographic);
        assert_eq!(
            ortho.proj_matrix(),
            Mat4::orthographic(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0)
        );
    }

    #[test]
    fn move_forward_steps_along_look() {
        let mut camera = FlyCamera::new(Projection::Perspective);
        camera.move_forward();
        assert_vec3_eq(camera.eye(), [0.0, 0.0, -CAM_SPEED]);
        // The translation column carries -eye rotated into camera space:
        // the n row is +Z, so its entry is -n.eye = +CAM_SPEED.
        let view = camera.view_matrix();
        assert!((view.e[2][3] - CAM_SPEED).abs() < EPS);
    }

    #[test]
    fn forward_then_backward_returns_to_start() {
        let mut camera = FlyCamera::new(Projection::Perspective);
        camera.set_eye(1.0, 2.0, 3.0);
        let view_before = camera.view_matrix();

        camera.move_forward();
        camera.move_backward();

        assert_vec3_eq(camera.eye(), [1.0, 2.0, 3.0]);
        let view_after = camera.view_matrix();
        for row in 0..4 {
            for col in 0..4 {
                assert!((view_before.e[row][col] - view_after.e[row][col]).abs() < EPS);
            }
        }
    }

    #[test]
    fn strafe_and_vertical_movement_use_right_and_up() {
        let mut camera = FlyCamera::new(Projection::Perspective);
        camera.strafe_right();
        camera.move_up();
        assert_vec3_eq(camera.eye(), [CAM_SPEED, CAM_SPEED, 0.0]);
        camera.strafe_left();
        camera.move_down();
        assert_vec3_eq(camera.eye(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn setters_rebuild_the_view_matrix_immediately() {
        let mut camera = FlyCamera::new(Projection::Perspective);
        let before = camera.view_matrix();
        camera.set_eye(0.0, 0.0, 5.0);
        assert_ne!(camera.view_matrix(), before);
        // Eye must map to the view-space origin without any further
        // movement call.
        let mapped = camera.view_matrix() * Vec4::point(0.0, 0.0, 5.0);
        assert!(mapped.xyz().length() < EPS);
    }

    #[test]
    fn yaw_turns_look_and_right_together() {
        let mut camera = FlyCamera::new(Projection::Perspective);
        camera.set_initial_mouse(0, 0);
        // 900 pixels right at 0.1 degrees per pixel is a quarter turn.
        camera.look_around(900, 0);
        assert_vec3_eq(camera.look(), [1.0, 0.0, 0.0]);
        assert_vec3_eq(camera.right(), [0.0, 0.0, 1.0]);
        assert_vec3_eq(camera.up(), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn pitch_tilts_look_but_leaves_right_alone() {
        let mut camera = FlyCamera::new(Projection::Perspective);
        camera.set_initial_mouse(0, 0);
        // 450 pixels down pitches the camera 45 degrees up (deltas are
        // negated), halfway between -Z and +Y.
        camera.look_around(0, -450);
        let s = std::f32::consts::FRAC_1_SQRT_2;
        assert_vec3_eq(camera.look(), [0.0, s, -s]);
        assert_vec3_eq(camera.right(), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn look_around_updates_the_reference_point() {
        let mut camera = FlyCamera::new(Projection::Perspective);
        camera.set_initial_mouse(100, 100);
        camera.look_around(100, 100);
        // No travel, no rotation.
        assert_vec3_eq(camera.look(), [0.0, 0.0, -1.0]);
        camera.look_around(100, 100);
        assert_vec3_eq(camera.look(), [0.0, 0.0, -1.0]);
    }
}
