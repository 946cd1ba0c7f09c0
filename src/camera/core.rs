//! Camera state and view/projection derivation.

use glam::{Mat4, Vec2, Vec3};

/// Which view derivation is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    /// Orbit the whole ring; the world counter-rotates so the selected
    /// item faces the viewer.
    #[default]
    Orbit,
    /// Orbit around the selected item alone, driven by held keys.
    Inspect,
}

/// Camera parameters for both view modes plus the shared projection.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Active view mode.
    pub mode: CameraMode,
    /// Fixed downward tilt applied in orbit mode, in degrees.
    pub tilt: f32,
    /// Orbit-mode offset from the ring center; `z` is the viewing
    /// distance (applied as a translation by `-z`).
    pub offset: Vec3,
    /// Accumulated inspect-mode rotation `(x, y)`, in degrees.
    pub inspect_rotation: Vec2,
    /// Inspect-mode pull-back distance from the item.
    pub inspect_distance: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// View matrix for the current mode.
    ///
    /// * Orbit: `T(offset.x, offset.y, -offset.z) * Rx(tilt) *
    ///   Ry(-ring_angle)`: the world spins opposite the ring so the
    ///   selected item ends up facing the viewer.
    /// * Inspect: `T(0, 0, -distance) * Rx(rot.x) * Ry(rot.y) *
    ///   T(-focus)`: the item is centered at the origin, orbited, then
    ///   pushed back.
    #[must_use]
    pub fn view_matrix(&self, ring_angle: f32, focus: Vec3) -> Mat4 {
        match self.mode {
            CameraMode::Orbit => {
                Mat4::from_translation(Vec3::new(
                    self.offset.x,
                    self.offset.y,
                    -self.offset.z,
                )) * Mat4::from_rotation_x(self.tilt.to_radians())
                    * Mat4::from_rotation_y(-ring_angle)
            }
            CameraMode::Inspect => {
                Mat4::from_translation(Vec3::new(0.0, 0.0, -self.inspect_distance))
                    * Mat4::from_rotation_x(self.inspect_rotation.x.to_radians())
                    * Mat4::from_rotation_y(self.inspect_rotation.y.to_radians())
                    * Mat4::from_translation(-focus)
            }
        }
    }

    /// Right-handed perspective projection from the current aspect ratio.
    ///
    /// `perspective_rh` already targets the 0..1 depth range (wgpu/Vulkan
    /// convention).
    #[must_use]
    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }
}

/// GPU uniform carrying the per-frame view and projection matrices,
/// column-major as glam stores them.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    /// View matrix.
    pub view: [[f32; 4]; 4],
    /// Projection matrix.
    pub proj: [[f32; 4]; 4],
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl CameraUniform {
    /// Identity view and projection (used for the screen-space backdrop).
    pub const IDENTITY: CameraUniform = CameraUniform {
        view: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
        proj: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Refresh both matrices from the camera's current state.
    pub fn update(&mut self, camera: &Camera, ring_angle: f32, focus: Vec3) {
        self.view = camera.view_matrix(ring_angle, focus).to_cols_array_2d();
        self.proj = camera.projection().to_cols_array_2d();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_camera() -> Camera {
        Camera {
            mode: CameraMode::Orbit,
            tilt: 0.0,
            offset: Vec3::new(0.0, 1.0, 20.0),
            inspect_rotation: Vec2::ZERO,
            inspect_distance: 10.0,
            aspect: 16.0 / 9.0,
            fovy: 45.0,
            znear: 0.1,
            zfar: 100.0,
        }
    }

    #[test]
    fn orbit_view_with_no_rotation_is_pure_translation() {
        let camera = test_camera();
        let view = camera.view_matrix(0.0, Vec3::ZERO);
        let expected = Mat4::from_translation(Vec3::new(0.0, 1.0, -20.0));
        assert!(view.abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn orbit_view_counter_rotates_ring_angle() {
        let mut camera = test_camera();
        camera.tilt = 0.0;
        let angle = 0.7;
        let view = camera.view_matrix(angle, Vec3::ZERO);

        // a point placed at the ring angle rotates back onto the -Z axis
        // at the orbit distance
        let ring_point = Mat4::from_rotation_y(angle)
            .transform_point3(Vec3::new(0.0, 0.0, 10.0));
        let seen = view.transform_point3(ring_point);
        assert!(seen.abs_diff_eq(Vec3::new(0.0, 1.0, -10.0), 1e-4));
    }

    #[test]
    fn inspect_view_centers_the_focused_item() {
        let mut camera = test_camera();
        camera.mode = CameraMode::Inspect;
        let focus = Vec3::new(9.5, 0.0, 3.1);

        let seen = camera.view_matrix(0.0, focus).transform_point3(focus);
        assert!(seen.abs_diff_eq(Vec3::new(0.0, 0.0, -10.0), 1e-4));
    }

    #[test]
    fn inspect_rotation_orbits_around_the_item() {
        let mut camera = test_camera();
        camera.mode = CameraMode::Inspect;
        camera.inspect_rotation = Vec2::new(0.0, 90.0);
        let focus = Vec3::new(5.0, 0.0, 0.0);

        // a point one unit in front of the item swings to the side
        let probe = focus + Vec3::new(0.0, 0.0, 1.0);
        let seen = camera.view_matrix(0.0, focus).transform_point3(probe);
        assert!(seen.abs_diff_eq(Vec3::new(1.0, 0.0, -10.0), 1e-4));
    }

    #[test]
    fn projection_tracks_aspect() {
        let mut camera = test_camera();
        camera.aspect = 2.0;
        let expected =
            Mat4::perspective_rh(45.0_f32.to_radians(), 2.0, 0.1, 100.0);
        assert_eq!(camera.projection(), expected);
    }
}
