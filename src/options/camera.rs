use serde::{Deserialize, Serialize};

/// Camera projection and view-mode parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Orbit-mode downward tilt in degrees.
    pub tilt: f32,
    /// Orbit-mode camera offset `[x, y, z]`; `z` is the viewing distance.
    pub orbit_offset: [f32; 3],
    /// Inspect-mode pull-back distance from the item.
    pub inspect_distance: f32,
    /// Degrees applied per frame per held inspect-orbit key.
    pub inspect_step: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.1,
            zfar: 100.0,
            tilt: 12.5,
            orbit_offset: [0.0, 1.0, 20.0],
            inspect_distance: 10.0,
            inspect_step: 1.2,
        }
    }
}
