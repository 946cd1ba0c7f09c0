//! Camera system: orbit and inspect view derivations plus the GPU-facing
//! controller.

/// GPU resource owner and discrete input stepping.
pub mod controller;
/// Camera state, view-matrix derivations, and the uniform layout.
pub mod core;

pub use controller::CameraController;
pub use core::{Camera, CameraMode, CameraUniform};
