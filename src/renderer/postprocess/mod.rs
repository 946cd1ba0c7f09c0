//! Post-processing passes.
//!
//! One pass lives here: the CRT filter that samples the offscreen scene
//! capture onto the swapchain.

pub mod crt;

pub use crt::{CrtParams, CrtPass, CAPTURE_FORMAT};
