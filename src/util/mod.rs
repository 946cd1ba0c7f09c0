//! Shared utilities: angle-wrap arithmetic, easing curves, color helpers,
//! and frame timing.

pub mod angle;
pub mod color;
pub mod easing;
pub mod frame_timing;
