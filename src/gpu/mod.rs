//! GPU infrastructure: device/surface ownership, pipeline boilerplate,
//! shader composition, and texture helpers.

pub mod pipeline_helpers;
pub mod render_context;
pub mod shader_composer;
pub mod texture;
