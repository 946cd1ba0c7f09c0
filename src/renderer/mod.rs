//! Rendering subsystems: procedural meshes, the geometry pass, and the
//! CRT post-process pass.

pub mod mesh;
pub mod postprocess;
pub mod scene_pass;

pub use mesh::{GpuMesh, MeshData, Vertex};
pub use scene_pass::{Material, SceneFrame, ScenePass};
