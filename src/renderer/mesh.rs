//! Procedural mesh generation and GPU upload.
//!
//! Items carry simple generated shapes (cuboid, pyramid, torus); the
//! backdrop and screen passes share a unit quad. All meshes use the same
//! position + uv vertex layout and 16-bit indices.

use std::f32::consts::TAU;

use wgpu::util::DeviceExt;

/// Interleaved vertex: world-space position and texture coordinate.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Texture coordinate.
    pub uv: [f32; 2],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2];

    /// Vertex buffer layout matching the scene shader's inputs.
    #[must_use]
    pub const fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// CPU-side mesh data.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// Vertex list.
    pub vertices: Vec<Vertex>,
    /// Triangle list indices into `vertices`.
    pub indices: Vec<u16>,
}

impl MeshData {
    /// Axis-aligned box centered at the origin, outward-facing CCW
    /// triangles, each face mapped to the full texture.
    #[must_use]
    pub fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        let (hx, hy, hz) = (width / 2.0, height / 2.0, depth / 2.0);

        // four corners per face, counter-clockwise seen from outside
        let faces: [[[f32; 3]; 4]; 6] = [
            // +Z
            [[-hx, -hy, hz], [hx, -hy, hz], [hx, hy, hz], [-hx, hy, hz]],
            // -Z
            [[hx, -hy, -hz], [-hx, -hy, -hz], [-hx, hy, -hz], [hx, hy, -hz]],
            // +X
            [[hx, -hy, hz], [hx, -hy, -hz], [hx, hy, -hz], [hx, hy, hz]],
            // -X
            [[-hx, -hy, -hz], [-hx, -hy, hz], [-hx, hy, hz], [-hx, hy, -hz]],
            // +Y
            [[-hx, hy, hz], [hx, hy, hz], [hx, hy, -hz], [-hx, hy, -hz]],
            // -Y
            [[-hx, -hy, -hz], [hx, -hy, -hz], [hx, -hy, hz], [-hx, -hy, hz]],
        ];
        let face_uvs: [[f32; 2]; 4] = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];

        let mut mesh = Self::default();
        for corners in &faces {
            let base = mesh.vertices.len() as u16;
            for (corner, uv) in corners.iter().zip(face_uvs.iter()) {
                mesh.vertices.push(Vertex {
                    position: *corner,
                    uv: *uv,
                });
            }
            mesh.indices
                .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }
        mesh
    }

    /// Square-based pyramid centered at the origin.
    #[must_use]
    pub fn pyramid(base: f32, height: f32) -> Self {
        let s = base / 2.0;
        let h = height / 2.0;
        let apex = [0.0, h, 0.0];

        // base corners, counter-clockwise seen from above
        let corners = [
            [-s, -h, s],
            [s, -h, s],
            [s, -h, -s],
            [-s, -h, -s],
        ];

        let mut mesh = Self::default();
        for i in 0..4 {
            let a = corners[i];
            let b = corners[(i + 1) % 4];
            let base_index = mesh.vertices.len() as u16;
            mesh.vertices.push(Vertex { position: a, uv: [0.0, 1.0] });
            mesh.vertices.push(Vertex { position: b, uv: [1.0, 1.0] });
            mesh.vertices.push(Vertex { position: apex, uv: [0.5, 0.0] });
            mesh.indices
                .extend_from_slice(&[base_index, base_index + 1, base_index + 2]);
        }

        // bottom face, wound to face downward
        let base_index = mesh.vertices.len() as u16;
        let bottom = [corners[3], corners[2], corners[1], corners[0]];
        let uvs: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
        for (corner, uv) in bottom.iter().zip(uvs.iter()) {
            mesh.vertices.push(Vertex { position: *corner, uv: *uv });
        }
        mesh.indices.extend_from_slice(&[
            base_index,
            base_index + 1,
            base_index + 2,
            base_index,
            base_index + 2,
            base_index + 3,
        ]);
        mesh
    }

    /// Torus around the Y axis: `major` ring radius, `minor` tube radius.
    #[must_use]
    pub fn torus(major: f32, minor: f32, segments: u32, rings: u32) -> Self {
        let segments = segments.max(3);
        let rings = rings.max(3);

        let mut mesh = Self::default();
        for u in 0..=segments {
            let theta = u as f32 / segments as f32 * TAU;
            for v in 0..=rings {
                let phi = v as f32 / rings as f32 * TAU;
                let tube = major + minor * phi.cos();
                mesh.vertices.push(Vertex {
                    position: [tube * theta.sin(), minor * phi.sin(), tube * theta.cos()],
                    uv: [u as f32 / segments as f32, v as f32 / rings as f32],
                });
            }
        }

        let stride = rings + 1;
        for u in 0..segments {
            for v in 0..rings {
                let a = (u * stride + v) as u16;
                let b = ((u + 1) * stride + v) as u16;
                let c = ((u + 1) * stride + v + 1) as u16;
                let d = (u * stride + v + 1) as u16;
                mesh.indices.extend_from_slice(&[a, b, c, a, c, d]);
            }
        }
        mesh
    }

    /// Screen-aligned unit quad in NDC, used for the backdrop.
    #[must_use]
    pub fn quad() -> Self {
        Self {
            vertices: vec![
                Vertex { position: [-1.0, -1.0, 0.0], uv: [0.0, 1.0] },
                Vertex { position: [1.0, -1.0, 0.0], uv: [1.0, 1.0] },
                Vertex { position: [1.0, 1.0, 0.0], uv: [1.0, 0.0] },
                Vertex { position: [-1.0, 1.0, 0.0], uv: [0.0, 0.0] },
            ],
            indices: vec![0, 1, 2, 0, 2, 3],
        }
    }
}

/// A mesh uploaded to the GPU.
pub struct GpuMesh {
    /// Vertex buffer.
    pub vertex_buffer: wgpu::Buffer,
    /// Index buffer (u16).
    pub index_buffer: wgpu::Buffer,
    /// Number of indices to draw.
    pub index_count: u32,
}

impl GpuMesh {
    /// Upload mesh data into device-local buffers.
    #[must_use]
    pub fn upload(device: &wgpu::Device, label: &str, mesh: &MeshData) -> Self {
        let vertex_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label} Vertices")),
                contents: bytemuck::cast_slice(&mesh.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let index_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label} Indices")),
                contents: bytemuck::cast_slice(&mesh.indices),
                usage: wgpu::BufferUsages::INDEX,
            });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_indices_in_bounds(mesh: &MeshData) {
        let count = mesh.vertices.len();
        assert!(mesh.indices.iter().all(|&i| (i as usize) < count));
        assert_eq!(mesh.indices.len() % 3, 0);
    }

    #[test]
    fn cuboid_has_six_faces() {
        let mesh = MeshData::cuboid(1.0, 2.0, 3.0);
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.indices.len(), 36);
        assert_indices_in_bounds(&mesh);
    }

    #[test]
    fn cuboid_extents_match_dimensions() {
        let mesh = MeshData::cuboid(2.0, 4.0, 6.0);
        let max_x = mesh.vertices.iter().map(|v| v.position[0]).fold(0.0, f32::max);
        let max_y = mesh.vertices.iter().map(|v| v.position[1]).fold(0.0, f32::max);
        let max_z = mesh.vertices.iter().map(|v| v.position[2]).fold(0.0, f32::max);
        assert_eq!((max_x, max_y, max_z), (1.0, 2.0, 3.0));
    }

    #[test]
    fn pyramid_has_four_sides_and_base() {
        let mesh = MeshData::pyramid(1.0, 1.0);
        assert_eq!(mesh.indices.len(), 4 * 3 + 6);
        assert_indices_in_bounds(&mesh);
    }

    #[test]
    fn torus_is_closed_and_bounded() {
        let mesh = MeshData::torus(1.0, 0.3, 16, 8);
        assert_eq!(mesh.vertices.len(), 17 * 9);
        assert_eq!(mesh.indices.len() as u32, 16 * 8 * 6);
        assert_indices_in_bounds(&mesh);

        // every vertex lies within the outer radius
        let limit = 1.0 + 0.3 + 1e-5;
        assert!(mesh.vertices.iter().all(|v| {
            let [x, y, z] = v.position;
            (x * x + z * z).sqrt() <= limit && y.abs() <= 0.3 + 1e-5
        }));
    }

    #[test]
    fn quad_uvs_cover_unit_square() {
        let mesh = MeshData::quad();
        assert_indices_in_bounds(&mesh);
        assert!(mesh.vertices.iter().all(|v| {
            (0.0..=1.0).contains(&v.uv[0]) && (0.0..=1.0).contains(&v.uv[1])
        }));
    }
}
