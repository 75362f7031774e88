use bytemuck::{Pod, Zeroable};

/// Vertex for 2D quads and effect surfaces.
///
/// Packed vertex-buffer layout, stride 16:
/// 0: position, 8: tex_coord. Texture coordinates conventionally span
/// [0, 1] but the type does not constrain them.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex2D {
    pub position: [f32; 2],
    pub tex_coord: [f32; 2],
}

impl Vertex2D {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // position
        1 => Float32x2  // tex_coord
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex2D>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Vertex for lit 3D geometry.
///
/// Packed vertex-buffer layout, stride 32:
/// 0: position, 12: normal, 24: tex_coord. Normals are expected unit
/// length by convention, not enforced.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex3D {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub tex_coord: [f32; 2],
}

impl Vertex3D {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3, // normal
        2 => Float32x2  // tex_coord
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex3D>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Unit quad covering [0, 1]², texture coordinates aligned with position.
pub const QUAD_VERTICES: [Vertex2D; 4] = [
    Vertex2D { position: [0.0, 0.0], tex_coord: [0.0, 0.0] },
    Vertex2D { position: [1.0, 0.0], tex_coord: [1.0, 0.0] },
    Vertex2D { position: [1.0, 1.0], tex_coord: [1.0, 1.0] },
    Vertex2D { position: [0.0, 1.0], tex_coord: [0.0, 1.0] },
];

pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    // ── wire format ───────────────────────────────────────────────────────

    #[test]
    fn vertex2d_matches_documented_offsets() {
        assert_eq!(size_of::<Vertex2D>(), 16);
        assert_eq!(offset_of!(Vertex2D, position), 0);
        assert_eq!(offset_of!(Vertex2D, tex_coord), 8);
    }

    #[test]
    fn vertex3d_matches_documented_offsets() {
        assert_eq!(size_of::<Vertex3D>(), 32);
        assert_eq!(offset_of!(Vertex3D, position), 0);
        assert_eq!(offset_of!(Vertex3D, normal), 12);
        assert_eq!(offset_of!(Vertex3D, tex_coord), 24);
    }

    #[test]
    fn strides_match_struct_sizes() {
        assert_eq!(Vertex2D::layout().array_stride, 16);
        assert_eq!(Vertex3D::layout().array_stride, 32);
    }

    // ── quad ──────────────────────────────────────────────────────────────

    #[test]
    fn quad_indices_wind_two_triangles() {
        assert_eq!(QUAD_INDICES.len(), 6);
        assert!(QUAD_INDICES.iter().all(|&i| (i as usize) < QUAD_VERTICES.len()));
    }
}
