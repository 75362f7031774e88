//! Extruded 3D text contract.
//!
//! Pure data: tessellation and lighting happen elsewhere. Front faces use
//! `front_color`, extruded sides `side_color`, bevel edges `bevel_color`;
//! the kernel lights them with `light_position` and the per-vertex normal.

use bytemuck::{Pod, Zeroable};

use crate::math::{Mat4, Vec3};

/// Vertex for extruded text meshes.
///
/// Packed vertex-buffer layout, stride 48: 0: position, 12: normal,
/// 24: tex_coord, 32: tangent, 44: depth. `depth` is the vertex's
/// normalized position along the extrusion axis (0 = front face,
/// 1 = back face).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct TextVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub tex_coord: [f32; 2],
    pub tangent: [f32; 3],
    pub depth: f32,
}

impl TextVertex {
    const ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3, // normal
        2 => Float32x2, // tex_coord
        3 => Float32x3, // tangent
        4 => Float32    // depth
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<TextVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Uniform block for one text draw.
///
/// Layout (size 256): 0: mvp, 64: model, 128: normal, 192: light_position,
/// 204: extrusion, 208: front_color, 224: side_color, 240: bevel_color.
/// `extrusion` packs into the fourth lane of the `light_position` vector
/// under 16-byte-vector rules; kernels read it from `.w`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct TextUniforms {
    pub mvp: Mat4,
    pub model: Mat4,
    pub normal: Mat4,
    /// Directional light position in world space.
    pub light_position: [f32; 3],
    /// Extrusion depth in model units, >= 0.
    pub extrusion: f32,
    pub front_color: [f32; 4],
    pub side_color: [f32; 4],
    pub bevel_color: [f32; 4],
}

impl TextUniforms {
    /// Builds the block, deriving `mvp` and the normal matrix from
    /// `model` and clamping extrusion to non-negative.
    pub fn new(
        model: Mat4,
        view_proj: Mat4,
        light_position: Vec3,
        extrusion: f32,
        front_color: [f32; 4],
        side_color: [f32; 4],
        bevel_color: [f32; 4],
    ) -> Self {
        if extrusion < 0.0 {
            log::debug!("negative text extrusion {extrusion}; clamping to 0");
        }

        Self {
            mvp: view_proj * model,
            model,
            normal: model.normal_matrix(),
            light_position: light_position.to_array(),
            extrusion: extrusion.max(0.0),
            front_color,
            side_color,
            bevel_color,
        }
    }
}
