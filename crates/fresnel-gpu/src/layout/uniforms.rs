use bytemuck::{Pod, Zeroable};

use crate::math::Mat4;

/// Per-draw vertex-stage uniform block.
///
/// Layout (size 192): 0: mvp, 64: model, 128: normal.
///
/// `normal` must be the inverse-transpose of `model`; lighting breaks
/// silently if the two drift apart, so populate through [`Self::new`]
/// unless the caller has already paid for the inverse elsewhere.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct VertexUniforms {
    pub mvp: Mat4,
    pub model: Mat4,
    pub normal: Mat4,
}

impl VertexUniforms {
    /// Builds the block from a model matrix and a combined
    /// view-projection matrix, deriving `mvp` and the normal matrix.
    pub fn new(model: Mat4, view_proj: Mat4) -> Self {
        Self {
            mvp: view_proj * model,
            model,
            normal: model.normal_matrix(),
        }
    }
}

/// Per-draw fragment-stage uniform block.
///
/// Layout (size 48): 0: color, 16: time, 20: pad, 24: resolution,
/// 32: pad. The pads mirror the alignment holes the kernel sees under
/// 16-byte-vector rules; they carry no meaning and are written as zero.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct FragmentUniforms {
    /// RGBA tint applied by the fragment kernel.
    pub color: [f32; 4],
    /// Seconds since session start, monotonic (see `time::FrameClock`).
    pub time: f32,
    pub _pad0: f32,
    /// Render-target size in pixels.
    pub resolution: [f32; 2],
    pub _pad1: [f32; 4],
}

impl FragmentUniforms {
    pub fn new(color: [f32; 4], time: f32, resolution: [f32; 2]) -> Self {
        Self {
            color,
            time,
            _pad0: 0.0,
            resolution,
            _pad1: [0.0; 4],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;
    use std::mem::{offset_of, size_of};

    // ── wire format ───────────────────────────────────────────────────────

    #[test]
    fn vertex_uniforms_match_documented_offsets() {
        assert_eq!(size_of::<VertexUniforms>(), 192);
        assert_eq!(offset_of!(VertexUniforms, mvp), 0);
        assert_eq!(offset_of!(VertexUniforms, model), 64);
        assert_eq!(offset_of!(VertexUniforms, normal), 128);
    }

    #[test]
    fn fragment_uniforms_match_documented_offsets() {
        assert_eq!(size_of::<FragmentUniforms>(), 48);
        assert_eq!(offset_of!(FragmentUniforms, color), 0);
        assert_eq!(offset_of!(FragmentUniforms, time), 16);
        assert_eq!(offset_of!(FragmentUniforms, resolution), 24);
        assert_eq!(offset_of!(FragmentUniforms, _pad1), 32);
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn new_derives_consistent_normal_matrix() {
        let model = Mat4::from_scale(Vec3::new(2.0, 2.0, 2.0));
        let u = VertexUniforms::new(model, Mat4::IDENTITY);
        assert_eq!(u.mvp, model);
        assert!((u.normal.cols[0][0] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn fragment_pads_are_zeroed() {
        let u = FragmentUniforms::new([1.0, 0.5, 0.0, 1.0], 2.5, [1920.0, 1080.0]);
        assert_eq!(u._pad0, 0.0);
        assert_eq!(u._pad1, [0.0; 4]);
    }
}
