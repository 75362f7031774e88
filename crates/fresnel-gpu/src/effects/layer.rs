use bytemuck::{Pod, Zeroable};

use crate::math::Mat4;

/// Layer compositing blend mode.
///
/// The uniform block encodes the mode as a float (kernels branch on it);
/// [`Self::as_uniform`] is the single point where that encoding happens.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
#[repr(u32)]
pub enum BlendMode {
    /// Source-over with premultiplied alpha.
    #[default]
    Normal = 0,
    Additive = 1,
    Multiply = 2,
    Screen = 3,
}

impl BlendMode {
    /// Float encoding used in `LayerParams.blend_mode`.
    #[inline]
    pub const fn as_uniform(self) -> f32 {
        self as u32 as f32
    }

    /// Fixed-function blend equations for render passes that composite
    /// this mode without branching in the kernel. Colors are expected
    /// premultiplied.
    pub fn blend_state(self) -> wgpu::BlendState {
        use wgpu::{BlendComponent, BlendFactor, BlendOperation};

        let component = |src, dst| BlendComponent {
            src_factor: src,
            dst_factor: dst,
            operation: BlendOperation::Add,
        };

        match self {
            BlendMode::Normal => wgpu::BlendState {
                color: component(BlendFactor::One, BlendFactor::OneMinusSrcAlpha),
                alpha: component(BlendFactor::One, BlendFactor::OneMinusSrcAlpha),
            },
            BlendMode::Additive => wgpu::BlendState {
                color: component(BlendFactor::One, BlendFactor::One),
                alpha: component(BlendFactor::One, BlendFactor::One),
            },
            BlendMode::Multiply => wgpu::BlendState {
                color: component(BlendFactor::Dst, BlendFactor::Zero),
                alpha: component(BlendFactor::Dst, BlendFactor::Zero),
            },
            BlendMode::Screen => wgpu::BlendState {
                color: component(BlendFactor::One, BlendFactor::OneMinusSrc),
                alpha: component(BlendFactor::One, BlendFactor::OneMinusSrcAlpha),
            },
        }
    }
}

/// Per-layer compositing parameters.
///
/// Layout (size 96): 0: transform, 64: tint, 80: opacity, 84: blend_mode,
/// 88: pad.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct LayerParams {
    pub transform: Mat4,
    /// RGBA multiplier applied to the layer before blending.
    pub tint: [f32; 4],
    /// Layer opacity in [0, 1].
    pub opacity: f32,
    /// Blend mode encoded as a float; see [`BlendMode::as_uniform`].
    pub blend_mode: f32,
    pub _pad: [f32; 2],
}

impl LayerParams {
    /// Builds layer parameters, clamping opacity into [0, 1].
    pub fn new(transform: Mat4, tint: [f32; 4], opacity: f32, mode: BlendMode) -> Self {
        if !(0.0..=1.0).contains(&opacity) {
            log::debug!("layer opacity {opacity} outside [0, 1]; clamping");
        }

        Self {
            transform,
            tint,
            opacity: opacity.clamp(0.0, 1.0),
            blend_mode: mode.as_uniform(),
            _pad: [0.0; 2],
        }
    }
}
