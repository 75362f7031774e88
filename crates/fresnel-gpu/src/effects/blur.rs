use bytemuck::{Pod, Zeroable};
use fresnel_contract::MAX_BLUR_RADIUS;

/// Radial/directional blur parameters.
///
/// Layout (size 32): 0: center, 8: radius, 12: strength, 16: offset,
/// 24: feather, 28: pad.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct BlurParams {
    /// Blur focus in texture coordinates.
    pub center: [f32; 2],
    /// Sample radius in pixels, `0..=MAX_BLUR_RADIUS`.
    pub radius: f32,
    /// Blend factor between sharp and blurred result.
    pub strength: f32,
    /// Directional offset added per sample.
    pub offset: [f32; 2],
    /// Edge softness of the blur region, non-negative.
    pub feather: f32,
    pub _pad: f32,
}

impl BlurParams {
    /// Builds blur parameters, clamping `radius` into
    /// `[0, MAX_BLUR_RADIUS]` and `feather` to non-negative. The blur
    /// kernel sizes its sample loop from `radius` and allocates threadgroup
    /// memory for the maximum, so out-of-range values must never reach it.
    pub fn new(center: [f32; 2], radius: f32, strength: f32, offset: [f32; 2], feather: f32) -> Self {
        if !(0.0..=MAX_BLUR_RADIUS).contains(&radius) {
            log::debug!("blur radius {radius} outside [0, {MAX_BLUR_RADIUS}]; clamping");
        }
        if feather < 0.0 {
            log::debug!("blur feather {feather} negative; clamping to 0");
        }

        Self {
            center,
            radius: radius.clamp(0.0, MAX_BLUR_RADIUS),
            strength,
            offset,
            feather: feather.max(0.0),
            _pad: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    // ── wire format ───────────────────────────────────────────────────────

    #[test]
    fn matches_documented_offsets() {
        assert_eq!(size_of::<BlurParams>(), 32);
        assert_eq!(offset_of!(BlurParams, center), 0);
        assert_eq!(offset_of!(BlurParams, radius), 8);
        assert_eq!(offset_of!(BlurParams, strength), 12);
        assert_eq!(offset_of!(BlurParams, offset), 16);
        assert_eq!(offset_of!(BlurParams, feather), 24);
    }

    // ── clamping ──────────────────────────────────────────────────────────

    #[test]
    fn radius_is_clamped_to_kernel_maximum() {
        let p = BlurParams::new([0.5, 0.5], 500.0, 1.0, [0.0, 0.0], 0.0);
        assert_eq!(p.radius, MAX_BLUR_RADIUS);
    }

    #[test]
    fn negative_radius_and_feather_are_clamped_to_zero() {
        let p = BlurParams::new([0.5, 0.5], -3.0, 1.0, [0.0, 0.0], -1.0);
        assert_eq!(p.radius, 0.0);
        assert_eq!(p.feather, 0.0);
    }

    #[test]
    fn in_range_values_pass_through() {
        let p = BlurParams::new([0.25, 0.75], 12.0, 0.8, [1.0, -1.0], 4.0);
        assert_eq!(p.radius, 12.0);
        assert_eq!(p.feather, 4.0);
        assert_eq!(p.offset, [1.0, -1.0]);
    }
}
