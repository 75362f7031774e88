use anyhow::{Result, ensure};
use bytemuck::{Pod, Zeroable};
use fresnel_contract::{CONVOLUTION_KERNEL_LEN, MAX_CONVOLUTION_SIZE};

/// Square convolution filter parameters.
///
/// Layout (size 916, packed): 0: kernel (225 floats, row-major),
/// 900: kernel_size, 904: divisor, 908: bias, 912: pad.
///
/// This block uses the packed storage-buffer layout (scalar array stride
/// 4), not the uniform-space stride-16 array layout; kernels must bind it
/// through a storage binding.
///
/// Only the leading `kernel_size²` entries are read; the rest of the
/// fixed-capacity array is zero.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ConvolutionParams {
    pub kernel: [f32; CONVOLUTION_KERNEL_LEN],
    /// Side length of the kernel, odd, `<= MAX_CONVOLUTION_SIZE`.
    pub kernel_size: i32,
    /// Normalization divisor applied to the weighted sum, non-zero.
    pub divisor: f32,
    /// Constant added after normalization.
    pub bias: f32,
    pub _pad: i32,
}

impl ConvolutionParams {
    /// Builds convolution parameters from `size × size` row-major weights.
    ///
    /// Rejects an even or oversized `size`, a weight slice of the wrong
    /// length, and a zero divisor (which would turn normalization into a
    /// division by zero on every pixel).
    pub fn from_kernel(size: usize, weights: &[f32], divisor: f32, bias: f32) -> Result<Self> {
        ensure!(size % 2 == 1, "convolution kernel side must be odd, got {size}");
        ensure!(
            size <= MAX_CONVOLUTION_SIZE,
            "convolution kernel side {size} exceeds maximum {MAX_CONVOLUTION_SIZE}"
        );
        ensure!(
            weights.len() == size * size,
            "expected {} weights for a {size}x{size} kernel, got {}",
            size * size,
            weights.len()
        );
        ensure!(divisor != 0.0, "convolution divisor must be non-zero");

        let mut kernel = [0.0; CONVOLUTION_KERNEL_LEN];
        kernel[..weights.len()].copy_from_slice(weights);

        Ok(Self {
            kernel,
            kernel_size: size as i32,
            divisor,
            bias,
            _pad: 0,
        })
    }

    /// Identity kernel: a single centered 1 with divisor 1 and zero bias,
    /// which leaves the image unchanged.
    pub fn identity(size: usize) -> Result<Self> {
        let mut weights = vec![0.0; size * size];
        if !weights.is_empty() {
            weights[size * size / 2] = 1.0;
        }
        Self::from_kernel(size, &weights, 1.0, 0.0)
    }
}

/// Linear color transform, applied as `out = matrix * in + offset`.
///
/// Layout (size 64): 0: matrix (three columns, each padded to 4 floats),
/// 48: offset, 60: pad. The fourth lane of each column is alignment
/// padding under 16-byte-vector rules and is ignored by kernels.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ColorMatrixParams {
    pub matrix: [[f32; 4]; 3],
    pub offset: [f32; 3],
    pub _pad: f32,
}

impl ColorMatrixParams {
    /// Builds the block from row-major 3×3 entries and an offset.
    pub fn from_rows(rows: [[f32; 3]; 3], offset: [f32; 3]) -> Self {
        let col = |c: usize| [rows[0][c], rows[1][c], rows[2][c], 0.0];
        Self {
            matrix: [col(0), col(1), col(2)],
            offset,
            _pad: 0.0,
        }
    }

    /// Leaves colors unchanged.
    pub fn identity() -> Self {
        Self::from_rows(
            [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
            [0.0; 3],
        )
    }

    /// Rec. 709 luma weights on every output channel.
    pub fn grayscale() -> Self {
        const LUMA: [f32; 3] = [0.2126, 0.7152, 0.0722];
        Self::from_rows([LUMA, LUMA, LUMA], [0.0; 3])
    }
}
