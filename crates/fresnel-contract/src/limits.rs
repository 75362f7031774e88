//! Capacity limits shared with kernel code.
//!
//! The host must respect these when sizing buffers and dispatches; kernels
//! assume them when declaring fixed-size arrays and threadgroup shapes.

/// Upper bound on the particle pool. The particle buffer is allocated at
/// this size once; simulation dispatches must never address beyond it.
pub const MAX_PARTICLES: usize = 10_000;

/// Threads per threadgroup for compute dispatches. Dispatch grids are
/// sized in whole groups of this many threads.
pub const THREADGROUP_SIZE: u32 = 32;

/// Largest blur radius the blur kernel supports, in pixels.
pub const MAX_BLUR_RADIUS: f32 = 64.0;

/// Largest convolution kernel dimension (kernels are square, side odd).
pub const MAX_CONVOLUTION_SIZE: usize = 15;

/// Float count of the fixed convolution kernel storage.
pub const CONVOLUTION_KERNEL_LEN: usize = MAX_CONVOLUTION_SIZE * MAX_CONVOLUTION_SIZE;

/// Number of threadgroups needed to cover `items` work items at
/// `group_size` threads per group (round-up division).
///
/// `group_size` must be non-zero. Both sides of the contract use this
/// arithmetic so a partial trailing group is always dispatched.
#[inline]
pub const fn dispatch_groups(items: u32, group_size: u32) -> u32 {
    items.div_ceil(group_size)
}
