//! Shared vocabulary between fresnel host code and GPU kernels.
//!
//! Binding slot identifiers and capacity limits live here, in one place,
//! so the host crate and any kernel-side code generation read the same
//! table instead of duplicating literals. A mismatch between the two
//! sides is not detectable at runtime; keeping a single definition is the
//! only guard.

pub mod binding;
pub mod limits;

pub use binding::{FragmentInput, SamplerKind, TextureChannel, VertexInput};
pub use limits::{
    CONVOLUTION_KERNEL_LEN, MAX_BLUR_RADIUS, MAX_CONVOLUTION_SIZE, MAX_PARTICLES,
    THREADGROUP_SIZE, dispatch_groups,
};
