//! GPU-visible vertex and uniform layouts.
//!
//! These structs are the binary contract with the kernels: field order,
//! explicit padding, and the documented byte offsets are all load-bearing.
//! Kernels read the same buffers at the same offsets, so any edit here is
//! a wire-format change and must be mirrored on the kernel side.

mod uniforms;
mod vertex;

pub use uniforms::{FragmentUniforms, VertexUniforms};
pub use vertex::{Vertex2D, Vertex3D};

/// Minimum uniform binding size for a parameter block type.
///
/// Centralized so pipeline-creation sites don't each carry an `.unwrap()`;
/// every block in this crate has non-zero size by construction.
pub fn uniform_binding_size<T: bytemuck::Pod>() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<T>() as u64)
        .expect("uniform blocks have non-zero size by construction")
}
