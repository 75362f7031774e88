//! Fresnel host-side GPU contract crate.
//!
//! This crate owns everything the host must produce byte-correctly for the
//! GPU effect kernels: vertex and uniform layouts, effect parameter
//! blocks, the particle simulation contract, and the math routines that
//! populate them. Kernel programs, surfaces, and asset handling live in
//! other crates; data flows one way, host → GPU, once per frame.
//!
//! Convention:
//! - Every GPU-visible struct is `#[repr(C)]`, `Pod`, fixed-size, with
//!   explicit padding so Rust offsets equal the offsets kernels derive
//!   under 16-byte-vector alignment rules. Offsets are documented on the
//!   type and pinned by tests.
//! - Buffer hand-off is single-buffered: all writes to a parameter block
//!   must complete before the buffer is handed to the backend, and the
//!   backend must finish the frame before the same buffer is written
//!   again. Double/triple buffering is a caller-side optimization.

pub mod effects;
pub mod layout;
pub mod logging;
pub mod math;
pub mod particles;
pub mod text;
pub mod time;

pub use fresnel_contract as contract;
