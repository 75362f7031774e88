//! Math routines that populate the uniform layouts.
//!
//! Everything here is pure and deterministic: same inputs, same bits.
//! Degenerate inputs (zero field of view, parallel look-at axes, singular
//! model matrices) produce inf/NaN rather than errors; preconditions are
//! documented per function and validation is the caller's job.

mod color;
mod mat4;
mod vec;

pub use color::{hsv_to_rgb, rgb_to_hsv};
pub use mat4::Mat4;
pub use vec::Vec3;
