//! Effect parameter blocks.
//!
//! Each block is a plain value container consumed read-only by one kernel
//! family. The structs perform no validation; the constructors here are
//! the boundary where user-facing settings get clamped into contract range
//! (with a debug log when that happens). Anything that bypasses the
//! constructors takes responsibility for its own ranges.

mod adjust;
mod blur;
mod filter;
mod layer;

pub use adjust::ColorAdjustmentParams;
pub use blur::BlurParams;
pub use filter::{ColorMatrixParams, ConvolutionParams};
pub use layer::{BlendMode, LayerParams};
