//! Logging utilities.
//!
//! Centralizes logger initialization. The crate itself only uses the
//! `log` facade (clamp diagnostics at debug level); hosts that want
//! output call `init_logging` early in `main` or install their own
//! backend.

mod init;

pub use init::{LoggingConfig, init_logging};
