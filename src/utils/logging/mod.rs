//! Diagnostic logging
//!
//! Logs go to stderr through `tracing`; stdout is reserved for the report.

pub mod sanitization;
pub mod subscriber;

pub use sanitization::mask_access_key;
pub use subscriber::{LogFormat, init_logging};
