//! Error handling utilities
//!
//! A single error type covers input collection, configuration and the
//! remote identity calls.

pub mod types;

pub use types::{CheckError, Result};
