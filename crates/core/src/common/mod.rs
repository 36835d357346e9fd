//! Common types shared by the cache model and the simulator.
//!
//! This module provides:
//! 1. **Address Decomposition:** The tag/set-index/offset triple produced by the geometry.
//! 2. **Error Handling:** Configuration, trace, and top-level simulation errors.

/// Decoded address fields.
pub mod addr;

/// Error types for configuration and trace handling.
pub mod error;

pub use addr::DecodedAddress;
pub use error::{ConfigError, SimError, TraceError};
