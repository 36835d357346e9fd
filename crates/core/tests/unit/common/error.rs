//! # Error Tests
//!
//! Display text and `From` conversions of the configuration, trace, and
//! top-level simulation errors.

use std::io;

use cachesim_core::common::{ConfigError, SimError, TraceError};

#[test]
fn test_config_error_display() {
    assert_eq!(
        ConfigError::BlockSizeNotPowerOfTwo(48).to_string(),
        "block size 48 is not a power of two"
    );
    assert_eq!(
        ConfigError::SetCountNotPowerOfTwo(3).to_string(),
        "set count 3 is not a power of two"
    );
    assert!(
        ConfigError::IndivisibleGeometry {
            size_bytes: 1000,
            line_bytes: 64,
            ways: 1
        }
        .to_string()
        .contains("not divisible")
    );
}

#[test]
fn test_malformed_record_display() {
    let err = TraceError::MalformedTraceRecord {
        record: 7,
        text: "1 zz".to_string(),
        reason: "invalid hexadecimal address",
    };
    assert_eq!(
        err.to_string(),
        "malformed trace record #7: '1 zz' (invalid hexadecimal address)"
    );
}

#[test]
fn test_sim_error_from_config() {
    let err: SimError = ConfigError::ZeroCacheSize.into();
    assert!(matches!(err, SimError::Configuration(ConfigError::ZeroCacheSize)));
    assert_eq!(err.to_string(), "configuration error: cache size must be positive");
}

#[test]
fn test_sim_error_from_trace_is_transparent() {
    let err: SimError = TraceError::Io(io::Error::new(io::ErrorKind::NotFound, "gone")).into();
    assert_eq!(err.to_string(), "failed to read trace: gone");
}
