//! Validation tests for the configuration loader builder.

use crate::constants::{MAX_MAX_CONNECTIONS, MAX_TIMEOUT_SECS};
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use std::time::Duration;

fn complete_loader() -> ConfigLoader {
    ConfigLoader::new()
        .with_workspace("acme".to_string())
        .with_token("tok".to_string())
        .with_password("pw".to_string())
}

// ============================================================================
// Timeout
// ============================================================================

#[test]
fn test_timeout_zero_invalid() {
    let result = complete_loader()
        .with_timeout(Duration::from_secs(0))
        .build();

    match result {
        Err(ConfigError::InvalidTimeout { message }) => {
            assert!(message.contains("must be greater than 0"), "got: {}", message);
        }
        other => panic!("Expected InvalidTimeout error, got {:?}", other),
    }
}

#[test]
fn test_timeout_exceeds_max_invalid() {
    let result = complete_loader()
        .with_timeout(Duration::from_secs(MAX_TIMEOUT_SECS + 1))
        .build();

    assert!(matches!(result, Err(ConfigError::InvalidTimeout { .. })));
}

#[test]
fn test_timeout_at_max_valid() {
    let config = complete_loader()
        .with_timeout(Duration::from_secs(MAX_TIMEOUT_SECS))
        .build()
        .unwrap();

    assert_eq!(config.connection.timeout.as_secs(), MAX_TIMEOUT_SECS);
}

// ============================================================================
// Connection limit
// ============================================================================

#[test]
fn test_max_connections_zero_invalid() {
    let result = complete_loader().with_max_connections(0).build();
    assert!(matches!(
        result,
        Err(ConfigError::InvalidMaxConnections { .. })
    ));
}

#[test]
fn test_max_connections_above_bound_invalid() {
    let result = complete_loader()
        .with_max_connections(MAX_MAX_CONNECTIONS + 1)
        .build();
    assert!(matches!(
        result,
        Err(ConfigError::InvalidMaxConnections { .. })
    ));
}

// ============================================================================
// Host
// ============================================================================

#[test]
fn test_host_must_be_http_or_https() {
    let result = complete_loader()
        .with_host("ftp://app.mode.com".to_string())
        .build();

    assert!(matches!(
        result,
        Err(ConfigError::InvalidValue { ref var, ref message }) if var == "host" && message.contains("scheme")
    ));
}

#[test]
fn test_host_must_parse() {
    let result = complete_loader().with_host("not a url".to_string()).build();
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}
