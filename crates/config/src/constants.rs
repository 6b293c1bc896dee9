//! Centralized constants for the Mode client workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default Mode host. Every API and batch URL is rooted here.
pub const DEFAULT_HOST: &str = "https://app.mode.com";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default maximum number of simultaneous in-flight requests per client.
pub const DEFAULT_MAX_CONNECTIONS: usize = 5;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Configuration Bounds
// =============================================================================

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Maximum allowed number of simultaneous in-flight requests.
pub const MAX_MAX_CONNECTIONS: usize = 100;

// =============================================================================
// Batch API Defaults
// =============================================================================

/// Lifetime of a batch signature token in seconds (24 hours).
///
/// The server expires the token on its own after this window, which bounds
/// the damage of a session that was never closed.
pub const BATCH_TOKEN_TTL_SECS: i64 = 86_400;

/// Largest page the batch query listing accepts.
pub const BATCH_MAX_PER_PAGE: u32 = 1000;

// =============================================================================
// Report Maintenance
// =============================================================================

/// Report purges must target dates strictly older than this many days.
pub const PURGE_MIN_AGE_DAYS: u64 = 15;
