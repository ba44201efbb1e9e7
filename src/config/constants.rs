//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 1323;

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (file-backed SQLite, created on demand)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://users.db?mode=rwc";

/// Default size of the shared connection pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;
