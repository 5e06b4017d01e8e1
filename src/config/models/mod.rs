//! Configuration data models

pub mod logging;
pub mod provider;
pub mod server;

pub use logging::*;
pub use provider::*;
pub use server::*;

/// Default bind address
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    4000
}

/// Default per-request timeout in seconds
pub fn default_timeout() -> u64 {
    600
}

/// Default log filter
pub fn default_log_level() -> String {
    "info".to_string()
}
