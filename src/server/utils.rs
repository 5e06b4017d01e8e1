//! Server helpers

use crate::utils::error::GatewayError;

/// Explain a bind failure, with a hint when the port is taken
pub(crate) fn format_bind_error(error: std::io::Error, bind_addr: &str, port: u16) -> GatewayError {
    if error.kind() == std::io::ErrorKind::AddrInUse {
        GatewayError::server(format!(
            "Port {} is already in use; stop the other process or set PORT / --port",
            port
        ))
    } else {
        GatewayError::server(format!("Failed to bind to {}: {}", bind_addr, error))
    }
}
