//! Base infrastructure shared by all providers

pub mod config;
pub mod http;

pub use config::BaseConfig;
pub use http::{build_http_client, send_json};
