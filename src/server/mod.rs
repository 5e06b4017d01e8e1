//! HTTP server implementation
//!
//! Routes, shared state and the actix-web server that hosts them.

pub mod builder;
mod handlers;
pub mod routes;
pub mod server;
pub mod state;
mod utils;

pub use builder::{ServerBuilder, run_server};
pub use server::{HttpServer, create_app};
pub use state::AppState;
