//! Core type definition module
//!
//! Contains the uniform data structures shared by every provider adapter

pub mod message;
pub mod model;
pub mod options;
pub mod requests;
pub mod responses;

// Re-export all public types
pub use message::{Message, MessageRole};
pub use model::ModelInfo;
pub use options::GenerateOptions;
pub use requests::GenerateRequest;
pub use responses::{GenerateResponse, Usage};
