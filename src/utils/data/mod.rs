//! Request data utilities

pub mod validation;

pub use validation::RequestValidator;
