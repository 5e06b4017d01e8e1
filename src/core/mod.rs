//! Core functionality for the Gateway
//!
//! Provider contract, adapters, registry and the dispatcher that ties them
//! together.

pub mod completion;
pub mod providers;
pub mod traits;
pub mod types;

pub use completion::Dispatcher;
