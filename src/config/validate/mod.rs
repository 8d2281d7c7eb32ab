//! Configuration validation
//!
//! Validates training configurations for correctness before a run starts.

mod error;
mod validator;

#[cfg(test)]
mod proptests;

pub use error::ValidationError;
pub use validator::validate_config;
