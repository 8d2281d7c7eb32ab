//! Declarative training configuration
//!
//! A YAML file names the run length and the callbacks to attach, in
//! invocation order:
//!
//! ```yaml
//! epochs: 10
//! log_interval: 50
//! callbacks:
//!   - type: progress
//!   - type: early_stopping
//!     patience: 3
//!     min_delta: 0.001
//!   - type: checkpoint
//!     dir: ./checkpoints
//!     every: 2
//! ```

mod builder;
mod loader;
mod schema;
pub mod validate;

pub use builder::{build_callbacks, BuiltCallbacks};
pub use loader::load_config;
pub use schema::{CallbackSpec, TrainConfig};
pub use validate::{validate_config, ValidationError};
