//! Loading configurations from YAML

use std::fs;
use std::path::{Path, PathBuf};

use super::schema::TrainConfig;
use super::validate::validate_config;
use crate::error::{HookError, Result};

impl TrainConfig {
    /// Parse a configuration from YAML text without validating it
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| HookError::ConfigParsing {
            path: PathBuf::from("<inline>"),
            message: e.to_string(),
        })
    }

    /// Load and validate a configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        load_config(path)
    }

    /// Check every value is in range
    pub fn validate(&self) -> Result<()> {
        validate_config(self).map_err(HookError::from)
    }

    /// Serialize back to YAML
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| HookError::Serialization {
            message: e.to_string(),
        })
    }
}

/// Load a YAML configuration file and validate it
///
/// # Example
///
/// ```no_run
/// use train_hooks::config::load_config;
///
/// let config = load_config("train.yaml")?;
/// println!("{} epochs, {} callbacks", config.epochs, config.callbacks.len());
/// # Ok::<(), train_hooks::HookError>(())
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<TrainConfig> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(HookError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let yaml = fs::read_to_string(path)
        .map_err(|e| HookError::io(format!("reading config file {}", path.display()), e))?;

    let config: TrainConfig =
        serde_yaml::from_str(&yaml).map_err(|e| HookError::ConfigParsing {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    config.validate()?;
    log::debug!(
        "loaded config {} ({} callbacks)",
        path.display(),
        config.callbacks.len()
    );
    Ok(config)
}
