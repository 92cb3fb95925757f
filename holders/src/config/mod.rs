pub mod log;
pub mod sources;

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;
use tracing::warn;

pub use log::LoggingConfig;
pub use sources::SourcesConfig;

pub use crate::layout::LayoutConfig;
use crate::error::ConfigError;

pub const CONFIG_PATH_ENV: &str = "BUBBLEMAP_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "Config.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sources: SourcesConfig,
    pub layout: LayoutConfig,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sources.validate()?;

        let layout = &self.layout;
        if layout.min_size <= 0.0 || layout.min_size > layout.max_size {
            return Err(ConfigError::InvalidValue(format!(
                "layout sizes must satisfy 0 < min_size <= max_size, got {} and {}",
                layout.min_size, layout.max_size
            )));
        }
        if layout.canvas_width <= 0.0 || layout.canvas_height <= 0.0 {
            return Err(ConfigError::InvalidValue("layout canvas must have a positive size".to_string()));
        }

        Ok(())
    }
}

pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let config_str = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&config_str)?;
    config.validate()?;
    Ok(config)
}

/// Where a loaded `Config` came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOrigin {
    File,
    Defaults,
}

/// A missing file means defaults. A file that exists but is broken is still an error.
/// Does not log, so it can run before tracing is installed.
pub fn load_config_with_origin(path: impl AsRef<Path>) -> Result<(Config, ConfigOrigin), ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok((Config::default(), ConfigOrigin::Defaults));
    }
    Ok((load_config(path)?, ConfigOrigin::File))
}

pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let (config, origin) = load_config_with_origin(path)?;
    if origin == ConfigOrigin::Defaults {
        warn!("config::not_found::{}::using_defaults", path.display());
    }
    Ok(config)
}

/// `BUBBLEMAP_CONFIG` when set, otherwise `Config.toml`
pub fn config_path_from_env() -> String {
    std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [sources]
            request_timeout_ms = 2500

            [layout]
            canvas_width = 1000.0
            "#,
        )
        .unwrap();

        assert_eq!(config.sources.request_timeout_ms, 2500);
        assert_eq!(config.sources.limit, 15);
        assert_eq!(config.layout.canvas_width, 1000.0);
        assert_eq!(config.layout.canvas_height, 600.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_sizes() {
        let mut config = Config::default();
        config.layout.min_size = 200.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidValue(_))));
    }
}
