use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

use crate::constants::ARCTURIAN_SUPPLY_URL;
use crate::constants::COSMOSTATION_HOLDERS_URL;
use crate::constants::DEFAULT_TOTAL_SUPPLY_AKT;
use crate::constants::MAX_HOLDERS;
use crate::constants::MINTSCAN_TOP_HOLDERS_URL;
use crate::constants::REQUEST_TIMEOUT_MS;
use crate::error::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    pub mintscan_url: String,
    pub supply_url: String,
    pub cosmostation_url: String,
    pub limit: usize,
    pub request_timeout_ms: u64,
    /// AKT, used when a source does not report its own supply
    pub default_total_supply: f64,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            mintscan_url: MINTSCAN_TOP_HOLDERS_URL.to_string(),
            supply_url: ARCTURIAN_SUPPLY_URL.to_string(),
            cosmostation_url: COSMOSTATION_HOLDERS_URL.to_string(),
            limit: MAX_HOLDERS,
            request_timeout_ms: REQUEST_TIMEOUT_MS,
            default_total_supply: DEFAULT_TOTAL_SUPPLY_AKT,
        }
    }
}

impl SourcesConfig {
    /// Same endpoints path-for-path, rooted at `base` (used against mock servers)
    pub fn with_base_url(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            mintscan_url: format!("{}/v1/akash/account/top-holders?limit=15", base),
            supply_url: format!("{}/cosmos/bank/v1beta1/supply/uakt", base),
            cosmostation_url: format!("{}/v1/account/holders?limit=15", base),
            ..Self::default()
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limit == 0 || self.limit > MAX_HOLDERS {
            return Err(ConfigError::InvalidValue(format!(
                "sources.limit must be between 1 and {}, got {}",
                MAX_HOLDERS, self.limit
            )));
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue("sources.request_timeout_ms must be positive".to_string()));
        }
        if !(self.default_total_supply > 0.0) {
            return Err(ConfigError::InvalidValue("sources.default_total_supply must be positive".to_string()));
        }
        for endpoint in [&self.mintscan_url, &self.supply_url, &self.cosmostation_url] {
            url::Url::parse(endpoint).map_err(|e| ConfigError::InvalidValue(format!("{}: {}", endpoint, e)))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_base_url_keeps_paths() {
        let config = SourcesConfig::with_base_url("http://127.0.0.1:4000/");
        assert_eq!(config.mintscan_url, "http://127.0.0.1:4000/v1/akash/account/top-holders?limit=15");
        assert_eq!(config.supply_url, "http://127.0.0.1:4000/cosmos/bank/v1beta1/supply/uakt");
        assert_eq!(config.cosmostation_url, "http://127.0.0.1:4000/v1/account/holders?limit=15");
    }

    #[test]
    fn test_validate_limit() {
        let mut config = SourcesConfig::default();
        assert!(config.validate().is_ok());
        config.limit = 16;
        assert!(config.validate().is_err());
    }
}
