use akash_holders::config::Config;
use once_cell::sync::Lazy;

/// Browser builds have no config file; endpoints and layout use their defaults
pub static CONFIG: Lazy<Config> = Lazy::new(Config::default);
