pub mod acquisition;
pub mod config;
pub mod constants;
pub mod datasource;
pub mod error;
pub mod interaction;
pub mod layout;
pub mod model;
#[cfg(not(target_arch = "wasm32"))]
pub mod tracing;
pub mod utils;
pub mod view;

pub use acquisition::*;
pub use error::*;

pub use error::{ConfigError, SourceError};

// Shared fixtures for unit and integration tests
#[cfg(any(test, feature = "testing"))]
pub mod testing {
    pub mod fixtures;
}

pub use error::Result;
