pub mod loader;
pub mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, RefreshConfig};
