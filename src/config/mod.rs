pub mod loader;
pub mod types;

pub use loader::{ConfigError, TOKEN_ENV_VAR};
pub use types::{CatalogConfig, Config};
