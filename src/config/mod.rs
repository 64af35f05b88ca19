mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LoggingConfig, MenuConfig, UiConfig, DEFAULT_MENU_URL};
