//! Optional TOML configuration.

mod loader;
mod types;

pub use loader::{config_path, load, load_from};
pub use types::{Config, PickerConfig, UiConfig};
