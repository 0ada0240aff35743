// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

/// Picker configuration section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PickerConfig {
    /// Path to a JSON suggestion catalog; the built-in samples are used
    /// when unset
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

/// UI configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Fade cards in over half a second after a pick
    #[serde(default = "default_true")]
    pub animation: bool,

    /// Fetch contact avatars over HTTP; when off, contact cards keep the
    /// placeholder
    #[serde(default = "default_true")]
    pub avatars: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            animation: true,
            avatars: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub picker: PickerConfig,

    #[serde(default)]
    pub ui: UiConfig,
}
