use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::env_or;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnkiConfig {
    /// Enable deck export
    pub enabled: bool,
    /// AnkiConnect URL
    pub url: String,
    /// Default deck name
    pub deck: String,
    /// Default model name
    pub model: String,
    /// Directory that server-side exports are written into
    pub export_dir: PathBuf,
}

impl Default for AnkiConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            url: "http://localhost:8765".to_string(),
            deck: "English".to_string(),
            model: "Basic".to_string(),
            export_dir: PathBuf::from("exports"),
        }
    }
}

impl AnkiConfig {
    pub fn new() -> Self {
        let defaults = Self::default();
        Self {
            enabled: env_or("ANKI_ENABLED", defaults.enabled),
            url: env_or("ANKI_URL", defaults.url),
            deck: env_or("ANKI_DECK", defaults.deck),
            model: env_or("ANKI_MODEL", defaults.model),
            export_dir: env_or("ANKI_EXPORT_DIR", defaults.export_dir),
        }
    }
}
