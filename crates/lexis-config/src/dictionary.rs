use serde::{Deserialize, Serialize};

use crate::env_or;

fn default_enabled() -> bool {
    true
}

fn default_site_url() -> String {
    "https://dictionary.cambridge.org".to_string()
}

fn default_conjugation_url() -> String {
    "https://simple.wiktionary.org/wiki/".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Dictionary site; also the base for relative audio URLs
    #[serde(default = "default_site_url")]
    pub site_url: String,
    /// Conjugation reference, the entry word is appended
    #[serde(default = "default_conjugation_url")]
    pub conjugation_url: String,
    #[serde(default = "default_enabled")]
    pub verb_forms_enabled: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            site_url: default_site_url(),
            conjugation_url: default_conjugation_url(),
            verb_forms_enabled: default_enabled(),
        }
    }
}

impl DictionaryConfig {
    pub fn new() -> Self {
        Self {
            site_url: env_or("DICTIONARY_SITE_URL", default_site_url()),
            conjugation_url: env_or("CONJUGATION_URL", default_conjugation_url()),
            verb_forms_enabled: env_or("VERB_FORMS_ENABLED", default_enabled()),
        }
    }
}
