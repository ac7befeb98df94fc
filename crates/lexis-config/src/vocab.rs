use serde::{Deserialize, Serialize};

use crate::{env_or, env_path};

fn default_threshold() -> f64 {
    4.5
}

/// Vocabulary extraction settings. Unset paths use the embedded English data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabConfig {
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// TSV of `word\tzipf`
    #[serde(default)]
    pub frequency_path: Option<String>,
    /// One word per line
    #[serde(default)]
    pub words_path: Option<String>,
    #[serde(default)]
    pub stop_words_path: Option<String>,
}

impl Default for VocabConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            frequency_path: None,
            words_path: None,
            stop_words_path: None,
        }
    }
}

impl VocabConfig {
    pub fn new() -> Self {
        Self {
            threshold: env_or("VOCAB_THRESHOLD", default_threshold()),
            frequency_path: env_path("VOCAB_FREQUENCY_PATH"),
            words_path: env_path("VOCAB_WORDS_PATH"),
            stop_words_path: env_path("VOCAB_STOP_WORDS_PATH"),
        }
    }
}
