use std::env;

use serde::{Deserialize, Serialize};

use self::anki::AnkiConfig;
use self::dictionary::DictionaryConfig;
use self::network::NetworkConfig;
use self::server::ServerConfig;
use self::vocab::VocabConfig;

pub mod anki;
pub mod dictionary;
pub mod network;
pub mod server;
pub mod vocab;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub network: NetworkConfig,
    pub vocab: VocabConfig,
    pub dictionary: DictionaryConfig,
    pub anki: AnkiConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            server: ServerConfig::new(),
            network: NetworkConfig::new(),
            vocab: VocabConfig::new(),
            dictionary: DictionaryConfig::new(),
            anki: AnkiConfig::new(),
        }
    }
}

/// Parse an env var, falling back when unset or malformed
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

pub(crate) fn env_path(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
