use std::sync::Arc;

use anyhow::{Context, Result};
use lexis_anki::AnkiConnectClient;
use lexis_config::Config;
use lexis_dictionary::{DictionaryService, DocumentFetcher, HttpFetcher};
use lexis_lang_english::{EnglishResources, VocabDifficultyExtractor};

/// Shared application state, cloned into every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub vocab: Arc<VocabDifficultyExtractor>,
    pub dictionary: Arc<DictionaryService>,
    /// `None` when deck export is disabled
    pub anki: Option<AnkiConnectClient>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let resources = EnglishResources::from_config(&config.vocab)
            .context("Failed to load vocabulary resources")?;
        let fetcher = HttpFetcher::new(&config.network).context("Failed to build HTTP client")?;

        Ok(Self::with_parts(config, resources, Arc::new(fetcher)))
    }

    pub fn with_parts(
        config: Config,
        resources: EnglishResources,
        fetcher: Arc<dyn DocumentFetcher>,
    ) -> Self {
        let anki = config.anki.enabled.then(|| {
            tracing::info!("Anki export enabled via {}", config.anki.url);
            AnkiConnectClient::new(config.anki.url.clone())
        });

        Self {
            vocab: Arc::new(VocabDifficultyExtractor::new(Arc::new(resources))),
            dictionary: Arc::new(DictionaryService::new(fetcher, config.dictionary.clone())),
            anki,
            config: Arc::new(config),
        }
    }
}
