use std::sync::Arc;

use lexis_config::dictionary::DictionaryConfig;
use lexis_core::LexisError;
use lexis_core::dictionary::{DictionaryRecord, VerbForm};
use reqwest::Url;

use crate::extractor::DictionaryExtractor;
use crate::fetch::{DocumentFetcher, FetchError};
use crate::html::HtmlDocument;
use crate::verbs::extract_verb_forms;

/// Dictionary language and regional edition a language code maps to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTarget {
    pub language: String,
    pub nation: String,
}

impl LanguageTarget {
    pub fn from_code(code: &str) -> Self {
        let code = code.trim().to_lowercase();
        let (language, nation) = match code.as_str() {
            "en" => ("english".to_string(), "us"),
            "uk" => ("english".to_string(), "uk"),
            _ => (code, "us"),
        };

        Self {
            language,
            nation: nation.to_string(),
        }
    }
}

/// Looks up an entry: fetches the entry page and the conjugation reference,
/// then runs the extractors
pub struct DictionaryService {
    fetcher: Arc<dyn DocumentFetcher>,
    extractor: DictionaryExtractor,
    config: DictionaryConfig,
}

impl DictionaryService {
    pub fn new(fetcher: Arc<dyn DocumentFetcher>, config: DictionaryConfig) -> Self {
        Self {
            fetcher,
            extractor: DictionaryExtractor::new(&config.site_url),
            config,
        }
    }

    pub async fn lookup(
        &self,
        language: &str,
        entry: &str,
    ) -> Result<DictionaryRecord, LexisError> {
        let entry = entry.trim();
        if entry.is_empty() {
            return Err(LexisError::InvalidInput("entry is required".to_string()));
        }

        let target = LanguageTarget::from_code(language);
        let markup = self.fetch_entry(&target, entry).await.map_err(|e| {
            tracing::warn!("Failed to fetch entry '{}': {}", entry, e);
            LexisError::EntryNotFound(format!("{entry}: {e}"))
        })?;

        // The parsed tree is dropped before the next await, and a page
        // without a headword never triggers the conjugation fetch
        let mut record = {
            let document = HtmlDocument::parse(&markup);
            self.extractor.extract(&document, language, entry, Vec::new())?
        };

        record.verb_forms = self.verb_forms(entry).await;
        tracing::debug!("'{}' has {} verb forms", record.word, record.verb_forms.len());

        Ok(record)
    }

    pub fn entry_url(&self, target: &LanguageTarget, entry: &str) -> Result<String, FetchError> {
        build_url(
            &self.config.site_url,
            &[target.nation.as_str(), "dictionary", target.language.as_str(), entry],
        )
    }

    pub fn conjugation_url(&self, entry: &str) -> Result<String, FetchError> {
        build_url(&self.config.conjugation_url, &[entry])
    }

    async fn fetch_entry(
        &self,
        target: &LanguageTarget,
        entry: &str,
    ) -> Result<String, FetchError> {
        let url = self.entry_url(target, entry)?;
        tracing::debug!("Fetching entry page {}", url);
        self.fetcher.fetch(&url).await
    }

    async fn verb_forms(&self, entry: &str) -> Vec<VerbForm> {
        if !self.config.verb_forms_enabled {
            return Vec::new();
        }

        match self.fetch_conjugation(entry).await {
            Ok(markup) => extract_verb_forms(&HtmlDocument::parse(&markup)),
            Err(degraded) => {
                tracing::warn!("{}", degraded);
                Vec::new()
            }
        }
    }

    async fn fetch_conjugation(&self, entry: &str) -> Result<String, LexisError> {
        let degraded =
            |e: FetchError| LexisError::FetchDegraded(format!("verb forms for '{entry}': {e}"));

        let url = self.conjugation_url(entry).map_err(degraded)?;
        self.fetcher.fetch(&url).await.map_err(degraded)
    }
}

/// Append percent-encoded path segments to a base URL
fn build_url(base: &str, segments: &[&str]) -> Result<String, FetchError> {
    let mut url = Url::parse(base).map_err(|e| FetchError::InvalidUrl(format!("{base}: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| FetchError::InvalidUrl(format!("{base} cannot take path segments")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url.into())
}
