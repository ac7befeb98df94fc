use std::path::Path;
use std::sync::Arc;

use lexis_config::vocab::VocabConfig;
use lexis_core::LoadError;
use lexis_core::language::{FrequencyProvider, Lemmatizer, SentenceSplitter};

use crate::frequency::EnglishFrequency;
use crate::lemmatizer::EnglishLemmatizer;
use crate::sentence::EnglishSentenceSplitter;
use crate::words::{StopWords, WordList};

/// Immutable resources shared by every vocabulary extraction
pub struct EnglishResources {
    pub frequency: Box<dyn FrequencyProvider>,
    pub lemmatizer: Box<dyn Lemmatizer>,
    pub splitter: Box<dyn SentenceSplitter>,
    pub words: Arc<WordList>,
    pub stop_words: StopWords,
}

impl EnglishResources {
    /// Build from the embedded data files
    pub fn embedded() -> Self {
        tracing::info!("Loading embedded English resources...");
        let resources = Self::assemble(
            EnglishFrequency::with_defaults(),
            WordList::with_defaults(),
            StopWords::with_defaults(),
        );
        tracing::info!("Loaded {} words", resources.words.len());
        resources
    }

    /// Build from configured files, falling back to embedded data for unset paths
    pub fn from_config(config: &VocabConfig) -> Result<Self, LoadError> {
        let frequency = match &config.frequency_path {
            Some(path) => EnglishFrequency::load_from_file(Path::new(path))?,
            None => EnglishFrequency::with_defaults(),
        };
        let words = match &config.words_path {
            Some(path) => WordList::load_from_file(Path::new(path))?,
            None => WordList::with_defaults(),
        };
        let stop_words = match &config.stop_words_path {
            Some(path) => StopWords::load_from_file(Path::new(path))?,
            None => StopWords::with_defaults(),
        };

        Ok(Self::assemble(frequency, words, stop_words))
    }

    fn assemble(frequency: EnglishFrequency, words: WordList, stop_words: StopWords) -> Self {
        let words = Arc::new(words);
        Self {
            frequency: Box::new(frequency),
            lemmatizer: Box::new(EnglishLemmatizer::new(Arc::clone(&words))),
            splitter: Box::new(EnglishSentenceSplitter::new()),
            words,
            stop_words,
        }
    }

    /// Replace the frequency source
    pub fn with_frequency(mut self, frequency: impl FrequencyProvider + 'static) -> Self {
        self.frequency = Box::new(frequency);
        self
    }
}
