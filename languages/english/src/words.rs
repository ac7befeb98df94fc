use std::collections::HashSet;
use std::path::Path;

use lexis_core::LoadError;

const EMBEDDED_WORDS: &str = include_str!("../data/words_en.txt");
const EMBEDDED_STOP_WORDS: &str = include_str!("../data/stopwords_en.txt");

fn parse_word_set(content: &str) -> HashSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}

fn read_word_set(path: &Path) -> Result<HashSet<String>, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(parse_word_set(&content))
}

/// General English word list, used as the lemmatizer lexicon and for the
/// proper-noun check
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    pub fn with_defaults() -> Self {
        Self {
            words: parse_word_set(EMBEDDED_WORDS),
        }
    }

    /// Load from a file with one word per line
    pub fn load_from_file(path: &Path) -> Result<Self, LoadError> {
        let words = read_word_set(path)?;
        tracing::info!("Loaded {} words from {}", words.len(), path.display());
        Ok(Self { words })
    }

    /// Expects a lower-cased word
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// English function words
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn with_defaults() -> Self {
        Self {
            words: parse_word_set(EMBEDDED_STOP_WORDS),
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self, LoadError> {
        let words = read_word_set(path)?;
        tracing::info!("Loaded {} stop words from {}", words.len(), path.display());
        Ok(Self { words })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
