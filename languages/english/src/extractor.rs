use std::collections::HashSet;
use std::sync::Arc;

use lexis_core::LexisError;
use lexis_core::language::Token;
use lexis_core::preprocess::{DefaultPreprocessor, Preprocessor};
use lexis_core::types::VocabCandidate;

use crate::loader::EnglishResources;

pub const DEFAULT_THRESHOLD: f64 = 4.5;

const MIN_WORD_LEN: usize = 3;

/// Ranks the words of a text that are rare enough to be worth learning
pub struct VocabDifficultyExtractor {
    resources: Arc<EnglishResources>,
}

impl VocabDifficultyExtractor {
    pub fn new(resources: Arc<EnglishResources>) -> Self {
        Self { resources }
    }

    /// Candidates sorted rarest first; the first sentence a word appears in
    /// is kept as its context
    pub fn extract(&self, text: &str, threshold: f64) -> Result<Vec<VocabCandidate>, LexisError> {
        if !threshold.is_finite() {
            return Err(LexisError::InvalidInput(format!(
                "threshold must be a finite number, got {threshold}"
            )));
        }

        let text = DefaultPreprocessor.process(text);
        let sentences = self.resources.splitter.split(&text);
        tracing::debug!("Split text into {} sentences", sentences.len());

        let mut seen: HashSet<String> = HashSet::new();
        let mut candidates = Vec::new();

        for sentence in sentences {
            for token in self.tokenize(sentence) {
                if !self.accepts(&token, threshold, &seen) {
                    continue;
                }

                let frequency = self.resources.frequency.zipf(&token.lemma);
                seen.insert(token.lemma.clone());
                candidates.push(VocabCandidate {
                    word: token.lemma,
                    context_sentence: sentence.to_string(),
                    frequency,
                });
            }
        }

        // Stable: equal scores keep first-seen order
        candidates.sort_by(|a, b| a.frequency.total_cmp(&b.frequency));
        tracing::debug!("Extracted {} vocabulary candidates", candidates.len());

        Ok(candidates)
    }

    /// Whitespace tokens made only of letters, each paired with its lemma
    pub fn tokenize(&self, sentence: &str) -> Vec<Token> {
        sentence
            .split_whitespace()
            .filter(|surface| surface.chars().all(char::is_alphabetic))
            .map(|surface| Token {
                surface: surface.to_string(),
                lemma: self.resources.lemmatizer.lemmatize(&surface.to_lowercase()),
            })
            .collect()
    }

    fn accepts(&self, token: &Token, threshold: f64, seen: &HashSet<String>) -> bool {
        let lemma = token.lemma.as_str();

        if lemma.chars().count() < MIN_WORD_LEN || !lemma.chars().all(char::is_alphabetic) {
            return false;
        }

        let frequency = self.resources.frequency.zipf(lemma);
        if frequency <= 0.0 || frequency > threshold {
            return false;
        }

        // Capitalized and not a dictionary word: likely a proper noun
        if token.is_capitalized() && !self.resources.words.contains(lemma) {
            return false;
        }

        !self.resources.stop_words.contains(lemma) && !seen.contains(lemma)
    }
}
