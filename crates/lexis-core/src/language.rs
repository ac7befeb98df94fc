/// Reduce a surface word to its dictionary base form
pub trait Lemmatizer: Send + Sync {
    /// Lemmatize an already lower-cased word
    fn lemmatize(&self, word: &str) -> String;
}

/// Corpus-derived usage frequency on a zipf scale
pub trait FrequencyProvider: Send + Sync {
    /// Zipf score (higher = more common), 0.0 if the word is unknown
    fn zipf(&self, word: &str) -> f64;

    fn is_known(&self, word: &str) -> bool {
        self.zipf(word) > 0.0
    }
}

/// Language-aware sentence boundary detection
pub trait SentenceSplitter: Send + Sync {
    /// Sentences in document order, trimmed, never empty
    fn split<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub surface: String,
    pub lemma: String,
}

impl Token {
    /// Whether the token was capitalized as it appeared in the sentence
    pub fn is_capitalized(&self) -> bool {
        self.surface.chars().next().is_some_and(char::is_uppercase)
    }
}
