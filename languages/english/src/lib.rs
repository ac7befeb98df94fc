pub mod extractor;
pub mod frequency;
pub mod lemmatizer;
pub mod loader;
pub mod sentence;
pub mod words;

pub use extractor::{DEFAULT_THRESHOLD, VocabDifficultyExtractor};
pub use frequency::EnglishFrequency;
pub use lemmatizer::EnglishLemmatizer;
pub use loader::EnglishResources;
pub use sentence::EnglishSentenceSplitter;
pub use words::{StopWords, WordList};
