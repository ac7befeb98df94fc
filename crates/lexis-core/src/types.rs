use serde::{Deserialize, Serialize};

/// A word worth learning, with the sentence it first appeared in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabCandidate {
    pub word: String,
    pub context_sentence: String,
    #[serde(rename = "freq")]
    pub frequency: f64,
}
