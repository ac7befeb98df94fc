use serde::{Deserialize, Serialize};

/// Normalized dictionary entry assembled from a dictionary page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DictionaryRecord {
    pub word: String,
    /// Deduplicated, first-seen order
    pub parts_of_speech: Vec<String>,
    pub verb_forms: Vec<VerbForm>,
    pub pronunciations: Vec<Pronunciation>,
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbForm {
    pub id: usize,
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pronunciation {
    pub part_of_speech: String,
    pub language_variant: String,
    pub audio_url: String,
    pub ipa: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    /// Position among all definition blocks of the document
    pub id: usize,
    pub part_of_speech: String,
    pub source_id: String,
    pub text: String,
    pub translation: String,
    pub examples: Vec<Example>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    /// Position within the parent definition
    pub id: usize,
    pub text: String,
    pub translation: String,
}

impl DictionaryRecord {
    pub fn first_pronunciation(&self) -> Option<&Pronunciation> {
        self.pronunciations.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verb_form_serializes_kind_as_type() {
        let form = VerbForm {
            id: 0,
            kind: "Simple Past".to_string(),
            text: "ran".to_string(),
        };

        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["type"], "Simple Past");
        assert!(json.get("kind").is_none());
    }
}
