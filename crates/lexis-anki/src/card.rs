use lexis_core::dictionary::DictionaryRecord;
use lexis_core::types::VocabCandidate;
use serde::{Deserialize, Serialize};

use crate::client::AudioAttachment;

const MAX_DEFINITIONS: usize = 3;

/// Flattened note content for one vocabulary word
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningCard {
    pub word: String,
    /// Pre-rendered HTML list
    pub definition: String,
    pub ipa: String,
    pub audio_url: String,
    /// Context sentence with the word wrapped in `<b>`
    pub context: String,
    pub frequency: f64,
}

impl LearningCard {
    pub fn from_candidate(candidate: &VocabCandidate) -> Self {
        Self {
            word: candidate.word.clone(),
            context: highlight(&candidate.context_sentence, &candidate.word),
            frequency: candidate.frequency,
            ..Default::default()
        }
    }

    /// Fill definition and pronunciation fields from a dictionary lookup
    pub fn with_record(mut self, record: &DictionaryRecord) -> Self {
        let items: Vec<String> = record
            .definitions
            .iter()
            .filter(|definition| !definition.text.is_empty())
            .take(MAX_DEFINITIONS)
            .enumerate()
            .map(|(idx, definition)| {
                let mut item = format!("<li><b>{}.</b> {}", idx + 1, definition.text);
                if !definition.part_of_speech.is_empty() {
                    item.push_str(&format!(" <i>{}</i>", definition.part_of_speech));
                }
                if let Some(example) = definition.examples.first() {
                    item.push_str(&format!("<br>e.g: {}", example.text));
                }
                item.push_str("</li>");
                item
            })
            .collect();

        if !items.is_empty() {
            self.definition = format!("<ul>{}</ul>", items.concat());
        }

        if let Some(pronunciation) = record.first_pronunciation() {
            self.ipa = pronunciation.ipa.clone();
            self.audio_url = pronunciation.audio_url.clone();
        }

        self
    }

    /// Media file name the audio is stored under in Anki
    pub fn audio_filename(&self) -> Option<String> {
        if self.audio_url.is_empty() {
            return None;
        }

        let filename = self
            .audio_url
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty())
            .map(|name| format!("lexis_{name}"))
            .unwrap_or_else(|| format!("lexis_{}.mp3", self.word));

        Some(filename)
    }

    /// `fields` lists the note fields AnkiConnect appends a sound tag to.
    /// An empty list only stores the media file.
    pub fn audio_attachment(&self, fields: &[&str]) -> Option<AudioAttachment> {
        self.audio_filename().map(|filename| AudioAttachment {
            url: self.audio_url.clone(),
            filename,
            fields: fields.iter().map(|field| field.to_string()).collect(),
        })
    }
}

/// Bold the first word of `sentence` equal to `word`, ignoring case.
/// Falls back to the first word that starts with it, so a lemma still
/// marks its inflected form ("sailor" in "Sailors").
fn highlight(sentence: &str, word: &str) -> String {
    if word.is_empty() {
        return sentence.to_string();
    }

    let runs = alphabetic_runs(sentence);
    let hit = runs
        .iter()
        .find(|&&(start, end)| sentence[start..end].eq_ignore_ascii_case(word))
        .or_else(|| {
            runs.iter().find(|&&(start, end)| {
                sentence[start..end]
                    .get(..word.len())
                    .is_some_and(|prefix| prefix.eq_ignore_ascii_case(word))
            })
        });

    match hit {
        Some(&(start, end)) => format!(
            "{}<b>{}</b>{}",
            &sentence[..start],
            &sentence[start..end],
            &sentence[end..]
        ),
        None => sentence.to_string(),
    }
}

/// Byte ranges of maximal alphabetic runs
fn alphabetic_runs(text: &str) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut start = None;

    for (idx, ch) in text.char_indices() {
        match (ch.is_alphabetic(), start) {
            (true, None) => start = Some(idx),
            (false, Some(run_start)) => {
                runs.push((run_start, idx));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(run_start) = start {
        runs.push((run_start, text.len()));
    }

    runs
}

#[cfg(test)]
mod tests {
    use lexis_core::dictionary::{Definition, Example, Pronunciation};

    use super::*;

    fn candidate() -> VocabCandidate {
        VocabCandidate {
            word: "prose".to_string(),
            context_sentence: "Prose that sings is rare.".to_string(),
            frequency: 3.63,
        }
    }

    fn definition(id: usize, text: &str, example: Option<&str>) -> Definition {
        Definition {
            id,
            part_of_speech: "noun".to_string(),
            source_id: format!("def-{id}"),
            text: text.to_string(),
            translation: String::new(),
            examples: example
                .map(|text| {
                    vec![Example {
                        id: 0,
                        text: text.to_string(),
                        translation: String::new(),
                    }]
                })
                .unwrap_or_default(),
        }
    }

    #[test]
    fn candidate_context_is_highlighted() {
        let card = LearningCard::from_candidate(&candidate());

        assert_eq!(card.word, "prose");
        assert_eq!(card.context, "<b>Prose</b> that sings is rare.");
        assert_eq!(card.frequency, 3.63);
        assert!(card.definition.is_empty());
        assert!(card.audio_attachment(&["Back"]).is_none());
    }

    #[test]
    fn record_fills_numbered_definitions_and_first_pronunciation() {
        let record = DictionaryRecord {
            word: "prose".to_string(),
            definitions: vec![
                definition(0, "", None),
                definition(1, "written language", Some("She writes clear prose.")),
                definition(2, "dull talk", None),
                definition(3, "a hymn", None),
                definition(4, "never shown", None),
            ],
            pronunciations: vec![
                Pronunciation {
                    part_of_speech: "noun".to_string(),
                    language_variant: "uk".to_string(),
                    audio_url: "https://example.org/media/prose.mp3".to_string(),
                    ipa: "prəʊz".to_string(),
                },
                Pronunciation {
                    part_of_speech: "noun".to_string(),
                    language_variant: "us".to_string(),
                    audio_url: "https://example.org/media/prose_us.mp3".to_string(),
                    ipa: "proʊz".to_string(),
                },
            ],
            ..Default::default()
        };

        let card = LearningCard::from_candidate(&candidate()).with_record(&record);

        assert!(card.definition.starts_with("<ul><li><b>1.</b> written language <i>noun</i>"));
        assert!(card.definition.contains("e.g: She writes clear prose."));
        assert!(card.definition.contains("<b>3.</b> a hymn"));
        assert!(!card.definition.contains("never shown"));
        assert_eq!(card.ipa, "prəʊz");

        let audio = card.audio_attachment(&["Back"]).unwrap();
        assert_eq!(audio.filename, "lexis_prose.mp3");
        assert_eq!(audio.fields, vec!["Back".to_string()]);
    }

    #[test]
    fn highlight_matches_whole_words_only() {
        assert_eq!(
            highlight("The party started with art.", "art"),
            "The party started with <b>art</b>."
        );
        assert_eq!(highlight("Artful, not art!", "ART"), "Artful, not <b>art</b>!");
    }

    #[test]
    fn highlight_marks_inflected_form_of_lemma() {
        assert_eq!(
            highlight("Sailors feared the harbor.", "sailor"),
            "<b>Sailors</b> feared the harbor."
        );
        assert_eq!(highlight("A partisan party.", "part"), "A <b>partisan</b> party.");
    }

    #[test]
    fn highlight_leaves_sentence_without_match() {
        assert_eq!(highlight("Nothing here.", "prose"), "Nothing here.");
        assert_eq!(highlight("Café prose.", "prose"), "Café <b>prose</b>.");
    }
}
