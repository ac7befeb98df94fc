use std::collections::HashMap;
use std::sync::Arc;

use lexis_core::language::Lemmatizer;

use crate::words::WordList;

/// Noun inflections: (suffix, replacement)
const NOUN_SUFFIXES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

/// Verb inflections: (suffix, replacement)
const VERB_SUFFIXES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

/// Irregular forms the suffix rules cannot reach
const IRREGULAR_FORMS: &[(&str, &str)] = &[
    // nouns
    ("children", "child"),
    ("women", "woman"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("teeth", "tooth"),
    ("feet", "foot"),
    ("oxen", "ox"),
    ("knives", "knife"),
    ("wives", "wife"),
    ("lives", "life"),
    ("wolves", "wolf"),
    ("halves", "half"),
    ("shelves", "shelf"),
    ("thieves", "thief"),
    ("leaves", "leaf"),
    // verbs
    ("ran", "run"),
    ("sat", "sit"),
    ("went", "go"),
    ("gone", "go"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("had", "have"),
    ("did", "do"),
    ("done", "do"),
    ("said", "say"),
    ("made", "make"),
    ("took", "take"),
    ("taken", "take"),
    ("came", "come"),
    ("seen", "see"),
    ("knew", "know"),
    ("known", "know"),
    ("thought", "think"),
    ("told", "tell"),
    ("gave", "give"),
    ("given", "give"),
    ("felt", "feel"),
    ("brought", "bring"),
    ("began", "begin"),
    ("begun", "begin"),
    ("kept", "keep"),
    ("held", "hold"),
    ("wrote", "write"),
    ("written", "write"),
    ("stood", "stand"),
    ("heard", "hear"),
    ("meant", "mean"),
    ("met", "meet"),
    ("paid", "pay"),
    ("sent", "send"),
    ("built", "build"),
    ("spent", "spend"),
    ("fallen", "fall"),
    ("grew", "grow"),
    ("grown", "grow"),
    ("lost", "lose"),
    ("drew", "draw"),
    ("drawn", "draw"),
    ("spoke", "speak"),
    ("spoken", "speak"),
    ("risen", "rise"),
    ("drove", "drive"),
    ("driven", "drive"),
    ("ate", "eat"),
    ("eaten", "eat"),
    ("fought", "fight"),
    ("caught", "catch"),
    ("taught", "teach"),
    ("bought", "buy"),
    ("wore", "wear"),
    ("worn", "wear"),
    ("sang", "sing"),
    ("sung", "sing"),
    ("swam", "swim"),
    ("flew", "fly"),
    ("flown", "fly"),
    ("slept", "sleep"),
    ("sold", "sell"),
    ("won", "win"),
    ("broke", "break"),
    ("broken", "break"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("forgot", "forget"),
    ("forgotten", "forget"),
    ("hid", "hide"),
    ("hidden", "hide"),
    ("rode", "ride"),
    ("ridden", "ride"),
    ("threw", "throw"),
    ("thrown", "throw"),
];

/// Suffix-substitution lemmatizer validated against a lexicon.
///
/// Irregular forms are consulted first, since the lexicon also lists forms
/// like `sat` and `feet`. Then a word already in the lexicon is its own lemma,
/// and otherwise noun and verb substitutions are tried in order; the first
/// candidate found in the lexicon wins. Unresolved words are returned as-is.
pub struct EnglishLemmatizer {
    lexicon: Arc<WordList>,
    irregular: HashMap<&'static str, &'static str>,
}

impl EnglishLemmatizer {
    pub fn new(lexicon: Arc<WordList>) -> Self {
        Self {
            lexicon,
            irregular: IRREGULAR_FORMS.iter().copied().collect(),
        }
    }

    fn candidates(&self, word: &str) -> Vec<String> {
        let mut candidates = Vec::new();

        for &(suffix, replacement) in NOUN_SUFFIXES {
            if let Some(stem) = strip(word, suffix) {
                candidates.push(format!("{stem}{replacement}"));
            }
        }

        for &(suffix, replacement) in VERB_SUFFIXES {
            let Some(stem) = strip(word, suffix) else {
                continue;
            };
            candidates.push(format!("{stem}{replacement}"));

            // running -> runn -> run, stopped -> stopp -> stop
            if replacement.is_empty()
                && (suffix == "ing" || suffix == "ed")
                && let Some(undoubled) = undouble(stem)
            {
                candidates.push(undoubled.to_string());
            }
        }

        candidates
    }
}

impl Lemmatizer for EnglishLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        if let Some(base) = self.irregular.get(word) {
            return (*base).to_string();
        }

        if self.lexicon.contains(word) {
            return word.to_string();
        }

        self.candidates(word)
            .into_iter()
            .find(|candidate| self.lexicon.contains(candidate))
            .unwrap_or_else(|| word.to_string())
    }
}

fn strip<'a>(word: &'a str, suffix: &str) -> Option<&'a str> {
    word.strip_suffix(suffix).filter(|stem| !stem.is_empty())
}

/// Drop the last char of a stem ending in a doubled consonant
fn undouble(stem: &str) -> Option<&str> {
    let mut chars = stem.chars().rev();
    let (last, prev) = (chars.next()?, chars.next()?);

    let is_consonant = last.is_ascii_alphabetic() && !"aeiou".contains(last);
    if last == prev && is_consonant {
        Some(&stem[..stem.len() - last.len_utf8()])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemmatizer() -> EnglishLemmatizer {
        EnglishLemmatizer::new(Arc::new(WordList::with_defaults()))
    }

    #[test]
    fn regular_plurals_reduce_to_base() {
        let lem = lemmatizer();
        assert_eq!(lem.lemmatize("glaciers"), "glacier");
        assert_eq!(lem.lemmatize("churches"), "church");
        assert_eq!(lem.lemmatize("studies"), "study");
        assert_eq!(lem.lemmatize("boxes"), "box");
    }

    #[test]
    fn verb_inflections_reduce_to_base() {
        let lem = lemmatizer();
        assert_eq!(lem.lemmatize("running"), "run");
        assert_eq!(lem.lemmatize("walked"), "walk");
        assert_eq!(lem.lemmatize("yearned"), "yearn");
        assert_eq!(lem.lemmatize("documented"), "document");
        assert_eq!(lem.lemmatize("obfuscated"), "obfuscate");
    }

    #[test]
    fn irregular_forms_use_table() {
        let lem = lemmatizer();
        assert_eq!(lem.lemmatize("children"), "child");
        assert_eq!(lem.lemmatize("sat"), "sit");
        assert_eq!(lem.lemmatize("knives"), "knife");
        assert_eq!(lem.lemmatize("feet"), "foot");
        assert_eq!(lem.lemmatize("ran"), "run");
    }

    #[test]
    fn lexicon_words_are_their_own_lemma() {
        let lem = lemmatizer();
        assert_eq!(lem.lemmatize("prose"), "prose");
        assert_eq!(lem.lemmatize("news"), "news");
        assert_eq!(lem.lemmatize("rose"), "rose");
        assert_eq!(lem.lemmatize("building"), "building");
        assert_eq!(lem.lemmatize("buildings"), "building");
    }

    #[test]
    fn unknown_words_pass_through() {
        let lem = lemmatizer();
        assert_eq!(lem.lemmatize("gatsby"), "gatsby");
        assert_eq!(lem.lemmatize("zzzs"), "zzzs");
    }

    #[test]
    fn undouble_only_strips_consonants() {
        assert_eq!(undouble("runn"), Some("run"));
        assert_eq!(undouble("fall"), Some("fal"));
        assert_eq!(undouble("see"), None);
        assert_eq!(undouble("a"), None);
    }
}
