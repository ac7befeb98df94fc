//! Structured extraction of a dictionary entry page.
//!
//! Every field other than the headword degrades to an empty value when its
//! markup is missing.

use std::collections::HashSet;

use lexis_core::LexisError;
use lexis_core::dictionary::{Definition, DictionaryRecord, Example, Pronunciation, VerbForm};
use lexis_core::document::{DocumentNode, DocumentTree};
use reqwest::Url;

const HEADWORD: &str = ".hw.dhw";
const PART_OF_SPEECH: &str = ".pos.dpos";
const POS_HEADER: &str = ".pos-header.dpos-h";
const POS_GROUP: &str = ".dpos-g";
const PRONUNCIATION: &str = "span.dpron-i";
const AUDIO: &str = "audio";
const AUDIO_SOURCE: &str = "source";
const DEFINITION_BLOCK: &str = ".def-block.ddef_block";
const DEFINITION_TEXT: &str = ".def.ddef_d.db";
const DEFINITION_TRANSLATION: &str = ".def-body.ddef_b > span.trans.dtrans";
const ENTRY_BLOCK: &str = ".pr.entry-body__el";
const SOURCE_BLOCK: &str = ".pr.dictionary";
const SOURCE_ID_ATTR: &str = "data-id";
const EXAMPLE: &str = ".def-body.ddef_b > .examp.dexamp";
const EXAMPLE_TEXT: &str = ".eg.deg";
const EXAMPLE_TRANSLATION: &str = ".trans.dtrans";

/// Pronunciation blocks carry variant label, audio and IPA, in that order
const PRONUNCIATION_PARTS: usize = 3;

pub struct DictionaryExtractor {
    site_url: Option<Url>,
}

impl DictionaryExtractor {
    /// `site_url` is the base relative audio sources are resolved against
    pub fn new(site_url: &str) -> Self {
        let site_url = Url::parse(site_url)
            .inspect_err(|e| tracing::warn!("Invalid dictionary site URL '{}': {}", site_url, e))
            .ok();
        Self { site_url }
    }

    /// Build a record from a parsed entry page.
    ///
    /// Fails only when the page has no headword, before anything else is read.
    pub fn extract<D: DocumentTree>(
        &self,
        document: &D,
        language: &str,
        entry: &str,
        verb_forms: Vec<VerbForm>,
    ) -> Result<DictionaryRecord, LexisError> {
        let word = document
            .select_first(HEADWORD)
            .map(|node| clean(&node.text()))
            .filter(|word| !word.is_empty())
            .ok_or_else(|| LexisError::EntryNotFound(format!("{entry} ({language})")))?;

        let record = DictionaryRecord {
            word,
            parts_of_speech: parts_of_speech(document),
            verb_forms,
            pronunciations: self.pronunciations(document),
            definitions: definitions(document),
        };

        tracing::debug!(
            "Extracted '{}': {} definitions, {} pronunciations, {} verb forms",
            record.word,
            record.definitions.len(),
            record.pronunciations.len(),
            record.verb_forms.len()
        );

        Ok(record)
    }

    fn pronunciations<D: DocumentTree>(&self, document: &D) -> Vec<Pronunciation> {
        let mut pronunciations = Vec::new();

        for header in document.select_all(POS_HEADER) {
            let Some(part_of_speech) = header
                .select_first(POS_GROUP)
                .and_then(|group| group.contents().into_iter().next())
            else {
                continue;
            };

            for block in header.select_all(PRONUNCIATION) {
                let parts = block.contents();
                if parts.len() < PRONUNCIATION_PARTS {
                    continue;
                }

                let Some(src) = block
                    .select_first(AUDIO)
                    .and_then(|audio| audio.select_first(AUDIO_SOURCE))
                    .and_then(|source| source.attr("src"))
                else {
                    continue;
                };

                let Some(audio_url) = self.resolve(&src) else {
                    continue;
                };

                pronunciations.push(Pronunciation {
                    part_of_speech: clean(&part_of_speech),
                    language_variant: clean(&parts[0]),
                    audio_url,
                    ipa: clean(&parts[2]),
                });
            }
        }

        pronunciations
    }

    fn resolve(&self, src: &str) -> Option<String> {
        let resolved = match &self.site_url {
            Some(base) => base.join(src),
            None => Url::parse(src),
        };

        resolved
            .inspect_err(|e| tracing::warn!("Skipping unresolvable audio source '{}': {}", src, e))
            .ok()
            .map(String::from)
    }
}

fn parts_of_speech<D: DocumentTree>(document: &D) -> Vec<String> {
    let mut seen = HashSet::new();
    document
        .select_all(PART_OF_SPEECH)
        .iter()
        .map(|node| clean(&node.text()))
        .filter(|pos| seen.insert(pos.clone()))
        .collect()
}

fn definitions<D: DocumentTree>(document: &D) -> Vec<Definition> {
    document
        .select_all(DEFINITION_BLOCK)
        .iter()
        .enumerate()
        .map(|(id, block)| Definition {
            id,
            part_of_speech: block
                .closest(ENTRY_BLOCK)
                .and_then(|entry| entry.select_first(PART_OF_SPEECH))
                .map(|pos| clean(&pos.text()))
                .unwrap_or_default(),
            source_id: block
                .closest(SOURCE_BLOCK)
                .and_then(|source| source.attr(SOURCE_ID_ATTR))
                .unwrap_or_default(),
            text: text_of(block, DEFINITION_TEXT),
            translation: text_of(block, DEFINITION_TRANSLATION),
            examples: examples(block),
        })
        .collect()
}

fn examples<N: DocumentNode>(definition: &N) -> Vec<Example> {
    definition
        .select_all(EXAMPLE)
        .iter()
        .enumerate()
        .map(|(id, example)| Example {
            id,
            text: text_of(example, EXAMPLE_TEXT),
            translation: text_of(example, EXAMPLE_TRANSLATION),
        })
        .collect()
}

/// Trimmed text of the first match, empty when absent
fn text_of<N: DocumentNode>(node: &N, pattern: &str) -> String {
    node.select_first(pattern)
        .map(|n| clean(&n.text()))
        .unwrap_or_default()
}

fn clean(text: &str) -> String {
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::HtmlDocument;

    const SITE: &str = "https://dictionary.cambridge.org";

    const PAGE: &str = r#"<html><body>
<div class="pr dictionary" data-id="cald4">
  <div class="pr entry-body__el">
    <div class="pos-header dpos-h">
      <div class="di-title"><span class="hw dhw">pitfall</span></div>
      <div class="posgram dpos-g"><span class="pos dpos">noun</span><span class="gc dgc">C</span></div>
      <span class="uk dpron-i"><span class="region dreg">uk</span><span class="daud"><audio><source type="audio/mpeg" src="/media/english/uk_pron/p/pit/pitfa/pitfall.mp3"/></audio></span><span class="pron dpron">/ˈpɪt.fɔːl/</span></span>
      <span class="us dpron-i"><span class="region dreg">us</span><span class="daud"><audio><source type="audio/mpeg" src="/media/english/us_pron/p/pit/pitfa/pitfall.mp3"/></audio></span><span class="pron dpron">/ˈpɪt.fɑːl/</span></span>
      <span class="us dpron-i"><span class="region dreg">us</span><span class="pron dpron">/ˈpɪt.fɑːl/</span></span>
    </div>
    <div class="def-block ddef_block">
      <div class="ddef_h"><div class="def ddef_d db">a likely mistake or problem in a situation: </div></div>
      <div class="def-body ddef_b">
        <span class="trans dtrans">cạm bẫy</span>
        <div class="examp dexamp"><span class="eg deg">the pitfalls of buying a house</span><span class="trans dtrans">những cạm bẫy khi mua nhà</span></div>
        <div class="examp dexamp"><span class="eg deg">There's a video about pitfalls to avoid.</span></div>
      </div>
    </div>
    <div class="def-block ddef_block">
      <div class="ddef_h"><div class="def ddef_d db">an unexpected danger</div></div>
      <div class="def-body ddef_b">
        <div class="examp dexamp"><span class="eg deg">Who knows what pitfalls lie ahead.</span></div>
      </div>
    </div>
  </div>
  <div class="pr entry-body__el">
    <div class="pos-header dpos-h">
      <div class="posgram dpos-g"><span class="pos dpos">noun</span></div>
    </div>
    <div class="def-block ddef_block">
      <div class="ddef_h"><div class="def ddef_d db">a covered pit used as a trap</div></div>
    </div>
  </div>
</div>
<div class="pr dictionary" data-id="cacd">
  <div class="pr entry-body__el">
    <div class="pos-header dpos-h">
      <div class="posgram dpos-g"><span class="pos dpos">verb</span></div>
    </div>
  </div>
  <div class="def-block ddef_block"><div class="def ddef_d db">orphan definition</div></div>
</div>
</body></html>"#;

    fn extract(markup: &str) -> Result<DictionaryRecord, LexisError> {
        let doc = HtmlDocument::parse(markup);
        DictionaryExtractor::new(SITE).extract(&doc, "en", "pitfall", Vec::new())
    }

    #[test]
    fn reads_headword_and_deduplicated_parts_of_speech() {
        let record = extract(PAGE).unwrap();
        assert_eq!(record.word, "pitfall");
        assert_eq!(record.parts_of_speech, vec!["noun", "verb"]);
    }

    #[test]
    fn pronunciations_resolve_audio_and_skip_incomplete_blocks() {
        let record = extract(PAGE).unwrap();

        assert_eq!(record.pronunciations.len(), 2);
        let uk = &record.pronunciations[0];
        assert_eq!(uk.part_of_speech, "noun");
        assert_eq!(uk.language_variant, "uk");
        assert_eq!(
            uk.audio_url,
            "https://dictionary.cambridge.org/media/english/uk_pron/p/pit/pitfa/pitfall.mp3"
        );
        assert_eq!(uk.ipa, "/ˈpɪt.fɔːl/");
        assert_eq!(record.pronunciations[1].language_variant, "us");
    }

    #[test]
    fn pronunciation_without_audio_is_skipped() {
        let record = extract(
            r#"<span class="hw dhw">pitfall</span>
            <div class="pos-header dpos-h">
              <div class="dpos-g">noun</div>
              <span class="dpron-i"><span>uk</span><span>no audio here</span><span>/ˈpɪt/</span></span>
            </div>"#,
        )
        .unwrap();
        assert!(record.pronunciations.is_empty());
    }

    #[test]
    fn definitions_are_numbered_in_document_order() {
        let record = extract(PAGE).unwrap();

        let ids: Vec<usize> = record.definitions.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);

        let first = &record.definitions[0];
        assert_eq!(first.text, "a likely mistake or problem in a situation:");
        assert_eq!(first.translation, "cạm bẫy");
        assert_eq!(first.part_of_speech, "noun");
        assert_eq!(first.source_id, "cald4");
        assert_eq!(record.definitions[1].translation, "");
    }

    #[test]
    fn definition_context_degrades_to_empty() {
        let record = extract(PAGE).unwrap();

        let orphan = &record.definitions[3];
        assert_eq!(orphan.text, "orphan definition");
        assert_eq!(orphan.part_of_speech, "");
        assert_eq!(orphan.source_id, "cacd");
        assert!(orphan.examples.is_empty());
    }

    #[test]
    fn examples_are_numbered_per_definition() {
        let record = extract(PAGE).unwrap();

        for definition in &record.definitions {
            for (idx, example) in definition.examples.iter().enumerate() {
                assert_eq!(example.id, idx);
            }
        }

        let examples = &record.definitions[0].examples;
        assert_eq!(examples.len(), 2);
        assert_eq!(examples[0].text, "the pitfalls of buying a house");
        assert_eq!(examples[0].translation, "những cạm bẫy khi mua nhà");
        assert_eq!(examples[1].translation, "");
        assert_eq!(record.definitions[1].examples[0].id, 0);
    }

    #[test]
    fn missing_headword_is_entry_not_found() {
        let err = extract(&PAGE.replace("hw dhw", "hw")).unwrap_err();
        assert_eq!(err, LexisError::EntryNotFound("pitfall (en)".to_string()));

        let err = extract(r#"<span class="hw dhw">  </span>"#).unwrap_err();
        assert!(matches!(err, LexisError::EntryNotFound(_)));
    }

    #[test]
    fn verb_forms_pass_through() {
        let doc = HtmlDocument::parse(PAGE);
        let forms = vec![VerbForm {
            id: 0,
            kind: "Simple Past".to_string(),
            text: "fell".to_string(),
        }];

        let record = DictionaryExtractor::new(SITE)
            .extract(&doc, "en", "pitfall", forms.clone())
            .unwrap();
        assert_eq!(record.verb_forms, forms);
    }

    #[test]
    fn absolute_audio_sources_are_kept() {
        let extractor = DictionaryExtractor::new(SITE);
        assert_eq!(
            extractor.resolve("https://cdn.example.org/a.mp3").as_deref(),
            Some("https://cdn.example.org/a.mp3")
        );
        assert_eq!(
            DictionaryExtractor::new("not a url").resolve("/a.mp3"),
            None
        );
    }
}
