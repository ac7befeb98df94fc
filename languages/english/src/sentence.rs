use std::collections::HashSet;

use lexis_core::language::SentenceSplitter;

/// Lower-cased, without the trailing period
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "vs", "e.g", "i.e", "inc", "ltd",
    "co", "corp", "no", "vol", "fig", "approx", "dept", "est", "gen", "gov", "sen", "rep", "jan",
    "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "u.s", "u.k",
];

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '…')
}

fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '”' | '’' | '»')
}

fn opens_sentence(c: char) -> bool {
    c.is_uppercase() || c.is_numeric() || matches!(c, '"' | '\'' | '(' | '[' | '“' | '‘' | '«')
}

/// Punctuation-driven sentence splitter for English prose.
///
/// A run of terminal punctuation (with any closing quotes) ends a sentence
/// when followed by whitespace and a sentence opener, unless the preceding
/// token is a known abbreviation or a single-letter initial. Blank lines
/// always end a sentence.
pub struct EnglishSentenceSplitter {
    abbreviations: HashSet<&'static str>,
}

impl EnglishSentenceSplitter {
    pub fn new() -> Self {
        Self {
            abbreviations: ABBREVIATIONS.iter().copied().collect(),
        }
    }

    fn ends_with_abbreviation(&self, preceding: &str) -> bool {
        let Some(last) = preceding.split_whitespace().last() else {
            return false;
        };
        let last = last
            .trim_start_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();

        let mut chars = last.chars();
        let is_initial =
            matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic());

        is_initial || self.abbreviations.contains(last.as_str())
    }
}

impl Default for EnglishSentenceSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceSplitter for EnglishSentenceSplitter {
    fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut sentences = Vec::new();
        let mut push = |s: &'a str| {
            let s = s.trim();
            if !s.is_empty() {
                sentences.push(s);
            }
        };

        let mut start = 0;
        let mut i = 0;
        while i < chars.len() {
            let (pos, c) = chars[i];

            if c == '\n' {
                let mut j = i + 1;
                while j < chars.len() && matches!(chars[j].1, ' ' | '\t') {
                    j += 1;
                }
                if j < chars.len() && chars[j].1 == '\n' {
                    push(&text[start..pos]);
                    start = chars[j].0;
                    i = j;
                    continue;
                }
                i += 1;
                continue;
            }

            if !is_terminal(c) {
                i += 1;
                continue;
            }

            let mut j = i + 1;
            while j < chars.len() && (is_terminal(chars[j].1) || is_closing(chars[j].1)) {
                j += 1;
            }

            if j == chars.len() {
                break;
            }

            let end = chars[j].0;
            if chars[j].1.is_whitespace() {
                let next = chars[j..].iter().map(|&(_, c)| c).find(|c| !c.is_whitespace());
                let abbreviated = c == '.' && self.ends_with_abbreviation(&text[start..pos]);
                if !abbreviated && next.is_some_and(opens_sentence) {
                    push(&text[start..end]);
                    start = end;
                }
            }
            i = j;
        }

        push(&text[start..]);
        sentences
    }
}
