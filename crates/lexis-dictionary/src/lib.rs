pub mod extractor;
pub mod fetch;
pub mod html;
pub mod service;
pub mod verbs;

pub use extractor::DictionaryExtractor;
pub use fetch::{DocumentFetcher, FetchError, HttpFetcher};
pub use html::HtmlDocument;
pub use service::{DictionaryService, LanguageTarget};
pub use verbs::{extract_verb_forms, parse_verb_lines};
