mod anki;
mod dictionary;
mod health;
mod vocab;

pub use anki::export_cards;
pub use dictionary::lookup_entry;
pub use health::health_handler;
pub use vocab::extract_vocab;
