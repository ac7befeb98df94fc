pub mod dictionary;
pub mod document;
pub mod error;
pub mod language;
pub mod preprocess;
pub mod types;

pub use error::{LexisError, LoadError};
