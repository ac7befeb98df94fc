use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default preprocessor keeps line structure for sentence splitting
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Unicode normalization (NFKC)
        let text: String = text.nfkc().collect();

        text.replace("\r\n", "\n").replace('\r', "\n")
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
