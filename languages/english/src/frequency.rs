use std::collections::HashMap;
use std::path::Path;

use lexis_core::LoadError;
use lexis_core::language::FrequencyProvider;

const EMBEDDED_TABLE: &str = include_str!("../data/zipf_en.tsv");

/// English word frequency on the zipf scale
#[derive(Debug)]
pub struct EnglishFrequency {
    frequencies: HashMap<String, f64>,
}

impl EnglishFrequency {
    /// Create empty frequency database
    pub fn new() -> Self {
        Self {
            frequencies: HashMap::new(),
        }
    }

    /// Create with the embedded table
    pub fn with_defaults() -> Self {
        Self::parse(EMBEDDED_TABLE, "embedded").unwrap_or_else(|e| {
            tracing::error!("Failed to parse embedded frequency table: {}", e);
            Self::new()
        })
    }

    /// Load frequency data from TSV file (word\tzipf format)
    pub fn load_from_file(path: &Path) -> Result<Self, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let frequency = Self::parse(&content, &path.display().to_string())?;
        tracing::info!(
            "Loaded {} frequency entries from {}",
            frequency.len(),
            path.display()
        );
        Ok(frequency)
    }

    fn parse(content: &str, source: &str) -> Result<Self, LoadError> {
        let mut frequencies = HashMap::new();

        for (idx, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let invalid = |reason: &str| LoadError::InvalidFormat {
                path: source.to_string(),
                line: idx + 1,
                reason: reason.to_string(),
            };

            let mut parts = line.split('\t');
            let (Some(word), Some(score)) = (parts.next(), parts.next()) else {
                return Err(invalid("expected word<TAB>zipf"));
            };

            let zipf: f64 = score
                .trim()
                .parse()
                .map_err(|_| invalid("zipf score is not a number"))?;
            if !zipf.is_finite() || zipf < 0.0 {
                return Err(invalid("zipf score must be a non-negative number"));
            }

            frequencies.insert(word.trim().to_lowercase(), zipf);
        }

        Ok(Self { frequencies })
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

impl Default for EnglishFrequency {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl FrequencyProvider for EnglishFrequency {
    fn zipf(&self, word: &str) -> f64 {
        self.frequencies
            .get(&word.to_lowercase())
            .copied()
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn embedded_table_orders_common_above_rare() {
        let freq = EnglishFrequency::with_defaults();
        assert!(freq.zipf("the") > freq.zipf("cat"));
        assert!(freq.zipf("prose") > freq.zipf("felicitous"));
        assert!(freq.zipf("felicitous") > 0.0);
    }

    #[test]
    fn embedded_table_covers_general_vocabulary() {
        let freq = EnglishFrequency::with_defaults();
        assert!(freq.len() > 20_000, "only {} rows", freq.len());
        for word in ["ship", "however", "legislature", "journalists", "warned", "upon"] {
            assert!(freq.is_known(word), "{word} missing");
        }
        assert!(freq.zipf("however") > freq.zipf("legislature"));
    }

    #[test]
    fn lookup_ignores_case_and_unknown_is_zero() {
        let freq = EnglishFrequency::with_defaults();
        assert_eq!(freq.zipf("Prose"), freq.zipf("prose"));
        assert_eq!(freq.zipf("qwzxv"), 0.0);
        assert!(!freq.is_known("qwzxv"));
    }

    #[test]
    fn loads_tsv_with_comments() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# word\tzipf").unwrap();
        writeln!(file, "Quixotic\t2.5").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "the\t7.73").unwrap();

        let freq = EnglishFrequency::load_from_file(file.path()).unwrap();
        assert_eq!(freq.len(), 2);
        assert_eq!(freq.zipf("quixotic"), 2.5);
    }

    #[test]
    fn rejects_malformed_rows() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "quixotic\tmany").unwrap();

        let err = EnglishFrequency::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidFormat { line: 1, .. }));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = EnglishFrequency::load_from_file(Path::new("/nonexistent/zipf.tsv")).unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound(_)));
    }
}
