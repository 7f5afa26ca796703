//! Usage counters reported at the end of a run.

use std::fmt;

use serde::Serialize;

/// Monotonic counts accumulated by a randomizer over its lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UsageCounters {
    /// Paragraphs transformed.
    pub paragraphs: u64,
    /// Words seen across all paragraphs.
    pub words: u64,
    /// Words actually rotated.
    pub rotated_words: u64,
}

impl fmt::Display for UsageCounters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} paragraphs, {} words, {} rotated words",
            self.paragraphs, self.words, self.rotated_words
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_run_summary() {
        let counters = UsageCounters {
            paragraphs: 3,
            words: 42,
            rotated_words: 17,
        };

        assert_eq!(counters.to_string(), "3 paragraphs, 42 words, 17 rotated words");
    }

    #[test]
    fn test_serializes_field_names() {
        let json = serde_json::to_value(UsageCounters::default()).unwrap();

        assert_eq!(json["rotated_words"], 0);
    }
}
