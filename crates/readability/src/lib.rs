pub mod syllables;

pub use syllables::count_syllables;

use serde::Serialize;

/// Word, sentence and syllable counts backing a grade-level score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub words: usize,
    pub sentences: usize,
    pub syllables: usize,
}

pub fn text_stats(text: &str) -> TextStats {
    let words: Vec<&str> = text
        .split_whitespace()
        .filter(|t| t.chars().any(char::is_alphanumeric))
        .collect();

    let syllables = words.iter().map(|w| count_syllables(w)).sum();

    TextStats {
        words: words.len(),
        sentences: count_sentences(text),
        syllables,
    }
}

/// Flesch-Kincaid grade level:
/// 0.39 * (words/sentences) + 11.8 * (syllables/words) - 15.59.
///
/// Returns `None` for degenerate input (no words or no sentences) instead of
/// propagating a division fault. Pure: the same text always scores the same.
pub fn flesch_kincaid_grade(text: &str) -> Option<f64> {
    let stats = text_stats(text);
    if stats.words == 0 || stats.sentences == 0 {
        return None;
    }

    let words_per_sentence = stats.words as f64 / stats.sentences as f64;
    let syllables_per_word = stats.syllables as f64 / stats.words as f64;

    Some(0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59)
}

// A sentence ends at a run of ./!/? not followed by an alphanumeric
// character, so decimals ("100.4F") and dose strings never terminate one.
// Trailing text without a terminator still counts as a sentence.
fn count_sentences(text: &str) -> usize {
    let mut count = 0;
    let mut in_sentence = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_alphanumeric() {
            in_sentence = true;
        } else if matches!(c, '.' | '!' | '?') && in_sentence {
            let terminates = match chars.peek() {
                Some(next) => !next.is_alphanumeric(),
                None => true,
            };
            if terminates {
                count += 1;
                in_sentence = false;
            }
        }
    }

    if in_sentence {
        count += 1;
    }
    count
}
