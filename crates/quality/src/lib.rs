pub mod stopwords;

pub use stopwords::STOPWORDS;

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityConfig {
    /// A token occurring more than this many times flags degenerate,
    /// looping generation.
    pub repetition_threshold: usize,
    /// More than this many output words absent from the input flags
    /// hallucination risk.
    pub hallucination_threshold: usize,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            repetition_threshold: 3,
            hallucination_threshold: 15,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityReport {
    pub repetition_detected: bool,
    pub reasoning_leak: bool,
    pub hallucination_risk: bool,
    pub novel_word_count: usize,
}

/// Flags degenerate or unfaithful generated output by comparing it against
/// the text it was generated from. The hallucination check is a vocabulary
/// overlap heuristic, approximate by design: it counts case-folded output
/// tokens missing from the input, not semantic claims.
pub struct QualityChecker {
    config: QualityConfig,
}

impl QualityChecker {
    pub fn new(config: QualityConfig) -> Self {
        Self { config }
    }

    /// Pure function over its inputs; no side effects.
    pub fn check(&self, input: &str, output: &str) -> QualityReport {
        let novel_word_count = self.novel_word_count(input, output);

        QualityReport {
            repetition_detected: self.detect_repetition(output),
            reasoning_leak: detect_reasoning_leak(output),
            hallucination_risk: novel_word_count > self.config.hallucination_threshold,
            novel_word_count,
        }
    }

    fn detect_repetition(&self, output: &str) -> bool {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for token in output.split_whitespace() {
            let count = counts.entry(token).or_insert(0);
            *count += 1;
            if *count > self.config.repetition_threshold {
                return true;
            }
        }
        false
    }

    fn novel_word_count(&self, input: &str, output: &str) -> usize {
        let input_words = word_set(input);
        let stop: HashSet<&str> = STOPWORDS.iter().copied().collect();

        word_set(output)
            .into_iter()
            .filter(|w| !input_words.contains(w) && !stop.contains(w.as_str()))
            .count()
    }
}

impl Default for QualityChecker {
    fn default() -> Self {
        Self::new(QualityConfig::default())
    }
}

// Chain-of-thought markers the model leaks when it exposes its reasoning:
// special "<unused..>" tokens anywhere, or "thought" near the start.
fn detect_reasoning_leak(output: &str) -> bool {
    if output.contains("<unused") {
        return true;
    }
    let head: String = output.chars().take(100).collect::<String>().to_lowercase();
    head.contains("thought")
}

fn word_set(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repetition_over_threshold_flags() {
        let checker = QualityChecker::default();
        let looping = "rest rest rest rest and drink water";
        assert!(checker.check("", looping).repetition_detected);
    }

    #[test]
    fn repetition_at_threshold_passes() {
        let checker = QualityChecker::default();
        let fine = "rest rest rest and drink water";
        assert!(!checker.check("", fine).repetition_detected);
    }

    #[test]
    fn reasoning_markers_flag() {
        let checker = QualityChecker::default();
        assert!(checker.check("", "Okay, my thought process here is...").reasoning_leak);
        assert!(checker.check("", "Take your pill. <unused95>").reasoning_leak);
        assert!(!checker.check("", "Take your pill each morning.").reasoning_leak);
    }

    #[test]
    fn thought_marker_only_counts_near_start() {
        let checker = QualityChecker::default();
        let tail = format!("{} I thought about it.", "Take your pill each day. ".repeat(10));
        assert!(!checker.check("", &tail).reasoning_leak);
    }

    #[test]
    fn faithful_output_is_low_risk() {
        let checker = QualityChecker::default();
        let input = "Take 1-2 tablets every 6 hours as needed for pain.";
        let output = "Take 1-2 tablets every 6 hours if you have pain.";
        let report = checker.check(input, output);

        assert!(!report.hallucination_risk);
        assert!(report.novel_word_count <= 2);
    }

    #[test]
    fn many_novel_words_flag_hallucination_risk() {
        let checker = QualityChecker::default();
        let input = "Take your medication each morning.";
        let output = "Watch closely for swelling, bruising, bleeding, dizziness, fainting, \
                      chest tightness, trouble breathing, blurry vision, sudden weakness, \
                      slurred speech, high fever, chills, vomiting, rash, hives, confusion";
        let report = checker.check(input, output);

        assert!(report.hallucination_risk);
        assert!(report.novel_word_count > 15);
    }

    #[test]
    fn stopwords_do_not_count_as_novel() {
        let checker = QualityChecker::default();
        let report = checker.check("rest today", "you do not have to rest today");
        assert_eq!(report.novel_word_count, 0);
    }

    #[test]
    fn check_is_deterministic() {
        let checker = QualityChecker::default();
        let input = "Take 1-2 tablets every 6 hours.";
        let output = "Take two pills when it hurts.";
        assert_eq!(checker.check(input, output), checker.check(input, output));
    }
}
