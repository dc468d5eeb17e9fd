use regex::Regex;

use crate::statement::Category;

// Dosage amounts, frequency tokens, administration verbs and named
// interaction terms. "daily" intentionally lands here rather than in the
// warning group: dosing schedules outrank surveillance phrasing.
const MEDICATION_PATTERNS: &[&str] = &[
    r"(?i)\d+\s*mg",
    r"(?i)tablet",
    r"(?i)daily|BID|twice|TID|QID|q\d+",
    r"(?i)take|continue|prescribed",
    r"(?i)alcohol|NSAID",
];

// Contact-action verbs, conditional emergency phrasing, alarm terms and
// surveillance phrasing.
const WARNING_PATTERNS: &[&str] = &[
    r"(?i)call|contact|notify|seek",
    r"(?i)if\s+(you|pain|fever|symptoms?)",
    r"(?i)signs?\s+of",
    r"(?i)emergency|urgent|severe|sudden",
    r"(?i)report|monitor\s+for",
];

/// Rule-based statement classifier. Pattern groups are evaluated in fixed
/// order with first-match-wins: a statement matching a medication pattern is
/// never reclassified as a warning, even when it also matches one.
pub struct Classifier {
    rules: Vec<(Vec<Regex>, Category)>,
}

impl Classifier {
    pub fn new() -> Self {
        let compile = |patterns: &[&str]| -> Vec<Regex> {
            patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
        };

        Self {
            rules: vec![
                (compile(MEDICATION_PATTERNS), Category::Medication),
                (compile(WARNING_PATTERNS), Category::Warning),
            ],
        }
    }

    /// First matching group wins; anything unmatched is general care.
    pub fn classify(&self, text: &str) -> Category {
        for (patterns, category) in &self.rules {
            if patterns.iter().any(|p| p.is_match(text)) {
                return *category;
            }
        }
        Category::Care
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}
