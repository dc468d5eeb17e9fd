/// Common words ignored by the hallucination heuristic. A generated output
/// is expected to introduce these freely without signalling new clinical
/// content.
pub const STOPWORDS: &[&str] = &[
    "the", "a", "an", "to", "if", "you", "your", "do", "not", "have", "or", "and",
];
