pub mod assembler;
pub mod classifier;
pub mod dedupe;
pub mod segmenter;
pub mod statement;

pub use assembler::{NormalizedDocument, SectionPolicy, assemble};
pub use classifier::Classifier;
pub use dedupe::dedupe;
pub use segmenter::segment;
pub use statement::{Category, Statement};

#[derive(Debug, Clone)]
pub struct NormalizerConfig {
    /// Statements shorter than this are treated as noise and never emitted
    /// into any section.
    pub min_statement_len: usize,
    pub sections: SectionPolicy,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            min_statement_len: 10,
            sections: SectionPolicy::default(),
        }
    }
}

/// Stage-1 content normalizer: a pure function from raw discharge text to a
/// structured three-section document. Restructures only; never changes
/// vocabulary or reading level, never fabricates content.
pub struct Normalizer {
    config: NormalizerConfig,
    classifier: Classifier,
}

impl Normalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self {
            config,
            classifier: Classifier::new(),
        }
    }

    pub fn normalize(&self, text: &str) -> NormalizedDocument {
        let mut medication = Vec::new();
        let mut care = Vec::new();
        let mut warning = Vec::new();

        for candidate in segment(text) {
            // Skip very short fragments
            if candidate.len() < self.config.min_statement_len {
                continue;
            }

            let category = self.classifier.classify(&candidate);
            let statement = Statement::new(candidate, category);

            match category {
                Category::Medication => medication.push(statement),
                Category::Warning => warning.push(statement),
                Category::Care => care.push(statement),
            }
        }

        assemble(dedupe(medication), dedupe(care), dedupe(warning))
    }

    /// Normalize and render in one step.
    pub fn normalize_to_text(&self, text: &str) -> String {
        self.normalize(text).render(&self.config.sections)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(NormalizerConfig::default())
    }
}
