use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Section a statement belongs to. Assigned by the classifier, not inherent
/// to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Medication,
    Warning,
    Care,
}

/// One atomic clinical fact pulled out of a discharge note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub id: String,
    pub text: String,
    pub category: Category,
}

impl Statement {
    pub fn new(text: String, category: Category) -> Self {
        // Generate stable statement id from content
        let id = Self::generate_id(&text);

        Self { id, text, category }
    }

    fn generate_id(text: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(text.as_bytes());
        let result = hasher.finalize();
        hex::encode(&result[..16]) // Use first 16 bytes (32 hex chars)
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_text_same_id() {
        let a = Statement::new("Take with food".to_string(), Category::Medication);
        let b = Statement::new("Take with food".to_string(), Category::Care);
        assert_eq!(a.id, b.id);
        assert_eq!(a.id.len(), 32);
    }
}
