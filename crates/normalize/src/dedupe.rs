use std::collections::HashSet;

use crate::statement::Statement;

/// Remove repeated statements within one category. Exact trimmed-text
/// equality defines a duplicate; the first occurrence survives and relative
/// order is preserved. No fuzzy matching.
pub fn dedupe(statements: Vec<Statement>) -> Vec<Statement> {
    let mut seen = HashSet::new();
    statements
        .into_iter()
        .filter(|s| seen.insert(s.text.trim().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::Category;

    fn care(text: &str) -> Statement {
        Statement::new(text.to_string(), Category::Care)
    }

    #[test]
    fn drops_exact_repeats_keeps_order() {
        let statements = vec![
            care("Keep wound clean and dry"),
            care("Change dressing daily"),
            care("Keep wound clean and dry"),
            care("Avoid soaking in water"),
        ];

        let deduped = dedupe(statements);
        let texts: Vec<&str> = deduped.iter().map(|s| s.text.as_str()).collect();

        assert_eq!(
            texts,
            vec![
                "Keep wound clean and dry",
                "Change dressing daily",
                "Avoid soaking in water",
            ]
        );
    }

    #[test]
    fn near_duplicates_survive() {
        let statements = vec![care("Change dressing daily"), care("Change the dressing daily")];
        assert_eq!(dedupe(statements).len(), 2);
    }
}
