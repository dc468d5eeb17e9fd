use unicode_segmentation::UnicodeSegmentation;

/// Split raw clinical text into atomic statement candidates.
///
/// Each input line is first stripped of a leading list marker (`-`, `*` or
/// `•`), then split on Unicode sentence boundaries (UAX #29). Inline hyphens
/// and decimal points never split, so dose ranges like "1-2 tablets",
/// "q4-6h" or "fever >100.4F" stay whole. Candidates are trimmed and their
/// trailing sentence punctuation is stripped; empty candidates are dropped.
pub fn segment(text: &str) -> Vec<String> {
    let mut candidates = Vec::new();

    for line in text.lines() {
        let line = strip_list_marker(line);
        if line.is_empty() {
            continue;
        }

        for sentence in line.unicode_sentences() {
            let cleaned = clean_candidate(sentence);
            if !cleaned.is_empty() {
                candidates.push(cleaned);
            }
        }
    }

    candidates
}

fn strip_list_marker(line: &str) -> &str {
    let trimmed = line.trim_start();
    trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
        .or_else(|| trimmed.strip_prefix("• "))
        .unwrap_or(trimmed)
}

fn clean_candidate(sentence: &str) -> String {
    sentence
        .trim()
        .trim_end_matches(['.', '!', '?'])
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_sentence_boundaries() {
        let text = "Take 1-2 tablets every 6 hours. Do not exceed 4000mg in 24 hours.";
        let statements = segment(text);

        assert_eq!(statements.len(), 2);
        assert_eq!(statements[0], "Take 1-2 tablets every 6 hours");
        assert_eq!(statements[1], "Do not exceed 4000mg in 24 hours");
    }

    #[test]
    fn splits_on_list_markers() {
        let text = "Discharge protocol:\n- Keep incision clean and dry\n- Avoid NSAIDs due to bleeding risk";
        let statements = segment(text);

        assert_eq!(statements.len(), 3);
        assert_eq!(statements[1], "Keep incision clean and dry");
        assert_eq!(statements[2], "Avoid NSAIDs due to bleeding risk");
    }

    #[test]
    fn keeps_numeric_ranges_whole() {
        let statements = segment("Fluid restriction 1.5-2L daily. Report fever >100.4F.");

        assert_eq!(statements.len(), 2);
        assert_eq!(statements[0], "Fluid restriction 1.5-2L daily");
        assert_eq!(statements[1], "Report fever >100.4F");
    }

    #[test]
    fn drops_blank_lines_and_empty_candidates() {
        let statements = segment("\n\n   \nChange dressing daily.\n\n");
        assert_eq!(statements, vec!["Change dressing daily".to_string()]);
    }

    #[test]
    fn same_input_same_output() {
        let text = "Monitor blood glucose fasting. Target range 80-130 mg/dL.";
        assert_eq!(segment(text), segment(text));
    }
}
