//! Prompt templates for the reading-level transformation stage. Template
//! wording is configuration data for the external model, not pipeline logic;
//! callers with a different model can substitute their own.

/// Instruction template for rewriting normalized clinical content at a
/// patient reading level.
pub const TRANSFORMATION_PROMPT: &str = r#"Transform this structured clinical information into patient-level discharge instructions.

TARGET READING LEVEL: 5th grade (4.5-5.5 range)

SENTENCE REQUIREMENTS:
- Use 8-15 word sentences
- Vary sentence length naturally
- Use everyday words, avoid medical jargon
- Maintain adult-appropriate tone (not childish)

OUTPUT STRUCTURE:
**MEDICATION**
[Medication name and instructions in simple language]

**WHAT TO DO / WHAT NOT TO DO**
[4-5 clear action items, one per line]

**CALL DOCTOR RIGHT AWAY IF**
[Exactly 4 observable emergency signs from the input, no repetition]

CRITICAL RULES:
- Use ONLY information provided in the input below
- Do NOT add warnings, symptoms, or instructions not present in input
- Do NOT expose reasoning process
- Do NOT repeat the same phrase
- Do NOT use medical terminology

Input to transform:
"#;

pub fn build_transformation_prompt(structured_text: &str) -> String {
    format!("{}{}", TRANSFORMATION_PROMPT, structured_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_ends_with_the_input() {
        let prompt = build_transformation_prompt("**MEDICATION**\n- Take 1-2 tablets");
        assert!(prompt.starts_with("Transform this structured clinical information"));
        assert!(prompt.ends_with("- Take 1-2 tablets"));
    }
}
