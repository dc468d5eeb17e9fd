use serde::{Deserialize, Serialize};

use crate::statement::Statement;

/// Placeholder lines rendered when a section has no statements. An empty
/// category always renders its header with an explanatory line instead of
/// an empty block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionPolicy {
    pub medication_placeholder: String,
    pub care_placeholder: String,
    pub warning_placeholder: String,
}

impl Default for SectionPolicy {
    fn default() -> Self {
        Self {
            medication_placeholder: "No specific medication instructions provided.".to_string(),
            care_placeholder: "Follow standard post-care guidelines as directed.".to_string(),
            warning_placeholder: "Contact your provider if you have concerns about your recovery."
                .to_string(),
        }
    }
}

/// Classified, deduplicated statements grouped into the three fixed
/// sections. Statement order within each section is first-occurrence order
/// from the source text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedDocument {
    pub medication: Vec<Statement>,
    pub care: Vec<Statement>,
    pub warning: Vec<Statement>,
}

pub fn assemble(
    medication: Vec<Statement>,
    care: Vec<Statement>,
    warning: Vec<Statement>,
) -> NormalizedDocument {
    NormalizedDocument {
        medication,
        care,
        warning,
    }
}

impl NormalizedDocument {
    /// Render the structured text blob: three headers in fixed order, one
    /// bullet per statement line.
    pub fn render(&self, policy: &SectionPolicy) -> String {
        let sections = [
            render_section("**MEDICATION**", &self.medication, &policy.medication_placeholder),
            render_section("**CARE INSTRUCTIONS**", &self.care, &policy.care_placeholder),
            render_section(
                "**URGENT WARNING SIGNS**",
                &self.warning,
                &policy.warning_placeholder,
            ),
        ];
        sections.join("\n\n")
    }

    pub fn statement_count(&self) -> usize {
        self.medication.len() + self.care.len() + self.warning.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statement_count() == 0
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        use anyhow::Context;
        serde_json::to_string_pretty(self).context("Failed to serialize normalized document")
    }
}

fn render_section(header: &str, statements: &[Statement], placeholder: &str) -> String {
    let mut out = String::from(header);
    out.push('\n');

    if statements.is_empty() {
        out.push_str(placeholder);
    } else {
        let lines: Vec<String> = statements.iter().map(|s| format!("- {}", s.text)).collect();
        out.push_str(&lines.join("\n"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::{Category, Statement};

    #[test]
    fn renders_bullets_in_fixed_section_order() {
        let doc = assemble(
            vec![Statement::new(
                "Take 1-2 tablets every 6 hours".to_string(),
                Category::Medication,
            )],
            vec![Statement::new(
                "Change dressing daily".to_string(),
                Category::Care,
            )],
            vec![Statement::new(
                "Call for severe dyspnea".to_string(),
                Category::Warning,
            )],
        );

        let rendered = doc.render(&SectionPolicy::default());
        let med = rendered.find("**MEDICATION**").unwrap();
        let care = rendered.find("**CARE INSTRUCTIONS**").unwrap();
        let warn = rendered.find("**URGENT WARNING SIGNS**").unwrap();

        assert!(med < care && care < warn);
        assert!(rendered.contains("- Take 1-2 tablets every 6 hours"));
        assert!(rendered.contains("- Change dressing daily"));
        assert!(rendered.contains("- Call for severe dyspnea"));
    }

    #[test]
    fn empty_sections_render_placeholders() {
        let doc = assemble(vec![], vec![], vec![]);
        let rendered = doc.render(&SectionPolicy::default());

        assert!(rendered.contains("No specific medication instructions provided."));
        assert!(rendered.contains("Follow standard post-care guidelines as directed."));
        assert!(rendered.contains("Contact your provider if you have concerns about your recovery."));
    }

    #[test]
    fn placeholders_are_configurable() {
        let policy = SectionPolicy {
            medication_placeholder: "No medications listed.".to_string(),
            ..SectionPolicy::default()
        };
        let rendered = assemble(vec![], vec![], vec![]).render(&policy);

        assert!(rendered.contains("No medications listed."));
        assert!(!rendered.contains("No specific medication instructions provided."));
    }
}
