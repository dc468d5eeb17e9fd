//! Deterministic stand-ins for the external model, for harness tests and
//! offline runs.

use anyhow::Result;

use crate::TextGenerator;

/// Returns the same canned text for every prompt.
pub struct FixedResponder {
    response: String,
}

impl FixedResponder {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }

    /// Simulates a model that produced nothing.
    pub fn empty() -> Self {
        Self::new("")
    }
}

impl TextGenerator for FixedResponder {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        Ok(self.response.clone())
    }
}

/// Routes by prompt content: the first rule whose marker appears in the
/// prompt wins, otherwise the default response is returned. Lets one
/// scenario in a batch fail while the rest succeed.
pub struct ScriptedResponder {
    rules: Vec<(String, String)>,
    default: String,
}

impl ScriptedResponder {
    pub fn new(default: impl Into<String>) -> Self {
        Self {
            rules: Vec::new(),
            default: default.into(),
        }
    }

    pub fn respond_when(mut self, marker: impl Into<String>, response: impl Into<String>) -> Self {
        self.rules.push((marker.into(), response.into()));
        self
    }
}

impl TextGenerator for ScriptedResponder {
    async fn generate(&self, prompt: &str) -> Result<String> {
        for (marker, response) in &self.rules {
            if prompt.contains(marker) {
                return Ok(response.clone());
            }
        }
        Ok(self.default.clone())
    }
}

/// Always fails; exercises the collaborator-failure path.
pub struct FailingResponder;

impl TextGenerator for FailingResponder {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        anyhow::bail!("generator unavailable")
    }
}
