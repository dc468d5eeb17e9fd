use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use generate::{TextGenerator, prompt::build_transformation_prompt};
use normalize::{Normalizer, NormalizerConfig};
use quality::{QualityChecker, QualityConfig};
use readability::flesch_kincaid_grade;

use crate::scenario::{Scenario, validate_scenarios};

/// Closed inclusive grade-level interval a transformed output must land in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetBand {
    pub low: f64,
    pub high: f64,
}

impl TargetBand {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, grade: f64) -> bool {
        self.low <= grade && grade <= self.high
    }

    pub fn validate(&self) -> Result<()> {
        if !self.low.is_finite() || !self.high.is_finite() {
            anyhow::bail!("Target band bounds must be finite");
        }
        if self.low > self.high {
            anyhow::bail!(
                "Target band lower bound {} exceeds upper bound {}",
                self.low,
                self.high
            );
        }
        Ok(())
    }
}

impl Default for TargetBand {
    fn default() -> Self {
        Self::new(4.5, 5.5)
    }
}

/// What the generator is given: the Stage-1 normalized document, or the raw
/// clinical text for baseline comparison runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineMode {
    TwoStage,
    RawInput,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalConfig {
    pub target_band: TargetBand,
    pub pipeline: PipelineMode,
    pub quality: QualityConfig,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            target_band: TargetBand::default(),
            pipeline: PipelineMode::TwoStage,
            quality: QualityConfig::default(),
        }
    }
}

/// Per-scenario lifecycle. Generator failure or empty output short-circuits
/// to `Failed`; everything else walks the states in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioState {
    Pending,
    Normalized,
    Generated,
    Scored,
    Reported,
    Failed,
}

/// Outcome of one scenario run. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub scenario: String,
    pub baseline_grade: Option<f64>,
    /// `None` when the generated text was unscoreable; shown as
    /// "unavailable" and excluded from aggregation.
    pub achieved_grade: Option<f64>,
    pub reduction: Option<f64>,
    pub target_met: bool,
    pub repetition_detected: bool,
    pub reasoning_leak: bool,
    pub hallucination_risk: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioFailure {
    pub scenario: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aggregate {
    pub reported: usize,
    pub failed: usize,
    pub mean_baseline_grade: Option<f64>,
    pub mean_achieved_grade: Option<f64>,
    pub mean_reduction: Option<f64>,
    pub target_met_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub run_id: String,
    pub config: EvalConfig,
    pub results: Vec<EvaluationResult>,
    pub failures: Vec<ScenarioFailure>,
    pub aggregate: Aggregate,
}

enum Outcome {
    Reported(EvaluationResult),
    Failed(ScenarioFailure),
}

/// Drives labeled scenarios through normalization, external generation and
/// scoring, and aggregates pass/fail against the target band. Scenarios are
/// independent: no error in one aborts the batch.
pub struct Harness {
    config: EvalConfig,
    normalizer: Normalizer,
    quality: QualityChecker,
}

impl Harness {
    pub fn new(config: EvalConfig) -> Result<Self> {
        config
            .target_band
            .validate()
            .context("Invalid evaluation configuration")?;

        let quality = QualityChecker::new(config.quality.clone());

        Ok(Self {
            config,
            normalizer: Normalizer::new(NormalizerConfig::default()),
            quality,
        })
    }

    pub async fn run_batch<G: TextGenerator + Sync>(
        &self,
        scenarios: &[Scenario],
        generator: &G,
    ) -> Result<BatchReport> {
        validate_scenarios(scenarios)?;

        let mut results = Vec::new();
        let mut failures = Vec::new();

        for scenario in scenarios {
            info!(scenario = %scenario.name, "Evaluating scenario");
            match self.run_scenario(scenario, generator).await {
                Outcome::Reported(result) => results.push(result),
                Outcome::Failed(failure) => {
                    warn!(scenario = %failure.scenario, reason = %failure.reason, "Scenario failed");
                    failures.push(failure);
                }
            }
        }

        let aggregate = aggregate(&results, failures.len());

        Ok(BatchReport {
            run_id: Uuid::new_v4().to_string(),
            config: self.config.clone(),
            results,
            failures,
            aggregate,
        })
    }

    async fn run_scenario<G: TextGenerator + Sync>(
        &self,
        scenario: &Scenario,
        generator: &G,
    ) -> Outcome {
        let mut state = ScenarioState::Pending;
        debug!(scenario = %scenario.name, ?state, "Starting scenario");

        let normalized = self.normalizer.normalize_to_text(&scenario.input);
        state = ScenarioState::Normalized;
        debug!(scenario = %scenario.name, ?state, "Normalized input");

        let generation_input = match self.config.pipeline {
            PipelineMode::TwoStage => normalized.as_str(),
            PipelineMode::RawInput => scenario.input.as_str(),
        };
        let prompt = build_transformation_prompt(generation_input);

        let generated = match generator.generate(&prompt).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                state = ScenarioState::Failed;
                debug!(scenario = %scenario.name, ?state, "Empty output");
                return Outcome::Failed(ScenarioFailure {
                    scenario: scenario.name.clone(),
                    reason: "no output generated".to_string(),
                });
            }
            Err(e) => {
                state = ScenarioState::Failed;
                debug!(scenario = %scenario.name, ?state, "Generator error");
                return Outcome::Failed(ScenarioFailure {
                    scenario: scenario.name.clone(),
                    reason: format!("no output generated: {e:#}"),
                });
            }
        };
        state = ScenarioState::Generated;
        debug!(scenario = %scenario.name, ?state, "Received generated output");

        let achieved_grade = flesch_kincaid_grade(&generated);
        let quality = self.quality.check(generation_input, &generated);
        state = ScenarioState::Scored;
        debug!(scenario = %scenario.name, ?state, achieved = ?achieved_grade, "Scored output");

        let baseline_grade = scenario
            .baseline_grade
            .or_else(|| flesch_kincaid_grade(&scenario.input));
        let reduction = match (baseline_grade, achieved_grade) {
            (Some(baseline), Some(achieved)) => Some(baseline - achieved),
            _ => None,
        };
        let target_met = achieved_grade
            .map(|grade| self.config.target_band.contains(grade))
            .unwrap_or(false);

        state = ScenarioState::Reported;
        debug!(scenario = %scenario.name, ?state, target_met, "Scenario reported");

        Outcome::Reported(EvaluationResult {
            scenario: scenario.name.clone(),
            baseline_grade,
            achieved_grade,
            reduction,
            target_met,
            repetition_detected: quality.repetition_detected,
            reasoning_leak: quality.reasoning_leak,
            hallucination_risk: quality.hallucination_risk,
        })
    }
}

/// Aggregate statistics over reported scenarios only; unavailable grades are
/// excluded from the means.
pub fn aggregate(results: &[EvaluationResult], failed: usize) -> Aggregate {
    Aggregate {
        reported: results.len(),
        failed,
        mean_baseline_grade: mean(results.iter().filter_map(|r| r.baseline_grade)),
        mean_achieved_grade: mean(results.iter().filter_map(|r| r.achieved_grade)),
        mean_reduction: mean(results.iter().filter_map(|r| r.reduction)),
        target_met_count: results.iter().filter(|r| r.target_met).count(),
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let values: Vec<f64> = values.collect();
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
