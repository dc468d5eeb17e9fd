use anyhow::{Context, Result};

use crate::harness::BatchReport;

/// Render the batch as a fixed-width table with a trailing aggregate row.
/// Unscoreable grades print as "unavailable"; failed scenarios and quality
/// flags are listed after the table.
pub fn render_table(report: &BatchReport) -> String {
    let band = report.config.target_band;
    let mut out = String::new();

    out.push_str(&format!(
        "Target band: [{:.1}, {:.1}] grade level\n\n",
        band.low, band.high
    ));
    out.push_str("Scenario           | Baseline | Achieved    | Reduction | Target\n");
    out.push_str(&"-".repeat(70));
    out.push('\n');

    for result in &report.results {
        let status = if result.target_met { "yes" } else { "no" };
        out.push_str(&format!(
            "{:<18} | {:<8} | {:<11} | {:<9} | {}\n",
            result.scenario,
            fmt_grade(result.baseline_grade),
            fmt_achieved(result.achieved_grade),
            fmt_grade(result.reduction),
            status
        ));
    }

    out.push_str(&"-".repeat(70));
    out.push('\n');

    let agg = &report.aggregate;
    out.push_str(&format!(
        "{:<18} | {:<8} | {:<11} | {:<9} | {}/{}\n",
        "AVERAGE",
        fmt_grade(agg.mean_baseline_grade),
        fmt_achieved(agg.mean_achieved_grade),
        fmt_grade(agg.mean_reduction),
        agg.target_met_count,
        agg.reported
    ));

    if !report.failures.is_empty() {
        out.push_str("\nFailed scenarios:\n");
        for failure in &report.failures {
            out.push_str(&format!("  {}: {}\n", failure.scenario, failure.reason));
        }
    }

    let flagged: Vec<String> = report
        .results
        .iter()
        .filter(|r| r.repetition_detected || r.reasoning_leak || r.hallucination_risk)
        .map(|r| {
            let mut flags = Vec::new();
            if r.repetition_detected {
                flags.push("repetition");
            }
            if r.reasoning_leak {
                flags.push("reasoning leak");
            }
            if r.hallucination_risk {
                flags.push("hallucination risk");
            }
            format!("  {}: {}", r.scenario, flags.join(", "))
        })
        .collect();

    if !flagged.is_empty() {
        out.push_str("\nQuality flags:\n");
        for line in flagged {
            out.push_str(&line);
            out.push('\n');
        }
    }

    out
}

fn fmt_grade(grade: Option<f64>) -> String {
    match grade {
        Some(g) => format!("{g:.1}"),
        None => "n/a".to_string(),
    }
}

fn fmt_achieved(grade: Option<f64>) -> String {
    match grade {
        Some(g) => format!("{g:.1}"),
        None => "unavailable".to_string(),
    }
}

pub fn write_json(report: &BatchReport, path: &str) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize batch report")?;
    std::fs::write(path, json).context(format!("Failed to write report to {path}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::{Aggregate, EvalConfig, EvaluationResult, ScenarioFailure, aggregate};

    fn sample_report() -> BatchReport {
        let results = vec![
            EvaluationResult {
                scenario: "Acetaminophen".to_string(),
                baseline_grade: Some(9.5),
                achieved_grade: Some(4.8),
                reduction: Some(4.7),
                target_met: true,
                repetition_detected: false,
                reasoning_leak: false,
                hallucination_risk: true,
            },
            EvaluationResult {
                scenario: "Diabetes".to_string(),
                baseline_grade: Some(10.2),
                achieved_grade: None,
                reduction: None,
                target_met: false,
                repetition_detected: false,
                reasoning_leak: false,
                hallucination_risk: false,
            },
        ];
        let agg: Aggregate = aggregate(&results, 1);

        BatchReport {
            run_id: "test-run".to_string(),
            config: EvalConfig::default(),
            results,
            failures: vec![ScenarioFailure {
                scenario: "Heart Failure".to_string(),
                reason: "no output generated".to_string(),
            }],
            aggregate: agg,
        }
    }

    #[test]
    fn table_has_rows_aggregate_and_failures() {
        let table = render_table(&sample_report());

        assert!(table.contains("Acetaminophen"));
        assert!(table.contains("AVERAGE"));
        assert!(table.contains("1/2"));
        assert!(table.contains("unavailable"));
        assert!(table.contains("Heart Failure: no output generated"));
        assert!(table.contains("Acetaminophen: hallucination risk"));
    }

    #[test]
    fn json_report_round_trips() {
        let path = std::env::temp_dir().join(format!("eval-report-{}.json", std::process::id()));
        let path = path.to_string_lossy().to_string();

        write_json(&sample_report(), &path).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        let parsed: BatchReport = serde_json::from_str(&raw).unwrap();

        assert_eq!(parsed.run_id, "test-run");
        assert_eq!(parsed.results.len(), 2);
        assert_eq!(parsed.aggregate.target_met_count, 1);

        std::fs::remove_file(&path).ok();
    }
}
