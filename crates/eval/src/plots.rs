use anyhow::Result;
use plotters::prelude::*;

use crate::harness::BatchReport;

pub fn generate_plots(report: &BatchReport, output_dir: &str) -> Result<()> {
    if report.results.is_empty() {
        return Ok(());
    }

    std::fs::create_dir_all(output_dir)?;

    plot_grade_comparison(report, &format!("{}/grade_comparison.png", output_dir))?;
    plot_reductions(report, &format!("{}/grade_reduction.png", output_dir))?;

    Ok(())
}

fn plot_grade_comparison(report: &BatchReport, path: &str) -> Result<()> {
    let root = BitMapBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let n = report.results.len();
    let max_grade = report
        .results
        .iter()
        .flat_map(|r| [r.baseline_grade, r.achieved_grade])
        .flatten()
        .fold(1.0f64, f64::max);

    let mut chart = ChartBuilder::on(&root)
        .caption("Baseline vs Achieved Grade Level", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..n as f64, 0f64..(max_grade * 1.2))?;

    chart.configure_mesh().y_desc("Grade level").draw()?;

    for (i, result) in report.results.iter().enumerate() {
        if let Some(baseline) = result.baseline_grade {
            chart.draw_series(std::iter::once(Rectangle::new(
                [(i as f64 + 0.15, 0.0), (i as f64 + 0.45, baseline)],
                BLUE.filled(),
            )))?;
        }
        if let Some(achieved) = result.achieved_grade {
            chart.draw_series(std::iter::once(Rectangle::new(
                [(i as f64 + 0.55, 0.0), (i as f64 + 0.85, achieved)],
                RED.filled(),
            )))?;
        }
    }

    // Target band bounds
    let band = report.config.target_band;
    chart.draw_series(LineSeries::new(
        vec![(0.0, band.low), (n as f64, band.low)],
        &GREEN,
    ))?;
    chart.draw_series(LineSeries::new(
        vec![(0.0, band.high), (n as f64, band.high)],
        &GREEN,
    ))?;

    root.present()?;
    Ok(())
}

fn plot_reductions(report: &BatchReport, path: &str) -> Result<()> {
    let root = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let n = report.results.len();
    let max_reduction = report
        .results
        .iter()
        .filter_map(|r| r.reduction)
        .fold(1.0f64, f64::max);

    let mut chart = ChartBuilder::on(&root)
        .caption("Grade Level Reduction", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..n as f64, 0f64..(max_reduction * 1.2))?;

    chart.configure_mesh().y_desc("Grades reduced").draw()?;

    for (i, result) in report.results.iter().enumerate() {
        if let Some(reduction) = result.reduction {
            chart.draw_series(std::iter::once(Rectangle::new(
                [(i as f64 + 0.2, 0.0), (i as f64 + 0.8, reduction.max(0.0))],
                BLUE.filled(),
            )))?;
        }
    }

    root.present()?;
    Ok(())
}
