use anyhow::Result;
use eval::{EvalConfig, Harness, builtin_scenarios, generate_plots, render_table, write_json};
use generate::{CachedGenerator, OllamaClient, ResponseCache, RetryPolicy, RetryingGenerator};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("=== Discharge Instruction Evaluation ===\n");

    let base_url =
        std::env::var("OLLAMA_URL").unwrap_or_else(|_| "http://localhost:11434".to_string());
    let model = std::env::var("OLLAMA_MODEL").unwrap_or_else(|_| "medgemma".to_string());

    let client = OllamaClient::new(base_url, model);
    let generator = CachedGenerator::new(
        RetryingGenerator::new(client, RetryPolicy::default()),
        ResponseCache::new(1000),
    );

    let config = EvalConfig::default();
    let harness = Harness::new(config)?;

    let scenarios = builtin_scenarios();
    println!("Scenario set: {} scenarios\n", scenarios.len());

    let report = harness.run_batch(&scenarios, &generator).await?;

    println!("{}", render_table(&report));

    write_json(&report, "eval_report.json")?;
    println!("Results saved to eval_report.json");

    generate_plots(&report, "plots")?;
    println!("Plots saved to plots/");

    Ok(())
}
