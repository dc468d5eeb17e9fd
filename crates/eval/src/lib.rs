pub mod harness;
pub mod plots;
pub mod report;
pub mod scenario;

pub use harness::{
    Aggregate, BatchReport, EvalConfig, EvaluationResult, Harness, PipelineMode, ScenarioFailure,
    TargetBand, aggregate,
};
pub use plots::generate_plots;
pub use report::{render_table, write_json};
pub use scenario::{Scenario, builtin_scenarios, load_scenario_dir, validate_scenarios};
