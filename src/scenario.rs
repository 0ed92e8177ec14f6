//! Scenario runner for batch projections
//!
//! Each scenario gets its own input/result pair, so batches run in parallel
//! without shared state. Output keeps input order.

use std::io::Write;

use log::{info, warn};
use rayon::prelude::*;

use crate::error::Result;
use crate::inputs::{InvestmentInputs, Scenario};
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult, ProjectionRow};

/// Result of running one scenario
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioOutcome {
    pub id: String,
    pub result: ProjectionResult,
}

impl ScenarioOutcome {
    pub fn to_row(&self) -> ProjectionRow {
        ProjectionRow::from_result(self.id.clone(), &self.result)
    }
}

/// Runner holding one engine configuration for many projections
///
/// # Example
/// ```
/// use investment_calculator::{InvestmentInputs, ScenarioRunner};
///
/// let runner = ScenarioRunner::new();
/// let result = runner.run(&InvestmentInputs::new(30.0, 20.0, 1500.0, 12.0, 5.0, 3.0));
/// assert!(result.display_results);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Create runner with the default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create runner with a specific config
    pub fn with_config(config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(config),
        }
    }

    pub fn config(&self) -> &ProjectionConfig {
        self.engine.config()
    }

    /// Run a single projection
    pub fn run(&self, inputs: &InvestmentInputs) -> ProjectionResult {
        self.engine.calculate(inputs)
    }

    /// Run every scenario in parallel, preserving input order
    pub fn run_batch(&self, scenarios: &[Scenario]) -> Vec<ScenarioOutcome> {
        info!("Running {} scenarios", scenarios.len());

        let outcomes: Vec<ScenarioOutcome> = scenarios
            .par_iter()
            .map(|scenario| ScenarioOutcome {
                id: scenario.id.clone(),
                result: self.engine.calculate(&scenario.inputs),
            })
            .collect();

        let rejected = outcomes.iter().filter(|o| !o.result.display_results).count();
        if rejected > 0 {
            warn!("{} of {} scenarios had invalid inputs", rejected, outcomes.len());
        }

        outcomes
    }

    /// Run a batch and write one CSV row per scenario
    pub fn run_batch_to_csv<W: Write>(&self, scenarios: &[Scenario], writer: W) -> Result<usize> {
        let outcomes = self.run_batch(scenarios);
        write_outcomes_csv(&outcomes, writer)?;
        Ok(outcomes.len())
    }
}

/// Write outcomes as CSV with a header row
pub fn write_outcomes_csv<W: Write>(outcomes: &[ScenarioOutcome], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for outcome in outcomes {
        csv_writer.serialize(outcome.to_row())?;
    }
    csv_writer.flush()?;
    Ok(())
}
