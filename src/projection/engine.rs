//! Projection engine: validate, then compute every output field in one pass

use log::debug;
use serde::{Deserialize, Serialize};

use super::accounts::{AccountKind, AccountProjection};
use super::formulas::{future_value, real_rate_of_return};
use super::result::ProjectionResult;
use crate::inputs::{InvestmentInputs, ValidInputs, ValidationPolicy};

/// Configuration for a projection run
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Rules applied to inputs before anything is computed
    pub validation: ValidationPolicy,
}

impl ProjectionConfig {
    /// Config that leaves tax rates without an upper bound
    pub fn permissive() -> Self {
        Self {
            validation: ValidationPolicy::permissive(),
        }
    }
}

/// Main projection engine. Stateless apart from its config.
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Validate the inputs and project them.
    ///
    /// Invalid inputs are not an error: the result comes back zeroed with
    /// `display_results == false`.
    pub fn calculate(&self, inputs: &InvestmentInputs) -> ProjectionResult {
        match self.config.validation.check(inputs) {
            Ok(valid) => self.project(&valid),
            Err(violation) => {
                debug!("Inputs rejected: {}", violation);
                ProjectionResult::rejected()
            }
        }
    }

    /// Project already validated inputs
    pub fn project(&self, inputs: &ValidInputs) -> ProjectionResult {
        let nominal_future_value =
            future_value(inputs.deposit_amount, inputs.roi, inputs.years_invested);

        let real_rate = real_rate_of_return(inputs.roi, inputs.inflation);
        let inflation_future_value =
            future_value(inputs.deposit_amount, real_rate, inputs.years_invested);

        let tax_deferred =
            AccountProjection::project(AccountKind::TaxDeferred, inputs, nominal_future_value);
        let tax_free = AccountProjection::project(AccountKind::TaxFree, inputs, nominal_future_value);

        debug!(
            "Projected ${:.2} over {} years: nominal={:.2} real={:.2} (real rate {:.4}%)",
            inputs.deposit_amount,
            inputs.years_invested,
            nominal_future_value,
            inflation_future_value,
            real_rate,
        );

        ProjectionResult {
            nominal_future_value,
            inflation_future_value,
            real_rate_of_return: real_rate,
            tax_deferred,
            tax_free,
            display_results: true,
        }
    }
}

/// Calculate with the default configuration
pub fn calculate(inputs: &InvestmentInputs) -> ProjectionResult {
    ProjectionEngine::default().calculate(inputs)
}
