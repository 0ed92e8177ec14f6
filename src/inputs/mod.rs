//! Calculator inputs: raw form values, validation rules and scenario files

mod data;
mod validation;
pub mod loader;

pub use data::{InvestmentInputs, ValidInputs};
pub use validation::{
    validate, InputField, ValidationPolicy, Violation, ViolationKind, DEFAULT_TAX_RATE_CEILING,
    MIN_DEPOSIT_AMOUNT, MIN_INFLATION, MIN_ROI, MIN_TAX_RATE, MIN_YEARS_INVESTED,
};
pub use loader::{load_scenarios, load_scenarios_from_reader, Scenario};
