//! Projection engine for tax-deferred and tax-free account comparisons

pub mod formulas;
mod accounts;
mod engine;
mod result;

pub use accounts::{AccountKind, AccountProjection};
pub use engine::{calculate, ProjectionConfig, ProjectionEngine};
pub use formulas::{compound_interest, future_value, real_rate_of_return, tax};
pub use result::{ProjectionResult, ProjectionRow};
