//! Projection output structures

use serde::{Deserialize, Serialize};

use super::accounts::{AccountKind, AccountProjection};

/// Complete projection result.
///
/// Rebuilt in full on every calculation. A rejected calculation yields the
/// all-zero value with `display_results == false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    /// Deposit grown at the nominal return
    pub nominal_future_value: f64,

    /// Deposit grown at the inflation-adjusted (real) return
    pub inflation_future_value: f64,

    /// Real rate of return used for the inflation-adjusted value (%)
    pub real_rate_of_return: f64,

    pub tax_deferred: AccountProjection,
    pub tax_free: AccountProjection,

    /// True only when the inputs passed validation
    pub display_results: bool,
}

impl ProjectionResult {
    /// Result reported for inputs that failed validation
    pub fn rejected() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.display_results
    }

    /// Projection for the given account type
    pub fn account(&self, kind: AccountKind) -> &AccountProjection {
        match kind {
            AccountKind::TaxDeferred => &self.tax_deferred,
            AccountKind::TaxFree => &self.tax_free,
        }
    }

    /// Nominal growth above the deposit
    pub fn nominal_growth(&self, deposit_amount: f64) -> f64 {
        if self.display_results {
            self.nominal_future_value - deposit_amount
        } else {
            0.0
        }
    }

    /// Inflation-adjusted growth above the deposit
    pub fn inflation_adjusted_growth(&self, deposit_amount: f64) -> f64 {
        if self.display_results {
            self.inflation_future_value - deposit_amount
        } else {
            0.0
        }
    }
}

/// Flat, presentation-facing view of a result (one CSV row / JSON object)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionRow {
    pub id: String,
    pub display_results: bool,
    pub nominal_future_value: f64,
    pub inflation_future_value: f64,
    pub rrsp_tax_refund: f64,
    pub rrsp_withdrawal_tax_value: f64,
    pub rrsp_future_value_after_tax: f64,
    pub rrsp_with_tax_refund_future_value_after_tax: f64,
    pub tfsa_tax_refund: f64,
    pub tfsa_withdrawal_tax_value: f64,
    pub tfsa_future_value_after_tax: f64,
    pub tfsa_with_tax_refund_future_value_after_tax: f64,
}

impl ProjectionRow {
    pub fn from_result(id: impl Into<String>, result: &ProjectionResult) -> Self {
        let rrsp = &result.tax_deferred;
        let tfsa = &result.tax_free;

        Self {
            id: id.into(),
            display_results: result.display_results,
            nominal_future_value: result.nominal_future_value,
            inflation_future_value: result.inflation_future_value,
            rrsp_tax_refund: rrsp.tax_refund,
            rrsp_withdrawal_tax_value: rrsp.withdrawal_tax,
            rrsp_future_value_after_tax: rrsp.future_value_after_tax,
            rrsp_with_tax_refund_future_value_after_tax: rrsp
                .future_value_after_tax_with_refund_reinvested,
            tfsa_tax_refund: tfsa.tax_refund,
            tfsa_withdrawal_tax_value: tfsa.withdrawal_tax,
            tfsa_future_value_after_tax: tfsa.future_value_after_tax,
            tfsa_with_tax_refund_future_value_after_tax: tfsa
                .future_value_after_tax_with_refund_reinvested,
        }
    }
}
