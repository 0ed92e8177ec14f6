//! Per-account tax treatment
//!
//! Tax-deferred (RRSP-style): the deposit is made pre-tax, producing a refund
//! today, and withdrawals are taxed at the retirement rate.
//! Tax-free (TFSA-style): the deposit is made post-tax and withdrawals are
//! untaxed, so the nominal future value is kept in full.

use serde::{Deserialize, Serialize};

use super::formulas::{future_value, tax};
use crate::inputs::ValidInputs;

/// Account type being projected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountKind {
    TaxDeferred,
    TaxFree,
}

impl AccountKind {
    pub const ALL: [AccountKind; 2] = [AccountKind::TaxDeferred, AccountKind::TaxFree];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::TaxDeferred => "Tax-deferred (RRSP)",
            AccountKind::TaxFree => "Tax-free (TFSA)",
        }
    }
}

/// Tax figures and after-tax values for one account type
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountProjection {
    /// Refund received today for contributing
    pub tax_refund: f64,

    /// Tax paid when the nominal future value is withdrawn
    pub withdrawal_tax: f64,

    /// Nominal future value net of withdrawal tax
    pub future_value_after_tax: f64,

    /// After-tax future value when the refund is reinvested alongside the deposit
    pub future_value_after_tax_with_refund_reinvested: f64,
}

impl AccountProjection {
    /// Project the given account type from validated inputs and the nominal future value
    pub fn project(kind: AccountKind, inputs: &ValidInputs, nominal_future_value: f64) -> Self {
        match kind {
            AccountKind::TaxDeferred => Self::tax_deferred(inputs, nominal_future_value),
            AccountKind::TaxFree => Self::tax_free(nominal_future_value),
        }
    }

    /// Tax-deferred account: refund now, tax on withdrawal
    pub fn tax_deferred(inputs: &ValidInputs, nominal_future_value: f64) -> Self {
        let tax_refund = tax(inputs.deposit_amount, inputs.current_tax_rate);
        let withdrawal_tax = tax(nominal_future_value, inputs.retirement_tax_rate);

        Self {
            tax_refund,
            withdrawal_tax,
            future_value_after_tax: nominal_future_value - withdrawal_tax,
            future_value_after_tax_with_refund_reinvested: refund_reinvested_after_tax(
                inputs, tax_refund,
            ),
        }
    }

    /// Tax-free account: no refund, no withdrawal tax
    pub fn tax_free(nominal_future_value: f64) -> Self {
        Self {
            tax_refund: 0.0,
            withdrawal_tax: 0.0,
            future_value_after_tax: nominal_future_value,
            future_value_after_tax_with_refund_reinvested: nominal_future_value,
        }
    }
}

/// Grow deposit + refund as one principal at the nominal return, then tax the
/// whole amount at the retirement rate.
fn refund_reinvested_after_tax(inputs: &ValidInputs, tax_refund: f64) -> f64 {
    let principal = inputs.deposit_amount + tax_refund;
    let grown = future_value(principal, inputs.roi, inputs.years_invested);
    grown - tax(grown, inputs.retirement_tax_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{InvestmentInputs, ValidationPolicy};
    use approx::assert_abs_diff_eq;

    fn valid(inputs: InvestmentInputs) -> ValidInputs {
        ValidationPolicy::default().check(&inputs).unwrap()
    }

    #[test]
    fn test_tax_deferred_account() {
        let inputs = valid(InvestmentInputs::new(30.0, 20.0, 1500.0, 12.0, 5.0, 3.0));
        let nominal = future_value(1500.0, 5.0, 12);

        let account = AccountProjection::tax_deferred(&inputs, nominal);

        assert_eq!(account.tax_refund, 450.0);
        assert_abs_diff_eq!(account.withdrawal_tax, 538.76, epsilon = 0.005);
        assert_abs_diff_eq!(account.future_value_after_tax, 2155.03, epsilon = 0.005);
        assert_abs_diff_eq!(
            account.future_value_after_tax_with_refund_reinvested,
            2801.54,
            epsilon = 0.005
        );
    }

    #[test]
    fn test_tax_free_account_keeps_nominal_value() {
        let account = AccountProjection::tax_free(2693.78);

        assert_eq!(account.tax_refund, 0.0);
        assert_eq!(account.withdrawal_tax, 0.0);
        assert_eq!(account.future_value_after_tax, 2693.78);
        assert_eq!(account.future_value_after_tax_with_refund_reinvested, 2693.78);
    }

    #[test]
    fn test_equal_tax_rates_make_accounts_equivalent() {
        // Same rate in and out: deferred after-tax value equals tax-free on the after-tax deposit
        let inputs = valid(InvestmentInputs::new(25.0, 25.0, 1000.0, 10.0, 6.0, 2.0));
        let nominal = future_value(1000.0, 6.0, 10);

        let deferred = AccountProjection::project(AccountKind::TaxDeferred, &inputs, nominal);
        let tax_free = AccountProjection::project(AccountKind::TaxFree, &inputs, future_value(750.0, 6.0, 10));

        assert_abs_diff_eq!(
            deferred.future_value_after_tax,
            tax_free.future_value_after_tax,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_refund_reinvestment_beats_plain_deferral() {
        let inputs = valid(InvestmentInputs::new(40.0, 30.0, 10_000.0, 25.0, 7.0, 2.0));
        let nominal = future_value(10_000.0, 7.0, 25);

        let account = AccountProjection::tax_deferred(&inputs, nominal);

        assert!(account.future_value_after_tax_with_refund_reinvested > account.future_value_after_tax);
    }
}
