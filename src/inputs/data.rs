//! Input data structures matching the calculator form fields

use serde::{Deserialize, Serialize};

/// Raw calculator inputs as supplied by the form.
///
/// Every field is nullable: an empty form field arrives as `None` and fails
/// validation. Percentages are expressed between 0 and 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentInputs {
    /// Marginal tax rate today (%)
    #[serde(default)]
    pub current_tax_rate: Option<f64>,

    /// Expected marginal tax rate at withdrawal (%)
    #[serde(default)]
    pub retirement_tax_rate: Option<f64>,

    /// Principal contributed ($)
    #[serde(default)]
    pub deposit_amount: Option<f64>,

    /// Holding period in whole years
    #[serde(default)]
    pub years_invested: Option<f64>,

    /// Expected annual nominal return (%)
    #[serde(default)]
    pub roi: Option<f64>,

    /// Expected annual inflation (%)
    #[serde(default)]
    pub inflation: Option<f64>,
}

impl InvestmentInputs {
    /// Create a fully populated set of inputs
    pub fn new(
        current_tax_rate: f64,
        retirement_tax_rate: f64,
        deposit_amount: f64,
        years_invested: f64,
        roi: f64,
        inflation: f64,
    ) -> Self {
        Self {
            current_tax_rate: Some(current_tax_rate),
            retirement_tax_rate: Some(retirement_tax_rate),
            deposit_amount: Some(deposit_amount),
            years_invested: Some(years_invested),
            roi: Some(roi),
            inflation: Some(inflation),
        }
    }

    /// Inputs with every field set to zero
    pub fn zeroed() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0)
    }

    /// True if no field has been filled in yet
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Inputs that passed validation. Only constructed by `ValidationPolicy::check`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValidInputs {
    pub(crate) current_tax_rate: f64,
    pub(crate) retirement_tax_rate: f64,
    pub(crate) deposit_amount: f64,
    pub(crate) years_invested: u32,
    pub(crate) roi: f64,
    pub(crate) inflation: f64,
}

impl ValidInputs {
    pub fn current_tax_rate(&self) -> f64 {
        self.current_tax_rate
    }

    pub fn retirement_tax_rate(&self) -> f64 {
        self.retirement_tax_rate
    }

    pub fn deposit_amount(&self) -> f64 {
        self.deposit_amount
    }

    pub fn years_invested(&self) -> u32 {
        self.years_invested
    }

    pub fn roi(&self) -> f64 {
        self.roi
    }

    pub fn inflation(&self) -> f64 {
        self.inflation
    }
}

impl From<ValidInputs> for InvestmentInputs {
    fn from(valid: ValidInputs) -> Self {
        Self::new(
            valid.current_tax_rate,
            valid.retirement_tax_rate,
            valid.deposit_amount,
            f64::from(valid.years_invested),
            valid.roi,
            valid.inflation,
        )
    }
}
