//! Input validation rules
//!
//! Validation fails closed: any single violation rejects the whole input
//! set. A missing (null) field fails every minimum check.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::data::{InvestmentInputs, ValidInputs};

/// Minimum accepted tax rate for both current and retirement rates (%)
pub const MIN_TAX_RATE: f64 = 0.1;

/// Minimum accepted deposit ($)
pub const MIN_DEPOSIT_AMOUNT: f64 = 0.01;

/// Minimum accepted holding period (years)
pub const MIN_YEARS_INVESTED: f64 = 1.0;

/// Minimum accepted nominal return (%)
pub const MIN_ROI: f64 = 0.1;

/// Minimum accepted inflation rate (%)
pub const MIN_INFLATION: f64 = 0.1;

/// Default upper bound for tax rates (%)
pub const DEFAULT_TAX_RATE_CEILING: f64 = 100.0;

/// One of the six calculator input fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    CurrentTaxRate,
    RetirementTaxRate,
    DepositAmount,
    YearsInvested,
    Roi,
    Inflation,
}

impl InputField {
    /// Form field name
    pub fn name(&self) -> &'static str {
        match self {
            InputField::CurrentTaxRate => "currentTaxRate",
            InputField::RetirementTaxRate => "retirementTaxRate",
            InputField::DepositAmount => "depositAmount",
            InputField::YearsInvested => "yearsInvested",
            InputField::Roi => "roi",
            InputField::Inflation => "inflation",
        }
    }
}

/// Why a field was rejected
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViolationKind {
    Missing,
    NotFinite,
    BelowMinimum(f64),
    AboveMaximum(f64),
    NotWholeYears,
}

/// The first rule an input set broke
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Violation {
    pub field: InputField,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = self.field.name();
        match self.kind {
            ViolationKind::Missing => write!(f, "{} is missing", field),
            ViolationKind::NotFinite => write!(f, "{} is not a finite number", field),
            ViolationKind::BelowMinimum(min) => write!(f, "{} must be at least {}", field, min),
            ViolationKind::AboveMaximum(max) => write!(f, "{} must be at most {}", field, max),
            ViolationKind::NotWholeYears => write!(f, "{} must be a whole number of years", field),
        }
    }
}

/// Tunable part of the validation rules
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidationPolicy {
    /// Upper bound applied to both tax rates; `None` leaves them unbounded
    pub tax_rate_ceiling: Option<f64>,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            tax_rate_ceiling: Some(DEFAULT_TAX_RATE_CEILING),
        }
    }
}

impl ValidationPolicy {
    /// Policy without any tax rate ceiling
    pub fn permissive() -> Self {
        Self {
            tax_rate_ceiling: None,
        }
    }

    /// Check the inputs, returning the validated scalars or the first violation
    pub fn check(&self, inputs: &InvestmentInputs) -> Result<ValidInputs, Violation> {
        let current_tax_rate = self.tax_rate(InputField::CurrentTaxRate, inputs.current_tax_rate)?;
        let retirement_tax_rate =
            self.tax_rate(InputField::RetirementTaxRate, inputs.retirement_tax_rate)?;
        let deposit_amount = at_least(InputField::DepositAmount, inputs.deposit_amount, MIN_DEPOSIT_AMOUNT)?;
        let years_invested = whole_years(inputs.years_invested)?;
        let roi = at_least(InputField::Roi, inputs.roi, MIN_ROI)?;
        let inflation = at_least(InputField::Inflation, inputs.inflation, MIN_INFLATION)?;

        Ok(ValidInputs {
            current_tax_rate,
            retirement_tax_rate,
            deposit_amount,
            years_invested,
            roi,
            inflation,
        })
    }

    /// Whether the inputs pass every rule
    pub fn validate(&self, inputs: &InvestmentInputs) -> bool {
        self.check(inputs).is_ok()
    }

    fn tax_rate(&self, field: InputField, value: Option<f64>) -> Result<f64, Violation> {
        let rate = at_least(field, value, MIN_TAX_RATE)?;
        match self.tax_rate_ceiling {
            Some(max) if rate > max => Err(Violation {
                field,
                kind: ViolationKind::AboveMaximum(max),
            }),
            _ => Ok(rate),
        }
    }
}

/// Validate inputs under the default policy
pub fn validate(inputs: &InvestmentInputs) -> bool {
    ValidationPolicy::default().validate(inputs)
}

fn at_least(field: InputField, value: Option<f64>, min: f64) -> Result<f64, Violation> {
    let value = value.ok_or(Violation {
        field,
        kind: ViolationKind::Missing,
    })?;
    if !value.is_finite() {
        return Err(Violation {
            field,
            kind: ViolationKind::NotFinite,
        });
    }
    if value < min {
        return Err(Violation {
            field,
            kind: ViolationKind::BelowMinimum(min),
        });
    }
    Ok(value)
}

fn whole_years(value: Option<f64>) -> Result<u32, Violation> {
    let field = InputField::YearsInvested;
    let years = at_least(field, value, MIN_YEARS_INVESTED)?;
    if years.fract() != 0.0 {
        return Err(Violation {
            field,
            kind: ViolationKind::NotWholeYears,
        });
    }
    if years > f64::from(u32::MAX) {
        return Err(Violation {
            field,
            kind: ViolationKind::AboveMaximum(f64::from(u32::MAX)),
        });
    }
    Ok(years as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimum_inputs() -> InvestmentInputs {
        InvestmentInputs::new(0.1, 0.1, 0.01, 1.0, 0.1, 0.1)
    }

    #[test]
    fn test_accepts_boundary_minimums() {
        assert!(validate(&minimum_inputs()));
    }

    #[test]
    fn test_rejects_unset_inputs() {
        assert!(!validate(&InvestmentInputs::default()));
    }

    #[test]
    fn test_rejects_zero_values() {
        assert!(!validate(&InvestmentInputs::zeroed()));
    }

    #[test]
    fn test_rejects_fractional_years() {
        let inputs = InvestmentInputs {
            years_invested: Some(1.999),
            ..minimum_inputs()
        };

        let violation = ValidationPolicy::default().check(&inputs).unwrap_err();
        assert_eq!(violation.field, InputField::YearsInvested);
        assert_eq!(violation.kind, ViolationKind::NotWholeYears);
    }

    #[test]
    fn test_each_field_below_minimum_is_rejected() {
        let base = minimum_inputs();
        let cases = [
            InvestmentInputs { current_tax_rate: Some(0.09), ..base },
            InvestmentInputs { retirement_tax_rate: Some(0.09), ..base },
            InvestmentInputs { deposit_amount: Some(0.009), ..base },
            InvestmentInputs { years_invested: Some(0.0), ..base },
            InvestmentInputs { roi: Some(0.09), ..base },
            InvestmentInputs { inflation: Some(0.09), ..base },
        ];

        for inputs in &cases {
            assert!(!validate(inputs), "expected rejection for {:?}", inputs);
        }
    }

    #[test]
    fn test_single_missing_field_is_rejected() {
        let inputs = InvestmentInputs {
            inflation: None,
            ..minimum_inputs()
        };

        let violation = ValidationPolicy::default().check(&inputs).unwrap_err();
        assert_eq!(violation.field, InputField::Inflation);
        assert_eq!(violation.kind, ViolationKind::Missing);
    }

    #[test]
    fn test_tax_rate_ceiling_enforced_by_default() {
        let current = InvestmentInputs {
            current_tax_rate: Some(100.00001),
            ..minimum_inputs()
        };
        let retirement = InvestmentInputs {
            retirement_tax_rate: Some(100.00001),
            ..minimum_inputs()
        };
        let exactly_100 = InvestmentInputs {
            current_tax_rate: Some(100.0),
            retirement_tax_rate: Some(100.0),
            ..minimum_inputs()
        };

        assert!(!validate(&current));
        assert!(!validate(&retirement));
        assert!(validate(&exactly_100));
    }

    #[test]
    fn test_permissive_policy_allows_tax_rates_above_100() {
        let inputs = InvestmentInputs {
            current_tax_rate: Some(150.0),
            retirement_tax_rate: Some(120.0),
            ..minimum_inputs()
        };

        assert!(ValidationPolicy::permissive().validate(&inputs));
    }

    #[test]
    fn test_roi_and_inflation_have_no_ceiling() {
        let inputs = InvestmentInputs {
            roi: Some(250.0),
            inflation: Some(180.0),
            ..minimum_inputs()
        };

        assert!(validate(&inputs));
    }

    #[test]
    fn test_non_finite_values_rejected() {
        let nan_roi = InvestmentInputs {
            roi: Some(f64::NAN),
            ..minimum_inputs()
        };
        let infinite_deposit = InvestmentInputs {
            deposit_amount: Some(f64::INFINITY),
            ..minimum_inputs()
        };
        let infinite_years = InvestmentInputs {
            years_invested: Some(f64::INFINITY),
            ..minimum_inputs()
        };

        assert!(!validate(&nan_roi));
        assert!(!validate(&infinite_deposit));
        assert!(!validate(&infinite_years));
    }

    #[test]
    fn test_check_returns_validated_scalars() {
        let inputs = InvestmentInputs::new(30.0, 20.0, 1500.0, 12.0, 5.0, 3.0);
        let valid = ValidationPolicy::default().check(&inputs).unwrap();

        assert_eq!(valid.years_invested(), 12);
        assert_eq!(valid.deposit_amount(), 1500.0);
        assert_eq!(InvestmentInputs::from(valid), inputs);
    }

    #[test]
    fn test_violation_message_names_field() {
        let violation = Violation {
            field: InputField::DepositAmount,
            kind: ViolationKind::BelowMinimum(MIN_DEPOSIT_AMOUNT),
        };
        assert_eq!(violation.to_string(), "depositAmount must be at least 0.01");
    }
}
