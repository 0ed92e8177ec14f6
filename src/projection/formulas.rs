//! Financial formulas used by the projection engine
//!
//! All rates are percentages (e.g. 5.0 for 5%). Values are returned at full
//! precision; rounding is left to whoever displays them.

/// Value of a starting balance after compounding for a number of periods.
///
/// `balance * (1 + rate/100)^periods`
///
/// # Arguments
/// * `balance` - Starting balance in dollars
/// * `rate_pct` - Growth rate per period as a percentage
/// * `periods` - Number of compounding periods (years)
pub fn future_value(balance: f64, rate_pct: f64, periods: u32) -> f64 {
    balance * (1.0 + rate_pct / 100.0).powf(f64::from(periods))
}

/// Interest earned on a starting balance, excluding the balance itself
pub fn compound_interest(balance: f64, rate_pct: f64, periods: u32) -> f64 {
    balance * ((1.0 + rate_pct / 100.0).powf(f64::from(periods)) - 1.0)
}

/// Real rate of return: nominal return deflated by inflation (Fisher relation).
///
/// `((1 + roi/100) / (1 + inflation/100) - 1) * 100`
///
/// The denominator stays above 1 for any validated inflation rate.
pub fn real_rate_of_return(roi_pct: f64, inflation_pct: f64) -> f64 {
    (((1.0 + roi_pct / 100.0) / (1.0 + inflation_pct / 100.0)) - 1.0) * 100.0
}

/// Tax owed on an amount at a percentage rate
pub fn tax(amount: f64, rate_pct: f64) -> f64 {
    amount * (rate_pct / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_future_value() {
        let result = future_value(1000.0, 1.0, 12);
        assert_abs_diff_eq!(result, 1126.83, epsilon = 0.005);
    }

    #[test]
    fn test_future_value_zero_periods_is_balance() {
        assert_eq!(future_value(1234.56, 7.0, 0), 1234.56);
    }

    #[test]
    fn test_compound_interest_is_growth_only() {
        let interest = compound_interest(1000.0, 1.0, 12);
        assert_abs_diff_eq!(interest, future_value(1000.0, 1.0, 12) - 1000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(interest, 126.83, epsilon = 0.005);
    }

    #[test]
    fn test_real_rate_of_return() {
        let result = real_rate_of_return(5.0, 3.0);
        assert_abs_diff_eq!(result, 1.942, epsilon = 0.0005);
    }

    #[test]
    fn test_real_rate_zero_when_roi_matches_inflation() {
        assert_abs_diff_eq!(real_rate_of_return(0.1, 0.1), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_real_rate_negative_when_inflation_exceeds_roi() {
        assert!(real_rate_of_return(2.0, 4.0) < 0.0);
    }

    #[test]
    fn test_tax() {
        assert_eq!(tax(7000.0, 35.0), 2450.0);
        assert_eq!(tax(1500.0, 30.0), 450.0);
    }
}
