//! Fixed deposit maturity with discrete compounding

use serde::{Deserialize, Serialize};

use super::growth::compound_periodic;
use super::results::DepositResult;
use crate::input::{frequency_field, percent_field, positive_field, years_field};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FdInput {
    pub principal: f64,
    /// Annual rate as a decimal
    pub annual_rate: f64,
    pub years: f64,
    /// Compounding periods per year (1, 2, 4 or 12 in practice)
    pub periods_per_year: u32,
}

impl FdInput {
    pub fn from_fields(principal: &str, rate_pct: &str, years: &str, frequency: &str) -> Option<Self> {
        Some(Self {
            principal: positive_field(principal)?,
            annual_rate: percent_field(rate_pct)?,
            years: years_field(years)?,
            periods_per_year: frequency_field(frequency)?,
        })
    }
}

/// `P * (1 + r/n)^(n*t)`; None for a zero compounding frequency
pub fn project_fd(input: &FdInput) -> Option<DepositResult> {
    if input.periods_per_year == 0 {
        return None;
    }
    let maturity_value = compound_periodic(input.principal, input.annual_rate, input.years, input.periods_per_year);
    Some(DepositResult {
        principal: input.principal,
        maturity_value,
        interest_earned: maturity_value - input.principal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::growth::{project_lumpsum, LumpsumInput};

    #[test]
    fn test_quarterly_deposit() {
        let result = project_fd(&FdInput {
            principal: 200_000.0,
            annual_rate: 0.065,
            years: 2.0,
            periods_per_year: 4,
        })
        .unwrap();

        let expected = 200_000.0 * (1.0 + 0.065 / 4.0_f64).powi(8);
        assert!((result.maturity_value - expected).abs() < 1e-6);
        assert!((result.interest_earned - (expected - 200_000.0)).abs() < 1e-6);
    }

    #[test]
    fn test_annual_compounding_matches_lumpsum() {
        let fd = project_fd(&FdInput {
            principal: 75_000.0,
            annual_rate: 0.07,
            years: 5.0,
            periods_per_year: 1,
        })
        .unwrap();
        let lumpsum = project_lumpsum(&LumpsumInput {
            principal: 75_000.0,
            annual_rate: 0.07,
            years: 5.0,
        });
        assert!((fd.maturity_value - lumpsum.future_value).abs() < 1e-9);
    }

    #[test]
    fn test_zero_frequency_declines() {
        assert!(project_fd(&FdInput {
            principal: 1.0,
            annual_rate: 0.05,
            years: 1.0,
            periods_per_year: 0,
        })
        .is_none());
        assert!(FdInput::from_fields("200000", "6.5", "2", "0").is_none());
        assert!(FdInput::from_fields("200000", "6.5", "400000000", "4").is_none());
    }
}
