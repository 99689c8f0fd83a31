//! Compound growth of a single lump sum
//!
//! Covers the lumpsum and mutual fund calculators (annual compounding), the future
//! value calculator (configurable compounding frequency) and the AIF calculator
//! (annual compounding with a management fee taken out of each year's value).

use log::debug;
use serde::{Deserialize, Serialize};

use super::results::{AifResult, GrowthResult};
use crate::input::{frequency_field, percent_field, positive_field, years_field};

/// One-time investment grown at a fixed annual rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LumpsumInput {
    pub principal: f64,
    /// Annual rate as a decimal (0.12 for 12%)
    pub annual_rate: f64,
    pub years: f64,
}

impl LumpsumInput {
    /// Build from raw field text; None when any field is missing or not positive
    pub fn from_fields(principal: &str, rate_pct: &str, years: &str) -> Option<Self> {
        let input = Self {
            principal: positive_field(principal)?,
            annual_rate: percent_field(rate_pct)?,
            years: years_field(years)?,
        };
        Some(input)
    }
}

/// Present value grown with `periods_per_year` compounding periods
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FutureValueInput {
    pub present_value: f64,
    pub annual_rate: f64,
    pub years: f64,
    pub periods_per_year: u32,
}

impl FutureValueInput {
    pub fn from_fields(present_value: &str, rate_pct: &str, years: &str, frequency: &str) -> Option<Self> {
        Some(Self {
            present_value: positive_field(present_value)?,
            annual_rate: percent_field(rate_pct)?,
            years: years_field(years)?,
            periods_per_year: frequency_field(frequency)?,
        })
    }
}

/// AIF investment with an annual management fee
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AifInput {
    pub principal: f64,
    pub annual_rate: f64,
    pub years: f64,
    /// Fee charged on each year's closing value, as a decimal
    pub management_fee: f64,
}

impl AifInput {
    pub fn from_fields(principal: &str, rate_pct: &str, years: &str, fee_pct: &str) -> Option<Self> {
        Some(Self {
            principal: positive_field(principal)?,
            annual_rate: percent_field(rate_pct)?,
            years: years_field(years)?,
            management_fee: percent_field(fee_pct).filter(|fee| *fee < 1.0)?,
        })
    }
}

/// `P * (1 + r)^t`
pub fn compound(principal: f64, annual_rate: f64, years: f64) -> f64 {
    principal * (1.0 + annual_rate).powf(years)
}

/// `P * (1 + r/n)^(n*t)`
pub fn compound_periodic(principal: f64, annual_rate: f64, years: f64, periods_per_year: u32) -> f64 {
    let n = periods_per_year as f64;
    principal * (1.0 + annual_rate / n).powf(n * years)
}

/// Lumpsum growth with annual compounding
pub fn project_lumpsum(input: &LumpsumInput) -> GrowthResult {
    let future_value = compound(input.principal, input.annual_rate, input.years);
    debug!(
        "lumpsum: P={} r={} t={} -> FV={:.2}",
        input.principal, input.annual_rate, input.years, future_value
    );
    GrowthResult::new(input.principal, future_value)
}

/// Mutual fund growth; same arithmetic as the lumpsum calculator
pub fn project_mutual_fund(input: &LumpsumInput) -> GrowthResult {
    project_lumpsum(input)
}

/// Future value with a configurable compounding frequency
///
/// Returns None for a zero frequency, which has no meaning as a period count.
pub fn project_future_value(input: &FutureValueInput) -> Option<GrowthResult> {
    if input.periods_per_year == 0 {
        debug!("future value skipped: zero compounding frequency");
        return None;
    }
    let future_value = compound_periodic(
        input.present_value,
        input.annual_rate,
        input.years,
        input.periods_per_year,
    );
    Some(GrowthResult::new(input.present_value, future_value))
}

/// AIF growth with the management fee deducted at the end of every year
///
/// Fees are charged once per whole year, so a fractional term only pays fees for
/// its whole years. The gross value uses the exact (possibly fractional) term.
///
/// None when the fee is 100% or more, which would take more than the fund holds.
pub fn project_aif(input: &AifInput) -> Option<AifResult> {
    if input.management_fee >= 1.0 {
        debug!("aif skipped: fee {} consumes the whole fund", input.management_fee);
        return None;
    }
    let gross_value = compound(input.principal, input.annual_rate, input.years);

    let mut value = input.principal;
    let mut total_fees = 0.0;
    let whole_years = input.years.max(0.0).floor() as u64;
    for _ in 0..whole_years {
        value *= 1.0 + input.annual_rate;
        let fee = value * input.management_fee;
        total_fees += fee;
        value -= fee;
    }

    Some(AifResult {
        principal: input.principal,
        gross_value,
        net_value: value,
        total_fees,
        net_gain: value - input.principal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn lumpsum(principal: f64, rate: f64, years: f64) -> LumpsumInput {
        LumpsumInput { principal, annual_rate: rate, years }
    }

    #[test]
    fn test_lumpsum_ten_years_at_twelve_percent() {
        let result = project_lumpsum(&lumpsum(100_000.0, 0.12, 10.0));
        assert!((result.future_value - 310_584.82).abs() < 0.01, "got {}", result.future_value);
        assert!((result.gain - 210_584.82).abs() < 0.01);
    }

    #[test]
    fn test_zero_rate_keeps_principal() {
        let result = project_lumpsum(&lumpsum(50_000.0, 0.0, 7.0));
        assert_eq!(result.future_value, 50_000.0);
        assert_eq!(result.gain, 0.0);
    }

    #[test]
    fn test_positive_rate_never_loses_principal() {
        for &rate in &[0.001, 0.05, 0.12, 0.3] {
            for &years in &[0.5, 1.0, 10.0, 40.0] {
                let result = project_lumpsum(&lumpsum(1_000.0, rate, years));
                assert!(result.future_value >= 1_000.0);
            }
        }
    }

    #[test]
    fn test_mutual_fund_matches_lumpsum() {
        let input = lumpsum(25_000.0, 0.11, 6.0);
        assert_eq!(project_mutual_fund(&input), project_lumpsum(&input));
    }

    #[test]
    fn test_future_value_annual_matches_lumpsum() {
        let fv = project_future_value(&FutureValueInput {
            present_value: 100_000.0,
            annual_rate: 0.12,
            years: 10.0,
            periods_per_year: 1,
        })
        .unwrap();
        let plain = project_lumpsum(&lumpsum(100_000.0, 0.12, 10.0));
        assert_relative_eq!(fv.future_value, plain.future_value, max_relative = 1e-12);
    }

    #[test]
    fn test_more_frequent_compounding_grows_more() {
        let base = FutureValueInput {
            present_value: 10_000.0,
            annual_rate: 0.08,
            years: 5.0,
            periods_per_year: 1,
        };
        let annual = project_future_value(&base).unwrap();
        let monthly = project_future_value(&FutureValueInput { periods_per_year: 12, ..base }).unwrap();
        assert!(monthly.future_value > annual.future_value);
        assert!(project_future_value(&FutureValueInput { periods_per_year: 0, ..base }).is_none());
    }

    #[test]
    fn test_aif_fee_accounting() {
        let input = AifInput {
            principal: 1_000_000.0,
            annual_rate: 0.15,
            years: 3.0,
            management_fee: 0.02,
        };
        let result = project_aif(&input).unwrap();

        // Recompute year by year
        let mut value = 1_000_000.0_f64;
        let mut fees = 0.0;
        for _ in 0..3 {
            value *= 1.15;
            fees += value * 0.02;
            value *= 0.98;
        }

        assert_relative_eq!(result.net_value, value, max_relative = 1e-12);
        assert_relative_eq!(result.total_fees, fees, max_relative = 1e-12);
        assert_relative_eq!(result.gross_value, 1_000_000.0 * 1.15_f64.powi(3), max_relative = 1e-12);
        assert!(result.net_value < result.gross_value);
        assert!((result.net_gain - (result.net_value - 1_000_000.0)).abs() < 1e-9);
    }

    #[test]
    fn test_aif_fractional_term_charges_whole_years_only() {
        let result = project_aif(&AifInput {
            principal: 100.0,
            annual_rate: 0.10,
            years: 1.5,
            management_fee: 0.01,
        })
        .unwrap();
        // One fee year: 100 * 1.1 = 110, fee 1.1
        assert!((result.total_fees - 1.1).abs() < 1e-9);
        assert!((result.net_value - 108.9).abs() < 1e-9);
    }

    #[test]
    fn test_from_fields_rejects_incomplete_input() {
        assert!(LumpsumInput::from_fields("100000", "12", "10").is_some());
        assert!(LumpsumInput::from_fields("", "12", "10").is_none());
        assert!(LumpsumInput::from_fields("100000", "0", "10").is_none());
        assert!(LumpsumInput::from_fields("100000", "12", "ten").is_none());
        assert!(FutureValueInput::from_fields("100", "8", "5", "0").is_none());
        assert!(AifInput::from_fields("100", "8", "5", "").is_none());
        assert!(LumpsumInput::from_fields("100000", "12", "400000000").is_none());
        assert!(FutureValueInput::from_fields("100", "8", "101", "4").is_none());
    }

    #[test]
    fn test_aif_fee_of_whole_fund_declines() {
        assert!(AifInput::from_fields("100000", "10", "3", "150").is_none());
        assert!(AifInput::from_fields("100000", "10", "3", "100").is_none());
        assert!(AifInput::from_fields("100000", "10", "3", "99").is_some());
        assert!(AifInput::from_fields("100000", "10", "400000000", "2").is_none());

        let input = AifInput {
            principal: 100_000.0,
            annual_rate: 0.10,
            years: 3.0,
            management_fee: 1.5,
        };
        assert!(project_aif(&input).is_none());

        let steep = project_aif(&AifInput { management_fee: 0.99, ..input }).unwrap();
        assert!(steep.net_value > 0.0);
    }
}
