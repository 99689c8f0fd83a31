//! Free-text field parsing for calculator inputs
//!
//! Fields arrive exactly as typed. Anything that does not parse as a finite decimal
//! becomes `None`, which the calculators treat as incomplete input: no result is
//! produced and nothing is raised.

/// Default management fee for the AIF calculator (percent)
pub const DEFAULT_AIF_FEE_PCT: &str = "2";
/// Default inflation for the education goal (percent)
pub const DEFAULT_EDUCATION_INFLATION_PCT: &str = "6";
/// Default inflation for the marriage goal (percent)
pub const DEFAULT_MARRIAGE_INFLATION_PCT: &str = "7";
/// Default inflation for retirement planning (percent)
pub const DEFAULT_RETIREMENT_INFLATION_PCT: &str = "6";
pub const DEFAULT_RETIREMENT_AGE: &str = "60";
pub const DEFAULT_LIFE_EXPECTANCY: &str = "80";
/// Quarterly compounding for fixed deposits
pub const DEFAULT_FD_FREQUENCY: &str = "4";
/// Annual compounding for the future value calculator
pub const DEFAULT_FV_FREQUENCY: &str = "1";

/// Parse a free-text numeric field
///
/// Leading/trailing whitespace and digit-grouping commas are ignored
/// (`"1,00,000"` reads as 100000). Empty, non-numeric, NaN and infinite input all
/// map to None.
pub fn parse_field(text: &str) -> Option<f64> {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a field that must be strictly positive
pub fn positive_field(text: &str) -> Option<f64> {
    parse_field(text).filter(|v| *v > 0.0)
}

/// Longest term any calculator accepts, in years
pub const MAX_YEARS: f64 = 100.0;

/// Parse a duration in years: strictly positive and no longer than [`MAX_YEARS`]
pub fn years_field(text: &str) -> Option<f64> {
    positive_field(text).filter(|y| *y <= MAX_YEARS)
}

/// Parse a strictly positive percentage field and convert it to a decimal rate
pub fn percent_field(text: &str) -> Option<f64> {
    positive_field(text).map(|pct| pct / 100.0)
}

/// Parse a compounding frequency: a positive whole number of periods per year
pub fn frequency_field(text: &str) -> Option<u32> {
    let n = positive_field(text)?;
    if n.fract() != 0.0 || n > u32::MAX as f64 {
        return None;
    }
    Some(n as u32)
}
