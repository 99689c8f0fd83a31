//! Periodic contribution projector (SIP and SIP with annual top-up)

use log::debug;
use serde::{Deserialize, Serialize};

use super::annuity::{fv_annuity_due, monthly_rate, MONTHS_PER_YEAR};
use super::results::ContributionResult;
use crate::input::{percent_field, positive_field, years_field};

/// Fixed monthly contribution plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SipInput {
    pub monthly_amount: f64,
    /// Annual rate as a decimal
    pub annual_rate: f64,
    pub years: f64,
}

impl SipInput {
    pub fn from_fields(monthly_amount: &str, rate_pct: &str, years: &str) -> Option<Self> {
        Some(Self {
            monthly_amount: positive_field(monthly_amount)?,
            annual_rate: percent_field(rate_pct)?,
            years: years_field(years)?,
        })
    }

    /// Total number of monthly contributions
    pub fn months(&self) -> f64 {
        self.years * MONTHS_PER_YEAR
    }
}

/// Monthly contribution raised by a fixed percentage at the start of every year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SipTopupInput {
    pub initial_monthly_amount: f64,
    pub annual_rate: f64,
    pub years: f64,
    /// Annual step-up of the contribution, as a decimal
    pub annual_topup: f64,
}

impl SipTopupInput {
    pub fn from_fields(monthly_amount: &str, rate_pct: &str, years: &str, topup_pct: &str) -> Option<Self> {
        Some(Self {
            initial_monthly_amount: positive_field(monthly_amount)?,
            annual_rate: percent_field(rate_pct)?,
            years: years_field(years)?,
            annual_topup: percent_field(topup_pct)?,
        })
    }
}

/// SIP maturity using the annuity-due future value
pub fn project_sip(input: &SipInput) -> ContributionResult {
    let months = input.months();
    let maturity_value = fv_annuity_due(input.monthly_amount, monthly_rate(input.annual_rate), months);
    let total_invested = input.monthly_amount * months;

    debug!(
        "sip: A={} r={} months={} -> FV={:.2}",
        input.monthly_amount, input.annual_rate, months, maturity_value
    );
    ContributionResult::new(maturity_value, total_invested)
}

/// SIP with annual step-up
///
/// Each year's contribution level is valued as its own annuity due running from that
/// year to the end of the term, and the values are summed. Contributions overlap in
/// this model: a level started in year 1 keeps compounding alongside the raised
/// levels of later years. Results must match this method, not an exact layered
/// annuity schedule.
pub fn project_sip_topup(input: &SipTopupInput) -> ContributionResult {
    let rate = monthly_rate(input.annual_rate);
    let mut current = input.initial_monthly_amount;
    let mut maturity_value = 0.0;
    let mut total_invested = 0.0;

    let whole_years = input.years.max(0.0).floor() as u64;
    for year in 1..=whole_years {
        total_invested += current * MONTHS_PER_YEAR;

        let remaining_years = input.years - year as f64 + 1.0;
        maturity_value += fv_annuity_due(current, rate, MONTHS_PER_YEAR * remaining_years);

        current *= 1.0 + input.annual_topup;
    }

    debug!(
        "sip topup: A0={} g={} years={} -> FV={:.2}",
        input.initial_monthly_amount, input.annual_topup, input.years, maturity_value
    );
    ContributionResult::new(maturity_value, total_invested)
}
