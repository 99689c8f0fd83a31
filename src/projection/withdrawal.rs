//! Periodic withdrawal simulator (SWP and combined SIP then SWP)
//!
//! Month by month: grow the balance by the monthly rate, take the withdrawal out.
//! A balance that goes negative is clamped to zero and the simulation stops there;
//! the month that exhausted the corpus still counts its full withdrawal.

use log::debug;
use serde::{Deserialize, Serialize};

use super::annuity::{fv_annuity_due, monthly_rate, MONTHS_PER_YEAR};
use super::results::{SipSwpResult, WithdrawalResult};
use crate::input::{percent_field, positive_field, years_field};

/// Fixed monthly withdrawal from an existing corpus
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwpInput {
    pub initial_corpus: f64,
    pub monthly_withdrawal: f64,
    /// Annual rate as a decimal
    pub annual_rate: f64,
    pub years: f64,
}

impl SwpInput {
    pub fn from_fields(corpus: &str, withdrawal: &str, rate_pct: &str, years: &str) -> Option<Self> {
        Some(Self {
            initial_corpus: positive_field(corpus)?,
            monthly_withdrawal: positive_field(withdrawal)?,
            annual_rate: percent_field(rate_pct)?,
            years: years_field(years)?,
        })
    }
}

/// Accumulate with a SIP, then draw the corpus down with an SWP
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SipSwpInput {
    pub monthly_sip: f64,
    pub monthly_swp: f64,
    /// Annual rate as a decimal, used in both phases
    pub annual_rate: f64,
    pub sip_years: f64,
    pub swp_years: f64,
}

impl SipSwpInput {
    pub fn from_fields(
        sip_amount: &str,
        swp_amount: &str,
        rate_pct: &str,
        sip_years: &str,
        swp_years: &str,
    ) -> Option<Self> {
        Some(Self {
            monthly_sip: positive_field(sip_amount)?,
            monthly_swp: positive_field(swp_amount)?,
            annual_rate: percent_field(rate_pct)?,
            sip_years: years_field(sip_years)?,
            swp_years: years_field(swp_years)?,
        })
    }
}

/// Outcome of the shared drawdown loop
#[derive(Debug, Clone, Copy)]
struct Drawdown {
    balance: f64,
    total_withdrawn: f64,
    months: u64,
    depleted: bool,
}

/// Run the monthly drawdown for `months` periods (a fractional count runs its
/// partial month as a full one)
fn draw_down(corpus: f64, withdrawal: f64, rate: f64, months: f64) -> Drawdown {
    let periods = months.max(0.0).ceil() as u64;
    let mut balance = corpus;
    let mut total_withdrawn = 0.0;
    let mut month = 0;
    let mut depleted = false;

    while month < periods {
        balance *= 1.0 + rate;
        balance -= withdrawal;
        total_withdrawn += withdrawal;
        month += 1;

        if balance < 0.0 {
            balance = 0.0;
            depleted = true;
            break;
        }
    }

    Drawdown {
        balance,
        total_withdrawn,
        months: month,
        depleted,
    }
}

/// Simulate a systematic withdrawal plan
pub fn project_swp(input: &SwpInput) -> WithdrawalResult {
    let months = input.years * MONTHS_PER_YEAR;
    let run = draw_down(
        input.initial_corpus,
        input.monthly_withdrawal,
        monthly_rate(input.annual_rate),
        months,
    );

    if run.depleted {
        debug!("swp: corpus {} exhausted in month {}", input.initial_corpus, run.months);
    }

    WithdrawalResult {
        initial_corpus: input.initial_corpus,
        remaining_balance: run.balance,
        total_withdrawn: run.total_withdrawn,
        months_simulated: run.months,
        depleted: run.depleted,
    }
}

/// Accumulate for `sip_years`, then withdraw for `swp_years` from the accumulated corpus
pub fn project_sip_swp(input: &SipSwpInput) -> SipSwpResult {
    let rate = monthly_rate(input.annual_rate);
    let sip_months = input.sip_years * MONTHS_PER_YEAR;

    let accumulation_value = fv_annuity_due(input.monthly_sip, rate, sip_months);
    let total_sip = input.monthly_sip * sip_months;

    let run = draw_down(
        accumulation_value,
        input.monthly_swp,
        rate,
        input.swp_years * MONTHS_PER_YEAR,
    );

    debug!(
        "sip-swp: accumulated {:.2} over {} months, final balance {:.2}",
        accumulation_value, sip_months, run.balance
    );

    SipSwpResult {
        accumulation_value,
        total_sip,
        total_withdrawn: run.total_withdrawn,
        final_balance: run.balance,
        depleted: run.depleted,
    }
}
