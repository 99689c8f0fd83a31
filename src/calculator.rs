//! Uniform request/outcome layer over the individual projectors
//!
//! A [`CalculationRequest`] carries the typed input for one calculator;
//! [`CalculationRequest::run`] dispatches it and wraps the result in a
//! [`CalculationOutcome`]. Requests can also be built from raw text fields
//! ([`RawFields`]), which is how batch files and other free-text sources arrive.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::catalog::CalculatorKind;
use crate::input::{
    DEFAULT_AIF_FEE_PCT, DEFAULT_EDUCATION_INFLATION_PCT, DEFAULT_FD_FREQUENCY, DEFAULT_FV_FREQUENCY,
    DEFAULT_LIFE_EXPECTANCY, DEFAULT_MARRIAGE_INFLATION_PCT, DEFAULT_RETIREMENT_AGE,
    DEFAULT_RETIREMENT_INFLATION_PCT,
};
use crate::projection::{
    project_aif, project_fd, project_future_value, project_goal, project_lumpsum, project_mutual_fund,
    project_retirement, project_sip, project_sip_swp, project_sip_topup, project_swp, AifInput, AifResult,
    ContributionResult, DepositResult, FdInput, FutureValueInput, GoalInput, GoalResult, GrowthResult,
    LumpsumInput, RetirementInput, RetirementResult, SipInput, SipSwpInput, SipSwpResult, SipTopupInput,
    SwpInput, WithdrawalResult,
};

/// Typed input for one calculator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "kebab-case")]
pub enum CalculationRequest {
    Mf(LumpsumInput),
    Lumpsum(LumpsumInput),
    FutureValue(FutureValueInput),
    Aif(AifInput),
    Sip(SipInput),
    SipTopup(SipTopupInput),
    Swp(SwpInput),
    SipSwp(SipSwpInput),
    Fd(FdInput),
    Education(GoalInput),
    Marriage(GoalInput),
    Retirement(RetirementInput),
}

/// Result of a completed calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "kebab-case")]
pub enum CalculationOutcome {
    Mf(GrowthResult),
    Lumpsum(GrowthResult),
    FutureValue(GrowthResult),
    Aif(AifResult),
    Sip(ContributionResult),
    SipTopup(ContributionResult),
    Swp(WithdrawalResult),
    SipSwp(SipSwpResult),
    Fd(DepositResult),
    Education(GoalResult),
    Marriage(GoalResult),
    Retirement(RetirementResult),
}

/// Free-text fields for any calculator
///
/// Field meaning per calculator:
///
/// | calculator | amount | rate | years | extra1 | extra2 | extra3 |
/// |---|---|---|---|---|---|---|
/// | mf, lumpsum | investment | return % | years | | | |
/// | future-value | present value | rate % | years | periods/year (1) | | |
/// | fd | principal | rate % | years | periods/year (4) | | |
/// | aif | investment | return % | years | fee % (2) | | |
/// | sip | monthly amount | return % | years | | | |
/// | sip-topup | monthly amount | return % | years | top-up % | | |
/// | swp | corpus | return % | years | monthly withdrawal | | |
/// | sip-swp | monthly SIP | return % | SIP years | monthly SWP | SWP years | |
/// | education, marriage | current cost | return % | years to goal | inflation % (6 / 7) | | |
/// | retirement | monthly expenses | return % | current age | retirement age (60) | life expectancy (80) | inflation % (6) |
///
/// Values in parentheses are used when the field is left blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFields {
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub rate: String,
    #[serde(default)]
    pub years: String,
    #[serde(default)]
    pub extra1: String,
    #[serde(default)]
    pub extra2: String,
    #[serde(default)]
    pub extra3: String,
}

/// Blank text takes the calculator's preset value
fn or_preset<'a>(text: &'a str, preset: &'a str) -> &'a str {
    if text.trim().is_empty() {
        preset
    } else {
        text
    }
}

impl CalculationRequest {
    /// Build a request from raw text; None when the input is incomplete
    pub fn from_raw(kind: CalculatorKind, f: &RawFields) -> Option<Self> {
        let request = match kind {
            CalculatorKind::Mf => Self::Mf(LumpsumInput::from_fields(&f.amount, &f.rate, &f.years)?),
            CalculatorKind::Lumpsum => Self::Lumpsum(LumpsumInput::from_fields(&f.amount, &f.rate, &f.years)?),
            CalculatorKind::FutureValue => Self::FutureValue(FutureValueInput::from_fields(
                &f.amount,
                &f.rate,
                &f.years,
                or_preset(&f.extra1, DEFAULT_FV_FREQUENCY),
            )?),
            CalculatorKind::Fd => Self::Fd(FdInput::from_fields(
                &f.amount,
                &f.rate,
                &f.years,
                or_preset(&f.extra1, DEFAULT_FD_FREQUENCY),
            )?),
            CalculatorKind::Aif => Self::Aif(AifInput::from_fields(
                &f.amount,
                &f.rate,
                &f.years,
                or_preset(&f.extra1, DEFAULT_AIF_FEE_PCT),
            )?),
            CalculatorKind::Sip => Self::Sip(SipInput::from_fields(&f.amount, &f.rate, &f.years)?),
            CalculatorKind::SipTopup => {
                Self::SipTopup(SipTopupInput::from_fields(&f.amount, &f.rate, &f.years, &f.extra1)?)
            }
            CalculatorKind::Swp => Self::Swp(SwpInput::from_fields(&f.amount, &f.extra1, &f.rate, &f.years)?),
            CalculatorKind::SipSwp => Self::SipSwp(SipSwpInput::from_fields(
                &f.amount, &f.extra1, &f.rate, &f.years, &f.extra2,
            )?),
            CalculatorKind::Education => Self::Education(GoalInput::from_fields(
                &f.amount,
                or_preset(&f.extra1, DEFAULT_EDUCATION_INFLATION_PCT),
                &f.years,
                &f.rate,
            )?),
            CalculatorKind::Marriage => Self::Marriage(GoalInput::from_fields(
                &f.amount,
                or_preset(&f.extra1, DEFAULT_MARRIAGE_INFLATION_PCT),
                &f.years,
                &f.rate,
            )?),
            CalculatorKind::Retirement => Self::Retirement(RetirementInput::from_fields(
                &f.years,
                or_preset(&f.extra1, DEFAULT_RETIREMENT_AGE),
                &f.amount,
                or_preset(&f.extra3, DEFAULT_RETIREMENT_INFLATION_PCT),
                &f.rate,
                or_preset(&f.extra2, DEFAULT_LIFE_EXPECTANCY),
            )?),
        };
        Some(request)
    }

    pub fn kind(&self) -> CalculatorKind {
        match self {
            Self::Mf(_) => CalculatorKind::Mf,
            Self::Lumpsum(_) => CalculatorKind::Lumpsum,
            Self::FutureValue(_) => CalculatorKind::FutureValue,
            Self::Aif(_) => CalculatorKind::Aif,
            Self::Sip(_) => CalculatorKind::Sip,
            Self::SipTopup(_) => CalculatorKind::SipTopup,
            Self::Swp(_) => CalculatorKind::Swp,
            Self::SipSwp(_) => CalculatorKind::SipSwp,
            Self::Fd(_) => CalculatorKind::Fd,
            Self::Education(_) => CalculatorKind::Education,
            Self::Marriage(_) => CalculatorKind::Marriage,
            Self::Retirement(_) => CalculatorKind::Retirement,
        }
    }

    /// Run the projection; None when the projector declines the input
    pub fn run(&self) -> Option<CalculationOutcome> {
        let outcome = match self {
            Self::Mf(input) => CalculationOutcome::Mf(project_mutual_fund(input)),
            Self::Lumpsum(input) => CalculationOutcome::Lumpsum(project_lumpsum(input)),
            Self::FutureValue(input) => CalculationOutcome::FutureValue(project_future_value(input)?),
            Self::Aif(input) => CalculationOutcome::Aif(project_aif(input)?),
            Self::Sip(input) => CalculationOutcome::Sip(project_sip(input)),
            Self::SipTopup(input) => CalculationOutcome::SipTopup(project_sip_topup(input)),
            Self::Swp(input) => CalculationOutcome::Swp(project_swp(input)),
            Self::SipSwp(input) => CalculationOutcome::SipSwp(project_sip_swp(input)),
            Self::Fd(input) => CalculationOutcome::Fd(project_fd(input)?),
            Self::Education(input) => CalculationOutcome::Education(project_goal(input)?),
            Self::Marriage(input) => CalculationOutcome::Marriage(project_goal(input)?),
            Self::Retirement(input) => CalculationOutcome::Retirement(project_retirement(input)?),
        };
        debug!("{} calculated", self.kind());
        Some(outcome)
    }
}

/// Parse raw fields and run in one step
pub fn calculate(kind: CalculatorKind, fields: &RawFields) -> Option<CalculationOutcome> {
    match CalculationRequest::from_raw(kind, fields) {
        Some(request) => request.run(),
        None => {
            debug!("{}: incomplete input, no result", kind);
            None
        }
    }
}

impl CalculationOutcome {
    pub fn kind(&self) -> CalculatorKind {
        match self {
            Self::Mf(_) => CalculatorKind::Mf,
            Self::Lumpsum(_) => CalculatorKind::Lumpsum,
            Self::FutureValue(_) => CalculatorKind::FutureValue,
            Self::Aif(_) => CalculatorKind::Aif,
            Self::Sip(_) => CalculatorKind::Sip,
            Self::SipTopup(_) => CalculatorKind::SipTopup,
            Self::Swp(_) => CalculatorKind::Swp,
            Self::SipSwp(_) => CalculatorKind::SipSwp,
            Self::Fd(_) => CalculatorKind::Fd,
            Self::Education(_) => CalculatorKind::Education,
            Self::Marriage(_) => CalculatorKind::Marriage,
            Self::Retirement(_) => CalculatorKind::Retirement,
        }
    }

    /// Headline figure shown most prominently for each calculator
    pub fn headline(&self) -> f64 {
        match self {
            Self::Mf(r) | Self::Lumpsum(r) | Self::FutureValue(r) => r.future_value,
            Self::Aif(r) => r.net_value,
            Self::Sip(r) | Self::SipTopup(r) => r.maturity_value,
            Self::Swp(r) => r.remaining_balance,
            Self::SipSwp(r) => r.final_balance,
            Self::Fd(r) => r.maturity_value,
            Self::Education(r) | Self::Marriage(r) => r.monthly_investment,
            Self::Retirement(r) => r.monthly_investment,
        }
    }

    /// Labelled monetary lines, headline first
    pub fn lines(&self) -> Vec<(&'static str, f64)> {
        match self {
            Self::Mf(r) => vec![("Future Value", r.future_value), ("Gain", r.gain)],
            Self::Lumpsum(r) => vec![
                ("Future Value", r.future_value),
                ("Investment", r.principal),
                ("Gains", r.gain),
            ],
            Self::FutureValue(r) => vec![
                ("Future Value", r.future_value),
                ("Present Value", r.principal),
                ("Total Gains", r.gain),
            ],
            Self::Aif(r) => vec![
                ("Net Returns", r.net_value),
                ("Gross Returns", r.gross_value),
                ("Total Fees", r.total_fees),
                ("Net Gains", r.net_gain),
            ],
            Self::Sip(r) | Self::SipTopup(r) => vec![
                ("Maturity Amount", r.maturity_value),
                ("Total Investment", r.total_invested),
                ("Total Gains", r.gain),
            ],
            Self::Swp(r) => vec![
                ("Remaining Amount", r.remaining_balance),
                ("Initial Amount", r.initial_corpus),
                ("Total Withdrawn", r.total_withdrawn),
            ],
            Self::SipSwp(r) => vec![
                ("Final Value", r.final_balance),
                ("Accumulation Value", r.accumulation_value),
                ("Total SIP", r.total_sip),
                ("Total SWP", r.total_withdrawn),
            ],
            Self::Fd(r) => vec![
                ("Maturity Amount", r.maturity_value),
                ("Principal", r.principal),
                ("Interest Earned", r.interest_earned),
            ],
            Self::Education(r) | Self::Marriage(r) => vec![
                ("Monthly Investment", r.monthly_investment),
                ("Future Cost", r.future_cost),
                ("Total Investment", r.total_investment),
            ],
            Self::Retirement(r) => vec![
                ("Monthly Investment", r.monthly_investment),
                ("Retirement Corpus", r.retirement_corpus),
                ("Total Investment", r.total_investment),
            ],
        }
    }

    /// Money put in by the investor, where the calculator has such a figure
    pub fn invested(&self) -> Option<f64> {
        match self {
            Self::Mf(r) | Self::Lumpsum(r) | Self::FutureValue(r) => Some(r.principal),
            Self::Aif(r) => Some(r.principal),
            Self::Sip(r) | Self::SipTopup(r) => Some(r.total_invested),
            Self::SipSwp(r) => Some(r.total_sip),
            Self::Fd(r) => Some(r.principal),
            Self::Education(r) | Self::Marriage(r) => Some(r.total_investment),
            Self::Retirement(r) => Some(r.total_investment),
            Self::Swp(r) => Some(r.initial_corpus),
        }
    }

    /// Growth over what was invested, where meaningful
    pub fn gain(&self) -> Option<f64> {
        match self {
            Self::Mf(r) | Self::Lumpsum(r) | Self::FutureValue(r) => Some(r.gain),
            Self::Aif(r) => Some(r.net_gain),
            Self::Sip(r) | Self::SipTopup(r) => Some(r.gain),
            Self::Fd(r) => Some(r.interest_earned),
            _ => None,
        }
    }
}
