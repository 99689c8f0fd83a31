//! Result records returned by the projectors
//!
//! Every record is a plain value: created per calculation, rendered, then dropped.

use serde::{Deserialize, Serialize};

/// Lumpsum / future value growth result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthResult {
    pub principal: f64,
    pub future_value: f64,
    pub gain: f64,
}

impl GrowthResult {
    pub fn new(principal: f64, future_value: f64) -> Self {
        Self {
            principal,
            future_value,
            gain: future_value - principal,
        }
    }
}

/// Alternative investment fund result (growth net of annual management fees)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AifResult {
    pub principal: f64,
    /// Value with no fees deducted
    pub gross_value: f64,
    /// Value after each year's fee was taken out
    pub net_value: f64,
    pub total_fees: f64,
    pub net_gain: f64,
}

/// Periodic contribution (SIP) result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContributionResult {
    pub maturity_value: f64,
    pub total_invested: f64,
    pub gain: f64,
}

impl ContributionResult {
    pub fn new(maturity_value: f64, total_invested: f64) -> Self {
        Self {
            maturity_value,
            total_invested,
            gain: maturity_value - total_invested,
        }
    }
}

/// Periodic withdrawal (SWP) result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalResult {
    pub initial_corpus: f64,
    pub remaining_balance: f64,
    pub total_withdrawn: f64,
    /// Months actually simulated (less than the term when the corpus ran out)
    pub months_simulated: u64,
    pub depleted: bool,
}

/// Combined accumulate-then-withdraw result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SipSwpResult {
    pub accumulation_value: f64,
    pub total_sip: f64,
    pub total_withdrawn: f64,
    pub final_balance: f64,
    pub depleted: bool,
}

/// Inflation-adjusted goal funding result (education, marriage)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalResult {
    pub future_cost: f64,
    pub monthly_investment: f64,
    pub total_investment: f64,
    pub months: f64,
}

/// Retirement corpus sizing result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetirementResult {
    pub years_to_retirement: f64,
    pub years_in_retirement: f64,
    /// Current monthly expenses inflated to the retirement date
    pub future_monthly_expense: f64,
    pub retirement_corpus: f64,
    pub monthly_investment: f64,
    pub total_investment: f64,
}

/// Fixed deposit maturity result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepositResult {
    pub principal: f64,
    pub maturity_value: f64,
    pub interest_earned: f64,
}
