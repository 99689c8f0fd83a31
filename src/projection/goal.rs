//! Goal-cost inflation projector
//!
//! Inflates today's cost of a goal to the goal date, then solves the annuity-due
//! future value for the monthly investment that reaches it. Education and marriage
//! planning share [`project_goal`]; retirement sizes its corpus from living expenses.

use log::debug;
use serde::{Deserialize, Serialize};

use super::annuity::{monthly_rate, payment_for_target, MONTHS_PER_YEAR};
use super::growth::compound;
use super::results::{GoalResult, RetirementResult};
use crate::input::{percent_field, positive_field, years_field};

/// A future expense funded by monthly investing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalInput {
    /// What the goal costs today
    pub current_cost: f64,
    /// Annual inflation as a decimal
    pub inflation_rate: f64,
    pub years_to_goal: f64,
    /// Expected annual investment return as a decimal
    pub return_rate: f64,
}

impl GoalInput {
    pub fn from_fields(current_cost: &str, inflation_pct: &str, years: &str, return_pct: &str) -> Option<Self> {
        Some(Self {
            current_cost: positive_field(current_cost)?,
            inflation_rate: percent_field(inflation_pct)?,
            years_to_goal: years_field(years)?,
            return_rate: percent_field(return_pct)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetirementInput {
    pub current_age: f64,
    pub retirement_age: f64,
    pub life_expectancy: f64,
    /// Current monthly living expenses
    pub monthly_expenses: f64,
    pub inflation_rate: f64,
    pub return_rate: f64,
}

impl RetirementInput {
    pub fn from_fields(
        current_age: &str,
        retirement_age: &str,
        monthly_expenses: &str,
        inflation_pct: &str,
        return_pct: &str,
        life_expectancy: &str,
    ) -> Option<Self> {
        Some(Self {
            current_age: positive_field(current_age)?,
            retirement_age: positive_field(retirement_age)?,
            life_expectancy: positive_field(life_expectancy)?,
            monthly_expenses: positive_field(monthly_expenses)?,
            inflation_rate: percent_field(inflation_pct)?,
            return_rate: percent_field(return_pct)?,
        })
    }

    pub fn years_to_retirement(&self) -> f64 {
        self.retirement_age - self.current_age
    }

    pub fn years_in_retirement(&self) -> f64 {
        self.life_expectancy - self.retirement_age
    }
}

/// Monthly investment needed to meet an inflated goal cost
///
/// None when there is no saving period to spread the cost over.
pub fn project_goal(input: &GoalInput) -> Option<GoalResult> {
    let future_cost = compound(input.current_cost, input.inflation_rate, input.years_to_goal);
    let months = input.years_to_goal * MONTHS_PER_YEAR;
    let monthly_investment = payment_for_target(future_cost, monthly_rate(input.return_rate), months)?;

    Some(GoalResult {
        future_cost,
        monthly_investment,
        total_investment: monthly_investment * months,
        months,
    })
}

/// Retirement corpus and the monthly investment that builds it
///
/// The corpus covers `12 * years_in_retirement` months of the inflated expense,
/// scaled once by `(1 + inflation)^(years_in_retirement / 2)`: a single mid-point
/// inflation adjustment standing in for a year-by-year drawdown. Keep it as is.
///
/// None when retirement is not after the current age, or life expectancy is not
/// after retirement.
pub fn project_retirement(input: &RetirementInput) -> Option<RetirementResult> {
    let years_to_retirement = input.years_to_retirement();
    let years_in_retirement = input.years_in_retirement();
    if years_to_retirement <= 0.0 || years_in_retirement <= 0.0 {
        debug!(
            "retirement skipped: age {} retire {} life {}",
            input.current_age, input.retirement_age, input.life_expectancy
        );
        return None;
    }

    let future_monthly_expense = compound(input.monthly_expenses, input.inflation_rate, years_to_retirement);
    let retirement_corpus = future_monthly_expense
        * MONTHS_PER_YEAR
        * years_in_retirement
        * (1.0 + input.inflation_rate).powf(years_in_retirement / 2.0);

    let months = years_to_retirement * MONTHS_PER_YEAR;
    let monthly_investment = payment_for_target(retirement_corpus, monthly_rate(input.return_rate), months)?;

    Some(RetirementResult {
        years_to_retirement,
        years_in_retirement,
        future_monthly_expense,
        retirement_corpus,
        monthly_investment,
        total_investment: monthly_investment * months,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::contribution::{project_sip, SipInput};
    use approx::assert_relative_eq;

    #[test]
    fn test_goal_cost_and_monthly_investment() {
        let input = GoalInput {
            current_cost: 1_000_000.0,
            inflation_rate: 0.06,
            years_to_goal: 10.0,
            return_rate: 0.12,
        };
        let result = project_goal(&input).unwrap();

        let future_cost = 1_000_000.0 * 1.06_f64.powi(10);
        assert_relative_eq!(result.future_cost, future_cost, max_relative = 1e-12);

        // Investing the answer as a SIP lands back on the goal
        let sip = project_sip(&SipInput {
            monthly_amount: result.monthly_investment,
            annual_rate: 0.12,
            years: 10.0,
        });
        assert_relative_eq!(sip.maturity_value, future_cost, max_relative = 1e-9);
    }

    #[test]
    fn test_goal_total_is_monthly_times_months() {
        let result = project_goal(&GoalInput {
            current_cost: 500_000.0,
            inflation_rate: 0.07,
            years_to_goal: 8.0,
            return_rate: 0.10,
        })
        .unwrap();
        assert_eq!(result.months, 96.0);
        assert_eq!(result.total_investment, result.monthly_investment * 96.0);
    }

    #[test]
    fn test_retirement_midpoint_inflation_corpus() {
        let input = RetirementInput {
            current_age: 30.0,
            retirement_age: 60.0,
            life_expectancy: 80.0,
            monthly_expenses: 50_000.0,
            inflation_rate: 0.06,
            return_rate: 0.12,
        };
        let result = project_retirement(&input).unwrap();

        let future_expense = 50_000.0 * 1.06_f64.powi(30);
        let corpus = future_expense * 12.0 * 20.0 * 1.06_f64.powi(10);

        assert_eq!(result.years_to_retirement, 30.0);
        assert_eq!(result.years_in_retirement, 20.0);
        assert_relative_eq!(result.future_monthly_expense, future_expense, max_relative = 1e-12);
        assert_relative_eq!(result.retirement_corpus, corpus, max_relative = 1e-12);
        assert_relative_eq!(result.total_investment, result.monthly_investment * 360.0, max_relative = 1e-15);
    }

    #[test]
    fn test_retirement_rejects_inverted_ages() {
        let base = RetirementInput {
            current_age: 65.0,
            retirement_age: 60.0,
            life_expectancy: 80.0,
            monthly_expenses: 40_000.0,
            inflation_rate: 0.06,
            return_rate: 0.10,
        };
        assert!(project_retirement(&base).is_none());

        let past_life = RetirementInput { current_age: 40.0, life_expectancy: 55.0, ..base };
        assert!(project_retirement(&past_life).is_none());
    }

    #[test]
    fn test_from_fields() {
        assert!(GoalInput::from_fields("1500000", "6", "15", "12").is_some());
        assert!(GoalInput::from_fields("1500000", "6", "15", "").is_none());
        assert!(GoalInput::from_fields("1500000", "6", "400000000", "12").is_none());
        assert!(RetirementInput::from_fields("30", "60", "50000", "6", "12", "80").is_some());
        assert!(RetirementInput::from_fields("", "60", "50000", "6", "12", "80").is_none());
    }
}
