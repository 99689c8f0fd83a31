//! Annuity-due accumulation factor shared by the contribution, withdrawal and goal projectors

/// Number of contribution periods per year for monthly plans
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Convert an annual rate (decimal) into the simple monthly rate used by every monthly plan
pub fn monthly_rate(annual_rate: f64) -> f64 {
    annual_rate / MONTHS_PER_YEAR
}

/// Future value factor for a level annuity due
///
/// `((1+i)^m - 1) / i * (1+i)`: one unit paid at the start of each of `m` periods,
/// each payment compounding through the end of the term.
/// At a zero rate the factor collapses to its limit, `m`.
pub fn fv_annuity_due_factor(periodic_rate: f64, periods: f64) -> f64 {
    if periodic_rate.abs() < 1e-12 {
        return periods;
    }

    let growth = (1.0 + periodic_rate).powf(periods);
    (growth - 1.0) / periodic_rate * (1.0 + periodic_rate)
}

/// Future value of `amount` paid at the start of each of `periods` periods
pub fn fv_annuity_due(amount: f64, periodic_rate: f64, periods: f64) -> f64 {
    amount * fv_annuity_due_factor(periodic_rate, periods)
}

/// Level payment whose annuity-due future value reaches `target`
///
/// Returns None when the factor is not positive (no periods to save over).
pub fn payment_for_target(target: f64, periodic_rate: f64, periods: f64) -> Option<f64> {
    let factor = fv_annuity_due_factor(periodic_rate, periods);
    if factor <= 0.0 || !factor.is_finite() {
        return None;
    }
    Some(target / factor)
}
