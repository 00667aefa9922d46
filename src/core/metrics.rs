use super::thresholds::{ANNUAL_RETURN, FI_MULTIPLIER, MAX_PROJECTION_MONTHS, YEARS_TO_FI_NEVER};
use super::types::{Metrics, ProfileInput};

/// Derives the normalized metrics from a validated input. Total: every
/// degenerate case (zero income, zero expenses, negative net worth) resolves
/// through the clamps rather than an error.
pub fn compute_metrics(input: &ProfileInput) -> Metrics {
    let annual_savings = input.income.net - input.expenses.annual;

    let savings_rate = if input.income.net > 0.0 {
        annual_savings / input.income.net
    } else {
        0.0
    };

    let fi_number = input.expenses.annual * FI_MULTIPLIER;

    let progress_to_fi = if fi_number > 0.0 {
        input.net_worth / fi_number
    } else {
        0.0
    };

    Metrics {
        savings_rate: savings_rate.max(0.0),
        fi_number,
        progress_to_fi: progress_to_fi.max(0.0),
        years_to_fi: years_to_fi(input.net_worth, annual_savings, fi_number).max(0.0),
    }
}

/// Projects the horizon to the FI target under compound growth at
/// [`ANNUAL_RETURN`], in years.
///
/// Already-funded targets are 0 years out. Non-positive savings cannot be
/// projected and return the [`YEARS_TO_FI_NEVER`] sentinel. With no starting
/// base to compound, the closed-form future-value-of-annuity inversion
/// applies; a positive base has no closed form and is iterated month by
/// month, bounded by [`MAX_PROJECTION_MONTHS`].
fn years_to_fi(net_worth: f64, annual_savings: f64, fi_number: f64) -> f64 {
    if net_worth >= fi_number {
        return 0.0;
    }
    if annual_savings <= 0.0 {
        return YEARS_TO_FI_NEVER;
    }

    let monthly_return = ANNUAL_RETURN / 12.0;
    let monthly_savings = annual_savings / 12.0;

    if net_worth <= 0.0 {
        let months = (1.0 + (fi_number * monthly_return) / monthly_savings).ln()
            / (1.0 + monthly_return).ln();
        return months / 12.0;
    }

    let mut value = net_worth;
    let mut months = 0u32;
    while value < fi_number && months < MAX_PROJECTION_MONTHS {
        value = value * (1.0 + monthly_return) + monthly_savings;
        months += 1;
    }
    f64::from(months) / 12.0
}
