use super::thresholds::{
    BARISTA_MIN_PROGRESS, COAST_MAX_AGE, COAST_MIN_PROGRESS, DEBT_BURDEN_RATIO,
    FAT_FIRE_EXPENSES, FREEDOM_MIN_PROGRESS, HIGH_INCOME_THRESHOLD, HIGH_SAVINGS_RATE,
    LEAN_FIRE_EXPENSES, LEGACY_MIN_PROGRESS, STABILITY_MAX_MONTHS, SURVIVAL_MAX_MONTHS,
};
use super::types::{Category, Metrics, ProfileInput, Stage};

/// Net worth expressed in months of spending. A liquidity proxy measured
/// against *total* net worth, not a segregated emergency fund.
pub fn months_of_expenses(input: &ProfileInput) -> f64 {
    if input.expenses.monthly > 0.0 {
        input.net_worth / input.expenses.monthly
    } else {
        0.0
    }
}

/// Maps an input and its metrics to a life stage.
///
/// The branches form a priority chain and the first match wins: a
/// debt-driven Survival classification must preempt a high-progress Legacy
/// one, so do not reorder.
pub fn determine_stage(input: &ProfileInput, metrics: &Metrics) -> Stage {
    let months = months_of_expenses(input);

    if input.debt > input.income.net * DEBT_BURDEN_RATIO || months < SURVIVAL_MAX_MONTHS {
        return Stage::Survival;
    }
    if metrics.progress_to_fi >= LEGACY_MIN_PROGRESS {
        return Stage::Legacy;
    }
    if metrics.progress_to_fi >= FREEDOM_MIN_PROGRESS {
        return Stage::Freedom;
    }
    if months > STABILITY_MAX_MONTHS {
        return Stage::Growth;
    }
    Stage::Stability
}

/// Maps an input and its metrics to a strategy category, again as an ordered
/// priority chain.
pub fn determine_category(input: &ProfileInput, metrics: &Metrics) -> Category {
    if metrics.progress_to_fi >= LEGACY_MIN_PROGRESS {
        return fire_variant(input.expenses.annual);
    }
    if input.income.gross >= HIGH_INCOME_THRESHOLD
        && metrics.savings_rate >= HIGH_SAVINGS_RATE
        && metrics.progress_to_fi < FREEDOM_MIN_PROGRESS
    {
        return Category::Henry;
    }
    if metrics.savings_rate >= HIGH_SAVINGS_RATE {
        // Aggressive savers land in a FIRE variant before reaching FI.
        return fire_variant(input.expenses.annual);
    }
    if input.age < COAST_MAX_AGE && metrics.progress_to_fi >= COAST_MIN_PROGRESS {
        return Category::CoastFire;
    }
    if metrics.progress_to_fi >= BARISTA_MIN_PROGRESS && metrics.progress_to_fi < LEGACY_MIN_PROGRESS
    {
        return Category::BaristaFire;
    }
    Category::Standard
}

fn fire_variant(annual_expenses: f64) -> Category {
    if annual_expenses >= FAT_FIRE_EXPENSES {
        Category::FatFire
    } else if annual_expenses <= LEAN_FIRE_EXPENSES {
        Category::LeanFire
    } else {
        Category::Fire
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::metrics::compute_metrics;
    use crate::core::types::{Expenses, Income, Investments};
    use proptest::prelude::{prop_assert, proptest};

    fn sample_input() -> ProfileInput {
        ProfileInput {
            income: Income {
                gross: 100_000.0,
                net: 75_000.0,
            },
            expenses: Expenses {
                annual: 50_000.0,
                monthly: 4_167.0,
            },
            investments: Investments {
                annual: 10_000.0,
                monthly: 833.0,
            },
            net_worth: 200_000.0,
            debt: 25_000.0,
            age: 30,
        }
    }

    fn classify(input: &ProfileInput) -> (Stage, Category) {
        let metrics = compute_metrics(input);
        (
            determine_stage(input, &metrics),
            determine_category(input, &metrics),
        )
    }

    #[test]
    fn comfortable_saver_with_runway_is_growth() {
        // ~48 months of expenses, 16% progress.
        let (stage, category) = classify(&sample_input());
        assert_eq!(stage, Stage::Growth);
        assert_eq!(category, Category::Standard);
    }

    #[test]
    fn fully_funded_profile_is_legacy() {
        let mut input = sample_input();
        input.net_worth = 5_000_000.0;
        let (stage, _) = classify(&input);
        assert_eq!(stage, Stage::Legacy);
    }

    #[test]
    fn six_months_of_runway_falls_back_to_stability() {
        let mut input = sample_input();
        input.net_worth = 25_000.0;
        input.debt = 10_000.0;

        // months_of_expenses ~= 6.0 does not clear the strict > 6 bound.
        let (stage, _) = classify(&input);
        assert_eq!(stage, Stage::Stability);
    }

    #[test]
    fn debt_burden_preempts_legacy_progress() {
        let mut input = sample_input();
        input.net_worth = 5_000_000.0;
        input.debt = 40_000.0; // > 50% of net income

        let metrics = compute_metrics(&input);
        assert!(metrics.progress_to_fi >= LEGACY_MIN_PROGRESS);
        assert_eq!(determine_stage(&input, &metrics), Stage::Survival);
    }

    #[test]
    fn thin_runway_is_survival_even_without_debt() {
        let mut input = sample_input();
        input.net_worth = 10_000.0; // ~2.4 months
        input.debt = 0.0;
        let (stage, _) = classify(&input);
        assert_eq!(stage, Stage::Survival);
    }

    #[test]
    fn freedom_sits_between_growth_and_legacy() {
        let mut input = sample_input();
        input.net_worth = 1_000_000.0; // progress 0.8
        input.debt = 0.0;
        let (stage, _) = classify(&input);
        assert_eq!(stage, Stage::Freedom);
    }

    #[test]
    fn zero_monthly_expenses_zero_out_the_liquidity_proxy() {
        let mut input = sample_input();
        input.expenses.monthly = 0.0;
        assert_eq!(months_of_expenses(&input), 0.0);
        // No runway means Survival regardless of net worth, unless progress
        // rules never get a look-in: months < SURVIVAL_MAX_MONTHS wins first.
        let metrics = compute_metrics(&input);
        assert_eq!(determine_stage(&input, &metrics), Stage::Survival);
    }

    #[test]
    fn funded_profiles_split_into_fire_variants_by_expense_level() {
        let mut input = sample_input();
        input.debt = 0.0;

        input.expenses.annual = 120_000.0;
        input.expenses.monthly = 10_000.0;
        input.net_worth = 120_000.0 * 25.0;
        assert_eq!(classify(&input).1, Category::FatFire);

        input.expenses.annual = 30_000.0;
        input.expenses.monthly = 2_500.0;
        input.net_worth = 30_000.0 * 25.0;
        assert_eq!(classify(&input).1, Category::LeanFire);

        input.expenses.annual = 60_000.0;
        input.expenses.monthly = 5_000.0;
        input.income.net = 120_000.0;
        input.income.gross = 150_000.0;
        input.net_worth = 60_000.0 * 25.0;
        assert_eq!(classify(&input).1, Category::Fire);
    }

    #[test]
    fn high_earner_far_from_target_is_henry() {
        let mut input = sample_input();
        input.income.gross = 250_000.0;
        input.income.net = 160_000.0;
        input.expenses.annual = 80_000.0;
        input.expenses.monthly = 6_667.0;
        input.net_worth = 300_000.0; // progress 0.15
        input.debt = 0.0;

        assert_eq!(classify(&input).1, Category::Henry);
    }

    #[test]
    fn aggressive_saver_below_target_lands_in_a_fire_variant() {
        let mut input = sample_input();
        input.income.gross = 120_000.0;
        input.income.net = 90_000.0;
        input.expenses.annual = 36_000.0; // 60% savings rate, lean expenses
        input.expenses.monthly = 3_000.0;
        input.net_worth = 100_000.0;
        input.debt = 0.0;

        assert_eq!(classify(&input).1, Category::LeanFire);
    }

    #[test]
    fn young_saver_with_a_quarter_banked_is_coast_fire() {
        let mut input = sample_input();
        input.net_worth = 400_000.0; // progress 0.32
        input.debt = 0.0;
        input.age = 32;

        assert_eq!(classify(&input).1, Category::CoastFire);
    }

    #[test]
    fn older_saver_past_halfway_is_barista_fire() {
        let mut input = sample_input();
        input.net_worth = 750_000.0; // progress 0.6
        input.debt = 0.0;
        input.age = 50;

        assert_eq!(classify(&input).1, Category::BaristaFire);
    }

    #[test]
    fn coast_fire_outranks_barista_fire_for_the_young() {
        let mut input = sample_input();
        input.net_worth = 750_000.0; // progress 0.6: matches both branches
        input.debt = 0.0;
        input.age = 35;

        assert_eq!(classify(&input).1, Category::CoastFire);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(100))]

        #[test]
        fn prop_classifiers_are_total(
            gross in 0u32..3_000_000,
            net_pct in 0u32..101,
            annual_expenses in 0u32..1_000_000,
            net_worth_signed in -1_000_000i64..20_000_000,
            debt in 0u32..2_000_000,
            age in 18u32..101
        ) {
            let input = ProfileInput {
                income: Income {
                    gross: gross as f64,
                    net: gross as f64 * net_pct as f64 / 100.0,
                },
                expenses: Expenses {
                    annual: annual_expenses as f64,
                    monthly: annual_expenses as f64 / 12.0,
                },
                investments: Investments { annual: 0.0, monthly: 0.0 },
                net_worth: net_worth_signed as f64,
                debt: debt as f64,
                age,
            };

            let metrics = compute_metrics(&input);
            let stage = determine_stage(&input, &metrics);
            let category = determine_category(&input, &metrics);

            // Every input classifies, and a funded profile that escapes the
            // Survival guard is always Legacy.
            if metrics.progress_to_fi >= LEGACY_MIN_PROGRESS && stage != Stage::Survival {
                prop_assert!(stage == Stage::Legacy);
            }
            if metrics.progress_to_fi >= LEGACY_MIN_PROGRESS {
                prop_assert!(matches!(
                    category,
                    Category::Fire | Category::LeanFire | Category::FatFire
                ));
            }
        }
    }
}
