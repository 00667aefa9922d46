use super::thresholds::{HIGH_INCOME_THRESHOLD, STABILITY_MAX_MONTHS};
use super::types::{Profile, Stage};

const NEAR_TERM_FI_YEARS: f64 = 20.0;
const YOUNG_SAVER_MAX_AGE: u32 = 30;
const YOUNG_SAVER_MIN_RATE: f64 = 0.3;
const EXPENSE_RATIO_WARNING: f64 = 0.8;

/// Produces the ordered list of observations for a profile. Deterministic
/// and template-driven; entry order is display order only.
pub fn generate_insights(profile: &Profile) -> Vec<String> {
    let mut insights = Vec::new();

    insights.push(
        match profile.stage {
            Stage::Survival => {
                "You are in survival mode: stabilizing cash flow matters more than investing right now"
            }
            Stage::Stability => {
                "You have a stable base; a deeper emergency fund will unlock the growth phase"
            }
            Stage::Growth => {
                "You are in the growth phase: your savings are compounding toward financial independence"
            }
            Stage::Freedom => "You are approaching financial independence; work is becoming optional",
            Stage::Legacy => {
                "You have reached financial independence: focus can shift to legacy and giving"
            }
        }
        .to_string(),
    );

    let rate_pct = profile.metrics.savings_rate * 100.0;
    insights.push(if profile.metrics.savings_rate >= 0.5 {
        format!("Your {rate_pct:.0}% savings rate is exceptional and dramatically shortens your timeline")
    } else if profile.metrics.savings_rate >= 0.3 {
        format!("Your {rate_pct:.0}% savings rate is strong and well above the typical household")
    } else if profile.metrics.savings_rate >= 0.1 {
        format!("Your {rate_pct:.0}% savings rate is a workable base with clear room to grow")
    } else {
        format!("Your {rate_pct:.0}% savings rate is the main constraint on your progress")
    });

    if profile.metrics.years_to_fi < NEAR_TERM_FI_YEARS {
        insights.push(format!(
            "At your current pace you could reach financial independence in about {:.1} years",
            profile.metrics.years_to_fi
        ));
    }

    if profile.age < YOUNG_SAVER_MAX_AGE && profile.metrics.savings_rate > YOUNG_SAVER_MIN_RATE {
        insights.push(
            "Saving this aggressively before 30 puts compounding firmly on your side".to_string(),
        );
    }

    insights
}

/// Produces the ordered list of next steps for a profile. Stage-specific
/// copy exists for the first three stages only; Freedom and Legacy fall
/// through to the generic advice.
pub fn generate_recommendations(profile: &Profile) -> Vec<String> {
    let mut recommendations = Vec::new();

    match profile.stage {
        Stage::Survival => {
            recommendations
                .push("Build a starter emergency fund of one month of expenses".to_string());
            recommendations
                .push("Pay down high-interest debt before adding to investments".to_string());
        }
        Stage::Stability => {
            recommendations.push(format!(
                "Grow your emergency fund toward {STABILITY_MAX_MONTHS:.0} months of expenses"
            ));
            recommendations.push("Automate a monthly investment contribution".to_string());
        }
        Stage::Growth => {
            recommendations
                .push("Max out tax-advantaged accounts before taxable investing".to_string());
            recommendations.push("Keep lifestyle inflation below your income growth".to_string());
        }
        Stage::Freedom | Stage::Legacy => {}
    }

    if profile.metrics.savings_rate < 0.1 {
        recommendations
            .push("Aim to lift your savings rate above 10% as a first milestone".to_string());
    } else if profile.metrics.savings_rate < 0.3 {
        recommendations
            .push("Push your savings rate toward 30% to meaningfully shorten your timeline".to_string());
    }

    if profile.income.gross >= HIGH_INCOME_THRESHOLD {
        recommendations
            .push("Review tax optimization strategies available to high earners".to_string());
    }

    if profile.expenses.annual > profile.income.net * EXPENSE_RATIO_WARNING {
        recommendations.push(
            "Your expenses consume over 80% of net income; audit recurring costs".to_string(),
        );
    }

    recommendations
}
