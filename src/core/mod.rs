mod advice;
mod classify;
mod metrics;
pub mod thresholds;
mod types;
mod validate;

pub use advice::{generate_insights, generate_recommendations};
pub use classify::{determine_category, determine_stage, months_of_expenses};
pub use metrics::compute_metrics;
pub use types::{
    CalculationResult, Category, Expenses, Income, Investments, Metrics, Profile, ProfileInput,
    RawExpenses, RawIncome, RawInvestments, RawProfileInput, Stage, ValidationReport,
};
pub use validate::validate;
