//! Every projection and classification constant in one place. The classifier
//! branches, the advice templates, and any UI copy must all read these values
//! from here rather than repeating literals.

/// The "4% rule": a portfolio of 25x annual expenses sustains a perpetual
/// 4%/year withdrawal.
pub const FI_MULTIPLIER: f64 = 25.0;

/// Assumed constant long-run real return used by the years-to-FI projection.
pub const ANNUAL_RETURN: f64 = 0.07;

/// Hard bound on the month-by-month projection loop. Guarantees termination
/// for pathological inputs (near-zero savings against a large target); it is
/// a safety valve, not a realistic horizon.
pub const MAX_PROJECTION_MONTHS: u32 = 12_000;

/// Sentinel for "effectively never": non-positive net savings cannot be
/// projected to a finite horizon.
pub const YEARS_TO_FI_NEVER: f64 = 999.0;

pub const MIN_AGE: f64 = 18.0;
pub const MAX_AGE: f64 = 100.0;

/// Annual expenses above this multiple of net income fail validation as
/// implausible.
pub const EXPENSE_PLAUSIBILITY_MULTIPLE: f64 = 2.0;

// Stage thresholds. Months of expenses are measured against total net worth,
// not a segregated emergency fund.
pub const SURVIVAL_MAX_MONTHS: f64 = 3.0;
pub const STABILITY_MAX_MONTHS: f64 = 6.0;
pub const DEBT_BURDEN_RATIO: f64 = 0.5;
pub const FREEDOM_MIN_PROGRESS: f64 = 0.75;
pub const LEGACY_MIN_PROGRESS: f64 = 1.0;

// Category thresholds.
pub const HIGH_INCOME_THRESHOLD: f64 = 200_000.0;
pub const HIGH_SAVINGS_RATE: f64 = 0.4;
pub const COAST_MAX_AGE: u32 = 40;
pub const COAST_MIN_PROGRESS: f64 = 0.25;
pub const BARISTA_MIN_PROGRESS: f64 = 0.5;
pub const FAT_FIRE_EXPENSES: f64 = 100_000.0;
pub const LEAN_FIRE_EXPENSES: f64 = 40_000.0;

// Persistence.
pub const SCHEMA_VERSION: u32 = 1;
pub const STORAGE_KEY_PREFIX: &str = "financial_profile_v1";
pub const DEFAULT_MAX_AGE_DAYS: i64 = 30;
