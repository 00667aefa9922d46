use super::thresholds::{EXPENSE_PLAUSIBILITY_MULTIPLE, MAX_AGE, MIN_AGE};
use super::types::{RawProfileInput, ValidationReport};

/// Checks the structural and logical sanity of a raw input. Never fails
/// early: every violated rule lands in the report so a caller can surface
/// the complete list at once.
pub fn validate(input: &RawProfileInput) -> ValidationReport {
    let mut errors = Vec::new();

    match input.income.gross {
        Some(gross) if gross > 0.0 => {}
        _ => errors.push("Gross income must be greater than 0".to_string()),
    }

    match input.income.net {
        Some(net) if net > 0.0 => {}
        _ => errors.push("Net income must be greater than 0".to_string()),
    }

    match input.expenses.annual {
        Some(annual) if annual >= 0.0 => {}
        _ => errors.push("Annual expenses must be 0 or greater".to_string()),
    }

    match input.investments.annual {
        Some(annual) if annual >= 0.0 => {}
        _ => errors.push("Annual investments must be 0 or greater".to_string()),
    }

    if input.net_worth.is_none() {
        errors.push("Net worth is required".to_string());
    }

    match input.age {
        Some(age) if (MIN_AGE..=MAX_AGE).contains(&age) => {}
        _ => errors.push("Age must be between 18 and 100".to_string()),
    }

    if let (Some(net), Some(gross)) = (input.income.net, input.income.gross)
        && net > gross
    {
        errors.push("Net income cannot exceed gross income".to_string());
    }

    if let (Some(annual), Some(net)) = (input.expenses.annual, input.income.net)
        && annual > net * EXPENSE_PLAUSIBILITY_MULTIPLE
    {
        errors.push("Annual expenses are implausibly high relative to net income".to_string());
    }

    if let Some(debt) = input.debt
        && debt < 0.0
    {
        errors.push("Debt cannot be negative".to_string());
    }

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
    }
}
