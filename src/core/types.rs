use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::thresholds::SCHEMA_VERSION;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub gross: f64,
    pub net: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expenses {
    pub annual: f64,
    pub monthly: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Investments {
    pub annual: f64,
    pub monthly: f64,
}

/// Caller-supplied partial input. Every field is optional so the validator
/// can accumulate the full list of violations instead of failing on the
/// first missing value.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawProfileInput {
    pub income: RawIncome,
    pub expenses: RawExpenses,
    pub investments: RawInvestments,
    pub net_worth: Option<f64>,
    pub debt: Option<f64>,
    pub age: Option<f64>,
}

#[derive(Copy, Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawIncome {
    pub gross: Option<f64>,
    pub net: Option<f64>,
}

#[derive(Copy, Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawExpenses {
    pub annual: Option<f64>,
    pub monthly: Option<f64>,
}

#[derive(Copy, Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawInvestments {
    pub annual: Option<f64>,
    pub monthly: Option<f64>,
}

impl RawProfileInput {
    /// Resolves the partial form into a concrete input. Returns `None` when a
    /// required field is absent; run the validator first to get the reasons.
    /// Monthly figures have no presence rule and default to zero.
    pub fn resolve(&self) -> Option<ProfileInput> {
        Some(ProfileInput {
            income: Income {
                gross: self.income.gross?,
                net: self.income.net?,
            },
            expenses: Expenses {
                annual: self.expenses.annual?,
                monthly: self.expenses.monthly.unwrap_or(0.0),
            },
            investments: Investments {
                annual: self.investments.annual?,
                monthly: self.investments.monthly.unwrap_or(0.0),
            },
            net_worth: self.net_worth?,
            debt: self.debt.unwrap_or(0.0),
            age: self.age? as u32,
        })
    }
}

/// Validated input, immutable for the duration of a calculation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInput {
    pub income: Income,
    pub expenses: Expenses,
    pub investments: Investments,
    pub net_worth: f64,
    #[serde(default)]
    pub debt: f64,
    pub age: u32,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub savings_rate: f64,
    pub fi_number: f64,
    #[serde(rename = "progressToFI")]
    pub progress_to_fi: f64,
    #[serde(rename = "yearsToFI")]
    pub years_to_fi: f64,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Stage {
    Survival,
    Stability,
    Growth,
    Freedom,
    Legacy,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Survival => "Survival",
            Stage::Stability => "Stability",
            Stage::Growth => "Growth",
            Stage::Freedom => "Freedom",
            Stage::Legacy => "Legacy",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Survival" => Ok(Stage::Survival),
            "Stability" => Ok(Stage::Stability),
            "Growth" => Ok(Stage::Growth),
            "Freedom" => Ok(Stage::Freedom),
            "Legacy" => Ok(Stage::Legacy),
            _ => Err(format!("unknown stage: {s}")),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Category {
    Standard,
    #[serde(rename = "HENRY")]
    Henry,
    #[serde(rename = "CoastFIRE")]
    CoastFire,
    #[serde(rename = "BaristaFIRE")]
    BaristaFire,
    #[serde(rename = "FIRE")]
    Fire,
    #[serde(rename = "LeanFIRE")]
    LeanFire,
    #[serde(rename = "FatFIRE")]
    FatFire,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Standard => "Standard",
            Category::Henry => "HENRY",
            Category::CoastFire => "CoastFIRE",
            Category::BaristaFire => "BaristaFIRE",
            Category::Fire => "FIRE",
            Category::LeanFire => "LeanFIRE",
            Category::FatFire => "FatFIRE",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Standard" => Ok(Category::Standard),
            "HENRY" => Ok(Category::Henry),
            "CoastFIRE" => Ok(Category::CoastFire),
            "BaristaFIRE" => Ok(Category::BaristaFire),
            "FIRE" => Ok(Category::Fire),
            "LeanFIRE" => Ok(Category::LeanFire),
            "FatFIRE" => Ok(Category::FatFire),
            _ => Err(format!("unknown category: {s}")),
        }
    }
}

/// The persisted unit: the input subset the profile was computed from, the
/// classification outcome, and the derived metrics. Exactly one profile
/// occupies a store scope at a time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub schema_version: u32,
    pub income: Income,
    pub expenses: Expenses,
    pub investments: Investments,
    pub net_worth: f64,
    pub debt: f64,
    pub age: u32,
    pub stage: Stage,
    pub category: Category,
    pub metrics: Metrics,
    pub last_updated: String,
}

impl Profile {
    pub fn from_parts(
        input: &ProfileInput,
        stage: Stage,
        category: Category,
        metrics: Metrics,
        last_updated: String,
    ) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            income: input.income,
            expenses: input.expenses,
            investments: input.investments,
            net_worth: input.net_worth,
            debt: input.debt,
            age: input.age,
            stage,
            category,
            metrics,
            last_updated,
        }
    }
}

/// Result of a full calculation. Insights and recommendations are ephemeral:
/// recomputed on every call and never persisted.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub profile: Profile,
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_wire_names_round_trip() {
        for category in [
            Category::Standard,
            Category::Henry,
            Category::CoastFire,
            Category::BaristaFire,
            Category::Fire,
            Category::LeanFire,
            Category::FatFire,
        ] {
            let json = serde_json::to_string(&category).expect("serialize");
            assert_eq!(json, format!("\"{}\"", category.as_str()));
            let back: Category = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(back, category);
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn raw_input_deserializes_from_partial_json() {
        let raw: RawProfileInput =
            serde_json::from_str(r#"{"income":{"gross":100000.0},"netWorth":5000.0}"#)
                .expect("partial json");
        assert_eq!(raw.income.gross, Some(100_000.0));
        assert_eq!(raw.income.net, None);
        assert_eq!(raw.net_worth, Some(5_000.0));
        assert!(raw.resolve().is_none());
    }

    #[test]
    fn resolve_defaults_debt_and_monthly_figures() {
        let raw = RawProfileInput {
            income: RawIncome {
                gross: Some(100_000.0),
                net: Some(75_000.0),
            },
            expenses: RawExpenses {
                annual: Some(50_000.0),
                monthly: None,
            },
            investments: RawInvestments {
                annual: Some(10_000.0),
                monthly: None,
            },
            net_worth: Some(200_000.0),
            debt: None,
            age: Some(30.0),
        };

        let input = raw.resolve().expect("resolvable");
        assert_eq!(input.debt, 0.0);
        assert_eq!(input.expenses.monthly, 0.0);
        assert_eq!(input.investments.monthly, 0.0);
        assert_eq!(input.age, 30);
    }

    #[test]
    fn metrics_serialize_with_original_field_names() {
        let metrics = Metrics {
            savings_rate: 0.25,
            fi_number: 1_000_000.0,
            progress_to_fi: 0.5,
            years_to_fi: 12.5,
        };
        let value = serde_json::to_value(metrics).expect("serialize");
        assert!(value.get("savingsRate").is_some());
        assert!(value.get("fiNumber").is_some());
        assert!(value.get("progressToFI").is_some());
        assert!(value.get("yearsToFI").is_some());
    }
}
