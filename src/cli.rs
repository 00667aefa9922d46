use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use crate::clock::SystemClock;
use crate::core::{RawExpenses, RawIncome, RawInvestments, RawProfileInput};
use crate::error::Error;
use crate::service::ProfileService;
use crate::store::{FileStore, ProfileStore};

#[derive(Parser, Debug)]
#[command(
    name = "fiprofile",
    about = "Financial independence profile calculator (stage + strategy classification, FI projection)"
)]
pub struct Cli {
    #[arg(
        long,
        default_value = ".fiprofile",
        help = "Directory backing the profile store"
    )]
    store_dir: PathBuf,
    #[arg(long, default_value = "local", help = "User scope for the stored profile")]
    user: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate, persist, and print a fresh profile
    Calculate {
        #[arg(long, help = "Annual gross income")]
        gross_income: Option<f64>,
        #[arg(long, help = "Annual net (take-home) income")]
        net_income: Option<f64>,
        #[arg(long, help = "Annual expenses")]
        annual_expenses: Option<f64>,
        #[arg(long, help = "Monthly expenses; drives the emergency-fund runway")]
        monthly_expenses: Option<f64>,
        #[arg(long, help = "Annual investment contributions")]
        annual_investments: Option<f64>,
        #[arg(long, help = "Monthly investment contributions")]
        monthly_investments: Option<f64>,
        #[arg(long, help = "Total net worth; may be negative")]
        net_worth: Option<f64>,
        #[arg(long, help = "Outstanding debt, defaults to 0")]
        debt: Option<f64>,
        #[arg(long, help = "Age in years, 18 to 100")]
        age: Option<f64>,
    },
    /// Print the stored profile without recomputation
    Show,
    /// Report existence, age in days, and staleness of the stored profile
    Status,
    /// Remove the stored profile
    Clear,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let store = ProfileStore::new(FileStore::new(&cli.store_dir), SystemClock, &cli.user);
    let mut service = ProfileService::new(store);

    match cli.command {
        Command::Calculate {
            gross_income,
            net_income,
            annual_expenses,
            monthly_expenses,
            annual_investments,
            monthly_investments,
            net_worth,
            debt,
            age,
        } => {
            let raw = RawProfileInput {
                income: RawIncome {
                    gross: gross_income,
                    net: net_income,
                },
                expenses: RawExpenses {
                    annual: annual_expenses,
                    monthly: monthly_expenses,
                },
                investments: RawInvestments {
                    annual: annual_investments,
                    monthly: monthly_investments,
                },
                net_worth,
                debt,
                age,
            };

            match service.calculate_profile(&raw) {
                Ok(result) => {
                    let rendered = serde_json::to_string_pretty(&result)
                        .context("rendering calculation result")?;
                    println!("{rendered}");
                    Ok(())
                }
                Err(Error::Validation(errors)) => {
                    for error in &errors {
                        eprintln!("invalid input: {error}");
                    }
                    bail!("input failed {} validation rule(s)", errors.len());
                }
            }
        }
        Command::Show => match service.refresh_profile() {
            Some(profile) => {
                let rendered =
                    serde_json::to_string_pretty(&profile).context("rendering profile")?;
                println!("{rendered}");
                Ok(())
            }
            None => bail!("no stored profile; run `fiprofile calculate` first"),
        },
        Command::Status => {
            if !service.has_profile() {
                println!("profile: absent (stale)");
                return Ok(());
            }
            match service.store().age_in_days() {
                Some(age) => println!(
                    "profile: present, {age} day(s) old, {}",
                    if service.is_profile_outdated() {
                        "stale"
                    } else {
                        "fresh"
                    }
                ),
                None => println!("profile: present but unreadable"),
            }
            Ok(())
        }
        Command::Clear => {
            if service.clear_profile() {
                println!("profile cleared");
                Ok(())
            } else {
                bail!("failed to clear profile");
            }
        }
    }
}
