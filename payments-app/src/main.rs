//! # Payments Report
//!
//! Binary that wires together all the components:
//! - Load configuration from environment and flags
//! - Initialize the snapshot repository and clock adapters
//! - Create the report service
//! - Run one report and print it as JSON

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, FixedOffset};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use payments_repo::{JsonSnapshotRepo, build_clock};
use payments_report::{PaymentReportService, by_date_desc};
use payments_types::{Payment, YearMonth};

#[derive(Parser)]
#[command(name = "payments-report")]
#[command(author, version, about = "Reports over a payment snapshot", long_about = None)]
struct Cli {
    /// JSON file holding the payment snapshot
    #[arg(long, env = "PAYMENTS_SNAPSHOT")]
    snapshot: PathBuf,

    /// UTC offset "now" is reported in, e.g. +02:00
    #[arg(long, env = "REPORT_UTC_OFFSET", allow_hyphen_values = true)]
    utc_offset: Option<FixedOffset>,

    /// Pin "now" to an RFC 3339 timestamp for reproducible reports
    #[arg(long, env = "REPORT_NOW", value_parser = DateTime::parse_from_rfc3339)]
    now: Option<DateTime<FixedOffset>>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// All payments, newest first
    Sorted,
    /// Payments in the current month
    CurrentMonth,
    /// Payments in a given month
    Month {
        /// Year-month, e.g. 2024-05
        year_month: YearMonth,
    },
    /// Payments from the last N days of the current year
    LastDays {
        days: u32,
    },
    /// Payments with exactly one item
    SingleItem,
    /// Distinct products sold in the current month
    Products,
    /// Sum of final prices for a month
    Total {
        year_month: YearMonth,
    },
    /// Sum of discounts for a month
    Discount {
        year_month: YearMonth,
    },
    /// Line items bought by a user
    UserItems {
        email: String,
    },
    /// Payments whose items add up to more than an amount
    ValueOver {
        amount: Decimal,
    },
    /// Counts, sums and products for a month
    Summary {
        year_month: YearMonth,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,payments_app=debug,payments_report=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Sets come back unordered; print them newest first.
fn ordered(payments: HashSet<Payment>) -> Vec<Payment> {
    let mut payments: Vec<Payment> = payments.into_iter().collect();
    payments.sort_by(|a, b| by_date_desc(a, b).then_with(|| a.id.cmp(&b.id)));
    payments
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();

    tracing::info!("Using snapshot: {}", cli.snapshot.display());
    if let Some(now) = cli.now {
        tracing::info!("Clock pinned to {}", now);
    }

    let repo = JsonSnapshotRepo::new(cli.snapshot);
    let clock = build_clock(cli.utc_offset, cli.now);
    let service = PaymentReportService::new(repo, clock);

    let output = match cli.command {
        Commands::Sorted => {
            serde_json::to_value(service.find_payments_sorted_by_date_desc().await?)?
        }
        Commands::CurrentMonth => {
            serde_json::to_value(service.find_payments_for_current_month().await?)?
        }
        Commands::Month { year_month } => {
            serde_json::to_value(service.find_payments_for_given_month(year_month).await?)?
        }
        Commands::LastDays { days } => {
            serde_json::to_value(service.find_payments_for_given_last_days(days).await?)?
        }
        Commands::SingleItem => serde_json::to_value(ordered(
            service.find_payments_with_one_payment_item().await?,
        ))?,
        Commands::Products => {
            let mut products: Vec<String> = service
                .find_products_sold_in_current_month()
                .await?
                .into_iter()
                .collect();
            products.sort();
            serde_json::to_value(products)?
        }
        Commands::Total { year_month } => {
            serde_json::to_value(service.sum_total_for_given_month(year_month).await?)?
        }
        Commands::Discount { year_month } => {
            serde_json::to_value(service.sum_discount_for_given_month(year_month).await?)?
        }
        Commands::UserItems { email } => serde_json::to_value(
            service.get_payment_items_for_user_with_email(&email).await?,
        )?,
        Commands::ValueOver { amount } => serde_json::to_value(ordered(
            service.find_payments_with_value_over(amount).await?,
        ))?,
        Commands::Summary { year_month } => {
            serde_json::to_value(service.monthly_summary(year_month).await?)?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_parse_into_typed_values() {
        let cli = Cli::try_parse_from([
            "payments-report",
            "--snapshot",
            "payments.json",
            "--utc-offset",
            "-05:00",
            "--now",
            "2025-01-01T00:30:00+01:00",
            "total",
            "2024-05",
        ])
        .unwrap();

        assert_eq!(cli.snapshot, PathBuf::from("payments.json"));
        assert_eq!(cli.utc_offset, FixedOffset::west_opt(5 * 3600));
        assert_eq!(
            cli.now.map(|now| now.to_rfc3339()).as_deref(),
            Some("2025-01-01T00:30:00+01:00")
        );
        assert!(matches!(
            cli.command,
            Commands::Total { year_month } if year_month.to_string() == "2024-05"
        ));
    }

    #[test]
    fn test_bad_year_month_is_rejected() {
        let result = Cli::try_parse_from([
            "payments-report",
            "--snapshot",
            "payments.json",
            "month",
            "2024-13",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn test_value_over_takes_decimal_amount() {
        let cli = Cli::try_parse_from([
            "payments-report",
            "--snapshot",
            "payments.json",
            "value-over",
            "99.99",
        ])
        .unwrap();

        assert!(matches!(
            cli.command,
            Commands::ValueOver { amount } if amount.to_string() == "99.99"
        ));
    }
}
