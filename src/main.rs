use std::path::PathBuf;
use std::process;

use chrono::NaiveDate;
use clap::Parser;
use env_logger::Env;
use log::info;

use crate::analytics::AnalyticsResult;
use crate::error::AnalyzerError;

mod analytics;
mod db;
mod error;
mod transaction;

/// Aggregate transactions from a SQLite finance database over a date range
/// and print a one-line JSON summary to stdout.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// SQLite database file
    #[clap(long)]
    db: PathBuf,

    /// Period start, inclusive (yyyy-MM-dd)
    #[clap(long = "from")]
    date_from: NaiveDate,

    /// Period end, exclusive (yyyy-MM-dd)
    #[clap(long = "to")]
    date_to: NaiveDate,
}

/// Resolve, load and aggregate. Failures bubble up to `main`, which picks
/// the exit status and diagnostic text.
fn run(cli: &Cli) -> Result<AnalyticsResult, AnalyzerError> {
    if !cli.db.exists() {
        return Err(AnalyzerError::NotFound(cli.db.display().to_string()));
    }

    let transactions = db::load_transactions(&cli.db, cli.date_from, cli.date_to)?;
    info!(
        "aggregating {} transactions for [{}, {})",
        transactions.len(),
        cli.date_from,
        cli.date_to
    );
    Ok(analytics::aggregate(&transactions))
}

fn main() {
    // env_logger writes to stderr; stdout carries nothing but the JSON line.
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli: Cli = Cli::parse();
    match run(&cli) {
        Ok(result) => {
            let json = serde_json::to_string(&result).expect("Unable to serialize analytics result");
            println!("{json}");
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(err.exit_code());
        }
    }
}
