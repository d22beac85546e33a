//! voltick CLI - futures ATR volatility dataset builder.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod display;

#[derive(Parser)]
#[command(name = "voltick")]
#[command(about = "Futures ATR volatility dataset builder", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Quiet mode (suppress progress and summary output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the consolidated snapshot artifact (daily + hourly ATR)
    Snapshot {
        /// Output file path
        #[arg(short, long, default_value = "market.json")]
        output: PathBuf,

        /// ATR smoothing period
        #[arg(short, long, default_value = "14")]
        period: usize,

        /// ATR smoothing variant (wilder, rolling-mean)
        #[arg(short, long)]
        smoothing: Option<String>,

        /// Calendar-day lookback for daily bars
        #[arg(long, default_value = "60")]
        daily_lookback: u32,

        /// Calendar-day lookback for hourly bars
        #[arg(long, default_value = "30")]
        hourly_lookback: u32,

        /// Write compact JSON instead of indented
        #[arg(long)]
        compact: bool,
    },

    /// Build the trailing historical series artifact (daily ATR in ticks)
    History {
        /// Output file path
        #[arg(short, long, default_value = "market-history.json")]
        output: PathBuf,

        /// ATR smoothing period
        #[arg(short, long, default_value = "14")]
        period: usize,

        /// ATR smoothing variant (wilder, rolling-mean)
        #[arg(short, long)]
        smoothing: Option<String>,

        /// Calendar-day lookback for the fetched bars
        #[arg(long, default_value = "550")]
        lookback_days: u32,

        /// Trailing bound on emitted points per symbol
        #[arg(long, default_value = "365")]
        max_points: usize,

        /// Directory to write per-symbol CSV audit tables into
        #[arg(long)]
        audit_dir: Option<PathBuf>,

        /// Write compact JSON instead of indented
        #[arg(long)]
        compact: bool,
    },

    /// List supported instruments
    List {
        /// Filter by category (index, metal, energy, rates, agriculture, currency)
        #[arg(short, long)]
        category: Option<String>,

        /// Search pattern
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show instrument details
    Info {
        /// Instrument symbol (e.g., MES, CL)
        symbol: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Snapshot {
            output,
            period,
            smoothing,
            daily_lookback,
            hourly_lookback,
            compact,
        } => {
            commands::snapshot::snapshot(
                &output,
                period,
                smoothing.as_deref(),
                daily_lookback,
                hourly_lookback,
                compact,
                cli.quiet,
            )
            .await
        }
        Commands::History {
            output,
            period,
            smoothing,
            lookback_days,
            max_points,
            audit_dir,
            compact,
        } => {
            commands::history::history(
                &output,
                period,
                smoothing.as_deref(),
                lookback_days,
                max_points,
                audit_dir.as_deref(),
                compact,
                cli.quiet,
            )
            .await
        }
        Commands::List { category, search } => {
            commands::list::list_instruments(category.as_deref(), search.as_deref())
        }
        Commands::Info { symbol } => commands::info::show_info(&symbol),
    }
}
