use crate::strategy::FrontendConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Operate an in-memory ledger of users, accounts and transactions
#[derive(Parser, Debug)]
#[command(name = "ledger")]
#[command(about = "Operate an in-memory ledger of users, accounts and transactions", long_about = None)]
pub struct CliArgs {
    /// Input file: the CSV script in batch mode, menu input in interactive mode
    #[arg(
        value_name = "INPUT",
        required_if_eq("frontend", "batch"),
        help = "CSV script (batch) or menu input (interactive, defaults to stdin)"
    )]
    pub input_file: Option<PathBuf>,

    /// Frontend driving the ledger
    #[arg(
        id = "frontend",
        long = "mode",
        value_name = "MODE",
        default_value = "interactive",
        help = "Frontend: 'interactive' menu or 'batch' script replay"
    )]
    pub frontend: FrontendType,

    /// Report written after a batch replay
    #[arg(
        long = "report",
        value_name = "REPORT",
        default_value = "balances",
        help = "Batch report: 'balances' per account or the full 'transactions' log"
    )]
    pub report: ReportKind,

    /// Decimal places used when printing amounts
    #[arg(
        long = "scale",
        value_name = "PLACES",
        help = "Decimal places for printed amounts (default: 2, range: 0-10)"
    )]
    pub scale: Option<u32>,

    /// Log filter used when RUST_LOG is not set
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Log level or filter directive (overridden by RUST_LOG)"
    )]
    pub log_level: String,
}

/// Available frontends
#[derive(Clone, Debug, PartialEq, ValueEnum)]
pub enum FrontendType {
    Interactive,
    Batch,
}

/// Reports the batch frontend can write
#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum ReportKind {
    #[default]
    Balances,
    Transactions,
}

impl CliArgs {
    /// Create a FrontendConfig from CLI arguments
    ///
    /// Values that were not given fall back to the defaults; out-of-range
    /// values are replaced by the default with a warning.
    pub fn to_frontend_config(&self) -> FrontendConfig {
        match self.scale {
            Some(scale) => FrontendConfig::new(scale, self.report),
            None => FrontendConfig {
                report: self.report,
                ..FrontendConfig::default()
            },
        }
    }
}
