//! Frontend strategy module
//!
//! This module defines the Strategy pattern for the two ways of driving a
//! ledger: the interactive console menu and the batch script replay. Each
//! strategy owns a fresh ledger for the length of one run, so the frontend is
//! selected at runtime without the ledger knowing about it.

use crate::cli::{FrontendType, ReportKind};
use crate::types::LedgerError;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use tracing::warn;

pub mod batch;
pub mod interactive;

pub use batch::BatchStrategy;
pub use interactive::InteractiveStrategy;

/// Largest accepted number of decimal places for rendered amounts
pub const MAX_SCALE: u32 = 10;

/// Settings shared by both frontends
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrontendConfig {
    /// Decimal places used when printing amounts
    pub scale: u32,
    /// Report written at the end of a batch replay
    pub report: ReportKind,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            scale: 2,
            report: ReportKind::default(),
        }
    }
}

impl FrontendConfig {
    /// Create a FrontendConfig with custom values
    ///
    /// A scale above [`MAX_SCALE`] is replaced by the default with a warning.
    pub fn new(scale: u32, report: ReportKind) -> Self {
        let default = Self::default();

        let scale = if scale > MAX_SCALE {
            warn!(
                scale,
                default = default.scale,
                "invalid scale, using default"
            );
            default.scale
        } else {
            scale
        };

        Self { scale, report }
    }
}

/// Frontend strategy trait
///
/// A strategy reads its input to the end, drives a ledger with it, and
/// writes everything the user should see to `output`.
pub trait FrontendStrategy: Send + Sync {
    /// Run the frontend over `input`
    ///
    /// # Errors
    ///
    /// Returns an error only for fatal conditions: input that cannot be read
    /// or output that cannot be written. Rejected operations are reported and
    /// the run continues.
    fn run(&self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<(), LedgerError>;
}

/// Create a frontend strategy based on the specified frontend type
pub fn create_strategy(
    frontend: FrontendType,
    config: FrontendConfig,
) -> Box<dyn FrontendStrategy> {
    match frontend {
        FrontendType::Interactive => Box::new(InteractiveStrategy::new(config)),
        FrontendType::Batch => Box::new(BatchStrategy::new(config)),
    }
}

/// Open the frontend input: the given file, or stdin when there is none
///
/// # Errors
///
/// Returns `IoError` if the file cannot be opened.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>, LedgerError> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|e| LedgerError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), e),
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}
