//! Interactive console strategy
//!
//! Runs the numbered menu loop against a ledger created for this run. When
//! the session ends the ledger is dropped along with everything in it.

use crate::console::ConsoleSession;
use crate::core::Ledger;
use crate::strategy::{FrontendConfig, FrontendStrategy};
use crate::types::LedgerError;
use std::io::{BufRead, Write};

/// Interactive console strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct InteractiveStrategy {
    config: FrontendConfig,
}

impl InteractiveStrategy {
    pub fn new(config: FrontendConfig) -> Self {
        Self { config }
    }
}

impl FrontendStrategy for InteractiveStrategy {
    fn run(&self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<(), LedgerError> {
        let mut session = ConsoleSession::new(Ledger::new(), input, output, self.config.scale);
        session.run()
    }
}
