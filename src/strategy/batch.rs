//! Batch script strategy
//!
//! Replays a CSV script of ledger commands against a ledger created for this
//! run, then writes one report of the final state.
//!
//! # Design
//!
//! The BatchStrategy only orchestrates:
//! - CSV parsing is done by `ScriptReader` (iterator interface)
//! - Command routing is done by `LedgerService::apply`
//! - Report output is done by `csv_format`
//!
//! Rows are streamed one at a time, so memory grows with the ledger's
//! contents and not with the script length.
//!
//! # Error Handling
//!
//! A row that fails to parse, or whose command the ledger rejects, is logged
//! at `warn` and skipped. Reading or writing failures end the run.

use crate::cli::ReportKind;
use crate::core::{Ledger, LedgerService};
use crate::io::csv_format::{write_balances_csv, write_transactions_csv};
use crate::io::script_reader::ScriptReader;
use crate::strategy::{FrontendConfig, FrontendStrategy};
use crate::types::LedgerError;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Batch replay strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchStrategy {
    config: FrontendConfig,
}

impl BatchStrategy {
    pub fn new(config: FrontendConfig) -> Self {
        Self { config }
    }

    /// Replay every command in `input` against `ledger`
    ///
    /// Returns the number of applied and skipped rows.
    ///
    /// # Errors
    ///
    /// Returns the first `IoError` met while reading, or a `ParseError` if the
    /// header row is malformed.
    pub fn replay<S: LedgerService>(
        &self,
        ledger: &mut S,
        input: &mut dyn BufRead,
    ) -> Result<(usize, usize), LedgerError> {
        let reader = ScriptReader::new(input)?;
        let mut applied = 0;
        let mut skipped = 0;

        for result in reader {
            let command = match result {
                Ok(command) => command,
                Err(e @ LedgerError::IoError { .. }) => return Err(e),
                Err(e) => {
                    warn!(error = %e, "skipping malformed script row");
                    skipped += 1;
                    continue;
                }
            };

            let op = command.op_name();
            match ledger.apply(command) {
                Ok(()) => {
                    debug!(op, "command applied");
                    applied += 1;
                }
                Err(e) => {
                    warn!(op, error = %e, "command rejected");
                    skipped += 1;
                }
            }
        }

        Ok((applied, skipped))
    }
}

impl FrontendStrategy for BatchStrategy {
    fn run(&self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<(), LedgerError> {
        let mut ledger = Ledger::new();

        let (applied, skipped) = self.replay(&mut ledger, input)?;
        info!(applied, skipped, "batch replay finished");

        match self.config.report {
            ReportKind::Balances => {
                write_balances_csv(&ledger.accounts(), self.config.scale, output)
            }
            ReportKind::Transactions => {
                write_transactions_csv(&ledger.transactions(), self.config.scale, output)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SharedLedger;
    use rust_decimal::Decimal;
    use std::io::{self, BufReader, Read};
    use tempfile::NamedTempFile;

    const HEADER: &str = "op,username,password,user,account,to,amount\n";

    /// Helper function to create a temporary CSV script for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn run_batch(script: &str, report: ReportKind) -> String {
        let strategy = BatchStrategy::new(FrontendConfig::new(2, report));
        let mut output = Vec::new();
        strategy.run(&mut script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_balances_report() {
        let script = format!(
            "{HEADER}\
             register,alice,pw,,,,\n\
             open,,,1,,,\n\
             open,,,1,,,\n\
             deposit,,,,1,,100\n\
             transfer,,,,1,2,50\n\
             withdraw,,,,2,,20.5\n"
        );

        let output = run_batch(&script, ReportKind::Balances);
        assert_eq!(output, "account,user,balance\n1,1,50.00\n2,1,29.50\n");
    }

    #[test]
    fn test_transactions_report() {
        let script = format!(
            "{HEADER}\
             open,,,7,,,\n\
             open,,,7,,,\n\
             deposit,,,,1,,10\n\
             transfer,,,,1,2,4\n"
        );

        let output = run_batch(&script, ReportKind::Transactions);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "tx,account,kind,amount,timestamp");
        assert!(lines[1].starts_with("1,1,DEPOSIT,10.00,"));
        assert!(lines[2].starts_with("2,1,TRANSFER,-4.00,"));
        assert!(lines[3].starts_with("3,2,TRANSFER,4.00,"));
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_rejected_and_malformed_rows_are_skipped() {
        let script = format!(
            "{HEADER}\
             open,,,1,,,\n\
             withdraw,,,,1,,5\n\
             deposit,,,,1,,abc\n\
             deposit,,,,9,,5\n\
             refund,,,,1,,5\n\
             deposit,,,,,,5\n\
             deposit,,,,1,,3\n"
        );

        let strategy = BatchStrategy::default();
        let mut ledger = Ledger::new();
        let (applied, skipped) = strategy.replay(&mut ledger, &mut script.as_bytes()).unwrap();

        assert_eq!(applied, 2);
        assert_eq!(skipped, 5);
        assert_eq!(ledger.check_balance(1).unwrap(), Decimal::new(3, 0));
        assert_eq!(ledger.transactions().len(), 1);
    }

    #[test]
    fn test_login_rows_do_not_change_state() {
        let script = format!(
            "{HEADER}\
             register,bob,pw,,,,\n\
             login,bob,pw,,,,\n\
             login,bob,nope,,,,\n\
             register,bob,again,,,,\n"
        );

        let mut ledger = Ledger::new();
        let (applied, skipped) = BatchStrategy::default()
            .replay(&mut ledger, &mut script.as_bytes())
            .unwrap();

        assert_eq!((applied, skipped), (2, 2));
        assert_eq!(ledger.user_count(), 1);
        assert!(ledger.login_user("bob", "pw").is_ok());
    }

    #[test]
    fn test_replayed_passwords_match_exactly() {
        let script = format!(
            "{HEADER}\
             register,alice, pw ,,,,\n\
             register,bob,,,,,\n"
        );

        let mut ledger = Ledger::new();
        let (applied, skipped) = BatchStrategy::default()
            .replay(&mut ledger, &mut script.as_bytes())
            .unwrap();

        assert_eq!((applied, skipped), (2, 0));
        assert!(ledger.login_user("alice", " pw ").is_ok());
        assert_eq!(
            ledger.login_user("alice", "pw"),
            Err(LedgerError::InvalidCredentials)
        );
        assert!(ledger.login_user("bob", "").is_ok());
    }

    #[test]
    fn test_replay_into_shared_ledger() {
        let script = format!("{HEADER}open,,,1,,,\ndeposit,,,,1,,42\n");
        let mut shared = SharedLedger::new();

        BatchStrategy::default()
            .replay(&mut shared, &mut script.as_bytes())
            .unwrap();

        assert_eq!(shared.check_balance(1).unwrap(), Decimal::new(42, 0));
    }

    #[test]
    fn test_empty_script_writes_header_only() {
        assert_eq!(run_batch(HEADER, ReportKind::Balances), "account,user,balance\n");
        assert_eq!(run_batch("", ReportKind::Transactions), "tx,account,kind,amount,timestamp\n");
    }

    #[test]
    fn test_reads_from_file() {
        let file = create_temp_csv(&format!("{HEADER}open,,,3,,,\ndeposit,,,,1,,1.005\n"));
        let mut input = BufReader::new(std::fs::File::open(file.path()).unwrap());
        let mut output = Vec::new();

        BatchStrategy::default().run(&mut input, &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "account,user,balance\n1,3,1.01\n");
    }

    /// Reader that yields some bytes and then fails
    struct FailingReader {
        data: &'static [u8],
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.data.is_empty() {
                return Err(io::Error::other("disk on fire"));
            }
            let n = self.data.len().min(buf.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    #[test]
    fn test_read_failure_is_fatal() {
        let mut input = BufReader::new(FailingReader {
            data: b"op,username,password,user,account,to,amount\nopen,,,1,,,\n",
        });
        let mut output = Vec::new();

        let result = BatchStrategy::default().run(&mut input, &mut output);

        assert!(matches!(result, Err(LedgerError::IoError { .. })));
        assert!(output.is_empty());
    }

    #[test]
    fn test_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BatchStrategy>();
    }
}
