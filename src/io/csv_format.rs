//! CSV format handling for batch scripts and reports
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvCommand structure for deserializing script rows
//! - Conversion from script rows to ledger commands
//! - Balance and transaction report serialization
//!
//! Script columns: `op,username,password,user,account,to,amount`. Only the
//! columns an operation needs have to be filled in.

use crate::io::operand::{format_amount, parse_amount, parse_id};
use crate::types::{
    Account, AccountId, LedgerCommand, LedgerError, Transaction, TransactionId, TransactionKind,
    UserId,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// CSV record structure for deserialization
///
/// Every operand is optional at this level; which ones are required depends
/// on `op` and is checked in [`convert_csv_command`].
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct CsvCommand {
    pub op: String,
    pub username: Option<String>,
    /// Taken as written; an empty column is an empty password
    #[serde(default)]
    pub password: String,
    pub user: Option<String>,
    pub account: Option<String>,
    pub to: Option<String>,
    pub amount: Option<String>,
}

/// Fetch a column that `op` requires
fn required<'a>(
    value: &'a Option<String>,
    op: &str,
    field: &str,
    line: Option<u64>,
) -> Result<&'a str, LedgerError> {
    match value.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(LedgerError::missing_field(op, field, line)),
    }
}

/// Convert a CsvCommand to a LedgerCommand
///
/// This function:
/// - Matches the operation name case-insensitively
/// - Checks that the columns the operation needs are present
/// - Parses identifiers and amounts
///
/// Passwords are taken verbatim; every other column is trimmed.
///
/// # Arguments
///
/// * `csv_command` - The deserialized script row
/// * `line` - Script line, used in error messages
pub fn convert_csv_command(
    csv_command: CsvCommand,
    line: Option<u64>,
) -> Result<LedgerCommand, LedgerError> {
    let op = csv_command.op.trim().to_lowercase();

    let command = match op.as_str() {
        "register" | "login" => {
            let username = required(&csv_command.username, &op, "username", line)?.to_string();
            let password = csv_command.password.clone();
            if op == "register" {
                LedgerCommand::Register { username, password }
            } else {
                LedgerCommand::Login { username, password }
            }
        }
        "open" => LedgerCommand::OpenAccount {
            owner: parse_id(required(&csv_command.user, &op, "user", line)?)?,
        },
        "deposit" => LedgerCommand::Deposit {
            account: parse_id(required(&csv_command.account, &op, "account", line)?)?,
            amount: parse_amount(required(&csv_command.amount, &op, "amount", line)?)?,
        },
        "withdraw" => LedgerCommand::Withdraw {
            account: parse_id(required(&csv_command.account, &op, "account", line)?)?,
            amount: parse_amount(required(&csv_command.amount, &op, "amount", line)?)?,
        },
        "transfer" => LedgerCommand::Transfer {
            from: parse_id(required(&csv_command.account, &op, "account", line)?)?,
            to: parse_id(required(&csv_command.to, &op, "to", line)?)?,
            amount: parse_amount(required(&csv_command.amount, &op, "amount", line)?)?,
        },
        _ => return Err(LedgerError::invalid_command(csv_command.op.trim(), line)),
    };

    Ok(command)
}

#[derive(Serialize)]
struct BalanceRow {
    account: AccountId,
    user: UserId,
    balance: String,
}

#[derive(Serialize)]
struct TransactionRow {
    tx: TransactionId,
    account: AccountId,
    kind: TransactionKind,
    amount: String,
    timestamp: DateTime<Utc>,
}

/// Write account balances to CSV format
///
/// Writes accounts with columns: account, user, balance.
/// Accounts are sorted by account ID for deterministic output.
///
/// # Arguments
///
/// * `accounts` - Slice of accounts to write
/// * `scale` - Decimal places for balances
/// * `output` - Writer for the CSV text
pub fn write_balances_csv(
    accounts: &[Account],
    scale: u32,
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    // Header written explicitly so an empty ledger still gets one
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(output);

    writer.write_record(["account", "user", "balance"])?;

    let mut sorted_accounts = accounts.to_vec();
    sorted_accounts.sort_by_key(|account| account.id);

    for account in sorted_accounts {
        writer.serialize(BalanceRow {
            account: account.id,
            user: account.owner,
            balance: format_amount(account.balance, scale),
        })?;
    }

    writer.flush()?;
    Ok(())
}

/// Write the transaction log to CSV format
///
/// Writes records with columns: tx, account, kind, amount, timestamp.
/// Records keep the order they are given in; timestamps are RFC 3339.
pub fn write_transactions_csv(
    transactions: &[Transaction],
    scale: u32,
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(output);

    writer.write_record(["tx", "account", "kind", "amount", "timestamp"])?;

    for tx in transactions {
        writer.serialize(TransactionRow {
            tx: tx.id,
            account: tx.account,
            kind: tx.kind,
            amount: format_amount(tx.amount, scale),
            timestamp: tx.timestamp,
        })?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn row(op: &str) -> CsvCommand {
        CsvCommand {
            op: op.to_string(),
            ..CsvCommand::default()
        }
    }

    fn some(text: &str) -> Option<String> {
        Some(text.to_string())
    }

    #[rstest]
    #[case("register", "REGISTER")]
    #[case("login", " Login ")]
    fn test_convert_credentials(#[case] expected_op: &str, #[case] op: &str) {
        let command = convert_csv_command(
            CsvCommand {
                username: some(" alice "),
                password: " pw ".to_string(),
                ..row(op)
            },
            Some(2),
        )
        .unwrap();

        assert_eq!(command.op_name(), expected_op);
        match command {
            LedgerCommand::Register { username, password }
            | LedgerCommand::Login { username, password } => {
                assert_eq!(username, "alice");
                assert_eq!(password, " pw ");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_convert_open() {
        let command = convert_csv_command(
            CsvCommand {
                user: some("3"),
                ..row("open")
            },
            None,
        )
        .unwrap();
        assert_eq!(command, LedgerCommand::OpenAccount { owner: 3 });
    }

    #[rstest]
    #[case("deposit", LedgerCommand::Deposit { account: 1, amount: Decimal::new(1050, 2) })]
    #[case("withdraw", LedgerCommand::Withdraw { account: 1, amount: Decimal::new(1050, 2) })]
    fn test_convert_single_account_ops(#[case] op: &str, #[case] expected: LedgerCommand) {
        let command = convert_csv_command(
            CsvCommand {
                account: some("1"),
                amount: some("10.50"),
                ..row(op)
            },
            None,
        )
        .unwrap();
        assert_eq!(command, expected);
    }

    #[test]
    fn test_convert_transfer() {
        let command = convert_csv_command(
            CsvCommand {
                account: some("1"),
                to: some("2"),
                amount: some("5"),
                ..row("transfer")
            },
            None,
        )
        .unwrap();
        assert_eq!(
            command,
            LedgerCommand::Transfer {
                from: 1,
                to: 2,
                amount: Decimal::new(5, 0)
            }
        );
    }

    #[rstest]
    #[case::unknown_op(row("refund"), "Unknown command 'refund' at line 7")]
    #[case::missing_username(row("register"), "register command at line 7 requires 'username'")]
    #[case::missing_user(row("open"), "open command at line 7 requires 'user'")]
    #[case::missing_amount(
        CsvCommand { account: some("1"), ..row("deposit") },
        "deposit command at line 7 requires 'amount'"
    )]
    #[case::blank_amount(
        CsvCommand { account: some("1"), amount: some("  "), ..row("withdraw") },
        "withdraw command at line 7 requires 'amount'"
    )]
    #[case::missing_destination(
        CsvCommand { account: some("1"), amount: some("1"), ..row("transfer") },
        "transfer command at line 7 requires 'to'"
    )]
    #[case::bad_amount(
        CsvCommand { account: some("1"), amount: some("lots"), ..row("deposit") },
        "Invalid input 'lots': expected a decimal amount"
    )]
    #[case::bad_account(
        CsvCommand { account: some("x"), amount: some("1"), ..row("deposit") },
        "Invalid input 'x': expected a numeric ID"
    )]
    fn test_convert_errors(#[case] csv_command: CsvCommand, #[case] expected: &str) {
        let error = convert_csv_command(csv_command, Some(7)).unwrap_err();
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::empty(vec![], 2, "account,user,balance\n")]
    #[case::sorted_by_account_id(
        vec![
            Account { id: 2, owner: 1, balance: Decimal::new(5, 0) },
            Account { id: 1, owner: 1, balance: Decimal::new(12345, 3) },
        ],
        2,
        "account,user,balance\n1,1,12.35\n2,1,5.00\n"
    )]
    #[case::four_decimal_scale(
        vec![Account { id: 1, owner: 9, balance: Decimal::new(-75, 1) }],
        4,
        "account,user,balance\n1,9,-7.5000\n"
    )]
    fn test_write_balances_csv(
        #[case] accounts: Vec<Account>,
        #[case] scale: u32,
        #[case] expected_output: &str,
    ) {
        let mut output = Vec::new();
        write_balances_csv(&accounts, scale, &mut output).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), expected_output);
    }

    #[test]
    fn test_write_transactions_csv() {
        let transactions = vec![
            Transaction::new(1, 1, Decimal::new(100, 0), TransactionKind::Deposit),
            Transaction::new(2, 1, Decimal::new(-40, 0), TransactionKind::Transfer),
            Transaction::new(3, 2, Decimal::new(40, 0), TransactionKind::Transfer),
        ];

        let mut output = Vec::new();
        write_transactions_csv(&transactions, 2, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "tx,account,kind,amount,timestamp");
        assert!(lines[1].starts_with("1,1,DEPOSIT,100.00,"));
        assert!(lines[2].starts_with("2,1,TRANSFER,-40.00,"));
        assert!(lines[3].starts_with("3,2,TRANSFER,40.00,"));

        let timestamp = lines[1].rsplit(',').next().unwrap();
        assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());
    }

    #[test]
    fn test_write_transactions_csv_empty_has_header() {
        let mut output = Vec::new();
        write_transactions_csv(&[], 2, &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "tx,account,kind,amount,timestamp\n"
        );
    }
}
