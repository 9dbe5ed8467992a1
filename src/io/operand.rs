//! Operand parsing and amount rendering
//!
//! Shared by the console and the batch script reader so both frontends accept
//! and print identifiers and amounts the same way.

use crate::types::LedgerError;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Parse a user or account identifier
///
/// Surrounding whitespace is ignored.
pub fn parse_id(text: &str) -> Result<u32, LedgerError> {
    text.trim()
        .parse::<u32>()
        .map_err(|_| LedgerError::invalid_input(text.trim(), "a numeric ID"))
}

/// Parse a decimal amount
///
/// Accepts plain and scientific notation. The sign is kept: negative amounts
/// are passed through to the ledger unchanged.
pub fn parse_amount(text: &str) -> Result<Decimal, LedgerError> {
    let trimmed = text.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| LedgerError::invalid_input(trimmed, "a decimal amount"))
}

/// Render an amount with exactly `scale` decimal places
///
/// Midpoints round away from zero.
pub fn format_amount(amount: Decimal, scale: u32) -> String {
    let rounded = amount.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", scale as usize, rounded)
}
