use rust_decimal::Decimal;
use thiserror::Error;

/// Width of the textual report of a `Category`, title line included.
pub const REPORT_WIDTH: usize = 30;
/// Ledger descriptions are cut to this many characters in the report.
pub const DESCRIPTION_WIDTH: usize = 23;
/// Ledger amounts are right-aligned in a field this wide.
pub const AMOUNT_WIDTH: usize = 7;
/// Number of decimal places shown for amounts.
pub const DISPLAY_DIGITS: u32 = 2;

pub const CHART_TITLE: &str = "Percentage spent by category";
pub const BAR_SYMBOL: char = 'o';

/// A single ledger entry. The sign of `amount` gives the direction: positive for a
/// deposit, negative for a withdrawal. Entries are never modified once appended,
/// and transfers leave no link between the two entries besides their description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub amount: Decimal,
    pub description: String,
}

impl Transaction {
    pub fn new(amount: Decimal, description: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
        }
    }
}

/// Why a ledger operation or a chart rendering did not happen. All of them are checked
/// before anything is appended, so getting one of these means no ledger was touched.
/// Note that a transfer has no "unknown destination" case: the destination is a
/// `&mut Category`, so it is always a real category, and never the source itself.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Insufficient funds for operation (asked {asked} while {available} available)")]
    InsufficientFunds { asked: Decimal, available: Decimal },
    #[error("Transfer amount can't be negative")]
    NegativeAmount,
    #[error("Amount out of the representable range")]
    Overflow,
    #[error("No spending data to chart")]
    NoSpendingData,
}
