use crate::data::{
    Error, Transaction, AMOUNT_WIDTH, DESCRIPTION_WIDTH, DISPLAY_DIGITS, REPORT_WIDTH,
};
use rust_decimal::Decimal;
use std::fmt;

/// A budget category and its ledger. You'll note there is no `balance` field: it's
/// always the sum of the ledger amounts, so instead of keeping a copy in sync we just
/// compute it when asked. The only rule left to enforce is that a withdrawal or a
/// transfer can't bring that sum below zero, and it's checked before touching the
/// ledger, never patched up after.
///
/// Single-threaded use is assumed. Sharing a `Category` between threads would need the
/// whole check-then-append sequence of `withdraw`/`transfer` under one lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    ledger: Vec<Transaction>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ledger: Vec::new(),
        }
    }

    /// Entries in insertion order.
    pub fn ledger(&self) -> &[Transaction] {
        &self.ledger
    }

    pub fn balance(&self) -> Decimal {
        self.ledger.iter().map(|tx| tx.amount).sum()
    }

    /// Total spent from this category, i.e. the absolute sum of its negative entries.
    /// Unlike the balance this is never checked on the way in: depositing and spending
    /// `Decimal::MAX` twice is perfectly possible, and that total can't be represented.
    pub fn spent(&self) -> Result<Decimal, Error> {
        self.ledger
            .iter()
            .filter(|tx| tx.amount.is_sign_negative())
            .try_fold(Decimal::ZERO, |spent, tx| {
                spent.checked_add(tx.amount.abs()).ok_or(Error::Overflow)
            })
    }

    /// Whether paying `amount` out of this category keeps its balance non-negative.
    /// Both `withdraw` and `transfer` rely on this and nothing else.
    pub fn check_funds(&self, amount: Decimal) -> bool {
        // same as `balance - amount >= 0`, without the subtraction that could overflow
        self.balance() >= amount
    }

    /// Records `amount` as is, whatever its sign. Returns `false` only when the new
    /// balance wouldn't fit in a `Decimal`; see `try_deposit`.
    pub fn deposit(&mut self, amount: Decimal, description: impl Into<String>) -> bool {
        self.try_deposit(amount, description).is_ok()
    }

    /// Deposits are not validated in any way, except that the resulting balance must be
    /// representable. Every entry goes through such a check (withdrawals can't overflow
    /// since they never go under zero), which is what keeps `balance` from ever panicking:
    /// its partial sums are exactly the balances checked here.
    pub fn try_deposit(
        &mut self,
        amount: Decimal,
        description: impl Into<String>,
    ) -> Result<(), Error> {
        if self.balance().checked_add(amount).is_none() {
            tracing::debug!(
                category = %self.name,
                %amount,
                "deposit refused: {}",
                Error::Overflow
            );
            return Err(Error::Overflow);
        }
        self.append(amount, description.into());
        Ok(())
    }

    /// Records a withdrawal of `|amount|`, returning `false` (and leaving the ledger
    /// alone) when the funds aren't there. See `try_withdraw` for the reason.
    pub fn withdraw(&mut self, amount: Decimal, description: impl Into<String>) -> bool {
        self.try_withdraw(amount, description).is_ok()
    }

    pub fn try_withdraw(
        &mut self,
        amount: Decimal,
        description: impl Into<String>,
    ) -> Result<(), Error> {
        // the sign of `amount` is ignored, so check against what is actually debited
        let amount = amount.abs();
        if !self.check_funds(amount) {
            let err = Error::InsufficientFunds {
                asked: amount,
                available: self.balance(),
            };
            tracing::debug!(category = %self.name, "withdrawal refused: {err}");
            return Err(err);
        }
        self.append(debit(amount), description.into());
        Ok(())
    }

    /// Moves `amount` to `destination`, returning `false` when nothing was moved.
    /// See `try_transfer` for the reasons.
    pub fn transfer(&mut self, amount: Decimal, destination: &mut Category) -> bool {
        self.try_transfer(amount, destination).is_ok()
    }

    /// Withdraws `amount` from `self` as "Transfer to <destination>" and deposits it
    /// into `destination` as "Transfer from <self>". Every check happens before the
    /// first append, so either both ledgers get their entry or neither does.
    pub fn try_transfer(
        &mut self,
        amount: Decimal,
        destination: &mut Category,
    ) -> Result<(), Error> {
        let result = if amount < Decimal::ZERO {
            Err(Error::NegativeAmount)
        } else if !self.check_funds(amount) {
            Err(Error::InsufficientFunds {
                asked: amount,
                available: self.balance(),
            })
        } else if destination.balance().checked_add(amount).is_none() {
            Err(Error::Overflow)
        } else {
            Ok(())
        };
        if let Err(err) = result {
            tracing::debug!(
                from = %self.name,
                to = %destination.name,
                "transfer refused: {err}"
            );
            return Err(err);
        }
        self.append(debit(amount), format!("Transfer to {}", destination.name));
        destination.append(amount, format!("Transfer from {}", self.name));
        Ok(())
    }

    fn append(&mut self, amount: Decimal, description: String) {
        tracing::debug!(category = %self.name, %amount, %description, "ledger entry");
        self.ledger.push(Transaction::new(amount, description));
    }
}

/// Negative counterpart of `amount`, keeping zero unsigned so it prints as `0.00`.
fn debit(amount: Decimal) -> Decimal {
    if amount.is_zero() {
        Decimal::ZERO
    } else {
        -amount
    }
}

fn format_amount(amount: Decimal) -> String {
    let amount = amount.round_dp(DISPLAY_DIGITS);
    if amount.is_zero() {
        // drop a possible negative zero
        return format!("{:.2}", Decimal::ZERO);
    }
    format!("{amount:.2}")
}

/// The category report: a 30 columns wide title with the name centered in asterisks,
/// then one line per ledger entry, then the balance.
impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stars = REPORT_WIDTH.saturating_sub(self.name.chars().count());
        // odd count: the extra one goes on the left
        let right = stars / 2;
        let left = stars - right;
        writeln!(f, "{}{}{}", "*".repeat(left), self.name, "*".repeat(right))?;
        for tx in &self.ledger {
            let description: String = tx.description.chars().take(DESCRIPTION_WIDTH).collect();
            writeln!(
                f,
                "{description:<dw$}{amount:>aw$}",
                amount = format_amount(tx.amount),
                dw = DESCRIPTION_WIDTH,
                aw = AMOUNT_WIDTH,
            )?;
        }
        write!(f, "Total: {}", format_amount(self.balance()))
    }
}
