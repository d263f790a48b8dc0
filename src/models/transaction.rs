use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

/// Session-unique transaction identifier. Allocated by the ledger, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransactionId(pub u64);

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TransactionId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().trim_start_matches('#').parse().map(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: TransactionId,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub description: String,
    /// Trimmed category name as entered. Grouping is by this text.
    pub category: String,
}

impl Transaction {
    /// Grouping key for monthly totals, e.g. `"2024-05"`.
    pub fn month_key(&self) -> String {
        format!("{}-{:02}", self.date.year(), self.date.month())
    }

    pub fn in_month_of(&self, day: NaiveDate) -> bool {
        self.date.year() == day.year() && self.date.month() == day.month()
    }
}
