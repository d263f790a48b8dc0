use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::{Category, Transaction};

/// One per form field. Each is reported on its own field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Please enter a valid positive amount.")]
    InvalidAmount,
    #[error("Please select a date.")]
    MissingDate,
    #[error("Please enter a description.")]
    EmptyDescription,
    #[error("Please select a category.")]
    MissingCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Amount,
    Date,
    Description,
    Category,
}

impl Field {
    pub fn all() -> &'static [Field] {
        &[Self::Amount, Self::Date, Self::Description, Self::Category]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Amount => "Amount",
            Self::Date => "Date",
            Self::Description => "Description",
            Self::Category => "Category",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Amount => Self::Date,
            Self::Date => Self::Description,
            Self::Description => Self::Category,
            Self::Category => Self::Amount,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Amount => Self::Category,
            Self::Date => Self::Amount,
            Self::Description => Self::Date,
            Self::Category => Self::Description,
        }
    }
}

/// Validation outcome for a draft that failed. Holds at most one error per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub amount: Option<FieldError>,
    pub date: Option<FieldError>,
    pub description: Option<FieldError>,
    pub category: Option<FieldError>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.date.is_none()
            && self.description.is_none()
            && self.category.is_none()
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Amount => self.amount,
            Field::Date => self.date,
            Field::Description => self.description,
            Field::Category => self.category,
        }
    }

    /// Errors in field order.
    pub fn iter(&self) -> impl Iterator<Item = FieldError> + '_ {
        Field::all().iter().filter_map(|f| self.get(*f))
    }
}

impl std::fmt::Display for FormErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msgs: Vec<String> = self.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", msgs.join(" "))
    }
}

/// A transaction that passed validation: trimmed, parsed, ready for the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidTransaction {
    pub amount: Decimal,
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
}

/// Raw form input, as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    pub amount: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub description: String,
    pub category: String,
}

impl TransactionDraft {
    /// Blank form: date defaults to `today`, category to the first in the list.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            amount: String::new(),
            date: today.format(DATE_FORMAT).to_string(),
            description: String::new(),
            category: Category::all()[0].as_str().to_string(),
        }
    }

    /// Pre-filled form for editing an existing transaction.
    pub fn from_transaction(txn: &Transaction) -> Self {
        Self {
            amount: txn.amount.normalize().to_string(),
            date: txn.date.format(DATE_FORMAT).to_string(),
            description: txn.description.clone(),
            category: txn.category.clone(),
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Amount => &mut self.amount,
            Field::Date => &mut self.date,
            Field::Description => &mut self.description,
            Field::Category => &mut self.category,
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Amount => &self.amount,
            Field::Date => &self.date,
            Field::Description => &self.description,
            Field::Category => &self.category,
        }
    }

    /// Step the category through the fixed list. Free text that is not in the
    /// list restarts from the first (or last) entry.
    pub fn cycle_category(&mut self, forward: bool) {
        let next = match Category::parse(&self.category) {
            Some(c) if forward => c.next(),
            Some(c) => c.prev(),
            None if forward => Category::all()[0],
            None => Category::all()[Category::all().len() - 1],
        };
        self.category = next.as_str().to_string();
    }

    /// Checks every field independently; all failures are reported together.
    pub fn validate(&self) -> Result<ValidTransaction, FormErrors> {
        let mut errors = FormErrors::default();

        let amount = parse_amount(&self.amount);
        if amount.is_none() {
            errors.amount = Some(FieldError::InvalidAmount);
        }

        let date = parse_date(&self.date);
        if date.is_none() {
            errors.date = Some(FieldError::MissingDate);
        }

        let description = self.description.trim();
        if description.is_empty() {
            errors.description = Some(FieldError::EmptyDescription);
        }

        let category = self.category.trim();
        if category.is_empty() {
            errors.category = Some(FieldError::MissingCategory);
        }

        match (amount, date) {
            (Some(amount), Some(date)) if errors.is_empty() => Ok(ValidTransaction {
                amount,
                date,
                description: description.to_string(),
                category: category.to_string(),
            }),
            _ => Err(errors),
        }
    }
}

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Largest amount or budget accepted from input: one trillion. Totals over
/// many such entries still fit in a `Decimal`.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Parse a money value as typed by the user. A leading currency symbol of any
/// kind is dropped, plain and scientific notation are both accepted, and
/// anything above [`MAX_AMOUNT`] is rejected.
fn parse_money(s: &str) -> Option<Decimal> {
    let s = s
        .trim()
        .trim_start_matches(|c: char| !c.is_alphanumeric() && !matches!(c, '-' | '+' | '.'))
        .trim_start();
    let value = Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()?;
    (value <= MAX_AMOUNT).then_some(value)
}

/// A transaction amount: numeric and strictly positive.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    parse_money(s).filter(|v| *v > Decimal::ZERO)
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// A budget limit: numeric and not negative. `None` means the input should
/// clear the category's budget.
pub fn parse_budget_amount(s: &str) -> Option<Decimal> {
    parse_money(s).filter(|v| *v >= Decimal::ZERO)
}

#[cfg(test)]
mod tests;
