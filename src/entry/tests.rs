#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::models::TransactionId;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
}

fn draft(amount: &str, date: &str, description: &str, category: &str) -> TransactionDraft {
    TransactionDraft {
        amount: amount.into(),
        date: date.into(),
        description: description.into(),
        category: category.into(),
    }
}

// ── Draft defaults ────────────────────────────────────────────

#[test]
fn test_new_draft_defaults() {
    let d = TransactionDraft::new(today());
    assert!(d.amount.is_empty());
    assert_eq!(d.date, "2024-05-20");
    assert!(d.description.is_empty());
    assert_eq!(d.category, "Food & Dining");
}

#[test]
fn test_draft_from_transaction() {
    let txn = Transaction {
        id: TransactionId(4),
        amount: dec!(12.50),
        date: today(),
        description: "Lunch".into(),
        category: "Food & Dining".into(),
    };
    let d = TransactionDraft::from_transaction(&txn);
    assert_eq!(d.amount, "12.5");
    assert_eq!(d.date, "2024-05-20");
    assert_eq!(d.description, "Lunch");
    assert_eq!(d.category, "Food & Dining");
}

// ── Validation ────────────────────────────────────────────────

#[test]
fn test_valid_draft_is_trimmed() {
    let valid = draft("42.10", "2024-05-01", "  Groceries  ", " Personal Care ")
        .validate()
        .unwrap();
    assert_eq!(valid.amount, dec!(42.10));
    assert_eq!(valid.date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    assert_eq!(valid.description, "Groceries");
    assert_eq!(valid.category, "Personal Care");
}

#[test]
fn test_amount_must_be_positive() {
    for bad in ["0", "-5", "", "abc", "  ", "0.00"] {
        let errors = draft(bad, "2024-05-01", "x", "Travel").validate().unwrap_err();
        assert_eq!(errors.amount, Some(FieldError::InvalidAmount), "amount {bad:?}");
        assert!(errors.date.is_none());
        assert!(errors.description.is_none());
        assert!(errors.category.is_none());
    }
}

#[test]
fn test_amount_accepts_symbol_and_scientific() {
    assert_eq!(parse_amount("$5"), Some(dec!(5)));
    assert_eq!(parse_amount("1e2"), Some(dec!(100)));
    assert_eq!(parse_amount(" 0.01 "), Some(dec!(0.01)));
}

#[test]
fn test_amount_accepts_any_currency_symbol() {
    assert_eq!(parse_amount("€12.5"), Some(dec!(12.5)));
    assert_eq!(parse_amount("£ 3"), Some(dec!(3)));
    assert_eq!(parse_amount("$-5"), None);
    assert_eq!(parse_amount("abc5"), None);
}

#[test]
fn test_amount_limit() {
    assert_eq!(parse_amount("1000000000000"), Some(MAX_AMOUNT));
    assert_eq!(parse_amount("1e12"), Some(MAX_AMOUNT));
    assert_eq!(parse_amount("1000000000000.01"), None);
    assert_eq!(parse_amount(&Decimal::MAX.to_string()), None);

    let errors = draft("79228162514264337593543950335", "2024-05-01", "x", "Travel")
        .validate()
        .unwrap_err();
    assert_eq!(errors.amount, Some(FieldError::InvalidAmount));
}

#[test]
fn test_missing_date() {
    let errors = draft("5", "", "x", "Travel").validate().unwrap_err();
    assert_eq!(errors.date, Some(FieldError::MissingDate));

    let errors = draft("5", "2024-02-30", "x", "Travel").validate().unwrap_err();
    assert_eq!(errors.date, Some(FieldError::MissingDate));
}

#[test]
fn test_blank_description_and_category() {
    let errors = draft("5", "2024-05-01", "   ", "\t").validate().unwrap_err();
    assert_eq!(errors.description, Some(FieldError::EmptyDescription));
    assert_eq!(errors.category, Some(FieldError::MissingCategory));
    assert!(errors.amount.is_none());
}

#[test]
fn test_every_field_reported_independently() {
    let errors = draft("", "", "", "").validate().unwrap_err();
    let all: Vec<FieldError> = errors.iter().collect();
    assert_eq!(
        all,
        vec![
            FieldError::InvalidAmount,
            FieldError::MissingDate,
            FieldError::EmptyDescription,
            FieldError::MissingCategory,
        ]
    );
    assert_eq!(errors.get(Field::Date), Some(FieldError::MissingDate));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        FieldError::InvalidAmount.to_string(),
        "Please enter a valid positive amount."
    );
    assert_eq!(FieldError::MissingDate.to_string(), "Please select a date.");
    assert_eq!(
        FieldError::EmptyDescription.to_string(),
        "Please enter a description."
    );
    assert_eq!(
        FieldError::MissingCategory.to_string(),
        "Please select a category."
    );

    let errors = draft("5", "2024-05-01", "", "").validate().unwrap_err();
    assert_eq!(
        errors.to_string(),
        "Please enter a description. Please select a category."
    );
}

// ── Category cycling ──────────────────────────────────────────

#[test]
fn test_cycle_category() {
    let mut d = TransactionDraft::new(today());
    d.cycle_category(true);
    assert_eq!(d.category, "Transportation");
    d.cycle_category(false);
    d.cycle_category(false);
    assert_eq!(d.category, "Miscellaneous");

    d.category = "something else".into();
    d.cycle_category(true);
    assert_eq!(d.category, "Food & Dining");
}

// ── Field navigation ──────────────────────────────────────────

#[test]
fn test_field_cycle() {
    assert_eq!(Field::Amount.next(), Field::Date);
    assert_eq!(Field::Category.next(), Field::Amount);
    assert_eq!(Field::Amount.prev(), Field::Category);
    let mut d = TransactionDraft::new(today());
    d.field_mut(Field::Description).push_str("Bus");
    assert_eq!(d.field(Field::Description), "Bus");
}

// ── Budget amounts ────────────────────────────────────────────

#[test]
fn test_parse_budget_amount() {
    assert_eq!(parse_budget_amount("120"), Some(dec!(120)));
    assert_eq!(parse_budget_amount(" 0 "), Some(Decimal::ZERO));
    assert_eq!(parse_budget_amount("$45.5"), Some(dec!(45.5)));
    assert_eq!(parse_budget_amount("abc"), None);
    assert_eq!(parse_budget_amount(""), None);
    assert_eq!(parse_budget_amount("-10"), None);
}

#[test]
fn test_budget_amount_parses_like_transaction_amount() {
    for input in ["1e3", "€1000", "$1,000", "1000.00", "0.0000000000000000000000000001"] {
        assert_eq!(parse_budget_amount(input), parse_amount(input), "{input}");
    }
    assert_eq!(parse_budget_amount("1e3"), Some(dec!(1000)));
    assert_eq!(parse_budget_amount("2e12"), None);
    assert_eq!(parse_budget_amount(&Decimal::MAX.to_string()), None);
}
