#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn make_txn(amount: Decimal, on: NaiveDate) -> Transaction {
    Transaction {
        id: TransactionId(1),
        amount,
        date: on,
        description: "Test".into(),
        category: "Food & Dining".into(),
    }
}

// ── Transaction ───────────────────────────────────────────────

#[test]
fn test_month_key_zero_pads() {
    assert_eq!(make_txn(dec!(1), date(2024, 5, 1)).month_key(), "2024-05");
    assert_eq!(make_txn(dec!(1), date(2024, 12, 31)).month_key(), "2024-12");
}

#[test]
fn test_in_month_of_requires_same_year() {
    let txn = make_txn(dec!(1), date(2024, 5, 15));
    assert!(txn.in_month_of(date(2024, 5, 1)));
    assert!(txn.in_month_of(date(2024, 5, 31)));
    assert!(!txn.in_month_of(date(2024, 6, 1)));
    assert!(!txn.in_month_of(date(2023, 5, 15)));
}

#[test]
fn test_transaction_id_parse() {
    assert_eq!("7".parse::<TransactionId>().unwrap(), TransactionId(7));
    assert_eq!(" #12 ".parse::<TransactionId>().unwrap(), TransactionId(12));
    assert!("abc".parse::<TransactionId>().is_err());
    assert_eq!(format!("{}", TransactionId(3)), "3");
}

// ── Category ──────────────────────────────────────────────────

#[test]
fn test_category_all_order() {
    let names: Vec<&str> = Category::all().iter().map(|c| c.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Food & Dining",
            "Transportation",
            "Housing",
            "Entertainment",
            "Personal Care",
            "Education",
            "Travel",
            "Shopping",
            "Debt & Loans",
            "Savings & Investments",
            "Miscellaneous",
        ]
    );
}

#[test]
fn test_category_parse() {
    assert_eq!(Category::parse("food & dining"), Some(Category::FoodAndDining));
    assert_eq!(Category::parse("Personal Care "), Some(Category::PersonalCare));
    assert_eq!(Category::parse("TRAVEL"), Some(Category::Travel));
    assert_eq!(Category::parse("Groceries"), None);
    assert_eq!(Category::parse(""), None);
}

#[test]
fn test_category_roundtrip() {
    for c in Category::all() {
        assert_eq!(Category::parse(c.as_str()), Some(*c), "Roundtrip failed for {c}");
    }
}

#[test]
fn test_category_split_prefix() {
    assert_eq!(
        Category::split_prefix("Food & Dining lunch with Sam"),
        Some((Category::FoodAndDining, "lunch with Sam"))
    );
    assert_eq!(
        Category::split_prefix("savings & investments 200"),
        Some((Category::SavingsAndInvestments, "200"))
    );
    assert_eq!(Category::split_prefix("Travel"), Some((Category::Travel, "")));
    assert_eq!(Category::split_prefix("Travelling abroad"), None);
    assert_eq!(Category::split_prefix("Groceries 20"), None);
}

#[test]
fn test_category_cycle_wraps() {
    assert_eq!(Category::Miscellaneous.next(), Category::FoodAndDining);
    assert_eq!(Category::FoodAndDining.prev(), Category::Miscellaneous);
    assert_eq!(Category::Housing.next(), Category::Entertainment);
}

// ── Budgets ───────────────────────────────────────────────────

#[test]
fn test_budgets_set_replaces() {
    let mut budgets = Budgets::new();
    budgets.set(Category::Housing, dec!(1000));
    budgets.set(Category::Housing, dec!(800));
    assert_eq!(budgets.get(Category::Housing), Some(dec!(800)));
    assert_eq!(budgets.len(), 1);
}

#[test]
fn test_budgets_missing_is_zero() {
    let mut budgets = Budgets::new();
    assert_eq!(budgets.limit_or_zero(Category::Travel), Decimal::ZERO);
    budgets.set(Category::Travel, dec!(300));
    assert_eq!(budgets.clear(Category::Travel), Some(dec!(300)));
    assert_eq!(budgets.get(Category::Travel), None);
    assert!(budgets.is_empty());
}
