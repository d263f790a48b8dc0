#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::app::{App, InputMode, PendingAction, Screen};
use super::commands::{handle_command, parse_draft_args};
use crate::config::Config;
use crate::entry::{Field, FieldError};
use crate::models::{Category, TransactionId};

fn may_25() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 25).unwrap()
}

fn test_app() -> App {
    App::with_clock(&Config::default(), may_25)
}

fn batch_app() -> App {
    let mut app = test_app();
    app.interactive = false;
    app
}

fn run(app: &mut App, input: &str) {
    handle_command(input, app).unwrap();
}

// ── Parsing ───────────────────────────────────────────────────

#[test]
fn test_parse_draft_args_full() {
    let draft = parse_draft_args("2024-05-01 12.50 Food & Dining Lunch with Sam");
    assert_eq!(draft.date, "2024-05-01");
    assert_eq!(draft.amount, "12.50");
    assert_eq!(draft.category, "Food & Dining");
    assert_eq!(draft.description, "Lunch with Sam");
}

#[test]
fn test_parse_draft_args_case_insensitive_category() {
    let draft = parse_draft_args("2024-05-01 40 debt & loans card payment");
    assert_eq!(draft.category, "Debt & Loans");
    assert_eq!(draft.description, "card payment");
}

#[test]
fn test_parse_draft_args_unknown_category() {
    let draft = parse_draft_args("2024-05-01 9 Groceries milk");
    assert_eq!(draft.category, "");
    assert_eq!(draft.description, "Groceries milk");
}

#[test]
fn test_parse_draft_args_missing_fields() {
    let draft = parse_draft_args("2024-05-01");
    assert_eq!(draft.date, "2024-05-01");
    assert_eq!(draft.amount, "");
    assert_eq!(draft.description, "");
}

// ── Registry ──────────────────────────────────────────────────

#[test]
fn test_screen_commands_and_aliases() {
    let mut app = test_app();
    run(&mut app, "t");
    assert_eq!(app.screen, Screen::Transactions);
    run(&mut app, ":budgets");
    assert_eq!(app.screen, Screen::Budgets);
    run(&mut app, "charts");
    assert_eq!(app.screen, Screen::Charts);
    run(&mut app, "d");
    assert_eq!(app.screen, Screen::Dashboard);
}

#[test]
fn test_quit() {
    let mut app = test_app();
    run(&mut app, "q");
    assert!(!app.running);
}

#[test]
fn test_help_opens_overlay() {
    let mut app = test_app();
    run(&mut app, "help");
    assert!(app.show_help);
}

#[test]
fn test_help_in_batch_lists_commands() {
    let mut app = batch_app();
    run(&mut app, "help");
    assert!(!app.show_help);
    assert!(app.status_message.starts_with("Commands: add, budget, budgets, charts"));
    assert!(app.status_message.contains("clear-budget"));
}

#[test]
fn test_unknown_command_suggests() {
    let mut app = test_app();
    run(&mut app, "buget");
    assert_eq!(
        app.status_message,
        "Unknown command: :buget. Did you mean :budget?"
    );
}

// ── add ───────────────────────────────────────────────────────

#[test]
fn test_add_direct() {
    let mut app = test_app();
    run(&mut app, "add 2024-05-03 30.20 Food & Dining Groceries");
    assert_eq!(app.status_message, "Added #1: Groceries");
    assert_eq!(app.ledger.transaction_count(), 1);

    let txn = &app.ledger.transactions()[0];
    assert_eq!(txn.amount, dec!(30.20));
    assert_eq!(txn.category, "Food & Dining");
    assert_eq!(app.derived.grand_total, dec!(30.20));
}

#[test]
fn test_add_invalid_reports_every_field() {
    let mut app = test_app();
    run(&mut app, "add not-a-date -5");
    assert_eq!(app.ledger.transaction_count(), 0);
    assert_eq!(
        app.status_message,
        "Invalid transaction: Please enter a valid positive amount. Please select a date. \
         Please enter a description. Please select a category."
    );
}

#[test]
fn test_add_without_args_opens_form() {
    let mut app = test_app();
    run(&mut app, "add");
    assert_eq!(app.input_mode, InputMode::Form);
    let form = app.form.as_ref().unwrap();
    assert_eq!(form.draft.date, "2024-05-25");
    assert_eq!(form.draft.category, "Food & Dining");
    assert!(form.editing.is_none());
}

#[test]
fn test_add_without_args_in_batch_prints_usage() {
    let mut app = batch_app();
    run(&mut app, "add");
    assert!(app.form.is_none());
    assert!(app.status_message.starts_with("Usage: add"));
}

// ── edit ──────────────────────────────────────────────────────

#[test]
fn test_edit_direct_replaces_only_target() {
    let mut app = test_app();
    run(&mut app, "add 2024-05-01 10 Travel Bus");
    run(&mut app, "add 2024-05-02 20 Housing Rent");
    run(&mut app, "add 2024-05-03 30 Shopping Shoes");

    run(&mut app, "edit 2 2024-05-04 25 Housing Rent share");
    assert_eq!(app.status_message, "Updated #2: Rent share");

    let txns = app.ledger.transactions();
    let ids: Vec<u64> = txns.iter().map(|t| t.id.0).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(txns[0].description, "Bus");
    assert_eq!(txns[1].amount, dec!(25));
    assert_eq!(txns[1].description, "Rent share");
    assert_eq!(txns[2].description, "Shoes");
}

#[test]
fn test_edit_unknown_id() {
    let mut app = test_app();
    run(&mut app, "edit 9 2024-05-04 25 Housing Rent");
    assert_eq!(app.status_message, "No transaction with id 9");
}

#[test]
fn test_edit_opens_prefilled_form() {
    let mut app = test_app();
    run(&mut app, "add 2024-05-01 12.5 Travel Train");
    run(&mut app, "edit #1");

    let form = app.form.as_ref().unwrap();
    assert_eq!(form.editing, Some(TransactionId(1)));
    assert_eq!(form.draft.amount, "12.5");
    assert_eq!(form.draft.date, "2024-05-01");
    assert_eq!(form.draft.description, "Train");
    assert_eq!(form.draft.category, "Travel");
}

#[test]
fn test_edit_selected_needs_transactions_screen() {
    let mut app = test_app();
    run(&mut app, "add 2024-05-01 12.5 Travel Train");
    run(&mut app, "edit");
    assert!(app.form.is_none());

    app.screen = Screen::Transactions;
    run(&mut app, "edit");
    assert_eq!(app.form.as_ref().unwrap().editing, Some(TransactionId(1)));
}

#[test]
fn test_add_rejects_amount_above_limit() {
    let mut app = batch_app();
    for _ in 0..2 {
        run(&mut app, "add 2024-05-01 79228162514264337593543950335 Travel trip");
        assert_eq!(
            app.status_message,
            "Invalid transaction: Please enter a valid positive amount."
        );
    }
    assert_eq!(app.ledger.transaction_count(), 0);
}

#[test]
fn test_add_largest_amount_twice() {
    let mut app = batch_app();
    run(&mut app, "add 2024-05-01 1e12 Travel trip");
    run(&mut app, "add 2024-05-02 1000000000000 Travel return");
    assert_eq!(app.ledger.transaction_count(), 2);
    assert_eq!(app.derived.grand_total, dec!(2000000000000));
}

// ── delete ────────────────────────────────────────────────────

#[test]
fn test_delete_asks_for_confirmation() {
    let mut app = test_app();
    run(&mut app, "add 2024-05-01 12.5 Travel Train");
    run(&mut app, "delete 1");

    assert_eq!(app.input_mode, InputMode::Confirm);
    assert_eq!(app.confirm_message, "Delete 'Train'?");
    assert_eq!(
        app.pending_action,
        Some(PendingAction::DeleteTransaction {
            id: TransactionId(1),
            description: "Train".into()
        })
    );
    assert_eq!(app.ledger.transaction_count(), 1);
}

#[test]
fn test_delete_in_batch_is_immediate() {
    let mut app = batch_app();
    run(&mut app, "add 2024-05-01 12.5 Travel Train");
    run(&mut app, "add 2024-05-02 3 Travel Bus");
    run(&mut app, "delete 1");

    assert_eq!(app.status_message, "Deleted: Train");
    assert_eq!(app.ledger.transaction_count(), 1);
    assert_eq!(app.derived.grand_total, dec!(3));
}

#[test]
fn test_delete_unknown_id() {
    let mut app = batch_app();
    run(&mut app, "delete 4");
    assert_eq!(app.status_message, "No such transaction");
}

// ── budgets ───────────────────────────────────────────────────

#[test]
fn test_budget_set_and_overspend() {
    let mut app = batch_app();
    run(&mut app, "add 2024-05-01 100 Food & Dining Groceries");
    run(&mut app, "add 2024-05-15 50 Food & Dining Dinner");
    run(&mut app, "budget Food & Dining 120");

    assert_eq!(app.status_message, "Budget set: Food & Dining = $120.00");
    assert_eq!(app.ledger.budgets().get(Category::FoodAndDining), Some(dec!(120)));
    assert_eq!(app.derived.overspending.len(), 1);
    assert_eq!(app.derived.overspending[0].over_by, dec!(30.00));
}

#[test]
fn test_budget_non_numeric_clears() {
    let mut app = batch_app();
    run(&mut app, "budget Travel 200");
    run(&mut app, "budget travel lots");
    assert_eq!(app.status_message, "Budget cleared: Travel");
    assert!(app.ledger.budgets().get(Category::Travel).is_none());
}

#[test]
fn test_budget_missing_amount_clears() {
    let mut app = batch_app();
    run(&mut app, "budget Housing 900");
    run(&mut app, "budget Housing");
    assert!(app.ledger.budgets().is_empty());
}

#[test]
fn test_budget_unknown_category() {
    let mut app = batch_app();
    run(&mut app, "budget Pets 40");
    assert!(app.status_message.starts_with("Category not found in 'Pets 40'"));
    assert!(app.ledger.budgets().is_empty());
}

#[test]
fn test_budget_interactive_jumps_to_row() {
    let mut app = test_app();
    run(&mut app, "budget Education 75");
    assert_eq!(app.screen, Screen::Budgets);
    assert_eq!(app.selected_budget_category(), Some(Category::Education));
}

#[test]
fn test_budget_accepts_scientific_and_other_symbols() {
    let mut app = batch_app();
    run(&mut app, "budget Travel 1e3");
    assert_eq!(app.ledger.budgets().get(Category::Travel), Some(dec!(1000)));
    run(&mut app, "budget Travel €250");
    assert_eq!(app.ledger.budgets().get(Category::Travel), Some(dec!(250)));
}

#[test]
fn test_clear_budget() {
    let mut app = batch_app();
    run(&mut app, "budget Shopping 60");
    run(&mut app, "clear-budget shopping");
    assert_eq!(app.status_message, "Budget cleared: Shopping");
    assert!(app.ledger.budgets().is_empty());
}

// ── App form flow ─────────────────────────────────────────────

#[test]
fn test_submit_form_with_errors_keeps_form_open() {
    let mut app = test_app();
    app.open_new_form();
    app.form.as_mut().unwrap().draft.amount = "abc".into();
    app.submit_form();

    let form = app.form.as_ref().unwrap();
    assert_eq!(form.errors.get(Field::Amount), Some(FieldError::InvalidAmount));
    assert_eq!(
        form.errors.get(Field::Description),
        Some(FieldError::EmptyDescription)
    );
    assert_eq!(form.errors.get(Field::Date), None);
    assert_eq!(app.input_mode, InputMode::Form);
    assert_eq!(app.ledger.transaction_count(), 0);
}

#[test]
fn test_submit_form_adds_and_selects() {
    let mut app = test_app();
    run(&mut app, "add 2024-05-01 1 Travel First");
    app.open_new_form();
    {
        let draft = &mut app.form.as_mut().unwrap().draft;
        draft.amount = "42".into();
        draft.description = "Concert".into();
        draft.category = "Entertainment".into();
    }
    app.submit_form();

    assert!(app.form.is_none());
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.status_message, "Added #2: Concert");
    assert_eq!(app.transaction_index, 1);
    assert_eq!(app.ledger.transactions()[1].date, may_25());
}

#[test]
fn test_finish_budget_edit_blank_clears() {
    let mut app = test_app();
    run(&mut app, "budget Travel 200");
    app.start_budget_edit(Category::Travel);
    assert_eq!(app.command_input, "200");

    app.command_input.clear();
    app.finish_budget_edit();
    assert!(app.ledger.budgets().get(Category::Travel).is_none());
    assert_eq!(app.input_mode, InputMode::Normal);
}
