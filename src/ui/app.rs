use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;

use crate::config::Config;
use crate::entry::{Field, FormErrors, TransactionDraft, ValidTransaction};
use crate::ledger::{Ledger, LedgerError};
use crate::models::*;
use crate::summary::{self, DerivedState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Transactions,
    Budgets,
    Charts,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[
            Self::Dashboard,
            Self::Transactions,
            Self::Budgets,
            Self::Charts,
        ]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Transactions => write!(f, "Transactions"),
            Self::Budgets => write!(f, "Budgets"),
            Self::Charts => write!(f, "Charts"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Form,
    Editing,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Form => write!(f, "FORM"),
            Self::Editing => write!(f, "EDIT"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PendingAction {
    DeleteTransaction { id: TransactionId, description: String },
}

/// The add/edit transaction overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TransactionForm {
    pub(crate) draft: TransactionDraft,
    /// `Some` when editing an existing transaction.
    pub(crate) editing: Option<TransactionId>,
    pub(crate) focus: Field,
    pub(crate) errors: FormErrors,
}

impl TransactionForm {
    pub(crate) fn title(&self) -> String {
        match self.editing {
            Some(id) => format!(" Edit Transaction #{id} "),
            None => " Add New Transaction ".to_string(),
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    /// False in batch mode: no overlays, no confirmations.
    pub(crate) interactive: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) currency: String,

    /// Source of "today" for the current-month views.
    pub(crate) clock: fn() -> NaiveDate,
    pub(crate) today: NaiveDate,
    /// `YYYY-MM` of `today`.
    pub(crate) current_month: String,

    pub(crate) ledger: Ledger,
    pub(crate) derived: DerivedState,

    // Transactions
    pub(crate) transaction_index: usize,
    pub(crate) transaction_scroll: usize,

    // Budgets
    pub(crate) budget_index: usize,
    pub(crate) editing_budget: Option<Category>,

    pub(crate) form: Option<TransactionForm>,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl App {
    pub(crate) fn new(config: &Config) -> Self {
        Self::with_clock(config, local_today)
    }

    pub(crate) fn with_clock(config: &Config, clock: fn() -> NaiveDate) -> Self {
        let today = clock();
        let ledger = Ledger::new();
        let derived = summary::recompute(ledger.transactions(), ledger.budgets(), today);

        Self {
            running: true,
            interactive: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,
            currency: config.currency_symbol.clone(),

            clock,
            today,
            current_month: today.format("%Y-%m").to_string(),

            ledger,
            derived,

            transaction_index: 0,
            transaction_scroll: 0,

            budget_index: 0,
            editing_budget: None,

            form: None,

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        }
    }

    /// Re-read the clock and rebuild every derived view.
    pub(crate) fn refresh(&mut self) {
        self.today = (self.clock)();
        self.current_month = self.today.format("%Y-%m").to_string();
        self.derived = summary::recompute(
            self.ledger.transactions(),
            self.ledger.budgets(),
            self.today,
        );

        let len = self.ledger.transaction_count();
        if self.transaction_index >= len {
            self.transaction_index = len.saturating_sub(1);
        }
        if self.transaction_scroll > self.transaction_index {
            self.transaction_scroll = self.transaction_index;
        }
    }

    // ── Mutations ─────────────────────────────────────────────

    pub(crate) fn add_transaction(&mut self, txn: ValidTransaction) -> TransactionId {
        let id = self.ledger.insert_transaction(txn);
        self.refresh();
        id
    }

    pub(crate) fn update_transaction(
        &mut self,
        id: TransactionId,
        txn: ValidTransaction,
    ) -> Result<(), LedgerError> {
        self.ledger.update_transaction(id, txn)?;
        self.refresh();
        Ok(())
    }

    pub(crate) fn delete_transaction(&mut self, id: TransactionId) -> Result<Transaction, LedgerError> {
        let removed = self.ledger.delete_transaction(id)?;
        self.refresh();
        Ok(removed)
    }

    pub(crate) fn apply_budget(&mut self, category: Category, limit: Option<Decimal>) {
        self.ledger.apply_budget(category, limit);
        self.refresh();
    }

    // ── Selection ─────────────────────────────────────────────

    pub(crate) fn selected_transaction(&self) -> Option<&Transaction> {
        self.ledger.transactions().get(self.transaction_index)
    }

    pub(crate) fn selected_budget_category(&self) -> Option<Category> {
        Category::all().get(self.budget_index).copied()
    }

    // ── Form ──────────────────────────────────────────────────

    pub(crate) fn open_new_form(&mut self) {
        self.form = Some(TransactionForm {
            draft: TransactionDraft::new(self.today),
            editing: None,
            focus: Field::Amount,
            errors: FormErrors::default(),
        });
        self.input_mode = InputMode::Form;
    }

    pub(crate) fn open_edit_form(&mut self, id: TransactionId) -> bool {
        let Some(txn) = self.ledger.get_transaction(id) else {
            return false;
        };
        self.form = Some(TransactionForm {
            draft: TransactionDraft::from_transaction(txn),
            editing: Some(id),
            focus: Field::Amount,
            errors: FormErrors::default(),
        });
        self.input_mode = InputMode::Form;
        true
    }

    pub(crate) fn cancel_form(&mut self) {
        self.form = None;
        self.input_mode = InputMode::Normal;
    }

    /// Validate and apply the open form. On failure the form stays open with
    /// per-field errors.
    pub(crate) fn submit_form(&mut self) {
        let Some(form) = self.form.as_mut() else {
            return;
        };

        let valid = match form.draft.validate() {
            Ok(valid) => valid,
            Err(errors) => {
                tracing::debug!(%errors, "transaction form rejected");
                form.errors = errors;
                self.set_status("Fix the highlighted fields");
                return;
            }
        };

        let editing = form.editing;
        let description = valid.description.clone();
        self.form = None;
        self.input_mode = InputMode::Normal;

        match editing {
            Some(id) => match self.update_transaction(id, valid) {
                Ok(()) => self.set_status(format!("Updated: {description}")),
                Err(e) => self.set_status(e.to_string()),
            },
            None => {
                let id = self.add_transaction(valid);
                if let Some(pos) = self.ledger.position_of(id) {
                    self.transaction_index = pos;
                }
                self.set_status(format!("Added #{id}: {description}"));
            }
        }
    }

    // ── Budget editing ────────────────────────────────────────

    pub(crate) fn start_budget_edit(&mut self, category: Category) {
        self.command_input = self
            .ledger
            .budgets()
            .get(category)
            .map(|v| v.normalize().to_string())
            .unwrap_or_default();
        self.editing_budget = Some(category);
        self.input_mode = InputMode::Editing;
        self.set_status(format!(
            "Budget for {category}: type an amount, blank clears it"
        ));
    }

    pub(crate) fn finish_budget_edit(&mut self) {
        if let Some(category) = self.editing_budget.take() {
            let limit = crate::entry::parse_budget_amount(&self.command_input);
            self.apply_budget(category, limit);
            self.set_status(self.budget_status(category));
        }
        self.command_input.clear();
        self.input_mode = InputMode::Normal;
    }

    pub(crate) fn budget_status(&self, category: Category) -> String {
        match self.ledger.budgets().get(category) {
            Some(limit) => format!(
                "Budget set: {category} = {}",
                crate::ui::util::format_amount(limit, &self.currency)
            ),
            None => format!("Budget cleared: {category}"),
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
