use rust_decimal::Decimal;

use crate::entry::ValidTransaction;
use crate::models::*;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("No transaction with id {0}")]
    TransactionNotFound(TransactionId),
}

/// The session's transactions and budgets. Everything lives in memory and is
/// dropped with the session.
#[derive(Debug)]
pub(crate) struct Ledger {
    transactions: Vec<Transaction>,
    budgets: Budgets,
    next_id: u64,
}

impl Ledger {
    pub(crate) fn new() -> Self {
        Self {
            transactions: Vec::new(),
            budgets: Budgets::new(),
            next_id: 1,
        }
    }

    fn allocate_id(&mut self) -> TransactionId {
        let id = TransactionId(self.next_id);
        self.next_id += 1;
        id
    }

    // ── Transactions ──────────────────────────────────────────

    /// Transactions in insertion order.
    pub(crate) fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub(crate) fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub(crate) fn get_transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub(crate) fn position_of(&self, id: TransactionId) -> Option<usize> {
        self.transactions.iter().position(|t| t.id == id)
    }

    pub(crate) fn insert_transaction(&mut self, txn: ValidTransaction) -> TransactionId {
        let id = self.allocate_id();
        tracing::info!(%id, amount = %txn.amount, date = %txn.date, category = %txn.category, "transaction added");
        self.transactions.push(Transaction {
            id,
            amount: txn.amount,
            date: txn.date,
            description: txn.description,
            category: txn.category,
        });
        id
    }

    /// Replace the fields of `id` in place. Id and list position are kept.
    pub(crate) fn update_transaction(
        &mut self,
        id: TransactionId,
        txn: ValidTransaction,
    ) -> Result<(), LedgerError> {
        let existing = self
            .transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(LedgerError::TransactionNotFound(id))?;
        existing.amount = txn.amount;
        existing.date = txn.date;
        existing.description = txn.description;
        existing.category = txn.category;
        tracing::info!(%id, "transaction updated");
        Ok(())
    }

    pub(crate) fn delete_transaction(&mut self, id: TransactionId) -> Result<Transaction, LedgerError> {
        let idx = self
            .position_of(id)
            .ok_or(LedgerError::TransactionNotFound(id))?;
        let removed = self.transactions.remove(idx);
        tracing::info!(%id, "transaction deleted");
        Ok(removed)
    }

    // ── Budgets ───────────────────────────────────────────────

    pub(crate) fn budgets(&self) -> &Budgets {
        &self.budgets
    }

    pub(crate) fn set_budget(&mut self, category: Category, limit: Decimal) {
        tracing::info!(%category, %limit, "budget set");
        self.budgets.set(category, limit);
    }

    pub(crate) fn clear_budget(&mut self, category: Category) -> Option<Decimal> {
        tracing::info!(%category, "budget cleared");
        self.budgets.clear(category)
    }

    /// Set when a valid limit is given, clear otherwise.
    pub(crate) fn apply_budget(&mut self, category: Category, limit: Option<Decimal>) {
        match limit {
            Some(limit) => self.set_budget(category, limit),
            None => {
                self.clear_budget(category);
            }
        }
    }
}
