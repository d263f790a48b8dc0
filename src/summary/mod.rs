//! Derived views over the transaction list and budgets.
//!
//! Everything here is a pure function of its inputs. The UI calls
//! [`recompute`] after every mutation and renders from the result.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{Budgets, Category, Transaction};

pub(crate) const TOP_CATEGORY_COUNT: usize = 3;
pub(crate) const RECENT_TRANSACTION_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MonthlyTotal {
    /// `YYYY-MM`
    pub(crate) month: String,
    pub(crate) total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CategoryTotal {
    pub(crate) name: String,
    pub(crate) value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BudgetComparison {
    pub(crate) category: Category,
    pub(crate) budget: Decimal,
    pub(crate) actual: Decimal,
}

impl BudgetComparison {
    pub(crate) fn is_overspent(&self) -> bool {
        self.actual > self.budget
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Overspend {
    pub(crate) category: Category,
    pub(crate) budget: Decimal,
    pub(crate) actual: Decimal,
    /// `actual - budget`, rounded to cents.
    pub(crate) over_by: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DerivedState {
    pub(crate) monthly_totals: Vec<MonthlyTotal>,
    pub(crate) category_totals: Vec<CategoryTotal>,
    pub(crate) grand_total: Decimal,
    pub(crate) top_categories: Vec<CategoryTotal>,
    pub(crate) recent_transactions: Vec<Transaction>,
    pub(crate) current_month_actuals: Vec<CategoryTotal>,
    pub(crate) budget_vs_actual: Vec<BudgetComparison>,
    pub(crate) overspending: Vec<Overspend>,
}

/// Rebuild every derived view. `today` decides which month counts as current.
pub(crate) fn recompute(
    transactions: &[Transaction],
    budgets: &Budgets,
    today: NaiveDate,
) -> DerivedState {
    let category_totals = category_totals(transactions);
    let current_month_actuals = current_month_actuals(transactions, today);
    let budget_vs_actual = budget_vs_actual(budgets, &current_month_actuals);

    let state = DerivedState {
        monthly_totals: monthly_totals(transactions),
        grand_total: grand_total(transactions),
        top_categories: top_categories(&category_totals, TOP_CATEGORY_COUNT),
        recent_transactions: recent_transactions(transactions, RECENT_TRANSACTION_COUNT),
        overspending: overspending(&budget_vs_actual),
        category_totals,
        current_month_actuals,
        budget_vs_actual,
    };

    tracing::debug!(
        transactions = transactions.len(),
        months = state.monthly_totals.len(),
        categories = state.category_totals.len(),
        overspent = state.overspending.len(),
        %today,
        "recomputed derived state"
    );

    state
}

/// Sum per key, keeping keys in order of first appearance. Sums saturate at
/// `Decimal::MAX`.
fn group_sum<'a, I>(items: I) -> Vec<(String, Decimal)>
where
    I: IntoIterator<Item = (String, &'a Decimal)>,
{
    let mut groups: Vec<(String, Decimal)> = Vec::new();
    for (key, amount) in items {
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, total)) => *total = total.saturating_add(*amount),
            None => groups.push((key, *amount)),
        }
    }
    groups
}

pub(crate) fn monthly_totals(transactions: &[Transaction]) -> Vec<MonthlyTotal> {
    group_sum(transactions.iter().map(|t| (t.month_key(), &t.amount)))
        .into_iter()
        .map(|(month, total)| MonthlyTotal { month, total })
        .collect()
}

pub(crate) fn category_totals(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    group_sum(transactions.iter().map(|t| (t.category.clone(), &t.amount)))
        .into_iter()
        .map(|(name, value)| CategoryTotal { name, value })
        .collect()
}

pub(crate) fn grand_total(transactions: &[Transaction]) -> Decimal {
    transactions
        .iter()
        .fold(Decimal::ZERO, |acc, t| acc.saturating_add(t.amount))
}

/// Highest totals first. Equal totals keep their original order.
pub(crate) fn top_categories(totals: &[CategoryTotal], n: usize) -> Vec<CategoryTotal> {
    let mut sorted = totals.to_vec();
    sorted.sort_by(|a, b| b.value.cmp(&a.value));
    sorted.truncate(n);
    sorted
}

/// Latest dates first. Same-day transactions keep their original order.
pub(crate) fn recent_transactions(transactions: &[Transaction], n: usize) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(n);
    sorted
}

pub(crate) fn current_month_actuals(
    transactions: &[Transaction],
    today: NaiveDate,
) -> Vec<CategoryTotal> {
    category_totals(
        &transactions
            .iter()
            .filter(|t| t.in_month_of(today))
            .cloned()
            .collect::<Vec<_>>(),
    )
}

/// One row per fixed category, in enumeration order. Missing budgets and
/// categories without spend are zero.
pub(crate) fn budget_vs_actual(
    budgets: &Budgets,
    actuals: &[CategoryTotal],
) -> Vec<BudgetComparison> {
    Category::all()
        .iter()
        .map(|&category| BudgetComparison {
            category,
            budget: budgets.limit_or_zero(category),
            actual: actuals
                .iter()
                .find(|a| a.name == category.as_str())
                .map(|a| a.value)
                .unwrap_or(Decimal::ZERO),
        })
        .collect()
}

pub(crate) fn overspending(comparisons: &[BudgetComparison]) -> Vec<Overspend> {
    comparisons
        .iter()
        .filter(|c| c.is_overspent())
        .map(|c| Overspend {
            category: c.category,
            budget: c.budget,
            actual: c.actual,
            over_by: (c.actual - c.budget)
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        })
        .collect()
}
