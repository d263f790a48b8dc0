use rust_decimal::Decimal;
use std::collections::HashMap;

use super::Category;

/// Monthly spending limits per category. A category without an entry has no
/// budget set and compares as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Budgets {
    limits: HashMap<Category, Decimal>,
}

impl Budgets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: Category) -> Option<Decimal> {
        self.limits.get(&category).copied()
    }

    pub fn limit_or_zero(&self, category: Category) -> Decimal {
        self.get(category).unwrap_or(Decimal::ZERO)
    }

    /// Replaces any previous limit for `category`.
    pub fn set(&mut self, category: Category, limit: Decimal) {
        self.limits.insert(category, limit);
    }

    /// Removes the entry. Returns the previous limit, if any.
    pub fn clear(&mut self, category: Category) -> Option<Decimal> {
        self.limits.remove(&category)
    }

    pub fn len(&self) -> usize {
        self.limits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }
}
