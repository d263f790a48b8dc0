mod budget;
mod category;
mod transaction;

pub use budget::Budgets;
pub use category::Category;
pub use transaction::{Transaction, TransactionId};

#[cfg(test)]
mod tests;
