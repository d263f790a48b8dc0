pub(crate) mod budgets;
pub(crate) mod charts;
pub(crate) mod dashboard;
pub(crate) mod form;
pub(crate) mod transactions;
