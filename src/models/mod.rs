mod budget;
mod dashboard;
mod expense;

pub use budget::{BudgetCategory, DEFAULT_BUDGET_COLOR};
pub use dashboard::{DashboardSnapshot, Prediction, SavingsGoal, SpendingSlice, TrendPoint};
pub use expense::{Expense, ExpenseCategory};

#[cfg(test)]
mod tests;
