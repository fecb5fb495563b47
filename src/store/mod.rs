//! In-memory session state.
//!
//! `Store` owns every mutable collection for one run of the program. Reads
//! hand out slices; mutation goes through the insert/delete/set methods
//! below, and derived figures come from the pure functions in
//! [`crate::budget`].

mod seed;
pub(crate) mod validate;

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;

use crate::budget::{self, BudgetSummary};
use crate::models::{BudgetCategory, DashboardSnapshot, Expense};

pub(crate) use validate::{NewBudget, NewExpense, ValidationError};

/// Hands out identifiers in strictly increasing order.
#[derive(Debug, Clone)]
pub(crate) struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub(crate) fn starting_at(next: u64) -> Self {
        Self { next }
    }

    pub(crate) fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

pub(crate) struct Store {
    budgets: Vec<BudgetCategory>,
    overall_limit: Decimal,
    expenses: Vec<Expense>,
    dashboard: DashboardSnapshot,
    ids: IdGenerator,
}

impl Store {
    /// An empty session with the given monthly limit.
    pub(crate) fn new(overall_limit: Decimal) -> Self {
        Self {
            budgets: Vec::new(),
            overall_limit,
            expenses: Vec::new(),
            dashboard: DashboardSnapshot::default(),
            ids: IdGenerator::default(),
        }
    }

    /// A session pre-loaded with the demo budgets, expenses and dashboard
    /// figures.
    pub(crate) fn seeded(overall_limit: Decimal) -> Self {
        let mut ids = IdGenerator::default();
        let budgets = seed::budget_categories(&mut ids);
        let expenses = seed::expenses(&mut ids);
        tracing::debug!(
            budgets = budgets.len(),
            expenses = expenses.len(),
            "seeded demo data"
        );

        Self {
            budgets,
            overall_limit,
            expenses,
            dashboard: seed::dashboard(),
            ids,
        }
    }

    // ── Budgets ──────────────────────────────────────────────

    pub(crate) fn budgets(&self) -> &[BudgetCategory] {
        &self.budgets
    }

    pub(crate) fn overall_limit(&self) -> Decimal {
        self.overall_limit
    }

    pub(crate) fn set_overall_limit(&mut self, limit: Decimal) {
        tracing::debug!(old = %self.overall_limit, new = %limit, "overall limit changed");
        self.overall_limit = limit;
    }

    /// Append a category with nothing spent yet. Returns its id.
    pub(crate) fn insert_budget(&mut self, budget: NewBudget) -> u64 {
        let id = self.ids.next_id();
        tracing::debug!(id, category = %budget.category, budgeted = %budget.budgeted, "budget added");
        self.budgets
            .push(BudgetCategory::new(id, budget.category, budget.budgeted));
        id
    }

    /// Remove the category with `id`, keeping the order of the rest.
    pub(crate) fn delete_budget(&mut self, id: u64) -> Result<BudgetCategory, ValidationError> {
        let index = self
            .budgets
            .iter()
            .position(|b| b.id == id)
            .ok_or(ValidationError::NotFound(id))?;
        let removed = self.budgets.remove(index);
        tracing::debug!(id, category = %removed.category, "budget deleted");
        Ok(removed)
    }

    pub(crate) fn summary(&self) -> BudgetSummary {
        budget::summarize(&self.budgets, self.overall_limit)
    }

    // ── Expenses ─────────────────────────────────────────────

    /// All expenses, newest first.
    pub(crate) fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Record an expense dated today.
    pub(crate) fn insert_expense(&mut self, expense: NewExpense) -> u64 {
        self.insert_expense_on(expense, Local::now().date_naive())
    }

    /// Record an expense on `date`. New expenses go to the front of the list.
    pub(crate) fn insert_expense_on(&mut self, expense: NewExpense, date: NaiveDate) -> u64 {
        let id = self.ids.next_id();
        tracing::debug!(id, amount = %expense.amount, category = %expense.category, "expense added");
        self.expenses.insert(
            0,
            Expense {
                id,
                amount: expense.amount,
                description: expense.description,
                category: expense.category,
                date,
                is_recurring: false,
            },
        );
        id
    }

    pub(crate) fn delete_expense(&mut self, id: u64) -> Result<Expense, ValidationError> {
        let index = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or(ValidationError::NotFound(id))?;
        let removed = self.expenses.remove(index);
        tracing::debug!(id, description = %removed.description, "expense deleted");
        Ok(removed)
    }

    /// Expenses whose description or category contains `term`,
    /// case-insensitively. An empty term returns everything.
    pub(crate) fn search_expenses(&self, term: &str) -> Vec<&Expense> {
        self.expenses.iter().filter(|e| e.matches(term)).collect()
    }

    /// Sum of every expense, regardless of any search.
    pub(crate) fn total_expenses(&self) -> Decimal {
        budget::saturating_total(self.expenses.iter().map(|e| e.amount))
    }

    // ── Dashboard ────────────────────────────────────────────

    pub(crate) fn dashboard(&self) -> &DashboardSnapshot {
        &self.dashboard
    }
}
