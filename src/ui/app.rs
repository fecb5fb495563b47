use std::path::PathBuf;

use rust_decimal::Decimal;

use crate::budget::BudgetSummary;
use crate::models::{BudgetCategory, DashboardSnapshot, Expense};
use crate::settings::Settings;
use crate::store::Store;

use super::util::clamp_cursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Expenses,
    Budget,
    Settings,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Dashboard, Self::Expenses, Self::Budget, Self::Settings]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Expenses => write!(f, "Expenses"),
            Self::Budget => write!(f, "Budget"),
            Self::Settings => write!(f, "Settings"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Search,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Search => write!(f, "SEARCH"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PendingAction {
    DeleteBudget { id: u64, name: String },
    DeleteExpense { id: u64, description: String },
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) search_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    // Dashboard
    pub(crate) dashboard: DashboardSnapshot,

    // Budget
    pub(crate) budgets: Vec<BudgetCategory>,
    pub(crate) summary: BudgetSummary,
    pub(crate) budget_index: usize,
    pub(crate) budget_scroll: usize,

    // Expenses (filtered by `search_input`)
    pub(crate) expenses: Vec<Expense>,
    pub(crate) expense_total: Decimal,
    pub(crate) expense_count: usize,
    pub(crate) expense_index: usize,
    pub(crate) expense_scroll: usize,

    // Settings
    pub(crate) settings: Settings,
    pub(crate) config_path: Option<PathBuf>,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(settings: Settings, config_path: Option<PathBuf>) -> Self {
        Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            search_input: String::new(),
            status_message: String::new(),
            show_help: false,

            dashboard: DashboardSnapshot::default(),

            budgets: Vec::new(),
            summary: BudgetSummary::default(),
            budget_index: 0,
            budget_scroll: 0,

            expenses: Vec::new(),
            expense_total: Decimal::ZERO,
            expense_count: 0,
            expense_index: 0,
            expense_scroll: 0,

            settings,
            config_path,

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        }
    }

    pub(crate) fn refresh_dashboard(&mut self, store: &Store) {
        self.dashboard = store.dashboard().clone();
    }

    /// Recompute the summary and alerts after any budget change.
    pub(crate) fn refresh_budgets(&mut self, store: &Store) {
        self.budgets = store.budgets().to_vec();
        self.summary = store.summary();
        clamp_cursor(&mut self.budget_index, &mut self.budget_scroll, self.budgets.len());
    }

    pub(crate) fn refresh_expenses(&mut self, store: &Store) {
        self.expenses = store
            .search_expenses(self.search_input.trim())
            .into_iter()
            .cloned()
            .collect();
        self.expense_total = store.total_expenses();
        self.expense_count = store.expenses().len();
        clamp_cursor(&mut self.expense_index, &mut self.expense_scroll, self.expenses.len());
    }

    pub(crate) fn refresh_all(&mut self, store: &Store) {
        self.refresh_dashboard(store);
        self.refresh_budgets(store);
        self.refresh_expenses(store);
    }

    pub(crate) fn selected_budget(&self) -> Option<&BudgetCategory> {
        self.budgets.get(self.budget_index)
    }

    pub(crate) fn selected_expense(&self) -> Option<&Expense> {
        self.expenses.get(self.expense_index)
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
