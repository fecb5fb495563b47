use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, InputMode, PendingAction, Screen};
use crate::models::ExpenseCategory;
use crate::store::validate::{parse_limit, parse_new_budget, parse_new_expense};
use crate::store::{Store, ValidationError};
use crate::ui::util::format_amount;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut Store) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit finboard", cmd_quit, r);
    register_command!("quit", "Quit finboard", cmd_quit, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("e", "Go to Expenses", cmd_expenses, r);
    register_command!("expenses", "Go to Expenses", cmd_expenses, r);
    register_command!("b", "Go to Budget", cmd_budgets, r);
    register_command!("budgets", "Go to Budget", cmd_budgets, r);
    register_command!("settings", "Go to Settings", cmd_settings, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!(
        "budget",
        "Add budget category (e.g. :budget Groceries 250)",
        cmd_budget,
        r
    );
    register_command!(
        "delete-budget",
        "Delete selected budget category",
        cmd_delete_budget,
        r
    );
    register_command!(
        "limit",
        "Set monthly budget limit (e.g. :limit 1500)",
        cmd_limit,
        r
    );
    register_command!(
        "expense",
        "Add expense (e.g. :expense 4.50 Coffee; Food)",
        cmd_expense,
        r
    );
    register_command!("x", "Add expense (e.g. :x 4.50 Coffee)", cmd_expense, r);
    register_command!(
        "delete-expense",
        "Delete selected expense",
        cmd_delete_expense,
        r
    );
    register_command!(
        "search",
        "Search expenses (e.g. :search coffee)",
        cmd_search,
        r
    );
    register_command!("s", "Search expenses (e.g. :s coffee)", cmd_search, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let (cmd_name, args) = trimmed.split_once(' ').unwrap_or((trimmed, ""));
    let args = args.trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        tracing::debug!(command = cmd_name, "running command");
        (cmd.run)(args, app, store)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> &'static str {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| (levenshtein(input, k), **k))
        .copied()
        .unwrap_or("help")
}

fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Carry out the action the user just confirmed.
pub(crate) fn confirm_pending(app: &mut App, store: &mut Store) {
    let Some(action) = app.pending_action.take() else {
        return;
    };
    match action {
        PendingAction::DeleteBudget { id, name } => match store.delete_budget(id) {
            Ok(_) => {
                app.refresh_budgets(store);
                app.set_status(format!("Deleted budget: {name}"));
            }
            Err(e) => app.set_status(e.to_string()),
        },
        PendingAction::DeleteExpense { id, description } => match store.delete_expense(id) {
            Ok(_) => {
                app.refresh_expenses(store);
                app.set_status(format!("Deleted expense: {description}"));
            }
            Err(e) => app.set_status(e.to_string()),
        },
    }
    app.input_mode = InputMode::Normal;
    app.confirm_message.clear();
}

fn ask_confirmation(app: &mut App, action: PendingAction, message: String) {
    app.pending_action = Some(action);
    app.confirm_message = message;
    app.input_mode = InputMode::Confirm;
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::Dashboard;
    app.refresh_dashboard(store);
    Ok(())
}

fn cmd_expenses(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::Expenses;
    app.refresh_expenses(store);
    Ok(())
}

fn cmd_budgets(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::Budget;
    app.refresh_budgets(store);
    Ok(())
}

fn cmd_settings(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::Settings;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_budget(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :budget <category> <amount>");
        return Ok(());
    }

    // The amount is the last word so category names may contain spaces.
    let (name, amount) = args.rsplit_once(' ').unwrap_or((args, ""));
    match parse_new_budget(name, amount) {
        Ok(budget) => {
            let label = format!("{} ({})", budget.category, format_amount(budget.budgeted));
            store.insert_budget(budget);
            app.screen = Screen::Budget;
            app.refresh_budgets(store);
            app.budget_index = app.budgets.len().saturating_sub(1);
            app.set_status(format!("Added budget: {label}"));
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_delete_budget(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    if app.screen != Screen::Budget {
        app.set_status("Navigate to Budget first (:b)");
        return Ok(());
    }

    let Some(budget) = app.selected_budget() else {
        app.set_status("No budget category selected");
        return Ok(());
    };
    let (id, name) = (budget.id, budget.category.clone());
    let message = format!("Delete budget '{name}'?");
    ask_confirmation(app, PendingAction::DeleteBudget { id, name }, message);
    Ok(())
}

fn cmd_limit(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    match parse_limit(args) {
        Ok(limit) => {
            store.set_overall_limit(limit);
            app.refresh_budgets(store);
            app.set_status(format!("Monthly limit set to {}", format_amount(limit)));
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_expense(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :expense <amount> <description>[; <category>]");
        return Ok(());
    }

    let (amount, rest) = args.split_once(' ').unwrap_or((args, ""));
    let (description, category) = match rest.split_once(';') {
        Some((description, category)) => (description, Some(category)),
        None => (rest, None),
    };

    match parse_new_expense(amount, description, category) {
        Ok(expense) => {
            let label = format!(
                "{} {} [{}]",
                format_amount(expense.amount),
                expense.description,
                expense.category
            );
            store.insert_expense(expense);
            app.screen = Screen::Expenses;
            app.search_input.clear();
            app.expense_index = 0;
            app.expense_scroll = 0;
            app.refresh_expenses(store);
            app.set_status(format!("Added expense: {label}"));
        }
        Err(ValidationError::UnknownCategory(name)) => {
            let names: Vec<&str> = ExpenseCategory::all().iter().map(|c| c.as_str()).collect();
            app.set_status(format!(
                "Unknown category '{name}'. Available: {}",
                names.join(", ")
            ));
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_delete_expense(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    if app.screen != Screen::Expenses {
        app.set_status("Navigate to Expenses first (:e)");
        return Ok(());
    }

    let Some(expense) = app.selected_expense() else {
        app.set_status("No expense selected");
        return Ok(());
    };
    let (id, description) = (expense.id, expense.description.clone());
    let message = format!(
        "Delete expense '{description}' ({})?",
        format_amount(expense.amount)
    );
    ask_confirmation(app, PendingAction::DeleteExpense { id, description }, message);
    Ok(())
}

fn cmd_search(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.search_input = args.to_string();
    app.screen = Screen::Expenses;
    app.expense_index = 0;
    app.expense_scroll = 0;
    app.refresh_expenses(store);
    if args.is_empty() {
        app.set_status("Search cleared");
    } else {
        app.set_status(format!("{} expenses matching '{args}'", app.expenses.len()));
    }
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
