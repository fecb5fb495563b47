use anyhow::Result;

use crate::budget::{saturating_total, AlertScope, BudgetStatus};
use crate::models::BudgetCategory;
use crate::store::Store;
use crate::ui::util::{format_amount, format_percent, truncate};

pub(crate) fn as_cli(args: &[String], store: &Store) -> Result<()> {
    match args[1].as_str() {
        "summary" | "s" => cli_summary(store),
        "alerts" | "a" => cli_alerts(store),
        "expenses" | "e" => cli_expenses(&args[2..], store),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("finboard {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("finboard: personal budget dashboard");
    println!();
    println!("Usage: finboard [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  summary                       Print the budget overview");
    println!("  alerts                        Print budget alerts");
    println!("  expenses [term]               List expenses, optionally filtered");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

fn cli_summary(store: &Store) -> Result<()> {
    let summary = store.summary();

    println!("finboard: budget overview");
    println!("{}", "─".repeat(56));
    println!("  Monthly limit:  {}", format_amount(summary.overall_limit));
    println!("  Budgeted:       {}", format_amount(summary.total_budgeted));
    println!("  Spent:          {}", format_amount(summary.total_spent));
    println!("  Remaining:      {}", format_amount(summary.remaining));
    match summary.overall_progress {
        Some(pct) => println!("  Used:           {}", format_percent(pct)),
        None => println!("  Used:           n/a (no monthly limit)"),
    }

    if summary.rows.is_empty() {
        println!();
        println!("No budget categories");
        return Ok(());
    }

    println!();
    println!(
        "{:<20} {:>12} {:>12} {:>8}  Status",
        "Category", "Spent", "Budgeted", "Used"
    );
    println!("{}", "─".repeat(66));
    for row in &summary.rows {
        let Some(category) = BudgetCategory::find_by_id(store.budgets(), row.id) else {
            continue;
        };
        let used = row
            .percentage
            .map(format_percent)
            .unwrap_or_else(|| "-".into());
        println!(
            "{:<20} {:>12} {:>12} {:>8}  {}",
            truncate(&category.category, 20),
            format_amount(category.spent),
            format_amount(category.budgeted),
            used,
            row.status,
        );
    }

    let over = summary
        .rows
        .iter()
        .filter(|r| r.status == BudgetStatus::Over)
        .count();
    if over > 0 {
        println!();
        println!("{over} categor{} over budget", if over == 1 { "y" } else { "ies" });
    }
    Ok(())
}

fn cli_alerts(store: &Store) -> Result<()> {
    let summary = store.summary();
    if summary.alerts.is_empty() {
        println!("No alerts: all budgets are on track");
        return Ok(());
    }

    for alert in &summary.alerts {
        let scope = match alert.scope {
            AlertScope::Overall => "overall".to_string(),
            AlertScope::Category(id) => BudgetCategory::find_by_id(store.budgets(), id)
                .map(|c| c.category.clone())
                .unwrap_or_else(|| format!("#{id}")),
        };
        println!(
            "[{:<8}] {:<16} {}",
            alert.severity.to_string(),
            truncate(&scope, 16),
            alert.message
        );
    }
    Ok(())
}

fn cli_expenses(args: &[String], store: &Store) -> Result<()> {
    let term = args.join(" ");
    let expenses = store.search_expenses(term.trim());
    if expenses.is_empty() {
        if term.trim().is_empty() {
            println!("No expenses");
        } else {
            println!("No expenses matching '{}'", term.trim());
        }
        return Ok(());
    }

    println!(
        "{:<6} {:<12} {:<28} {:<18} {:>10}",
        "ID", "Date", "Description", "Category", "Amount"
    );
    println!("{}", "─".repeat(78));
    for e in &expenses {
        println!(
            "{:<6} {:<12} {:<28} {:<18} {:>10}",
            e.id,
            e.date.to_string(),
            truncate(&e.description, 28),
            e.category.as_str(),
            format_amount(e.amount),
        );
    }
    println!("{}", "─".repeat(78));
    let shown = saturating_total(expenses.iter().map(|e| e.amount));
    println!(
        "{} shown, {}; all expenses total {}",
        expenses.len(),
        format_amount(shown),
        format_amount(store.total_expenses())
    );
    Ok(())
}
