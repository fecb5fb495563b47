use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::IdGenerator;
use crate::models::{
    BudgetCategory, DashboardSnapshot, Expense, ExpenseCategory, Prediction, SavingsGoal,
    SpendingSlice, TrendPoint,
};

/// `Decimal` from an amount in cents.
fn cents(value: i64) -> Decimal {
    Decimal::new(value, 2)
}

fn dollars(value: i64) -> Decimal {
    Decimal::from(value)
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub(super) fn budget_categories(ids: &mut IdGenerator) -> Vec<BudgetCategory> {
    [
        ("Food & Dining", 400, 320, "#ef4444"),
        ("Transportation", 200, 165, "#f97316"),
        ("Entertainment", 150, 140, "#eab308"),
        ("Education", 300, 180, "#22c55e"),
        ("Shopping", 100, 85, "#8b5cf6"),
    ]
    .into_iter()
    .map(|(name, budgeted, spent, color)| {
        BudgetCategory::new(ids.next_id(), name.to_string(), dollars(budgeted))
            .with_spent(dollars(spent))
            .with_color(color)
    })
    .collect()
}

/// Newest first.
pub(super) fn expenses(ids: &mut IdGenerator) -> Vec<Expense> {
    [
        (4599, "Grocery shopping", ExpenseCategory::FoodDining, 15),
        (1250, "Bus ticket", ExpenseCategory::Transportation, 14),
        (2500, "Movie ticket", ExpenseCategory::Entertainment, 13),
        (8999, "Textbook", ExpenseCategory::Education, 12),
        (875, "Coffee", ExpenseCategory::FoodDining, 11),
    ]
    .into_iter()
    .map(|(amount, description, category, d)| Expense {
        id: ids.next_id(),
        amount: cents(amount),
        description: description.to_string(),
        category,
        date: day(2024, 1, d),
        is_recurring: false,
    })
    .collect()
}

pub(super) fn dashboard() -> DashboardSnapshot {
    let breakdown = [
        ("Food & Dining", 38000, "#ef4444"),
        ("Transportation", 22000, "#f97316"),
        ("Entertainment", 15000, "#eab308"),
        ("Education", 18000, "#22c55e"),
        ("Other", 5520, "#6366f1"),
    ]
    .into_iter()
    .map(|(name, amount, color)| SpendingSlice {
        name: name.to_string(),
        amount: cents(amount),
        color: color.to_string(),
    })
    .collect();

    let trend = [("Aug", 920), ("Sep", 1050), ("Oct", 890), ("Nov", 1120), ("Dec", 985)]
        .into_iter()
        .map(|(month, amount)| TrendPoint {
            month: month.to_string(),
            amount: dollars(amount),
        })
        .collect();

    let goals = [
        ("Emergency Fund", 1200, 3000, "6 months"),
        ("Laptop Upgrade", 450, 1200, "3 months"),
        ("Spring Break Trip", 280, 800, "4 months"),
    ]
    .into_iter()
    .map(|(name, current, target, deadline)| SavingsGoal {
        name: name.to_string(),
        current: dollars(current),
        target: dollars(target),
        deadline: deadline.to_string(),
    })
    .collect();

    let predictions = [
        ("Food & Dining", 380, 420),
        ("Transportation", 220, 240),
        ("Entertainment", 150, 180),
    ]
    .into_iter()
    .map(|(category, current, predicted)| Prediction {
        category: category.to_string(),
        current: dollars(current),
        predicted: dollars(predicted),
    })
    .collect();

    DashboardSnapshot {
        total_balance: cents(245050),
        monthly_income: dollars(1200),
        monthly_expenses: cents(98520),
        budget_used: dollars(78),
        breakdown,
        trend,
        goals,
        predictions,
    }
}
