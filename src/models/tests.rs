#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

// ── BudgetCategory ────────────────────────────────────────────

#[test]
fn test_budget_category_new_defaults() {
    let cat = BudgetCategory::new(7, "Groceries".into(), dec!(250));
    assert_eq!(cat.id, 7);
    assert_eq!(cat.category, "Groceries");
    assert_eq!(cat.budgeted, dec!(250));
    assert_eq!(cat.spent, Decimal::ZERO);
    assert_eq!(cat.color, DEFAULT_BUDGET_COLOR);
}

#[test]
fn test_budget_category_remaining() {
    let cat = BudgetCategory::new(1, "Food".into(), dec!(400)).with_spent(dec!(320));
    assert_eq!(cat.remaining(), dec!(80));

    let over = BudgetCategory::new(2, "Fun".into(), dec!(150)).with_spent(dec!(160));
    assert_eq!(over.remaining(), dec!(-10));
}

#[test]
fn test_budget_category_find_by_id() {
    let cats = vec![
        BudgetCategory::new(1, "A".into(), dec!(10)),
        BudgetCategory::new(2, "B".into(), dec!(20)),
    ];
    assert_eq!(BudgetCategory::find_by_id(&cats, 2).unwrap().category, "B");
    assert!(BudgetCategory::find_by_id(&cats, 3).is_none());
}

#[test]
fn test_budget_category_display() {
    let cat = BudgetCategory::new(1, "Shopping".into(), dec!(100)).with_color("#8b5cf6");
    assert_eq!(format!("{cat}"), "Shopping");
    assert_eq!(cat.color, "#8b5cf6");
}

// ── ExpenseCategory ───────────────────────────────────────────

#[test]
fn test_expense_category_parse() {
    assert_eq!(
        ExpenseCategory::parse("food & dining"),
        Some(ExpenseCategory::FoodDining)
    );
    assert_eq!(
        ExpenseCategory::parse("  FOOD  "),
        Some(ExpenseCategory::FoodDining)
    );
    assert_eq!(
        ExpenseCategory::parse("transport"),
        Some(ExpenseCategory::Transportation)
    );
    assert_eq!(
        ExpenseCategory::parse("Bills & Utilities"),
        Some(ExpenseCategory::BillsUtilities)
    );
    assert_eq!(ExpenseCategory::parse("groceries"), None);
    assert_eq!(ExpenseCategory::parse(""), None);
}

#[test]
fn test_expense_category_roundtrip() {
    for c in ExpenseCategory::all() {
        let s = c.as_str();
        assert_eq!(ExpenseCategory::parse(s), Some(*c), "Roundtrip failed for {s}");
    }
}

#[test]
fn test_expense_category_all() {
    let all = ExpenseCategory::all();
    assert_eq!(all.len(), 8);
    assert_eq!(all.last(), Some(&ExpenseCategory::Other));
}

// ── Expense ───────────────────────────────────────────────────

fn make_expense(description: &str, category: ExpenseCategory) -> Expense {
    Expense {
        id: 1,
        amount: dec!(12.50),
        description: description.into(),
        category,
        date: NaiveDate::from_ymd_opt(2024, 1, 14).unwrap(),
        is_recurring: false,
    }
}

#[test]
fn test_expense_matches_description() {
    let e = make_expense("Bus ticket", ExpenseCategory::Transportation);
    assert!(e.matches("bus"));
    assert!(e.matches("TICKET"));
    assert!(!e.matches("coffee"));
}

#[test]
fn test_expense_matches_category() {
    let e = make_expense("Coffee", ExpenseCategory::FoodDining);
    assert!(e.matches("dining"));
    assert!(e.matches("food &"));
}

#[test]
fn test_expense_empty_term_matches() {
    let e = make_expense("Textbook", ExpenseCategory::Education);
    assert!(e.matches(""));
}

// ── Dashboard ─────────────────────────────────────────────────

fn slice(name: &str, amount: Decimal) -> SpendingSlice {
    SpendingSlice {
        name: name.into(),
        amount,
        color: String::new(),
    }
}

#[test]
fn test_spending_shares() {
    let snap = DashboardSnapshot {
        breakdown: vec![slice("Food", dec!(300)), slice("Travel", dec!(100))],
        ..Default::default()
    };
    let shares = snap.spending_shares();
    assert_eq!(shares, vec![("Food", dec!(75)), ("Travel", dec!(25))]);
}

#[test]
fn test_spending_shares_rounds_to_whole_percent() {
    let snap = DashboardSnapshot {
        breakdown: vec![slice("A", dec!(1)), slice("B", dec!(2))],
        ..Default::default()
    };
    let shares = snap.spending_shares();
    assert_eq!(shares[0].1, dec!(33));
    assert_eq!(shares[1].1, dec!(67));
}

#[test]
fn test_spending_shares_all_zero() {
    let snap = DashboardSnapshot {
        breakdown: vec![slice("A", Decimal::ZERO)],
        ..Default::default()
    };
    assert_eq!(snap.spending_shares(), vec![("A", Decimal::ZERO)]);
}

#[test]
fn test_goal_progress() {
    let goal = SavingsGoal {
        name: "Emergency Fund".into(),
        current: dec!(1200),
        target: dec!(3000),
        deadline: "6 months".into(),
    };
    assert_eq!(goal.progress(), Some(dec!(40)));
}

#[test]
fn test_goal_progress_zero_target() {
    let goal = SavingsGoal {
        name: "Nothing".into(),
        current: dec!(10),
        target: Decimal::ZERO,
        deadline: String::new(),
    };
    assert_eq!(goal.progress(), None);
}

#[test]
fn test_approaching_limit_is_strictly_above_75() {
    let mut snap = DashboardSnapshot {
        budget_used: dec!(75),
        ..Default::default()
    };
    assert!(!snap.approaching_limit());
    snap.budget_used = dec!(78);
    assert!(snap.approaching_limit());
}
