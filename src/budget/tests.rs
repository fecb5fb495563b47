#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::models::BudgetCategory;

fn make_cat(id: u64, budgeted: Decimal, spent: Decimal) -> BudgetCategory {
    BudgetCategory::new(id, format!("Cat {id}"), budgeted).with_spent(spent)
}

fn named(id: u64, name: &str, budgeted: Decimal, spent: Decimal) -> BudgetCategory {
    BudgetCategory::new(id, name.into(), budgeted).with_spent(spent)
}

// ── Totals ────────────────────────────────────────────────────

#[test]
fn test_totals_empty_list() {
    assert_eq!(total_budgeted(&[]), Decimal::ZERO);
    assert_eq!(total_spent(&[]), Decimal::ZERO);
}

#[test]
fn test_totals_sum_each_field() {
    let cats = vec![
        make_cat(1, dec!(400), dec!(320)),
        make_cat(2, dec!(200), dec!(165)),
        make_cat(3, dec!(150.50), dec!(0.25)),
    ];
    assert_eq!(total_budgeted(&cats), dec!(750.50));
    assert_eq!(total_spent(&cats), dec!(485.25));
}

#[test]
fn test_totals_pass_negative_amounts_through() {
    let cats = vec![make_cat(1, dec!(-50), dec!(-10)), make_cat(2, dec!(100), dec!(30))];
    assert_eq!(total_budgeted(&cats), dec!(50));
    assert_eq!(total_spent(&cats), dec!(20));
}

#[test]
fn test_totals_saturate_at_decimal_max() {
    let cats = vec![
        make_cat(1, Decimal::MAX, Decimal::MAX),
        make_cat(2, Decimal::MAX, Decimal::MAX),
    ];
    assert_eq!(total_budgeted(&cats), Decimal::MAX);
    assert_eq!(total_spent(&cats), Decimal::MAX);

    let negative = vec![make_cat(1, Decimal::MIN, dec!(0)), make_cat(2, Decimal::MIN, dec!(0))];
    assert_eq!(total_budgeted(&negative), Decimal::MIN);
}

// ── Progress and remaining ────────────────────────────────────

#[test]
fn test_overall_progress() {
    let p = overall_progress(dec!(485), dec!(1200)).unwrap();
    assert_eq!(p.round_dp(1), dec!(40.4));
}

#[test]
fn test_overall_progress_zero_limit() {
    assert_eq!(
        overall_progress(dec!(100), Decimal::ZERO),
        Err(BudgetError::InvalidInput("overall limit"))
    );
}

#[test]
fn test_remaining_may_be_negative() {
    assert_eq!(remaining(dec!(1200), dec!(485)), dec!(715));
    assert_eq!(remaining(dec!(1000), dec!(1100)), dec!(-100));
}

#[test]
fn test_remaining_saturates() {
    assert_eq!(remaining(Decimal::MIN, Decimal::MAX), Decimal::MIN);
    assert_eq!(make_cat(1, Decimal::MIN, Decimal::MAX).remaining(), Decimal::MIN);
}

#[test]
fn test_overall_progress_overflow_is_not_zero_limit() {
    let tiny = Decimal::new(1, 28);
    assert_eq!(
        overall_progress(dec!(1000), tiny),
        Err(BudgetError::Overflow("overall limit"))
    );
}

// ── Category percentage and status ────────────────────────────

#[test]
fn test_category_percentage() {
    assert_eq!(
        category_percentage(&make_cat(1, dec!(400), dec!(320))).unwrap(),
        dec!(80)
    );
    assert_eq!(
        category_percentage(&make_cat(2, dec!(200), dec!(165))).unwrap(),
        dec!(82.5)
    );
}

#[test]
fn test_category_percentage_zero_budget() {
    let cat = make_cat(1, Decimal::ZERO, dec!(10));
    assert_eq!(
        category_percentage(&cat),
        Err(BudgetError::InvalidInput("budgeted amount"))
    );
    assert_eq!(category_status(&cat), BudgetStatus::Unbudgeted);
}

#[test]
fn test_status_boundaries() {
    assert_eq!(status_for(dec!(0)), BudgetStatus::Good);
    assert_eq!(status_for(dec!(79.99)), BudgetStatus::Good);
    assert_eq!(status_for(dec!(80)), BudgetStatus::Warning);
    assert_eq!(status_for(dec!(99.999)), BudgetStatus::Warning);
    assert_eq!(status_for(dec!(100)), BudgetStatus::Over);
    assert_eq!(status_for(dec!(250)), BudgetStatus::Over);
}

#[test]
fn test_status_matches_percentage_tiers() {
    for spent in [0u32, 50, 119, 120, 140, 149, 150, 151, 300] {
        let cat = make_cat(1, dec!(150), Decimal::from(spent));
        let pct = category_percentage(&cat).unwrap();
        let expected = if pct >= dec!(100) {
            BudgetStatus::Over
        } else if pct >= dec!(80) {
            BudgetStatus::Warning
        } else {
            BudgetStatus::Good
        };
        assert_eq!(category_status(&cat), expected, "spent = {spent}");
    }
}

#[test]
fn test_raising_spent_moves_warning_to_over() {
    let mut cat = named(3, "Entertainment", dec!(150), dec!(140));
    assert_eq!(category_percentage(&cat).unwrap().round_dp(1), dec!(93.3));
    assert_eq!(category_status(&cat), BudgetStatus::Warning);

    cat.spent = dec!(160);
    assert_eq!(category_percentage(&cat).unwrap().round_dp(1), dec!(106.7));
    assert_eq!(category_status(&cat), BudgetStatus::Over);

    let alerts = collect_alerts(&[cat], dec!(10000));
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].severity, Severity::Critical);
    assert_eq!(alerts[0].message, "Entertainment budget exceeded by $10.00");
}

#[test]
fn test_round_percent_halves_away_from_zero() {
    assert_eq!(round_percent(dec!(82.5)), dec!(83));
    assert_eq!(round_percent(dec!(82.49)), dec!(82));
    assert_eq!(round_percent(dec!(93.333)), dec!(93));
}

#[test]
fn test_percent_of_guards_zero() {
    assert_eq!(percent_of(dec!(5), Decimal::ZERO), None);
    assert_eq!(percent_of(Decimal::ZERO, dec!(5)), Some(Decimal::ZERO));
}

#[test]
fn test_percent_of_overflow_is_none() {
    assert_eq!(percent_of(Decimal::MAX, dec!(1)), None);
}

#[test]
fn test_category_percentage_overflow_is_over() {
    // Non-zero budget, but the ratio does not fit in a Decimal.
    let cat = make_cat(1, Decimal::new(1, 28), dec!(1000));
    assert_eq!(
        category_percentage(&cat),
        Err(BudgetError::Overflow("budgeted amount"))
    );
    assert_eq!(category_status(&cat), BudgetStatus::Over);

    let alerts = collect_alerts(&[cat], Decimal::ZERO);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].severity, Severity::Critical);
    assert_eq!(alerts[0].scope, AlertScope::Category(1));
    assert!(alerts[0].message.starts_with("Cat 1 budget exceeded by $"));
}

#[test]
fn test_overall_alert_on_progress_overflow() {
    let cats = vec![make_cat(1, dec!(0), dec!(1000))];
    let alerts = collect_alerts(&cats, Decimal::new(1, 28));
    assert_eq!(alerts[0].severity, Severity::Critical);
    assert_eq!(alerts[0].scope, AlertScope::Overall);
}

#[test]
fn test_summarize_max_amounts_does_not_panic() {
    let cats = vec![
        make_cat(1, Decimal::MAX, Decimal::MAX),
        make_cat(2, Decimal::MAX, Decimal::MAX),
    ];
    let summary = summarize(&cats, dec!(1200));
    assert_eq!(summary.total_budgeted, Decimal::MAX);
    assert_eq!(summary.total_spent, Decimal::MAX);
    assert_eq!(summary.overall_progress, None);
    assert_eq!(summary.remaining, dec!(1200) - Decimal::MAX);
    assert_eq!(summary.rows[0].status, BudgetStatus::Over);
    assert_eq!(summary.alerts[0].scope, AlertScope::Overall);
    assert_eq!(summary.alerts[0].severity, Severity::Critical);
}

// ── Alerts ────────────────────────────────────────────────────

#[test]
fn test_alerts_reference_example() {
    let cats = vec![
        named(1, "Food & Dining", dec!(400), dec!(320)),
        named(2, "Transportation", dec!(200), dec!(165)),
    ];
    let alerts = collect_alerts(&cats, dec!(1200));

    // 40.4% overall: no overall alert
    assert_eq!(alerts.len(), 2);
    assert!(alerts.iter().all(|a| a.scope != AlertScope::Overall));
    assert_eq!(alerts[0].severity, Severity::Warning);
    assert_eq!(alerts[0].scope, AlertScope::Category(1));
    assert_eq!(alerts[0].message, "Food & Dining budget is 80% used");
    assert_eq!(alerts[1].severity, Severity::Warning);
    assert_eq!(alerts[1].message, "Transportation budget is 83% used");
}

#[test]
fn test_overall_critical_wins_over_warning() {
    let cats = vec![make_cat(1, dec!(5000), dec!(1100))];
    let alerts = collect_alerts(&cats, dec!(1200));
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].scope, AlertScope::Overall);
    assert_eq!(alerts[0].severity, Severity::Critical);
    assert_eq!(
        alerts[0].message,
        "You've exceeded 90% of your monthly budget limit!"
    );
}

#[test]
fn test_overall_warning_band() {
    // 75% exactly warns, 74.99% does not
    let at = collect_alerts(&[make_cat(1, dec!(5000), dec!(900))], dec!(1200));
    assert_eq!(at.len(), 1);
    assert_eq!(at[0].severity, Severity::Warning);
    assert_eq!(at[0].message, "You're approaching your monthly budget limit.");

    let below = collect_alerts(&[make_cat(1, dec!(5000), dec!(899.88))], dec!(1200));
    assert!(below.is_empty());
}

#[test]
fn test_overall_alert_is_unique_and_first() {
    let cats = vec![
        make_cat(1, dec!(100), dec!(150)),
        make_cat(2, dec!(100), dec!(90)),
        make_cat(3, dec!(100), dec!(10)),
    ];
    let alerts = collect_alerts(&cats, dec!(250));
    let overall: Vec<usize> = alerts
        .iter()
        .enumerate()
        .filter(|(_, a)| a.scope == AlertScope::Overall)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(overall, vec![0]);
    assert_eq!(
        alerts.iter().skip(1).map(|a| a.scope).collect::<Vec<_>>(),
        vec![AlertScope::Category(1), AlertScope::Category(2)]
    );
}

#[test]
fn test_no_overall_alert_for_zero_limit() {
    let cats = vec![make_cat(1, dec!(100), dec!(50))];
    assert!(collect_alerts(&cats, Decimal::ZERO).is_empty());
}

#[test]
fn test_unbudgeted_category_has_no_alert() {
    let cats = vec![make_cat(1, Decimal::ZERO, dec!(50))];
    assert!(collect_alerts(&cats, dec!(10000)).is_empty());
}

#[test]
fn test_alerts_empty_list() {
    assert!(collect_alerts(&[], dec!(1200)).is_empty());
}

// ── Summary ───────────────────────────────────────────────────

#[test]
fn test_summarize() {
    let cats = vec![
        make_cat(1, dec!(400), dec!(320)),
        make_cat(2, dec!(200), dec!(165)),
        make_cat(3, Decimal::ZERO, Decimal::ZERO),
    ];
    let summary = summarize(&cats, dec!(1200));
    assert_eq!(summary.total_budgeted, dec!(600));
    assert_eq!(summary.total_spent, dec!(485));
    assert_eq!(summary.remaining, dec!(715));
    assert_eq!(summary.overall_progress.unwrap().round_dp(1), dec!(40.4));
    assert_eq!(summary.rows.len(), 3);
    assert_eq!(summary.rows[0].status, BudgetStatus::Warning);
    assert_eq!(summary.rows[0].remaining, dec!(80));
    assert_eq!(summary.rows[2].percentage, None);
    assert_eq!(summary.rows[2].status, BudgetStatus::Unbudgeted);
    assert_eq!(summary.alerts.len(), 2);
}

#[test]
fn test_summary_default_is_empty() {
    let summary = BudgetSummary::default();
    assert!(summary.rows.is_empty());
    assert!(summary.alerts.is_empty());
    assert_eq!(summary.overall_progress, None);
}
