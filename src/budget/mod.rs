//! Derived budget figures.
//!
//! Everything here is a pure function of a category list and the overall
//! monthly limit. Percentages are computed in `Decimal`, so the 80 / 100
//! boundaries are exact.

mod alert;

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

use crate::models::BudgetCategory;

pub(crate) use alert::{collect_alerts, Alert, AlertScope, Severity};

/// Category utilisation at which a category turns `Warning`.
pub(crate) const WARNING_PERCENT: Decimal = Decimal::from_parts(80, 0, 0, false, 0);
/// Category utilisation at which a category is `Over`.
pub(crate) const OVER_PERCENT: Decimal = Decimal::ONE_HUNDRED;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum BudgetError {
    /// A percentage was requested against a zero denominator.
    #[error("no percentage available: {0} is zero")]
    InvalidInput(&'static str),
    /// The percentage does not fit in a `Decimal`.
    #[error("percentage of {0} is out of range")]
    Overflow(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BudgetStatus {
    Good,
    Warning,
    Over,
    /// Budgeted amount is zero, so there is no percentage to classify.
    Unbudgeted,
}

impl BudgetStatus {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Over => "over",
            Self::Unbudgeted => "no budget",
        }
    }
}

impl std::fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sum that clamps at `Decimal::MAX` / `Decimal::MIN` instead of panicking.
pub(crate) fn saturating_total(amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
    amounts
        .into_iter()
        .fold(Decimal::ZERO, |acc, amount| acc.saturating_add(amount))
}

pub(crate) fn total_budgeted(categories: &[BudgetCategory]) -> Decimal {
    saturating_total(categories.iter().map(|c| c.budgeted))
}

pub(crate) fn total_spent(categories: &[BudgetCategory]) -> Decimal {
    saturating_total(categories.iter().map(|c| c.spent))
}

/// `total_spent / overall_limit * 100`.
pub(crate) fn overall_progress(
    total_spent: Decimal,
    overall_limit: Decimal,
) -> Result<Decimal, BudgetError> {
    checked_percent(total_spent, overall_limit, "overall limit")
}

/// What is left of the overall limit. Negative once the limit is exceeded.
pub(crate) fn remaining(overall_limit: Decimal, total_spent: Decimal) -> Decimal {
    overall_limit.saturating_sub(total_spent)
}

/// `spent / budgeted * 100` for one category.
pub(crate) fn category_percentage(category: &BudgetCategory) -> Result<Decimal, BudgetError> {
    checked_percent(category.spent, category.budgeted, "budgeted amount")
}

pub(crate) fn category_status(category: &BudgetCategory) -> BudgetStatus {
    match category_percentage(category) {
        Ok(percentage) => status_for(percentage),
        Err(BudgetError::InvalidInput(_)) => BudgetStatus::Unbudgeted,
        Err(BudgetError::Overflow(_)) => status_for(overflowed_percent(
            category.spent,
            category.budgeted,
        )),
    }
}

/// Classify a utilisation percentage. Each tier includes its lower bound.
pub(crate) fn status_for(percentage: Decimal) -> BudgetStatus {
    if percentage >= OVER_PERCENT {
        BudgetStatus::Over
    } else if percentage >= WARNING_PERCENT {
        BudgetStatus::Warning
    } else {
        BudgetStatus::Good
    }
}

/// `part / whole * 100`, or `None` when `whole` is zero or the result
/// does not fit in a `Decimal`.
pub(crate) fn percent_of(part: Decimal, whole: Decimal) -> Option<Decimal> {
    checked_percent(part, whole, "denominator").ok()
}

fn checked_percent(
    part: Decimal,
    whole: Decimal,
    what: &'static str,
) -> Result<Decimal, BudgetError> {
    if whole.is_zero() {
        return Err(BudgetError::InvalidInput(what));
    }
    part.checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|scaled| scaled.checked_div(whole))
        .ok_or(BudgetError::Overflow(what))
}

/// Stand-in for a percentage that overflowed: the extreme with the
/// quotient's sign.
pub(crate) fn overflowed_percent(part: Decimal, whole: Decimal) -> Decimal {
    if part.is_sign_negative() == whole.is_sign_negative() {
        Decimal::MAX
    } else {
        Decimal::MIN
    }
}

/// Round a percentage to a whole number, halves away from zero.
pub(crate) fn round_percent(percentage: Decimal) -> Decimal {
    percentage.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Per-category figures, in the same order as the input list.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CategoryRow {
    pub(crate) id: u64,
    pub(crate) percentage: Option<Decimal>,
    pub(crate) status: BudgetStatus,
    pub(crate) remaining: Decimal,
}

/// Every derived value a screen needs, computed in one pass.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BudgetSummary {
    pub(crate) overall_limit: Decimal,
    pub(crate) total_budgeted: Decimal,
    pub(crate) total_spent: Decimal,
    pub(crate) overall_progress: Option<Decimal>,
    pub(crate) remaining: Decimal,
    pub(crate) rows: Vec<CategoryRow>,
    pub(crate) alerts: Vec<Alert>,
}

impl Default for BudgetSummary {
    fn default() -> Self {
        summarize(&[], Decimal::ZERO)
    }
}

pub(crate) fn summarize(categories: &[BudgetCategory], overall_limit: Decimal) -> BudgetSummary {
    let spent = total_spent(categories);
    let rows = categories
        .iter()
        .map(|c| CategoryRow {
            id: c.id,
            percentage: category_percentage(c).ok(),
            status: category_status(c),
            remaining: c.remaining(),
        })
        .collect();

    BudgetSummary {
        overall_limit,
        total_budgeted: total_budgeted(categories),
        total_spent: spent,
        overall_progress: overall_progress(spent, overall_limit).ok(),
        remaining: remaining(overall_limit, spent),
        rows,
        alerts: collect_alerts(categories, overall_limit),
    }
}

#[cfg(test)]
mod tests;
