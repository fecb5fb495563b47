use rust_decimal::Decimal;

use super::{
    category_percentage, category_status, overall_progress, overflowed_percent, round_percent,
    total_spent, BudgetError, BudgetStatus,
};
use crate::models::BudgetCategory;

const OVERALL_CRITICAL_PERCENT: Decimal = Decimal::from_parts(90, 0, 0, false, 0);
const OVERALL_WARNING_PERCENT: Decimal = Decimal::from_parts(75, 0, 0, false, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Severity {
    Critical,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Critical => write!(f, "CRITICAL"),
            Self::Warning => write!(f, "WARNING"),
        }
    }
}

/// What an alert is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AlertScope {
    Overall,
    Category(u64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Alert {
    pub(crate) severity: Severity,
    pub(crate) scope: AlertScope,
    pub(crate) message: String,
}

/// Alerts for the current budget state.
///
/// At most one overall alert comes first, then one alert per category that
/// is at or above the warning threshold, in list order. Categories with a
/// zero budget produce no alert, and a zero overall limit produces no
/// overall alert.
pub(crate) fn collect_alerts(categories: &[BudgetCategory], overall_limit: Decimal) -> Vec<Alert> {
    let mut alerts = Vec::new();

    let spent = total_spent(categories);
    match overall_progress(spent, overall_limit) {
        Ok(progress) => alerts.extend(overall_alert(progress)),
        Err(BudgetError::Overflow(_)) => {
            alerts.extend(overall_alert(overflowed_percent(spent, overall_limit)));
        }
        Err(BudgetError::InvalidInput(_)) => {}
    }
    alerts.extend(categories.iter().filter_map(category_alert));

    alerts
}

fn overall_alert(progress: Decimal) -> Option<Alert> {
    let (severity, message) = if progress >= OVERALL_CRITICAL_PERCENT {
        (
            Severity::Critical,
            "You've exceeded 90% of your monthly budget limit!",
        )
    } else if progress >= OVERALL_WARNING_PERCENT {
        (
            Severity::Warning,
            "You're approaching your monthly budget limit.",
        )
    } else {
        return None;
    };

    Some(Alert {
        severity,
        scope: AlertScope::Overall,
        message: message.to_string(),
    })
}

fn category_alert(category: &BudgetCategory) -> Option<Alert> {
    let (severity, message) = match category_status(category) {
        BudgetStatus::Over => (
            Severity::Critical,
            format!(
                "{} budget exceeded by ${:.2}",
                category.category,
                category.spent.saturating_sub(category.budgeted)
            ),
        ),
        BudgetStatus::Warning => (
            Severity::Warning,
            format!(
                "{} budget is {}% used",
                category.category,
                round_percent(category_percentage(category).ok()?)
            ),
        ),
        BudgetStatus::Good | BudgetStatus::Unbudgeted => return None,
    };

    Some(Alert {
        severity,
        scope: AlertScope::Category(category.id),
        message,
    })
}
