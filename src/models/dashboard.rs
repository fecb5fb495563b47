use rust_decimal::Decimal;

use crate::budget::{percent_of, round_percent, saturating_total};

/// Budget-used figure above which the dashboard shows "Approaching limit".
const APPROACHING_LIMIT_PERCENT: Decimal = Decimal::from_parts(75, 0, 0, false, 0);

#[derive(Debug, Clone, PartialEq)]
pub struct SpendingSlice {
    pub name: String,
    pub amount: Decimal,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub month: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SavingsGoal {
    pub name: String,
    pub current: Decimal,
    pub target: Decimal,
    pub deadline: String,
}

impl SavingsGoal {
    /// Percent of the target saved so far. `None` for a zero target.
    pub fn progress(&self) -> Option<Decimal> {
        percent_of(self.current, self.target)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub category: String,
    pub current: Decimal,
    pub predicted: Decimal,
}

/// Static figures shown on the dashboard screen. Independent of the budget
/// and expense lists.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardSnapshot {
    pub total_balance: Decimal,
    pub monthly_income: Decimal,
    pub monthly_expenses: Decimal,
    /// Percent of the monthly budget used.
    pub budget_used: Decimal,
    pub breakdown: Vec<SpendingSlice>,
    pub trend: Vec<TrendPoint>,
    pub goals: Vec<SavingsGoal>,
    pub predictions: Vec<Prediction>,
}

impl DashboardSnapshot {
    /// Each breakdown slice's share of the breakdown total, as a whole percent.
    pub fn spending_shares(&self) -> Vec<(&str, Decimal)> {
        let total = saturating_total(self.breakdown.iter().map(|s| s.amount));
        self.breakdown
            .iter()
            .map(|s| {
                let share = percent_of(s.amount, total)
                    .map(round_percent)
                    .unwrap_or(Decimal::ZERO);
                (s.name.as_str(), share)
            })
            .collect()
    }

    pub fn approaching_limit(&self) -> bool {
        self.budget_used > APPROACHING_LIMIT_PERCENT
    }
}
