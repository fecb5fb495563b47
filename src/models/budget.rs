use rust_decimal::Decimal;

/// Colour given to categories created at runtime.
pub const DEFAULT_BUDGET_COLOR: &str = "#6366f1";

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetCategory {
    pub id: u64,
    /// Display label. Not required to be unique.
    pub category: String,
    /// Monthly limit for this category.
    pub budgeted: Decimal,
    pub spent: Decimal,
    /// Hex colour, display only.
    pub color: String,
}

impl BudgetCategory {
    pub fn new(id: u64, category: String, budgeted: Decimal) -> Self {
        Self {
            id,
            category,
            budgeted,
            spent: Decimal::ZERO,
            color: DEFAULT_BUDGET_COLOR.to_string(),
        }
    }

    pub fn with_spent(mut self, spent: Decimal) -> Self {
        self.spent = spent;
        self
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = color.to_string();
        self
    }

    /// Amount left in this category; negative once over budget.
    pub fn remaining(&self) -> Decimal {
        self.budgeted.saturating_sub(self.spent)
    }

    /// Find a category by ID in a slice.
    pub fn find_by_id(categories: &[BudgetCategory], id: u64) -> Option<&BudgetCategory> {
        categories.iter().find(|c| c.id == id)
    }
}

impl std::fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.category)
    }
}
