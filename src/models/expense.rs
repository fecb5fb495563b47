use chrono::NaiveDate;
use rust_decimal::Decimal;

/// The fixed set of categories an expense can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpenseCategory {
    FoodDining,
    Transportation,
    Entertainment,
    Education,
    Shopping,
    HealthFitness,
    BillsUtilities,
    Other,
}

impl ExpenseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FoodDining => "Food & Dining",
            Self::Transportation => "Transportation",
            Self::Entertainment => "Entertainment",
            Self::Education => "Education",
            Self::Shopping => "Shopping",
            Self::HealthFitness => "Health & Fitness",
            Self::BillsUtilities => "Bills & Utilities",
            Self::Other => "Other",
        }
    }

    /// Case-insensitive lookup by display name or short alias.
    /// Returns `None` for anything outside the fixed list.
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        let found = match lower.as_str() {
            "food & dining" | "food and dining" | "food" | "dining" => Self::FoodDining,
            "transportation" | "transport" => Self::Transportation,
            "entertainment" | "fun" => Self::Entertainment,
            "education" | "school" => Self::Education,
            "shopping" => Self::Shopping,
            "health & fitness" | "health and fitness" | "health" | "fitness" => {
                Self::HealthFitness
            }
            "bills & utilities" | "bills and utilities" | "bills" | "utilities" => {
                Self::BillsUtilities
            }
            "other" => Self::Other,
            _ => return None,
        };
        Some(found)
    }

    pub fn all() -> &'static [ExpenseCategory] {
        &[
            Self::FoodDining,
            Self::Transportation,
            Self::Entertainment,
            Self::Education,
            Self::Shopping,
            Self::HealthFitness,
            Self::BillsUtilities,
            Self::Other,
        ]
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: u64,
    pub amount: Decimal,
    pub description: String,
    pub category: ExpenseCategory,
    pub date: NaiveDate,
    pub is_recurring: bool,
}

impl Expense {
    /// Case-insensitive substring match on description or category name.
    /// An empty term matches everything.
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.description.to_lowercase().contains(&needle)
            || self.category.as_str().to_lowercase().contains(&needle)
    }
}
