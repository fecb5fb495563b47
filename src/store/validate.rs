use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::categorize::suggest_category;
use crate::models::ExpenseCategory;

/// Largest amount accepted from user input: one trillion.
pub(crate) const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum ValidationError {
    #[error("Missing information: please fill in {0}")]
    MissingInformation(&'static str),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Amount too large: {0} (limit is 1,000,000,000,000)")]
    AmountTooLarge(String),
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("No entry with id {0}")]
    NotFound(u64),
}

/// A budget category that passed validation and can be inserted.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NewBudget {
    pub(crate) category: String,
    pub(crate) budgeted: Decimal,
}

/// An expense that passed validation and can be inserted.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NewExpense {
    pub(crate) amount: Decimal,
    pub(crate) description: String,
    pub(crate) category: ExpenseCategory,
}

/// Parse a non-negative monetary amount no larger than [`MAX_AMOUNT`]. A
/// leading `$` and thousands separators are accepted.
pub(crate) fn parse_amount(raw: &str) -> Result<Decimal, ValidationError> {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();

    let amount =
        Decimal::from_str(&cleaned).map_err(|_| ValidationError::InvalidAmount(raw.trim().into()))?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ValidationError::InvalidAmount(raw.trim().into()));
    }
    if amount > MAX_AMOUNT {
        return Err(ValidationError::AmountTooLarge(raw.trim().into()));
    }
    Ok(amount)
}

pub(crate) fn parse_new_budget(name: &str, amount: &str) -> Result<NewBudget, ValidationError> {
    let name = name.trim();
    if name.is_empty() || amount.trim().is_empty() {
        return Err(ValidationError::MissingInformation("both category and amount"));
    }
    Ok(NewBudget {
        category: name.to_string(),
        budgeted: parse_amount(amount)?,
    })
}

pub(crate) fn parse_limit(amount: &str) -> Result<Decimal, ValidationError> {
    if amount.trim().is_empty() {
        return Err(ValidationError::MissingInformation("the monthly limit"));
    }
    parse_amount(amount)
}

/// Validate a new expense. With no category given, one is suggested from
/// the description, falling back to Other.
pub(crate) fn parse_new_expense(
    amount: &str,
    description: &str,
    category: Option<&str>,
) -> Result<NewExpense, ValidationError> {
    let description = description.trim();
    if amount.trim().is_empty() || description.is_empty() {
        return Err(ValidationError::MissingInformation("all fields"));
    }
    let amount = parse_amount(amount)?;

    let category = match category.map(str::trim).filter(|c| !c.is_empty()) {
        Some(name) => ExpenseCategory::parse(name)
            .ok_or_else(|| ValidationError::UnknownCategory(name.to_string()))?,
        None => suggest_category(description).unwrap_or(ExpenseCategory::Other),
    };

    Ok(NewExpense {
        amount,
        description: description.to_string(),
        category,
    })
}
