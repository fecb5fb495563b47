#![allow(clippy::unwrap_used)]

use super::*;
use crate::models::ExpenseCategory;

// ── Default rules ─────────────────────────────────────────────

#[test]
fn test_default_rules_compile() {
    let (_, bad) = Categorizer::new(DEFAULT_RULES);
    assert!(bad.is_empty(), "bad patterns: {bad:?}");
}

#[test]
fn test_suggest_seed_descriptions() {
    assert_eq!(
        suggest_category("Grocery shopping"),
        Some(ExpenseCategory::FoodDining)
    );
    assert_eq!(
        suggest_category("Bus ticket"),
        Some(ExpenseCategory::Transportation)
    );
    assert_eq!(
        suggest_category("Movie ticket"),
        Some(ExpenseCategory::Entertainment)
    );
    assert_eq!(
        suggest_category("Textbook"),
        Some(ExpenseCategory::Education)
    );
    assert_eq!(suggest_category("Coffee"), Some(ExpenseCategory::FoodDining));
}

#[test]
fn test_suggest_case_insensitive() {
    assert_eq!(suggest_category("NETFLIX"), Some(ExpenseCategory::Entertainment));
    assert_eq!(suggest_category("netflix"), Some(ExpenseCategory::Entertainment));
}

#[test]
fn test_suggest_matches_word_start_only() {
    // "rent" inside "parent" must not suggest Bills
    assert_eq!(suggest_category("gift for parent"), None);
    assert_eq!(
        suggest_category("March rent"),
        Some(ExpenseCategory::BillsUtilities)
    );
}

#[test]
fn test_suggest_no_match() {
    assert_eq!(suggest_category("xyz"), None);
    assert_eq!(suggest_category(""), None);
}

// ── Custom rules ──────────────────────────────────────────────

#[test]
fn test_first_match_wins() {
    let rules = [
        SuggestionRule {
            keywords: &["shop"],
            category: ExpenseCategory::Shopping,
        },
        SuggestionRule {
            keywords: &["coffee shop"],
            category: ExpenseCategory::FoodDining,
        },
    ];
    let (cat, _) = Categorizer::new(&rules);
    assert_eq!(cat.suggest("coffee shop"), Some(ExpenseCategory::Shopping));
}

#[test]
fn test_keywords_are_literal() {
    let rules = [SuggestionRule {
        keywords: &["a.b"],
        category: ExpenseCategory::Other,
    }];
    let (cat, bad) = Categorizer::new(&rules);
    assert!(bad.is_empty());
    assert_eq!(cat.suggest("a.b store"), Some(ExpenseCategory::Other));
    assert_eq!(cat.suggest("axb store"), None);
}

#[test]
fn test_empty_rules() {
    let (cat, bad) = Categorizer::new(&[]);
    assert!(bad.is_empty());
    assert_eq!(cat.suggest("anything"), None);
}
