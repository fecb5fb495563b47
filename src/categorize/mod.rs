use std::sync::LazyLock;

use regex::Regex;

use crate::models::ExpenseCategory;

/// A keyword rule: any of `keywords` starting a word in the description
/// suggests `category`.
pub(crate) struct SuggestionRule {
    pub(crate) keywords: &'static [&'static str],
    pub(crate) category: ExpenseCategory,
}

/// Built-in rules, checked in order. Food comes before Shopping so that
/// "grocery shopping" lands in Food & Dining.
const DEFAULT_RULES: &[SuggestionRule] = &[
    SuggestionRule {
        keywords: &[
            "grocer", "coffee", "cafe", "restaurant", "pizza", "burger", "lunch", "dinner",
            "breakfast", "snack", "takeout", "food",
        ],
        category: ExpenseCategory::FoodDining,
    },
    SuggestionRule {
        keywords: &[
            "bus", "train", "metro", "subway", "uber", "lyft", "taxi", "fuel", "gas station",
            "parking", "bike",
        ],
        category: ExpenseCategory::Transportation,
    },
    SuggestionRule {
        keywords: &[
            "movie", "cinema", "concert", "netflix", "spotify", "game", "theater", "theatre",
        ],
        category: ExpenseCategory::Entertainment,
    },
    SuggestionRule {
        keywords: &[
            "textbook", "book", "tuition", "course", "class", "school", "stationery", "notebook",
        ],
        category: ExpenseCategory::Education,
    },
    SuggestionRule {
        keywords: &["amazon", "clothes", "clothing", "shoes", "mall", "shop"],
        category: ExpenseCategory::Shopping,
    },
    SuggestionRule {
        keywords: &["gym", "pharmacy", "doctor", "dentist", "fitness", "yoga", "vitamin"],
        category: ExpenseCategory::HealthFitness,
    },
    SuggestionRule {
        keywords: &[
            "rent", "electric", "water bill", "internet", "phone", "utilit", "bill",
        ],
        category: ExpenseCategory::BillsUtilities,
    },
];

static DEFAULT_CATEGORIZER: LazyLock<Categorizer> = LazyLock::new(|| {
    let (categorizer, bad_patterns) = Categorizer::new(DEFAULT_RULES);
    if !bad_patterns.is_empty() {
        tracing::warn!(?bad_patterns, "skipped invalid suggestion rules");
    }
    categorizer
});

pub(crate) struct Categorizer {
    rules: Vec<CompiledRule>,
}

struct CompiledRule {
    regex: Regex,
    category: ExpenseCategory,
}

impl Categorizer {
    /// Compile `rules`. Rules whose pattern fails to compile are dropped and
    /// their patterns returned alongside.
    pub(crate) fn new(rules: &[SuggestionRule]) -> (Self, Vec<String>) {
        let mut compiled = Vec::with_capacity(rules.len());
        let mut bad_patterns = Vec::new();

        for rule in rules {
            let pattern = word_start_pattern(rule.keywords);
            match Regex::new(&pattern) {
                Ok(regex) => compiled.push(CompiledRule {
                    regex,
                    category: rule.category,
                }),
                Err(_) => bad_patterns.push(pattern),
            }
        }

        (Self { rules: compiled }, bad_patterns)
    }

    /// First matching rule wins.
    pub(crate) fn suggest(&self, description: &str) -> Option<ExpenseCategory> {
        self.rules
            .iter()
            .find(|rule| rule.regex.is_match(description))
            .map(|rule| rule.category)
    }
}

/// Suggest a category for an expense description using the built-in rules.
pub(crate) fn suggest_category(description: &str) -> Option<ExpenseCategory> {
    DEFAULT_CATEGORIZER.suggest(description)
}

fn word_start_pattern(keywords: &[&str]) -> String {
    let alternatives: Vec<String> = keywords.iter().map(|k| regex::escape(k)).collect();
    format!("(?i)(?:^|[^a-z])(?:{})", alternatives.join("|"))
}

#[cfg(test)]
mod tests;
