// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Static display metadata for each category tag.

use serde::Serialize;

use crate::models::{Category, TransactionType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub id: Category,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

pub static CATEGORIES: [CategoryInfo; 15] = [
    CategoryInfo { id: Category::Food, name: "Food & Dining", icon: "restaurant", color: "#FFB5B5" },
    CategoryInfo { id: Category::Transport, name: "Transportation", icon: "car", color: "#B5D6FF" },
    CategoryInfo { id: Category::Shopping, name: "Shopping", icon: "shopping-bag", color: "#D5B5FF" },
    CategoryInfo { id: Category::Entertainment, name: "Entertainment", icon: "movie", color: "#FFD5B5" },
    CategoryInfo { id: Category::Bills, name: "Bills & Utilities", icon: "receipt", color: "#B5FFB5" },
    CategoryInfo { id: Category::Health, name: "Health & Fitness", icon: "medical", color: "#FFB5D5" },
    CategoryInfo { id: Category::Education, name: "Education", icon: "school", color: "#B5FFD5" },
    CategoryInfo { id: Category::Travel, name: "Travel", icon: "airplane", color: "#D5FFB5" },
    CategoryInfo { id: Category::Groceries, name: "Groceries", icon: "basket", color: "#FFD5D5" },
    CategoryInfo { id: Category::Salary, name: "Salary", icon: "card", color: "#10B981" },
    CategoryInfo { id: Category::Freelance, name: "Freelance", icon: "briefcase", color: "#3B82F6" },
    CategoryInfo { id: Category::Business, name: "Business", icon: "business", color: "#8B5CF6" },
    CategoryInfo { id: Category::Investment, name: "Investment", icon: "trending-up", color: "#06B6D4" },
    CategoryInfo { id: Category::Gift, name: "Gift", icon: "gift", color: "#F59E0B" },
    CategoryInfo { id: Category::Other, name: "Other", icon: "ellipsis-horizontal", color: "#6B7280" },
];

/// Looks up a category by tag. Unknown tags resolve to the last entry (`other`).
pub fn category_info(tag: &str) -> &'static CategoryInfo {
    CATEGORIES
        .iter()
        .find(|c| c.id.as_str() == tag)
        .unwrap_or(&CATEGORIES[CATEGORIES.len() - 1])
}

impl Category {
    pub fn info(&self) -> &'static CategoryInfo {
        category_info(self.as_str())
    }
}

// Offered when entering income.
const INCOME_CATEGORIES: [Category; 6] = [
    Category::Salary,
    Category::Freelance,
    Category::Business,
    Category::Investment,
    Category::Gift,
    Category::Other,
];

// Hidden when entering an expense.
const INCOME_ONLY: [Category; 4] = [
    Category::Salary,
    Category::Freelance,
    Category::Business,
    Category::Investment,
];

/// Categories offered when entering a transaction of the given type.
pub fn categories_for(kind: TransactionType) -> Vec<&'static CategoryInfo> {
    CATEGORIES
        .iter()
        .filter(|c| match kind {
            TransactionType::Income => INCOME_CATEGORIES.contains(&c.id),
            TransactionType::Expense => !INCOME_ONLY.contains(&c.id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_every_tag_in_order() {
        let ids: Vec<Category> = CATEGORIES.iter().map(|c| c.id).collect();
        assert_eq!(ids, Category::ALL.to_vec());
    }

    #[test]
    fn unknown_tag_falls_back_to_other() {
        assert_eq!(category_info("crypto").id, Category::Other);
        assert_eq!(category_info("").name, "Other");
        assert_eq!(category_info("food").name, "Food & Dining");
    }

    #[test]
    fn expense_entry_hides_income_only_tags() {
        let expense: Vec<Category> = categories_for(TransactionType::Expense)
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(expense.len(), 11);
        assert!(!expense.contains(&Category::Salary));
        assert!(expense.contains(&Category::Gift));

        let income: Vec<Category> = categories_for(TransactionType::Income)
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(income, INCOME_CATEGORIES.to_vec());
    }
}
