// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            _ => Err(ValidationError::UnknownType(s.to_string())),
        }
    }
}

/// Closed set of category tags. Declaration order is the display order and
/// the ordering used by every category map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Entertainment,
    Bills,
    Health,
    Education,
    Travel,
    Groceries,
    Salary,
    Freelance,
    Business,
    Investment,
    Gift,
    Other,
}

impl Category {
    pub const ALL: [Category; 15] = [
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Entertainment,
        Category::Bills,
        Category::Health,
        Category::Education,
        Category::Travel,
        Category::Groceries,
        Category::Salary,
        Category::Freelance,
        Category::Business,
        Category::Investment,
        Category::Gift,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Transport => "transport",
            Category::Shopping => "shopping",
            Category::Entertainment => "entertainment",
            Category::Bills => "bills",
            Category::Health => "health",
            Category::Education => "education",
            Category::Travel => "travel",
            Category::Groceries => "groceries",
            Category::Salary => "salary",
            Category::Freelance => "freelance",
            Category::Business => "business",
            Category::Investment => "investment",
            Category::Gift => "gift",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == tag)
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Weekly,
    Monthly,
    Yearly,
}

impl BudgetPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetPeriod::Weekly => "weekly",
            BudgetPeriod::Monthly => "monthly",
            BudgetPeriod::Yearly => "yearly",
        }
    }

    /// The lookback window a budget of this period is measured over.
    pub fn window(&self) -> Period {
        match self {
            BudgetPeriod::Weekly => Period::Week,
            BudgetPeriod::Monthly => Period::Month,
            BudgetPeriod::Yearly => Period::Year,
        }
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetPeriod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" => Ok(BudgetPeriod::Weekly),
            "monthly" => Ok(BudgetPeriod::Monthly),
            "yearly" => Ok(BudgetPeriod::Yearly),
            _ => Err(ValidationError::UnknownPeriod(s.to_string())),
        }
    }
}

/// Lookback window for period-filtered views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Week,
    Month,
    Year,
}

impl FromStr for Period {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            "year" => Ok(Period::Year),
            _ => Err(ValidationError::UnknownPeriod(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub title: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub r#type: TransactionType,
    pub category: Category,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// A transaction before the store has assigned it an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub title: String,
    pub amount: Decimal,
    pub r#type: TransactionType,
    pub category: Category,
    pub date: DateTime<Utc>,
    pub description: Option<String>,
    pub location: Option<String>,
}

impl NewTransaction {
    pub fn into_transaction(self, id: String) -> Transaction {
        Transaction {
            id,
            title: self.title,
            amount: self.amount,
            r#type: self.r#type,
            category: self.category,
            date: self.date,
            description: self.description,
            location: self.location,
        }
    }
}

/// Partial update for a transaction. `None` leaves the field as is; for the
/// optional text fields `Some(None)` clears them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionPatch {
    pub title: Option<String>,
    pub amount: Option<Decimal>,
    pub r#type: Option<TransactionType>,
    pub category: Option<Category>,
    pub date: Option<DateTime<Utc>>,
    pub description: Option<Option<String>>,
    pub location: Option<Option<String>>,
}

impl TransactionPatch {
    pub fn apply(self, t: &mut Transaction) {
        if let Some(title) = self.title {
            t.title = title;
        }
        if let Some(amount) = self.amount {
            t.amount = amount;
        }
        if let Some(kind) = self.r#type {
            t.r#type = kind;
        }
        if let Some(category) = self.category {
            t.category = category;
        }
        if let Some(date) = self.date {
            t.date = date;
        }
        if let Some(description) = self.description {
            t.description = description;
        }
        if let Some(location) = self.location {
            t.location = location;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub category: Category,
    pub limit: Decimal,
    // Snapshot only; live figures come from `analytics::calculate_budget_progress`.
    pub spent: Decimal,
    pub period: BudgetPeriod,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewBudget {
    pub category: Category,
    pub limit: Decimal,
    pub period: BudgetPeriod,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetPatch {
    pub category: Option<Category>,
    pub limit: Option<Decimal>,
    pub spent: Option<Decimal>,
    pub period: Option<BudgetPeriod>,
}

impl BudgetPatch {
    pub fn apply(self, b: &mut Budget) {
        if let Some(category) = self.category {
            b.category = category;
        }
        if let Some(limit) = self.limit {
            b.limit = limit;
        }
        if let Some(spent) = self.spent {
            b.spent = spent;
        }
        if let Some(period) = self.period {
            b.period = period;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrend {
    /// `YYYY-MM`, the bucket's sort key.
    pub key: String,
    /// Short month name, e.g. "Jan".
    pub month: String,
    pub income: Decimal,
    pub expenses: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsData {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub balance: Decimal,
    pub category_spending: BTreeMap<Category, Decimal>,
    pub monthly_trends: Vec<MonthlyTrend>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetProgress {
    pub spent: Decimal,
    pub remaining: Decimal,
    pub percentage: Decimal,
}

/// A stored budget together with its live progress.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetStatus {
    pub budget: Budget,
    pub progress: BudgetProgress,
}
