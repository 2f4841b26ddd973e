// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure aggregation over a transaction list: totals, category spending,
//! monthly trends and period-windowed budget progress.
//!
//! Nothing here holds state or touches its input; functions that depend on
//! the current time take `now` explicitly. Sums saturate at `Decimal::MAX`
//! / `Decimal::MIN` instead of overflowing.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::models::{
    AnalyticsData, BudgetPeriod, BudgetProgress, Category, MonthlyTrend, Period, Transaction,
    TransactionType,
};

const TREND_MONTHS: usize = 12;

/// Income minus expenses over the whole list.
pub fn calculate_balance(transactions: &[Transaction]) -> Decimal {
    transactions
        .iter()
        .fold(Decimal::ZERO, |balance, t| match t.r#type {
            TransactionType::Income => balance.saturating_add(t.amount),
            TransactionType::Expense => balance.saturating_sub(t.amount),
        })
}

pub fn calculate_total_by_type(transactions: &[Transaction], kind: TransactionType) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.r#type == kind)
        .map(|t| t.amount)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Expense totals per category. Categories without expenses are absent.
pub fn calculate_category_spending(transactions: &[Transaction]) -> BTreeMap<Category, Decimal> {
    let mut spending = BTreeMap::new();
    for t in transactions
        .iter()
        .filter(|t| t.r#type == TransactionType::Expense)
    {
        let total = spending.entry(t.category).or_insert(Decimal::ZERO);
        *total = total.saturating_add(t.amount);
    }
    spending
}

/// Income and expense sums per calendar month, oldest first, limited to the
/// twelve most recent months that have at least one transaction.
pub fn get_monthly_trends(transactions: &[Transaction]) -> Vec<MonthlyTrend> {
    let mut months: BTreeMap<(i32, u32), (Decimal, Decimal)> = BTreeMap::new();
    for t in transactions {
        let entry = months
            .entry((t.date.year(), t.date.month()))
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        match t.r#type {
            TransactionType::Income => entry.0 = entry.0.saturating_add(t.amount),
            TransactionType::Expense => entry.1 = entry.1.saturating_add(t.amount),
        }
    }

    let skip = months.len().saturating_sub(TREND_MONTHS);
    months
        .into_iter()
        .skip(skip)
        .map(|((year, month), (income, expenses))| MonthlyTrend {
            key: format!("{:04}-{:02}", year, month),
            month: month_label(year, month),
            income,
            expenses,
        })
        .collect()
}

fn month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%b").to_string())
        .unwrap_or_default()
}

/// Inclusive lower bound of the lookback window ending at `now`.
pub fn window_start(period: Period, now: DateTime<Utc>) -> DateTime<Utc> {
    let start = match period {
        Period::Week => now.checked_sub_signed(Duration::days(7)),
        Period::Month => now.checked_sub_months(Months::new(1)),
        Period::Year => now.checked_sub_months(Months::new(12)),
    };
    start.unwrap_or(DateTime::<Utc>::MIN_UTC)
}

fn in_window(t: &Transaction, start: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    t.date >= start && t.date <= now
}

/// Transactions dated within `[now - period, now]`, in list order.
pub fn get_transactions_for_period(
    transactions: &[Transaction],
    period: Period,
    now: DateTime<Utc>,
) -> Vec<&Transaction> {
    let start = window_start(period, now);
    transactions
        .iter()
        .filter(|t| in_window(t, start, now))
        .collect()
}

pub fn calculate_budget_progress(
    transactions: &[Transaction],
    category: Category,
    limit: Decimal,
    period: BudgetPeriod,
    now: DateTime<Utc>,
) -> BudgetProgress {
    let start = window_start(period.window(), now);
    let spent: Decimal = transactions
        .iter()
        .filter(|t| {
            t.r#type == TransactionType::Expense
                && t.category == category
                && in_window(t, start, now)
        })
        .map(|t| t.amount)
        .fold(Decimal::ZERO, Decimal::saturating_add);

    let remaining = limit.saturating_sub(spent).max(Decimal::ZERO);
    let percentage = if limit > Decimal::ZERO {
        percent_of(spent, limit)
    } else {
        Decimal::ZERO
    };
    BudgetProgress {
        spent,
        remaining,
        percentage,
    }
}

/// Full analytics snapshot for the given list.
pub fn summarize(transactions: &[Transaction]) -> AnalyticsData {
    AnalyticsData {
        total_income: calculate_total_by_type(transactions, TransactionType::Income),
        total_expenses: calculate_total_by_type(transactions, TransactionType::Expense),
        balance: calculate_balance(transactions),
        category_spending: calculate_category_spending(transactions),
        monthly_trends: get_monthly_trends(transactions),
    }
}

/// Non-zero categories sorted by amount, largest first, at most `n`.
pub fn top_categories(spending: &BTreeMap<Category, Decimal>, n: usize) -> Vec<(Category, Decimal)> {
    let mut items: Vec<(Category, Decimal)> = spending
        .iter()
        .filter(|(_, amount)| **amount > Decimal::ZERO)
        .map(|(c, a)| (*c, *a))
        .collect();
    // Stable sort keeps category order among equal amounts.
    items.sort_by(|a, b| b.1.cmp(&a.1));
    items.truncate(n);
    items
}

/// `amount` as a percentage of `total`; zero when `total` is zero.
pub fn share_of(amount: Decimal, total: Decimal) -> Decimal {
    if total.is_zero() {
        Decimal::ZERO
    } else {
        percent_of(amount, total)
    }
}

// Ratio too large to represent reads as `Decimal::MAX`.
fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    part.checked_div(whole)
        .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::MAX)
}

/// First `n` entries of a most-recent-first list.
pub fn recent_transactions(transactions: &[Transaction], n: usize) -> &[Transaction] {
    &transactions[..n.min(transactions.len())]
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    All,
    Only(TransactionType),
}

#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub query: String,
    pub kind: TypeFilter,
}

/// Case-insensitive search on title or description combined with a type
/// filter. An empty query matches everything.
pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    filter: &TransactionFilter,
) -> Vec<&'a Transaction> {
    let needle = filter.query.trim().to_lowercase();
    transactions
        .iter()
        .filter(|t| {
            needle.is_empty()
                || t.title.to_lowercase().contains(&needle)
                || t
                    .description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
        })
        .filter(|t| match filter.kind {
            TypeFilter::All => true,
            TypeFilter::Only(kind) => t.r#type == kind,
        })
        .collect()
}
