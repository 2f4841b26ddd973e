// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Demo data shown on first launch, before anything has been saved.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use crate::models::{Budget, BudgetPeriod, Category, Transaction, TransactionType};

#[allow(clippy::too_many_arguments)]
fn demo(
    id: &str,
    title: &str,
    amount: Decimal,
    kind: TransactionType,
    category: Category,
    date: DateTime<Utc>,
    description: &str,
    location: Option<&str>,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        title: title.to_string(),
        amount,
        r#type: kind,
        category,
        date,
        description: Some(description.to_string()),
        location: location.map(str::to_string),
    }
}

/// Five recent transactions dated relative to `now`, newest first.
pub fn demo_transactions(now: DateTime<Utc>) -> Vec<Transaction> {
    use TransactionType::{Expense, Income};
    vec![
        demo("1", "Coffee Shop", Decimal::new(450, 2), Expense, Category::Food, now, "Morning coffee", Some("Starbucks")),
        demo("2", "Grocery Store", Decimal::new(8530, 2), Expense, Category::Groceries, now - Duration::days(1), "Weekly groceries", None),
        demo("3", "Salary", Decimal::new(350000, 2), Income, Category::Salary, now - Duration::days(2), "Monthly salary payment", None),
        demo("4", "Uber Ride", Decimal::new(1275, 2), Expense, Category::Transport, now - Duration::days(3), "Ride to downtown", None),
        demo("5", "Netflix Subscription", Decimal::new(1599, 2), Expense, Category::Entertainment, now - Duration::days(5), "Monthly subscription", None),
    ]
}

pub fn demo_budgets() -> Vec<Budget> {
    let budget = |id: &str, category, limit: i64, spent| Budget {
        id: id.to_string(),
        category,
        limit: Decimal::from(limit),
        spent,
        period: BudgetPeriod::Monthly,
    };
    vec![
        budget("1", Category::Food, 200, Decimal::new(4550, 2)),
        budget("2", Category::Transport, 100, Decimal::new(6725, 2)),
        budget("3", Category::Entertainment, 50, Decimal::new(3599, 2)),
    ]
}
