// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::{
    calculate_balance, calculate_total_by_type, get_transactions_for_period, share_of,
    top_categories,
};
use crate::models::{Period, Transaction, TransactionType};
use crate::storage::KeyValueStore;
use crate::store::WalletStore;
use crate::utils::{fmt_date, fmt_money, fmt_percentage, fmt_signed, maybe_print_json, pretty_table};
use anyhow::Result;
use chrono::Utc;

pub fn handle<S: KeyValueStore>(wallet: &WalletStore<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(wallet, sub)?,
        Some(("categories", sub)) => categories(wallet, sub)?,
        Some(("trends", sub)) => trends(wallet, sub)?,
        Some(("period", sub)) => period(wallet, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary<S: KeyValueStore>(wallet: &WalletStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let analytics = wallet.analytics();
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &analytics)? {
        let data = vec![
            vec!["Income".to_string(), fmt_money(&analytics.total_income)],
            vec!["Expenses".to_string(), fmt_money(&analytics.total_expenses)],
            vec!["Balance".to_string(), fmt_money(&analytics.balance)],
        ];
        println!("{}", pretty_table(&["", "Amount"], data));
    }
    Ok(())
}

/// Rows of `[category, amount, share of expenses]`, largest first.
pub fn category_rows<S: KeyValueStore>(wallet: &WalletStore<S>, top: usize) -> Vec<Vec<String>> {
    let analytics = wallet.analytics();
    top_categories(&analytics.category_spending, top)
        .into_iter()
        .map(|(category, amount)| {
            vec![
                category.info().name.to_string(),
                fmt_money(&amount),
                fmt_percentage(&share_of(amount, analytics.total_expenses)),
            ]
        })
        .collect()
}

fn categories<S: KeyValueStore>(wallet: &WalletStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let top = sub.get_one::<usize>("top").copied().unwrap_or(6);
    let data = category_rows(wallet, top);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        println!("{}", pretty_table(&["Category", "Spent", "Share"], data));
    }
    Ok(())
}

fn trends<S: KeyValueStore>(wallet: &WalletStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let trends = wallet.analytics().monthly_trends;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &trends)? {
        let data = trends
            .iter()
            .map(|t| {
                vec![
                    t.key.clone(),
                    t.month.clone(),
                    fmt_money(&t.income),
                    fmt_money(&t.expenses),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Key", "Month", "Income", "Expenses"], data)
        );
    }
    Ok(())
}

fn period<S: KeyValueStore>(wallet: &WalletStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let period = match sub.get_one::<String>("period") {
        Some(p) => p.parse::<Period>()?,
        None => Period::Month,
    };
    let selected: Vec<Transaction> =
        get_transactions_for_period(wallet.transactions(), period, Utc::now())
            .into_iter()
            .cloned()
            .collect();
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &selected)? {
        let mut data: Vec<Vec<String>> = selected
            .iter()
            .map(|t| {
                vec![
                    fmt_date(&t.date),
                    t.title.clone(),
                    fmt_signed(&t.amount, t.r#type == TransactionType::Income),
                ]
            })
            .collect();
        data.push(vec![
            String::new(),
            format!(
                "in {} / out {}",
                fmt_money(&calculate_total_by_type(&selected, TransactionType::Income)),
                fmt_money(&calculate_total_by_type(&selected, TransactionType::Expense))
            ),
            fmt_money(&calculate_balance(&selected)),
        ]);
        println!("{}", pretty_table(&["Date", "Title", "Amount"], data));
    }
    Ok(())
}
