// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::{TransactionFilter, TypeFilter, filter_transactions};
use crate::models::{Category, NewTransaction, TransactionPatch, TransactionType};
use crate::storage::KeyValueStore;
use crate::store::WalletStore;
use crate::utils::{fmt_date, fmt_signed, maybe_print_json, parse_date, pretty_table};
use crate::validation::parse_amount;
use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

pub fn handle<S: KeyValueStore>(wallet: &mut WalletStore<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(wallet, sub)?,
        Some(("list", sub)) => list(wallet, sub)?,
        Some(("update", sub)) => update(wallet, sub)?,
        Some(("rm", sub)) => rm(wallet, sub)?,
        _ => {}
    }
    Ok(())
}

fn opt_string(sub: &clap::ArgMatches, name: &str) -> Option<String> {
    sub.get_one::<String>(name).map(|s| s.to_string())
}

/// Builds a validated transaction from `tx add` arguments.
pub fn new_transaction(sub: &clap::ArgMatches) -> Result<NewTransaction> {
    let title = opt_string(sub, "title").unwrap_or_default();
    let amount = parse_amount(sub.get_one::<String>("amount").map_or("", |s| s.as_str()))?;
    let kind = match sub.get_one::<String>("type") {
        Some(t) => t.parse::<TransactionType>()?,
        None => TransactionType::Expense,
    };
    let category = match sub.get_one::<String>("category") {
        Some(c) => c.parse::<Category>()?,
        None => Category::Other,
    };
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => Utc::now(),
    };
    let draft = NewTransaction {
        title,
        amount,
        r#type: kind,
        category,
        date,
        description: opt_string(sub, "description"),
        location: opt_string(sub, "location"),
    };
    Ok(draft.validate()?)
}

fn add<S: KeyValueStore>(wallet: &mut WalletStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let draft = new_transaction(sub)?;
    let summary = format!(
        "{} {} '{}' ({})",
        draft.r#type,
        fmt_signed(&draft.amount, draft.r#type == TransactionType::Income),
        draft.title,
        draft.category
    );
    let id = wallet.add_transaction(draft);
    println!("Recorded {} [id {}]", summary, id);
    Ok(())
}

/// Builds a validated patch from `tx update` arguments.
pub fn transaction_patch(sub: &clap::ArgMatches) -> Result<TransactionPatch> {
    let description = if sub.get_flag("clear-description") {
        Some(None)
    } else {
        opt_string(sub, "description").map(Some)
    };
    let location = if sub.get_flag("clear-location") {
        Some(None)
    } else {
        opt_string(sub, "location").map(Some)
    };
    let patch = TransactionPatch {
        title: opt_string(sub, "title"),
        amount: sub
            .get_one::<String>("amount")
            .map(|s| parse_amount(s))
            .transpose()?,
        r#type: sub
            .get_one::<String>("type")
            .map(|s| s.parse::<TransactionType>())
            .transpose()?,
        category: sub
            .get_one::<String>("category")
            .map(|s| s.parse::<Category>())
            .transpose()?,
        date: sub
            .get_one::<String>("date")
            .map(|s| parse_date(s))
            .transpose()?,
        description,
        location,
    };
    Ok(patch.validate()?)
}

fn update<S: KeyValueStore>(wallet: &mut WalletStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").context("id missing")?;
    let patch = transaction_patch(sub)?;
    let known = wallet.transaction(id).is_some();
    wallet.update_transaction(id, patch);
    if known {
        println!("Updated transaction {}", id);
    } else {
        println!("No transaction with id {}", id);
    }
    Ok(())
}

fn rm<S: KeyValueStore>(wallet: &mut WalletStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").context("id missing")?;
    let known = wallet.transaction(id).is_some();
    wallet.delete_transaction(id);
    if known {
        println!("Deleted transaction {}", id);
    } else {
        println!("No transaction with id {}", id);
    }
    Ok(())
}

fn list<S: KeyValueStore>(wallet: &WalletStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(wallet, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.date.clone(),
                    r.title.clone(),
                    r.category.clone(),
                    r.amount.clone(),
                    r.description.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Title", "Category", "Amount", "Description"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub title: String,
    pub r#type: String,
    pub category: String,
    pub amount: String,
    pub description: String,
    pub location: String,
}

pub fn query_rows<S: KeyValueStore>(
    wallet: &WalletStore<S>,
    sub: &clap::ArgMatches,
) -> Result<Vec<TransactionRow>> {
    let kind = match sub.get_one::<String>("type").map(|s| s.as_str()) {
        None | Some("all") => TypeFilter::All,
        Some(t) => TypeFilter::Only(t.parse()?),
    };
    let filter = TransactionFilter {
        query: opt_string(sub, "search").unwrap_or_default(),
        kind,
    };
    let limit = sub.get_one::<usize>("limit").copied().unwrap_or(usize::MAX);

    let data = filter_transactions(wallet.transactions(), &filter)
        .into_iter()
        .take(limit)
        .map(|t| TransactionRow {
            id: t.id.clone(),
            date: fmt_date(&t.date),
            title: t.title.clone(),
            r#type: t.r#type.to_string(),
            category: t.category.info().name.to_string(),
            amount: fmt_signed(&t.amount, t.r#type == TransactionType::Income),
            description: t.description.clone().unwrap_or_default(),
            location: t.location.clone().unwrap_or_default(),
        })
        .collect();
    Ok(data)
}
