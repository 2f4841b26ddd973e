// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{BudgetPatch, BudgetPeriod, Category, NewBudget};
use crate::storage::KeyValueStore;
use crate::store::WalletStore;
use crate::utils::{fmt_money, fmt_percentage, maybe_print_json, parse_decimal, pretty_table};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
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

fn add<S: KeyValueStore>(wallet: &mut WalletStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let category = sub
        .get_one::<String>("category")
        .context("category missing")?
        .parse::<Category>()?;
    let limit = parse_decimal(sub.get_one::<String>("limit").context("limit missing")?)?;
    let period = match sub.get_one::<String>("period") {
        Some(p) => p.parse::<BudgetPeriod>()?,
        None => BudgetPeriod::Monthly,
    };
    let budget = NewBudget {
        category,
        limit,
        period,
    }
    .validate()?;
    let id = wallet.add_budget(budget);
    println!(
        "Budget set for {} ({}) = {} [id {}]",
        category,
        period,
        fmt_money(&limit),
        id
    );
    Ok(())
}

fn update<S: KeyValueStore>(wallet: &mut WalletStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").context("id missing")?;
    let patch = BudgetPatch {
        category: sub
            .get_one::<String>("category")
            .map(|s| s.parse::<Category>())
            .transpose()?,
        limit: sub
            .get_one::<String>("limit")
            .map(|s| parse_decimal(s))
            .transpose()?,
        spent: None,
        period: sub
            .get_one::<String>("period")
            .map(|s| s.parse::<BudgetPeriod>())
            .transpose()?,
    }
    .validate()?;
    let known = wallet.budget(id).is_some();
    wallet.update_budget(id, patch);
    if known {
        println!("Updated budget {}", id);
    } else {
        println!("No budget with id {}", id);
    }
    Ok(())
}

fn rm<S: KeyValueStore>(wallet: &mut WalletStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").context("id missing")?;
    let known = wallet.budget(id).is_some();
    wallet.delete_budget(id);
    if known {
        println!("Deleted budget {}", id);
    } else {
        println!("No budget with id {}", id);
    }
    Ok(())
}

#[derive(Serialize)]
pub struct BudgetRow {
    pub id: String,
    pub category: String,
    pub period: String,
    pub limit: String,
    pub spent: String,
    pub remaining: String,
    pub percentage: String,
}

pub fn budget_rows<S: KeyValueStore>(wallet: &WalletStore<S>, now: DateTime<Utc>) -> Vec<BudgetRow> {
    wallet
        .budget_statuses(now)
        .into_iter()
        .map(|s| BudgetRow {
            id: s.budget.id,
            category: s.budget.category.info().name.to_string(),
            period: s.budget.period.to_string(),
            limit: fmt_money(&s.budget.limit),
            spent: fmt_money(&s.progress.spent),
            remaining: fmt_money(&s.progress.remaining),
            percentage: fmt_percentage(&s.progress.percentage),
        })
        .collect()
}

fn list<S: KeyValueStore>(wallet: &WalletStore<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = budget_rows(wallet, Utc::now());
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows = data
            .into_iter()
            .map(|r| {
                vec![
                    r.id,
                    r.category,
                    r.period,
                    r.limit,
                    r.spent,
                    r.remaining,
                    r.percentage,
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Category", "Period", "Limit", "Spent", "Remaining", "Used"],
                rows,
            )
        );
    }
    Ok(())
}
