// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::storage::KeyValueStore;
use crate::store::WalletStore;
use anyhow::{Context, Result, bail};
use serde_json::json;

pub fn handle<S: KeyValueStore>(wallet: &WalletStore<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(wallet, sub),
        _ => Ok(()),
    }
}

fn export_transactions<S: KeyValueStore>(
    wallet: &WalletStore<S>,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let fmt = sub
        .get_one::<String>("format")
        .map_or("csv".to_string(), |s| s.to_lowercase());
    let out = sub.get_one::<String>("out").context("out missing")?;

    // Exports read oldest first.
    let mut rows: Vec<_> = wallet.transactions().iter().collect();
    rows.sort_by_key(|t| t.date);

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)
                .with_context(|| format!("Create {}", out))?;
            wtr.write_record([
                "date",
                "title",
                "type",
                "category",
                "amount",
                "description",
                "location",
            ])?;
            for t in rows {
                wtr.write_record([
                    t.date.to_rfc3339(),
                    t.title.clone(),
                    t.r#type.to_string(),
                    t.category.to_string(),
                    t.amount.to_string(),
                    t.description.clone().unwrap_or_default(),
                    t.location.clone().unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = rows
                .into_iter()
                .map(|t| {
                    json!({
                        "date": t.date.to_rfc3339(), "title": t.title, "type": t.r#type,
                        "category": t.category, "amount": t.amount.to_string(),
                        "description": t.description, "location": t.location
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)
                .with_context(|| format!("Write {}", out))?;
        }
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    }
    println!("Exported transactions to {}", out);
    Ok(())
}
