// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{TimeZone, Utc};
use serde_json::json;
use tempfile::tempdir;
use wallet_tracker::models::{Category, NewTransaction, TransactionType};
use wallet_tracker::storage::MemoryStore;
use wallet_tracker::store::WalletStore;
use wallet_tracker::{cli, commands::exporter};

fn wallet() -> WalletStore<MemoryStore> {
    let mut wallet = WalletStore::empty(MemoryStore::new());
    wallet.add_transaction(NewTransaction {
        title: "Corner Shop".into(),
        amount: "12.34".parse().unwrap(),
        r#type: TransactionType::Expense,
        category: Category::Groceries,
        date: Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap(),
        description: Some("Weekly run".into()),
        location: None,
    });
    wallet.add_transaction(NewTransaction {
        title: "Invoice 17".into(),
        amount: "800".parse().unwrap(),
        r#type: TransactionType::Income,
        category: Category::Freelance,
        date: Utc.with_ymd_and_hms(2024, 12, 30, 0, 0, 0).unwrap(),
        description: None,
        location: Some("Remote".into()),
    });
    wallet
}

fn run_export(wallet: &WalletStore<MemoryStore>, format: &str, out: &str) -> anyhow::Result<()> {
    let matches = cli::build_cli().get_matches_from([
        "wallet",
        "export",
        "transactions",
        "--format",
        format,
        "--out",
        out,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(wallet, export_m)
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn export_transactions_writes_pretty_json_oldest_first() {
    let wallet = wallet();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.json");
    run_export(&wallet, "json", &out_path.to_string_lossy()).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        parsed,
        json!([
            {
                "date": "2024-12-30T00:00:00+00:00",
                "title": "Invoice 17",
                "type": "income",
                "category": "freelance",
                "amount": "800",
                "description": null,
                "location": "Remote"
            },
            {
                "date": "2025-01-02T00:00:00+00:00",
                "title": "Corner Shop",
                "type": "expense",
                "category": "groceries",
                "amount": "12.34",
                "description": "Weekly run",
                "location": null
            }
        ])
    );
}

#[test]
fn export_transactions_writes_csv() {
    let wallet = wallet();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.csv");
    run_export(&wallet, "CSV", &out_path.to_string_lossy()).unwrap();

    let mut rdr = csv::Reader::from_path(&out_path).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["date", "title", "type", "category", "amount", "description", "location"]
    );
    let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 2);
    assert_eq!(&records[1][1], "Corner Shop");
    assert_eq!(&records[1][4], "12.34");
    assert_eq!(&records[0][6], "Remote");
}

#[test]
fn export_transactions_rejects_unknown_format() {
    let wallet = wallet();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.unknown");
    assert!(run_export(&wallet, "xml", &out_path.to_string_lossy()).is_err());
    assert!(!out_path.exists());
}
