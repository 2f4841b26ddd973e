// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use wallet_tracker::error::StorageError;
use wallet_tracker::models::{
    BudgetPatch, BudgetPeriod, Category, NewBudget, NewTransaction, TransactionPatch,
    TransactionType,
};
use wallet_tracker::storage::{KeyValueStore, MemoryStore};
use wallet_tracker::store::{STORAGE_KEY, WalletStore, decode_snapshot};

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 8, 10, 12, 0, 0).unwrap()
}

fn draft(title: &str, amount: &str, kind: TransactionType, category: Category) -> NewTransaction {
    NewTransaction {
        title: title.to_string(),
        amount: d(amount),
        r#type: kind,
        category,
        date: now(),
        description: None,
        location: None,
    }
}

fn saved(storage: &MemoryStore) -> wallet_tracker::store::WalletSnapshot {
    let raw = storage.get(STORAGE_KEY).unwrap().expect("snapshot written");
    decode_snapshot(&raw).unwrap()
}

#[test]
fn add_prepends_and_updates_balance() {
    let storage = MemoryStore::new();
    let mut wallet = WalletStore::empty(storage.clone());
    let salary = wallet.add_transaction(draft("Salary", "100", TransactionType::Income, Category::Salary));
    let lunch = wallet.add_transaction(draft("Lunch", "40", TransactionType::Expense, Category::Food));

    assert_ne!(salary, lunch);
    assert_eq!(wallet.transactions()[0].id, lunch);
    assert_eq!(wallet.transactions()[1].id, salary);
    assert_eq!(wallet.balance(), d("60"));

    let analytics = wallet.analytics();
    assert_eq!(analytics.balance, d("60"));
    assert_eq!(analytics.category_spending.len(), 1);
    assert_eq!(analytics.category_spending[&Category::Food], d("40"));

    let snap = saved(&storage);
    assert_eq!(snap.transactions.len(), 2);
    assert_eq!(snap.balance, d("60"));
}

#[test]
fn add_then_delete_restores_previous_state() {
    let mut wallet = WalletStore::load(MemoryStore::new(), now());
    let before = wallet.transactions().to_vec();
    let balance = wallet.balance();

    let id = wallet.add_transaction(draft("Taxi", "12.75", TransactionType::Expense, Category::Transport));
    assert_ne!(wallet.balance(), balance);
    wallet.delete_transaction(&id);

    assert_eq!(wallet.transactions(), before.as_slice());
    assert_eq!(wallet.balance(), balance);
}

#[test]
fn ids_are_unique_when_added_back_to_back() {
    let mut wallet = WalletStore::empty(MemoryStore::new());
    let mut ids: Vec<String> = (0..50)
        .map(|i| wallet.add_transaction(draft(&format!("t{}", i), "1", TransactionType::Expense, Category::Other)))
        .collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 50);
}

#[test]
fn update_replaces_fields_and_recomputes_balance() {
    let storage = MemoryStore::new();
    let mut wallet = WalletStore::empty(storage.clone());
    let id = wallet.add_transaction(draft("Refund", "30", TransactionType::Expense, Category::Shopping));
    assert_eq!(wallet.balance(), d("-30"));

    wallet.update_transaction(
        &id,
        TransactionPatch {
            r#type: Some(TransactionType::Income),
            amount: Some(d("35")),
            description: Some(Some("store credit".into())),
            ..Default::default()
        },
    );
    let t = wallet.transaction(&id).unwrap();
    assert_eq!(t.id, id);
    assert_eq!(t.title, "Refund");
    assert_eq!(t.amount, d("35"));
    assert_eq!(t.description.as_deref(), Some("store credit"));
    assert_eq!(wallet.balance(), d("35"));
    assert_eq!(saved(&storage).balance, d("35"));

    wallet.update_transaction(
        &id,
        TransactionPatch {
            description: Some(None),
            ..Default::default()
        },
    );
    assert_eq!(wallet.transaction(&id).unwrap().description, None);
}

#[test]
fn update_or_delete_of_unknown_id_changes_nothing() {
    let mut wallet = WalletStore::load(MemoryStore::new(), now());
    let before = wallet.transactions().to_vec();
    let balance = wallet.balance();

    wallet.update_transaction(
        "missing",
        TransactionPatch {
            amount: Some(d("1000")),
            ..Default::default()
        },
    );
    wallet.delete_transaction("missing");
    wallet.update_budget("missing", BudgetPatch { limit: Some(d("1")), ..Default::default() });
    wallet.delete_budget("missing");

    assert_eq!(wallet.transactions(), before.as_slice());
    assert_eq!(wallet.balance(), balance);
    assert_eq!(wallet.budgets().len(), 3);
}

#[test]
fn analytics_is_stable_between_mutations() {
    let mut wallet = WalletStore::load(MemoryStore::new(), now());
    let first = wallet.analytics();
    assert_eq!(first, wallet.analytics());
    wallet.add_transaction(draft("Bonus", "250", TransactionType::Income, Category::Salary));
    let second = wallet.analytics();
    assert_eq!(second.total_income, first.total_income + d("250"));
}

#[test]
fn budgets_append_with_zero_spent() {
    let storage = MemoryStore::new();
    let mut wallet = WalletStore::empty(storage.clone());
    let first = wallet.add_budget(NewBudget {
        category: Category::Food,
        limit: d("200"),
        period: BudgetPeriod::Monthly,
    });
    let second = wallet.add_budget(NewBudget {
        category: Category::Travel,
        limit: d("1000"),
        period: BudgetPeriod::Yearly,
    });
    assert_eq!(wallet.budgets()[0].id, first);
    assert_eq!(wallet.budgets()[1].id, second);
    assert_eq!(wallet.budgets()[1].spent, Decimal::ZERO);
    assert_eq!(saved(&storage).budgets.len(), 2);

    wallet.update_budget(&first, BudgetPatch { limit: Some(d("250")), ..Default::default() });
    assert_eq!(wallet.budget(&first).unwrap().limit, d("250"));
    assert_eq!(wallet.budget(&first).unwrap().id, first);

    wallet.delete_budget(&second);
    assert_eq!(wallet.budgets().len(), 1);
    assert_eq!(saved(&storage).budgets.len(), 1);
}

#[test]
fn budget_progress_is_derived_from_transactions() {
    let mut wallet = WalletStore::empty(MemoryStore::new());
    let id = wallet.add_budget(NewBudget {
        category: Category::Food,
        limit: d("50"),
        period: BudgetPeriod::Weekly,
    });
    wallet.add_transaction(draft("Dinner", "20", TransactionType::Expense, Category::Food));
    let mut old = draft("Old dinner", "99", TransactionType::Expense, Category::Food);
    old.date = now() - Duration::days(30);
    wallet.add_transaction(old);

    let p = wallet.budget_progress(&id, now()).unwrap();
    assert_eq!(p.spent, d("20"));
    assert_eq!(p.remaining, d("30"));
    assert_eq!(p.percentage, d("40"));
    // The stored figure is a snapshot and is not touched by transaction changes.
    assert_eq!(wallet.budget(&id).unwrap().spent, Decimal::ZERO);
    assert!(wallet.budget_progress("missing", now()).is_none());
    assert_eq!(wallet.budget_statuses(now())[0].progress, p);
}

#[test]
fn clear_all_data_empties_everything() {
    let storage = MemoryStore::new();
    let mut wallet = WalletStore::load(storage.clone(), now());
    wallet.clear_all_data();

    assert!(wallet.transactions().is_empty());
    assert!(wallet.budgets().is_empty());
    assert_eq!(wallet.balance(), Decimal::ZERO);
    let a = wallet.analytics();
    assert_eq!(a.total_income, Decimal::ZERO);
    assert_eq!(a.total_expenses, Decimal::ZERO);
    assert_eq!(a.balance, Decimal::ZERO);
    assert!(a.category_spending.is_empty());
    assert!(a.monthly_trends.is_empty());

    let snap = saved(&storage);
    assert!(snap.transactions.is_empty());
    assert!(snap.budgets.is_empty());

    // A cleared wallet reloads empty rather than falling back to demo data.
    let reloaded = WalletStore::load(storage, now());
    assert!(reloaded.transactions().is_empty());
}

#[test]
fn first_load_uses_demo_data() {
    let wallet = WalletStore::load(MemoryStore::new(), now());
    assert_eq!(wallet.transactions().len(), 5);
    assert_eq!(wallet.budgets().len(), 3);
    assert_eq!(wallet.transactions()[0].title, "Coffee Shop");
    assert_eq!(wallet.balance(), d("3381.46"));
}

#[test]
fn reload_restores_saved_state() {
    let storage = MemoryStore::new();
    let mut wallet = WalletStore::empty(storage.clone());
    let mut t = draft("Rent", "900", TransactionType::Expense, Category::Bills);
    t.location = Some("Flat 4".into());
    let id = wallet.add_transaction(t);

    let reloaded = WalletStore::load(storage.clone(), now());
    assert_eq!(reloaded.transactions(), wallet.transactions());
    assert_eq!(reloaded.balance(), d("-900"));
    assert_eq!(reloaded.transaction(&id).unwrap().location.as_deref(), Some("Flat 4"));

    reloaded.forget().unwrap();
    assert!(storage.is_empty());
}

#[test]
fn reload_keeps_amounts_beyond_float_precision() {
    let storage = MemoryStore::new();
    let mut wallet = WalletStore::empty(storage.clone());
    wallet.add_transaction(draft("Estate", "12345678901234567.89", TransactionType::Income, Category::Gift));
    wallet.add_transaction(draft("Tip", "0.1", TransactionType::Expense, Category::Food));
    wallet.add_budget(NewBudget {
        category: Category::Food,
        limit: d("98765432109876543.21"),
        period: BudgetPeriod::Yearly,
    });

    let raw = storage.get(STORAGE_KEY).unwrap().unwrap();
    assert!(raw.contains("12345678901234567.89"));

    let reloaded = WalletStore::load(storage, now());
    assert_eq!(reloaded.transactions(), wallet.transactions());
    assert_eq!(reloaded.transactions()[1].amount, d("12345678901234567.89"));
    assert_eq!(reloaded.budgets()[0].limit, d("98765432109876543.21"));
    assert_eq!(reloaded.balance(), d("12345678901234567.79"));
}

#[test]
fn amounts_near_decimal_max_do_not_panic() {
    let storage = MemoryStore::new();
    let mut wallet = WalletStore::empty(storage.clone());
    // The store itself does not validate; analytics must still hold up.
    for _ in 0..2 {
        wallet.add_transaction(draft("Huge", "79228162514264337593543950335", TransactionType::Income, Category::Gift));
    }
    assert_eq!(wallet.balance(), Decimal::MAX);
    assert_eq!(wallet.analytics().total_income, Decimal::MAX);

    for _ in 0..3 {
        wallet.add_transaction(draft("Huge spend", "79228162514264337593543950335", TransactionType::Expense, Category::Food));
    }
    let a = wallet.analytics();
    assert_eq!(a.total_expenses, Decimal::MAX);
    assert_eq!(a.category_spending[&Category::Food], Decimal::MAX);
    assert_eq!(a.monthly_trends[0].expenses, Decimal::MAX);
    assert_eq!(saved(&storage).balance, a.balance);

    let id = wallet.add_budget(NewBudget {
        category: Category::Food,
        limit: d("0.0000000000000000000000001"),
        period: BudgetPeriod::Monthly,
    });
    let p = wallet.budget_progress(&id, now()).unwrap();
    assert_eq!(p.spent, Decimal::MAX);
    assert_eq!(p.remaining, Decimal::ZERO);
    assert_eq!(p.percentage, Decimal::MAX);
}

#[test]
fn unreadable_snapshot_falls_back_to_demo_data() {
    let storage = MemoryStore::new();
    storage.set(STORAGE_KEY, "{not json").unwrap();
    let wallet = WalletStore::load(storage, now());
    assert_eq!(wallet.transactions().len(), 5);
}

/// Storage that refuses every write.
struct ReadOnly;

impl KeyValueStore for ReadOnly {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Io(std::io::Error::other("read-only")))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Io(std::io::Error::other("read-only")))
    }
}

#[test]
fn failed_writes_do_not_affect_memory_state() {
    let mut wallet = WalletStore::empty(ReadOnly);
    let id = wallet.add_transaction(draft("Gift", "25", TransactionType::Income, Category::Gift));
    assert_eq!(wallet.transaction(&id).unwrap().amount, d("25"));
    assert_eq!(wallet.balance(), d("25"));
    assert!(wallet.forget().is_err());
}
