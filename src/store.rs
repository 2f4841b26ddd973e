// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The wallet: owns the transaction and budget lists, keeps the cached
//! balance in step with them and writes a snapshot after every change.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::analytics;
use crate::error::StorageError;
use crate::models::{
    AnalyticsData, Budget, BudgetPatch, BudgetProgress, BudgetStatus, NewBudget, NewTransaction,
    Transaction, TransactionPatch,
};
use crate::seed;
use crate::storage::KeyValueStore;

pub const STORAGE_KEY: &str = "wallet-storage";
const STATE_VERSION: u32 = 0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletSnapshot {
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub balance: Decimal,
}

#[derive(Debug, Serialize, Deserialize)]
struct PersistedState {
    state: WalletSnapshot,
    #[serde(default)]
    version: u32,
}

pub fn encode_snapshot(snapshot: &WalletSnapshot) -> Result<String, StorageError> {
    let persisted = PersistedState {
        state: snapshot.clone(),
        version: STATE_VERSION,
    };
    Ok(serde_json::to_string(&persisted)?)
}

pub fn decode_snapshot(raw: &str) -> Result<WalletSnapshot, StorageError> {
    let persisted: PersistedState = serde_json::from_str(raw)?;
    Ok(persisted.state)
}

/// Millisecond-timestamp ids, bumped past the last one handed out so two
/// ids minted in the same millisecond never collide.
#[derive(Debug, Default)]
struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    fn next(&mut self, taken: impl Fn(&str) -> bool) -> String {
        let mut candidate = Utc::now().timestamp_millis().max(self.last + 1);
        while taken(&candidate.to_string()) {
            candidate += 1;
        }
        self.last = candidate;
        candidate.to_string()
    }
}

pub struct WalletStore<S: KeyValueStore> {
    storage: S,
    transactions: Vec<Transaction>,
    budgets: Vec<Budget>,
    balance: Decimal,
    ids: IdGenerator,
}

impl<S: KeyValueStore> WalletStore<S> {
    /// Restores the saved wallet, or starts from the demo data when nothing
    /// usable has been saved yet.
    pub fn load(storage: S, now: DateTime<Utc>) -> Self {
        let saved = match storage.get(STORAGE_KEY) {
            Ok(Some(raw)) => match decode_snapshot(&raw) {
                Ok(snapshot) => Some(snapshot),
                Err(e) => {
                    warn!(error = %e, "saved wallet state is unreadable, using demo data");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "could not read saved wallet state, using demo data");
                None
            }
        };

        let (transactions, budgets) = match saved {
            Some(s) => {
                info!(
                    transactions = s.transactions.len(),
                    budgets = s.budgets.len(),
                    "loaded wallet state"
                );
                (s.transactions, s.budgets)
            }
            None => {
                info!("seeding wallet with demo data");
                (seed::demo_transactions(now), seed::demo_budgets())
            }
        };
        Self::with_state(storage, transactions, budgets)
    }

    /// An empty wallet. Nothing is written until the first change.
    pub fn empty(storage: S) -> Self {
        Self::with_state(storage, Vec::new(), Vec::new())
    }

    pub fn with_state(storage: S, transactions: Vec<Transaction>, budgets: Vec<Budget>) -> Self {
        let balance = analytics::calculate_balance(&transactions);
        Self {
            storage,
            transactions,
            budgets,
            balance,
            ids: IdGenerator::default(),
        }
    }

    /// Most recent first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn budget(&self, id: &str) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.id == id)
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn snapshot(&self) -> WalletSnapshot {
        WalletSnapshot {
            transactions: self.transactions.clone(),
            budgets: self.budgets.clone(),
            balance: self.balance,
        }
    }

    pub fn add_transaction(&mut self, new: NewTransaction) -> String {
        let existing = &self.transactions;
        let id = self.ids.next(|id| existing.iter().any(|t| t.id == id));
        debug!(id = %id, kind = %new.r#type, amount = %new.amount, "adding transaction");
        self.transactions.insert(0, new.into_transaction(id.clone()));
        self.transactions_changed();
        id
    }

    pub fn update_transaction(&mut self, id: &str, patch: TransactionPatch) {
        if let Some(t) = self.transactions.iter_mut().find(|t| t.id == id) {
            patch.apply(t);
            debug!(id, "updated transaction");
        }
        self.transactions_changed();
    }

    pub fn delete_transaction(&mut self, id: &str) {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        if self.transactions.len() != before {
            debug!(id, "deleted transaction");
        }
        self.transactions_changed();
    }

    pub fn add_budget(&mut self, new: NewBudget) -> String {
        let existing = &self.budgets;
        let id = self.ids.next(|id| existing.iter().any(|b| b.id == id));
        debug!(id = %id, category = %new.category, limit = %new.limit, "adding budget");
        self.budgets.push(Budget {
            id: id.clone(),
            category: new.category,
            limit: new.limit,
            spent: Decimal::ZERO,
            period: new.period,
        });
        self.persist();
        id
    }

    pub fn update_budget(&mut self, id: &str, patch: BudgetPatch) {
        if let Some(b) = self.budgets.iter_mut().find(|b| b.id == id) {
            patch.apply(b);
            debug!(id, "updated budget");
        }
        self.persist();
    }

    pub fn delete_budget(&mut self, id: &str) {
        let before = self.budgets.len();
        self.budgets.retain(|b| b.id != id);
        if self.budgets.len() != before {
            debug!(id, "deleted budget");
        }
        self.persist();
    }

    /// Freshly computed on every call.
    pub fn analytics(&self) -> AnalyticsData {
        analytics::summarize(&self.transactions)
    }

    /// Live progress of a stored budget over its period window.
    pub fn budget_progress(&self, id: &str, now: DateTime<Utc>) -> Option<BudgetProgress> {
        self.budget(id).map(|b| self.progress_of(b, now))
    }

    pub fn budget_statuses(&self, now: DateTime<Utc>) -> Vec<BudgetStatus> {
        self.budgets
            .iter()
            .map(|b| BudgetStatus {
                budget: b.clone(),
                progress: self.progress_of(b, now),
            })
            .collect()
    }

    fn progress_of(&self, b: &Budget, now: DateTime<Utc>) -> BudgetProgress {
        analytics::calculate_budget_progress(&self.transactions, b.category, b.limit, b.period, now)
    }

    pub fn clear_all_data(&mut self) {
        debug!(
            transactions = self.transactions.len(),
            budgets = self.budgets.len(),
            "clearing wallet"
        );
        self.transactions.clear();
        self.budgets.clear();
        self.balance = Decimal::ZERO;
        self.persist();
    }

    /// Drops the saved snapshot; the next `load` starts from demo data.
    pub fn forget(&self) -> Result<(), StorageError> {
        self.storage.remove(STORAGE_KEY)
    }

    fn transactions_changed(&mut self) {
        self.balance = analytics::calculate_balance(&self.transactions);
        self.persist();
    }

    // Best effort: the in-memory state stays authoritative if the write fails.
    fn persist(&self) {
        let result =
            encode_snapshot(&self.snapshot()).and_then(|raw| self.storage.set(STORAGE_KEY, &raw));
        if let Err(e) = result {
            warn!(error = %e, "failed to save wallet state");
        }
    }
}
