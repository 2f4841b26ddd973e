// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::storage::KeyValueStore;
use crate::store::WalletStore;
use anyhow::{Context, Result};

pub fn handle<S: KeyValueStore>(wallet: &mut WalletStore<S>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("clear", _)) => {
            wallet.clear_all_data();
            println!("All transactions and budgets have been cleared.");
        }
        Some(("reset", _)) => {
            wallet.forget().context("Remove saved wallet state")?;
            println!("Saved data removed; demo data will be shown on next run.");
        }
        _ => {}
    }
    Ok(())
}
