// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::Utc;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use wallet_tracker::{cli, commands, db, store::WalletStore};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let storage = match matches.get_one::<String>("db") {
        Some(p) => {
            let path = PathBuf::from(p);
            db::SqliteStore::open(&path)
                .with_context(|| format!("Open wallet database at {}", path.display()))?
        }
        None => db::SqliteStore::open_default().context("Open wallet database in the data dir")?,
    };
    let mut wallet = WalletStore::load(storage, Utc::now());

    match matches.subcommand() {
        Some(("tx", sub)) => commands::transactions::handle(&mut wallet, sub)?,
        Some(("budget", sub)) => commands::budgets::handle(&mut wallet, sub)?,
        Some(("report", sub)) => commands::reports::handle(&wallet, sub)?,
        Some(("category", sub)) => commands::categories::handle(sub)?,
        Some(("export", sub)) => commands::exporter::handle(&wallet, sub)?,
        Some(("data", sub)) => commands::data::handle(&mut wallet, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
