// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories::{CATEGORIES, categories_for};
use crate::models::TransactionType;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    if let Some(("list", sub)) = m.subcommand() {
        let infos = match sub.get_one::<String>("type") {
            Some(t) => categories_for(t.parse::<TransactionType>()?),
            None => CATEGORIES.iter().collect(),
        };
        let data = infos
            .into_iter()
            .map(|c| {
                vec![
                    c.id.to_string(),
                    c.name.to_string(),
                    c.icon.to_string(),
                    c.color.to_string(),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Tag", "Name", "Icon", "Color"], data));
    }
    Ok(())
}
