// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON document per line"),
    )
}

fn transaction_fields(cmd: Command, required: bool) -> Command {
    cmd.arg(Arg::new("title").long("title").required(required))
        .arg(
            Arg::new("amount")
                .long("amount")
                .required(required)
                .allow_hyphen_values(true)
                .help("Positive amount, e.g. 12.50"),
        )
        .arg(
            Arg::new("type")
                .long("type")
                .value_parser(["income", "expense"])
                .help("income or expense"),
        )
        .arg(Arg::new("category").long("category").help("Category tag, see `category list`"))
        .arg(
            Arg::new("date")
                .long("date")
                .help("YYYY-MM-DD or RFC 3339 timestamp (default: now)"),
        )
        .arg(Arg::new("description").long("description"))
        .arg(Arg::new("location").long("location"))
}

fn budget_fields(cmd: Command, required: bool) -> Command {
    cmd.arg(Arg::new("category").long("category").required(required))
        .arg(
            Arg::new("limit")
                .long("limit")
                .required(required)
                .allow_hyphen_values(true),
        )
        .arg(
            Arg::new("period")
                .long("period")
                .value_parser(["weekly", "monthly", "yearly"]),
        )
}

pub fn build_cli() -> Command {
    Command::new("wallet")
        .version(crate_version!())
        .about("Track income and expenses, budgets, and spending trends")
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .help("Path to the wallet database (default: platform data dir)"),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and browse transactions")
                .subcommand(transaction_fields(
                    Command::new("add").about("Record a transaction"),
                    true,
                ))
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, most recent first")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(["all", "income", "expense"])
                                .default_value("all"),
                        )
                        .arg(
                            Arg::new("search")
                                .long("search")
                                .help("Match title or description, case-insensitive"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    transaction_fields(
                        Command::new("update")
                            .about("Change fields of a transaction")
                            .arg(Arg::new("id").required(true)),
                        false,
                    )
                    .arg(
                        Arg::new("clear-description")
                            .long("clear-description")
                            .action(ArgAction::SetTrue)
                            .conflicts_with("description"),
                    )
                    .arg(
                        Arg::new("clear-location")
                            .long("clear-location")
                            .action(ArgAction::SetTrue)
                            .conflicts_with("location"),
                    ),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("budget")
                .about("Per-category spending limits")
                .subcommand(budget_fields(Command::new("add").about("Add a budget"), true))
                .subcommand(json_flags(
                    Command::new("list").about("List budgets with live progress"),
                ))
                .subcommand(budget_fields(
                    Command::new("update")
                        .about("Change fields of a budget")
                        .arg(Arg::new("id").required(true)),
                    false,
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a budget")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Analytics over recorded transactions")
                .subcommand(json_flags(
                    Command::new("summary").about("Income, expenses and balance"),
                ))
                .subcommand(json_flags(
                    Command::new("categories")
                        .about("Spending by category, largest first")
                        .arg(
                            Arg::new("top")
                                .long("top")
                                .value_parser(value_parser!(usize))
                                .default_value("6"),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("trends").about("Monthly income and expenses"),
                ))
                .subcommand(json_flags(
                    Command::new("period")
                        .about("Transactions within the last week, month or year")
                        .arg(
                            Arg::new("period")
                                .long("period")
                                .value_parser(["week", "month", "year"])
                                .default_value("month"),
                        ),
                )),
        )
        .subcommand(
            Command::new("category")
                .about("Category reference data")
                .subcommand(
                    Command::new("list").arg(
                        Arg::new("type")
                            .long("type")
                            .value_parser(["income", "expense"])
                            .help("Only categories offered for this transaction type"),
                    ),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export data")
                .subcommand(
                    Command::new("transactions")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .help("csv or json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(
            Command::new("data")
                .about("Manage stored data")
                .subcommand(
                    Command::new("clear").about("Delete all transactions and budgets"),
                )
                .subcommand(
                    Command::new("reset").about("Forget saved data; demo data returns on next run"),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        build_cli().debug_assert();
    }
}
