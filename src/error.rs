// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use thiserror::Error;

/// Rejected user input, raised before anything reaches the store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("invalid amount '{0}'")]
    InvalidAmount(String),
    #[error("amount must be greater than zero")]
    NonPositiveAmount,
    #[error("budget limit must be greater than zero")]
    NonPositiveLimit,
    #[error("amounts may have at most {0} decimal places")]
    TooManyDecimals(u32),
    #[error("amounts may not exceed {0}")]
    AmountTooLarge(Decimal),
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
    #[error("unknown transaction type '{0}', expected income or expense")]
    UnknownType(String),
    #[error("unknown period '{0}'")]
    UnknownPeriod(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("sqlite error")]
    Sqlite(#[from] rusqlite::Error),
    #[error("could not encode or decode wallet state")]
    Serialize(#[from] serde_json::Error),
    #[error("io error")]
    Io(#[from] std::io::Error),
    #[error("could not determine platform-specific data dir")]
    DataDir,
}
