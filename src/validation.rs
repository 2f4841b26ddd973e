// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Input checks applied before anything is handed to the wallet.

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::models::{BudgetPatch, NewBudget, NewTransaction, TransactionPatch};

/// Parses a user-entered amount. Must be numeric and strictly positive.
pub fn parse_amount(s: &str) -> Result<Decimal, ValidationError> {
    let s = s.trim();
    let amount = s
        .parse::<Decimal>()
        .map_err(|_| ValidationError::InvalidAmount(s.to_string()))?;
    check_amount(amount)
}

/// Largest amount or limit accepted from input, one trillion. Sums of many
/// such values still fit comfortably in a `Decimal`.
// lo/mid words of 0xE8_D4A5_1000.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Amounts are whole cents.
pub const MAX_DECIMALS: u32 = 2;

fn check_magnitude(value: Decimal) -> Result<Decimal, ValidationError> {
    if value.normalize().scale() > MAX_DECIMALS {
        return Err(ValidationError::TooManyDecimals(MAX_DECIMALS));
    }
    if value > MAX_AMOUNT {
        return Err(ValidationError::AmountTooLarge(MAX_AMOUNT));
    }
    Ok(value)
}

fn check_amount(amount: Decimal) -> Result<Decimal, ValidationError> {
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount);
    }
    check_magnitude(amount)
}

fn check_title(title: &str) -> Result<String, ValidationError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(title.to_string())
}

fn non_blank(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl NewTransaction {
    /// Trims text fields and rejects an empty title or a non-positive amount.
    pub fn validate(self) -> Result<Self, ValidationError> {
        Ok(Self {
            title: check_title(&self.title)?,
            amount: check_amount(self.amount)?,
            description: non_blank(self.description),
            location: non_blank(self.location),
            ..self
        })
    }
}

impl TransactionPatch {
    pub fn validate(self) -> Result<Self, ValidationError> {
        Ok(Self {
            title: self.title.as_deref().map(check_title).transpose()?,
            amount: self.amount.map(check_amount).transpose()?,
            description: self.description.map(non_blank),
            location: self.location.map(non_blank),
            ..self
        })
    }
}

fn check_limit(limit: Decimal) -> Result<Decimal, ValidationError> {
    if limit <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveLimit);
    }
    check_magnitude(limit)
}

impl NewBudget {
    pub fn validate(self) -> Result<Self, ValidationError> {
        Ok(Self {
            limit: check_limit(self.limit)?,
            ..self
        })
    }
}

impl BudgetPatch {
    pub fn validate(self) -> Result<Self, ValidationError> {
        Ok(Self {
            limit: self.limit.map(check_limit).transpose()?,
            ..self
        })
    }
}
