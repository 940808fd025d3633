// ABOUTME: Barcode newtype validating GTIN-style numeric product identifiers
// ABOUTME: Shared by manual entry, scanner confirmation, and product lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::barcode::{MAX_DIGITS, MIN_DIGITS};
use crate::errors::{AppError, AppResult};

/// A product barcode (UPC-E, EAN-8, UPC-A, EAN-13 or GTIN-14)
///
/// Surrounding whitespace is trimmed; the remainder must be ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Barcode(String);

impl Barcode {
    /// Validate and wrap a barcode string
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if the code is empty, contains
    /// non-digit characters, or has an unsupported length.
    pub fn parse(raw: &str) -> AppResult<Self> {
        let code = raw.trim();
        if code.is_empty() {
            return Err(AppError::invalid_input("Barcode cannot be empty"));
        }
        if !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(
                AppError::invalid_input("Barcode must contain only digits").with_resource_id(code)
            );
        }
        if !(MIN_DIGITS..=MAX_DIGITS).contains(&code.len()) {
            return Err(AppError::invalid_input(format!(
                "Barcode must have between {MIN_DIGITS} and {MAX_DIGITS} digits"
            ))
            .with_resource_id(code));
        }
        Ok(Self(code.to_owned()))
    }

    /// Borrow the digits
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Barcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Barcode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Barcode {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Barcode> for String {
    fn from(barcode: Barcode) -> Self {
        barcode.0
    }
}
