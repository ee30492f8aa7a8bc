//! Form input handling
//!
//! Every form field arrives as the string the user typed. Field-level
//! validation produces [`FieldErrors`] for display; the parse helpers here
//! convert strings into typed values at the storage boundary.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fmt;

use super::money::Money;
use crate::error::{SpendwiseError, SpendwiseResult};

/// Date format accepted in forms
pub const FORM_DATE_FORMAT: &str = "%Y-%m-%d";

/// Largest amount any form field may carry
pub const MAX_AMOUNT: Money = Money::from_dollars(1_000_000_000);

/// Field-level validation messages, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field (the first message per field wins)
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// `Ok(())` when no field failed
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for FieldErrors {}

impl From<FieldErrors> for SpendwiseError {
    fn from(errors: FieldErrors) -> Self {
        SpendwiseError::Validation(errors.to_string())
    }
}

/// Parse a required, non-negative amount at the storage boundary
pub fn parse_amount(field: &str, raw: &str) -> SpendwiseResult<Money> {
    let amount = Money::parse(raw)
        .map_err(|e| SpendwiseError::Validation(format!("{}: {}", field, e)))?;
    if amount.is_negative() {
        return Err(SpendwiseError::Validation(format!(
            "{}: amount cannot be negative",
            field
        )));
    }
    if amount > MAX_AMOUNT {
        return Err(SpendwiseError::Validation(format!(
            "{}: amount cannot exceed {}",
            field, MAX_AMOUNT
        )));
    }
    Ok(amount)
}

/// Parse an optional amount; an empty string means zero
pub fn parse_optional_amount(field: &str, raw: &str) -> SpendwiseResult<Money> {
    if raw.trim().is_empty() {
        Ok(Money::zero())
    } else {
        parse_amount(field, raw)
    }
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(field: &str, raw: &str) -> SpendwiseResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), FORM_DATE_FORMAT).map_err(|_| {
        SpendwiseError::Validation(format!("{}: expected YYYY-MM-DD, got '{}'", field, raw))
    })
}

/// Parse an optional date; an empty string means absent
pub fn parse_optional_date(field: &str, raw: Option<&str>) -> SpendwiseResult<Option<NaiveDate>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_date(field, s).map(Some),
    }
}

/// Check a required positive amount, recording a message on failure
pub(crate) fn check_positive_amount(
    errors: &mut FieldErrors,
    field: &'static str,
    raw: &str,
) -> Option<Money> {
    if raw.trim().is_empty() {
        errors.add(field, "Amount is required");
        return None;
    }
    match Money::parse(raw) {
        Ok(amount) if amount > MAX_AMOUNT => {
            errors.add(field, "Amount cannot exceed $1,000,000,000");
            None
        }
        Ok(amount) if amount.is_positive() => Some(amount),
        Ok(_) => {
            errors.add(field, "Amount must be a positive number");
            None
        }
        Err(e) => {
            errors.add(field, e.to_string());
            None
        }
    }
}
