//! Field rules for inbound order payloads.
//!
//! Rules run in a fixed order and the first violation is reported.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use thiserror::Error;

pub const MIN_QUANTITY: i64 = 1;
pub const MAX_QUANTITY: i64 = 999;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    fn new(msg: &str) -> Self {
        Self(msg.to_string())
    }
}

/// The fields of a requested item that carry validation rules.
#[derive(Debug, Clone, Copy)]
pub struct ItemDraft<'a> {
    pub item_code: &'a str,
    pub quantity: i64,
}

/// Validates an order payload and returns its parsed `orderedAt` timestamp.
pub fn validate_order(
    ordered_at: &str,
    customer_name: &str,
    items: &[ItemDraft<'_>],
) -> Result<DateTime<Utc>, ValidationError> {
    let ordered_at = parse_ordered_at(ordered_at)?;
    check_customer_name(customer_name)?;

    if items.is_empty() {
        return Err(ValidationError::new("items is empty"));
    }
    for item in items {
        check_item(item)?;
    }

    Ok(ordered_at)
}

pub fn parse_ordered_at(raw: &str) -> Result<DateTime<Utc>, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::new("orderedAt is required"));
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|_| ValidationError::new("unknown time format"))
}

pub fn check_customer_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::new("customerName is required"));
    }
    if !is_alpha(name) {
        return Err(ValidationError::new(
            "name should not contain numeric and symbol",
        ));
    }
    Ok(())
}

pub fn check_item(item: &ItemDraft<'_>) -> Result<(), ValidationError> {
    if item.item_code.is_empty() {
        return Err(ValidationError::new("itemCode is required"));
    }
    if !is_alphanumeric(item.item_code) {
        return Err(ValidationError::new("itemCode must alphanumeric"));
    }
    // An absent quantity deserializes to zero.
    if item.quantity == 0 {
        return Err(ValidationError::new("quantity is required"));
    }
    if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&item.quantity) {
        return Err(ValidationError::new("item quantity must between 1 to 999"));
    }
    Ok(())
}

fn is_alpha(value: &str) -> bool {
    static ALPHA_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = ALPHA_REGEX.get_or_init(|| Regex::new(r"^[a-zA-Z]+$").unwrap());
    regex.is_match(value)
}

fn is_alphanumeric(value: &str) -> bool {
    static ALPHANUM_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = ALPHANUM_REGEX.get_or_init(|| Regex::new(r"^[a-zA-Z0-9]+$").unwrap());
    regex.is_match(value)
}
