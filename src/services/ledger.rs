//! Simulated ledger stamping: product ids, transaction hashes, timestamps.
//!
//! No chain is contacted. Hashes are random and only look like transaction
//! hashes so the dashboards have something to display.

#[cfg(test)]
#[path = "ledger_test.rs"]
mod ledger_test;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use uuid::Uuid;

pub const PRODUCT_ID_PREFIX: &str = "AGR-";

/// `AGR-` followed by the first 8 hex digits of a v4 UUID.
#[must_use]
pub fn generate_product_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("{PRODUCT_ID_PREFIX}{}", &hex[..8])
}

/// `0x` followed by 32 hex digits.
#[must_use]
pub fn simulated_transaction_hash() -> String {
    format!("0x{}", Uuid::new_v4().simple())
}

#[must_use]
pub fn now_ms(now: OffsetDateTime) -> i64 {
    i64::try_from(now.unix_timestamp_nanos() / 1_000_000).unwrap_or(i64::MAX)
}

#[must_use]
pub fn rfc3339(now: OffsetDateTime) -> String {
    now.format(&Rfc3339).unwrap_or_else(|_| now.unix_timestamp().to_string())
}
