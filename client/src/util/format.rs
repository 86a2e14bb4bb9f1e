//! Display formatting for product fields.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const LONG_DATE: &[BorrowedFormatItem<'static>] = format_description!("[day padding:none] [month repr:long] [year]");

/// Render a `YYYY-MM-DD` date as `15 January 2024`. Anything else is shown as-is.
pub fn format_date(raw: &str) -> String {
    Date::parse(raw.trim(), ISO_DATE)
        .ok()
        .and_then(|date| date.format(LONG_DATE).ok())
        .unwrap_or_else(|| raw.to_owned())
}

/// Rupee amount with two decimals.
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(value) => format!("₹{value:.2}"),
        None => "Not available".to_owned(),
    }
}
