//! Wall-clock timestamps in the browser's `toISOString` shape.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

#[cfg(not(feature = "hydrate"))]
use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

#[cfg(not(feature = "hydrate"))]
const ISO_MILLIS: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");

/// Current UTC time as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn now_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        OffsetDateTime::now_utc().format(ISO_MILLIS).unwrap_or_default()
    }
}
