//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, clock, file reads) from
//! page and state logic so the latter stay testable off the browser.

pub mod clock;
pub mod format;
pub mod storage;
pub mod upload;
