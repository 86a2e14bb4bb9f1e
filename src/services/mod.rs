//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own registration and lookup rules so route handlers stay
//! focused on protocol translation.

pub mod ledger;
pub mod registry;
