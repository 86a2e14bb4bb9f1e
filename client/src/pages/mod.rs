//! Top-level routed pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! One page per role plus the role picker. Each page owns an `RwSignal` of its
//! state struct from `crate::state` and drives it from event handlers.

pub mod customer;
pub mod farmer;
pub mod home;
pub mod retailer;
