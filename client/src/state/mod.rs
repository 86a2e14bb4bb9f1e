//! Per-dashboard client state.
//!
//! DESIGN
//! ======
//! Each page keeps one plain struct in an `RwSignal`. Transitions (begin a
//! request, apply its result, reset) are methods on the struct so they can be
//! unit-tested without a browser or a reactive runtime.

pub mod customer;
pub mod farmer;
pub mod retailer;
