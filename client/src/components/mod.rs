//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and the verified product card. They take
//! plain values or signals as props and hold no state of their own.

pub mod alert;
pub mod product_details;
pub mod role_header;
