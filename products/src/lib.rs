//! Shared product-traceability wire contract.
//!
//! This crate owns the representation used by the API server, the browser
//! dashboards and the CLI: the product record, the register/verify response
//! bodies and the rules that decide whether a response counts as success.
//! Keeping the classification here means every caller surfaces the same error
//! strings for the same server behaviour.

pub mod code;
pub mod product;
#[cfg(feature = "qr")]
pub mod qr;
pub mod wire;

pub use code::VerificationCode;
pub use product::{Product, QualityRating, RegisterRequest};
pub use wire::{
    ContractError, REGISTER_PATH, RegisterResponse, Registration, VerifyPolicy, VerifyResponse, classify_registration,
    product_path, verify_path,
};
