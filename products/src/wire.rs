//! Register/verify response bodies and success classification.
//!
//! DESIGN
//! ======
//! Callers hand over the HTTP status and the raw body text; the functions here
//! decide success and produce the single error string the dashboards show.
//! Every failure source (status, malformed JSON, missing fields, negative
//! flags) collapses into one [`ContractError`].
//!
//! Two verification policies coexist because the dashboards disagree about
//! which response flag is authoritative. Both are kept and selectable through
//! [`VerifyPolicy`]; the API emits both flags so either works against it.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use std::fmt;
use std::str::FromStr;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

use crate::product::Product;

pub const REGISTER_PATH: &str = "/api/products/register";

/// Characters left unescaped by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// `GET` path verifying a scanned code. The code is percent-encoded as one
/// path segment, so base64 `/`, `+` and `=` survive the trip.
#[must_use]
pub fn verify_path(code: &str) -> String {
    format!("/api/products/verify/{}", utf8_percent_encode(code, URI_COMPONENT))
}

#[must_use]
pub fn product_path(product_id: &str) -> String {
    format!("/api/products/{}", utf8_percent_encode(product_id, URI_COMPONENT))
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractError {
    #[error("Server did not return valid JSON. Please check backend.")]
    InvalidJson,
    /// Error string supplied by the server.
    #[error("{0}")]
    Rejected(String),
    #[error("Server error: {0}")]
    Status(u16),
    #[error("Failed to register product")]
    RegistrationIncomplete,
    #[error("Product verification failed")]
    NotVerified,
    #[error("Product data missing from response")]
    MissingProduct,
    #[error("invalid verification code: {0}")]
    InvalidCode(String),
    #[error("invalid image data URL")]
    InvalidDataUrl,
}

/// Response body of `POST /api/products/register`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    /// `data:image/png;base64,…` QR image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
    /// The verification code embedded in the QR image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypted_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Response body of `GET /api/products/verify/{code}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A registration the farmer dashboard can render.
#[derive(Clone, Debug, PartialEq)]
pub struct Registration {
    pub product: Product,
    pub qr_code: String,
    pub verification_code: Option<String>,
}

/// Decide whether a registration response succeeded.
///
/// Success needs a 2xx status, a non-empty `qrCode` and a product carrying a
/// `productId`. A 200 without either payload is still a failure.
///
/// # Errors
///
/// Returns [`ContractError::InvalidJson`] when the body is not a JSON object
/// of the expected shape, [`ContractError::Rejected`] with the server's
/// `error` string when one is present, and
/// [`ContractError::RegistrationIncomplete`] otherwise.
pub fn classify_registration(status: u16, body: &str) -> Result<Registration, ContractError> {
    let parsed: RegisterResponse = serde_json::from_str(body).map_err(|_| ContractError::InvalidJson)?;
    let qr_code = parsed.qr_code.filter(|qr| !qr.trim().is_empty());
    let product = parsed.product.filter(Product::has_id);

    match (is_success_status(status), qr_code, product) {
        (true, Some(qr_code), Some(product)) => {
            Ok(Registration { product, qr_code, verification_code: parsed.encrypted_code })
        }
        _ => Err(parsed.error.map_or(ContractError::RegistrationIncomplete, ContractError::Rejected)),
    }
}

/// Which response flag decides a verification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VerifyPolicy {
    /// Success unless `success` or `verified` is explicitly `false`.
    #[default]
    Lenient,
    /// Success only when `success` is explicitly `true`.
    Strict,
}

impl VerifyPolicy {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }

    /// Decide whether a verification response succeeded and extract the product.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::Status`] (or the server's `error`) for non-2xx
    /// responses, [`ContractError::NotVerified`] (or the server's `error`) when
    /// the policy's flag check fails, [`ContractError::MissingProduct`] when
    /// no product is attached and [`ContractError::InvalidJson`] for
    /// unparseable 2xx bodies.
    pub fn classify(self, status: u16, body: &str) -> Result<Product, ContractError> {
        let parsed: VerifyResponse = match serde_json::from_str(body) {
            Ok(parsed) => parsed,
            Err(_) if !is_success_status(status) => return Err(ContractError::Status(status)),
            Err(_) => return Err(ContractError::InvalidJson),
        };

        if !is_success_status(status) {
            return Err(parsed.error.map_or(ContractError::Status(status), ContractError::Rejected));
        }

        let accepted = match self {
            Self::Lenient => parsed.success != Some(false) && parsed.verified != Some(false),
            Self::Strict => parsed.success == Some(true),
        };
        if !accepted {
            return Err(parsed.error.map_or(ContractError::NotVerified, ContractError::Rejected));
        }

        parsed.product.ok_or(ContractError::MissingProduct)
    }
}

impl fmt::Display for VerifyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VerifyPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            other => Err(format!("unknown verify policy `{other}` (expected lenient or strict)")),
        }
    }
}

fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}
