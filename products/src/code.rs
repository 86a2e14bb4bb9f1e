//! Verification code carried in product QR images.
//!
//! The code is `base64(productId|name|farmLocation|issuedAtMillis)` with the
//! standard padded alphabet. The API treats it as an opaque lookup key; the
//! decoded parts are only for display and diagnostics.

#[cfg(test)]
#[path = "code_test.rs"]
mod code_test;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::product::Product;
use crate::wire::ContractError;

const SEPARATOR: char = '|';

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationCode {
    pub product_id: String,
    pub name: String,
    pub farm_location: String,
    pub issued_at_ms: i64,
}

impl VerificationCode {
    #[must_use]
    pub fn issue(product: &Product, issued_at_ms: i64) -> Self {
        Self {
            product_id: product.product_id.clone(),
            name: product.name.clone(),
            farm_location: product.farm_location.clone(),
            issued_at_ms,
        }
    }

    #[must_use]
    pub fn encode(&self) -> String {
        let raw = format!(
            "{}{SEPARATOR}{}{SEPARATOR}{}{SEPARATOR}{}",
            self.product_id, self.name, self.farm_location, self.issued_at_ms
        );
        STANDARD.encode(raw.as_bytes())
    }

    /// Split a scanned code into its parts.
    ///
    /// The id is everything before the first separator and the timestamp
    /// everything after the last; a separator inside the name or location
    /// resolves to the name's first occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidCode`] when the payload is not base64,
    /// not UTF-8, or lacks the four separated parts.
    pub fn decode(code: &str) -> Result<Self, ContractError> {
        let bytes = STANDARD
            .decode(code.trim())
            .map_err(|e| ContractError::InvalidCode(format!("not base64: {e}")))?;
        let text = String::from_utf8(bytes).map_err(|_| ContractError::InvalidCode("not UTF-8".to_owned()))?;

        let malformed = || ContractError::InvalidCode(format!("expected 4 `{SEPARATOR}`-separated parts"));
        let (product_id, rest) = text.split_once(SEPARATOR).ok_or_else(malformed)?;
        let (middle, millis) = rest.rsplit_once(SEPARATOR).ok_or_else(malformed)?;
        let (name, farm_location) = middle.split_once(SEPARATOR).ok_or_else(malformed)?;
        let issued_at_ms = millis
            .parse::<i64>()
            .map_err(|_| ContractError::InvalidCode(format!("bad timestamp `{millis}`")))?;

        if product_id.is_empty() {
            return Err(ContractError::InvalidCode("empty product id".to_owned()));
        }

        Ok(Self {
            product_id: product_id.to_owned(),
            name: name.to_owned(),
            farm_location: farm_location.to_owned(),
            issued_at_ms,
        })
    }
}
