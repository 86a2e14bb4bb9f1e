//! Product registry: registration, verification and lookup.
//!
//! DESIGN
//! ======
//! Registration stamps the record (id, timestamp, farmer address, simulated
//! transaction hash), issues a verification code and renders its QR image
//! before taking the write lock; the lock covers only the duplicate check and
//! the two inserts. Verification resolves code -> product id -> product under
//! a read lock.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use products::qr::{self, QrError};
use products::{Product, RegisterRequest, VerificationCode};
use time::OffsetDateTime;
use tracing::info;

use super::ledger;
use crate::state::AppState;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product name is required")]
    MissingName,
    #[error("product id already registered: {0}")]
    Duplicate(String),
    #[error("Encrypted code not found in registry")]
    UnknownCode,
    #[error("Product not found for this encrypted code")]
    Orphaned(String),
    #[error("product not found: {0}")]
    NotFound(String),
    #[error("QR generation failed: {0}")]
    Qr(#[from] QrError),
}

/// A stored product with its issued code and QR image.
#[derive(Debug, Clone)]
pub struct Registered {
    pub product: Product,
    pub encrypted_code: String,
    pub qr_code: String,
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Register a product and issue its verification code.
///
/// # Errors
///
/// Returns [`ProductError::MissingName`] for a blank name,
/// [`ProductError::Duplicate`] when the id is taken and [`ProductError::Qr`]
/// when the QR image cannot be rendered.
pub async fn register_product(state: &AppState, request: RegisterRequest) -> Result<Registered, ProductError> {
    if request.name.trim().is_empty() {
        return Err(ProductError::MissingName);
    }

    let product_id = request.product_id.clone().unwrap_or_else(ledger::generate_product_id);
    let now = OffsetDateTime::now_utc();

    let mut product = request.into_product(product_id);
    product.created_at = Some(ledger::rfc3339(now));
    product.farmer_address = Some(state.config.farmer_address.clone());
    product.transaction_hash = Some(ledger::simulated_transaction_hash());

    let encrypted_code = VerificationCode::issue(&product, ledger::now_ms(now)).encode();
    let qr_code = qr::render_data_url(&encrypted_code, state.config.qr_size)?;

    {
        let mut registry = state.registry.write().await;
        if registry.products.contains_key(&product.product_id) {
            return Err(ProductError::Duplicate(product.product_id));
        }
        registry.codes.insert(encrypted_code.clone(), product.product_id.clone());
        registry.products.insert(product.product_id.clone(), product.clone());
    }

    info!(
        product_id = %product.product_id,
        tx = product.transaction_hash.as_deref().unwrap_or_default(),
        "product registered"
    );
    Ok(Registered { product, encrypted_code, qr_code })
}

/// Resolve a scanned verification code to its product.
///
/// # Errors
///
/// Returns [`ProductError::UnknownCode`] when the code was never issued and
/// [`ProductError::Orphaned`] if the indexed product is gone.
pub async fn verify_product(state: &AppState, code: &str) -> Result<Product, ProductError> {
    let registry = state.registry.read().await;
    let product_id = registry.codes.get(code.trim()).ok_or(ProductError::UnknownCode)?;
    registry
        .products
        .get(product_id)
        .cloned()
        .ok_or_else(|| ProductError::Orphaned(product_id.clone()))
}

/// Fetch a product by id.
///
/// # Errors
///
/// Returns [`ProductError::NotFound`] for unknown ids.
pub async fn get_product(state: &AppState, product_id: &str) -> Result<Product, ProductError> {
    state
        .registry
        .read()
        .await
        .products
        .get(product_id)
        .cloned()
        .ok_or_else(|| ProductError::NotFound(product_id.to_owned()))
}
