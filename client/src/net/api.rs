//! REST helpers for the product API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure (transport, status, body shape) collapses into one display
//! string. Response classification lives in the `products` crate so the CLI
//! reports the same messages.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use products::{Product, RegisterRequest, Registration, VerifyPolicy};

/// API origin baked in at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:8086";

pub fn api_base() -> &'static str {
    option_env!("AGRICHAIN_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn transport_failed_message(err: &impl std::fmt::Display) -> String {
    format!("Network error: {err}")
}

/// Register a product via `POST /api/products/register`.
///
/// # Errors
///
/// Returns the user-facing failure message.
pub async fn register_product(request: &RegisterRequest) -> Result<Registration, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(api_base(), products::REGISTER_PATH);
        let resp = gloo_net::http::Request::post(&url)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| transport_failed_message(&e))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| transport_failed_message(&e))?;
        let result = products::classify_registration(status, &body).map_err(|e| e.to_string());
        if let Err(message) = &result {
            log::warn!("registration failed: status={status} error={message}");
        }
        result
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

/// Verify a QR payload via `GET /api/products/verify/{code}`.
///
/// # Errors
///
/// Returns the user-facing failure message.
pub async fn verify_product(code: &str, policy: VerifyPolicy) -> Result<Product, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(api_base(), &products::verify_path(code));
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| transport_failed_message(&e))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| transport_failed_message(&e))?;
        let result = policy.classify(status, &body).map_err(|e| e.to_string());
        if let Err(message) = &result {
            log::warn!("verification failed: status={status} policy={policy} error={message}");
        }
        result
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (code, policy);
        Err("not available on server".to_owned())
    }
}
