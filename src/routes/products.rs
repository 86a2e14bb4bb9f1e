//! Product registration and verification routes.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use ::products::{Product, RegisterRequest, RegisterResponse, VerifyResponse};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use tracing::{info, warn};

use crate::services::registry::{self, ProductError};
use crate::state::AppState;

pub(crate) fn product_error_to_status(err: &ProductError) -> StatusCode {
    match err {
        ProductError::MissingName
        | ProductError::Duplicate(_)
        | ProductError::UnknownCode
        | ProductError::Orphaned(_) => StatusCode::BAD_REQUEST,
        ProductError::NotFound(_) => StatusCode::NOT_FOUND,
        ProductError::Qr(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn register_failure(status: StatusCode, reason: &str) -> Response {
    let body = RegisterResponse {
        success: Some(false),
        error: Some(format!("Failed to register product: {reason}")),
        ..RegisterResponse::default()
    };
    (status, Json(body)).into_response()
}

/// `POST /api/products/register`: store a product and issue its QR code.
pub async fn register(State(state): State<AppState>, body: Result<Json<RegisterRequest>, JsonRejection>) -> Response {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(error = %rejection, "register: malformed body");
            return register_failure(StatusCode::BAD_REQUEST, &rejection.body_text());
        }
    };

    match registry::register_product(&state, request).await {
        Ok(registered) => {
            let body = RegisterResponse {
                success: Some(true),
                qr_code: Some(registered.qr_code),
                product: Some(registered.product),
                encrypted_code: Some(registered.encrypted_code),
                message: Some("Product registered successfully".to_owned()),
                error: None,
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => {
            warn!(error = %err, "register: rejected");
            register_failure(product_error_to_status(&err), &err.to_string())
        }
    }
}

/// `GET /api/products/verify/{code}`: resolve a scanned code.
///
/// Both `success` and `verified` are set so lenient and strict clients agree.
pub async fn verify(State(state): State<AppState>, Path(code): Path<String>) -> Response {
    match registry::verify_product(&state, &code).await {
        Ok(product) => {
            info!(product_id = %product.product_id, "product verified");
            let body = VerifyResponse {
                success: Some(true),
                verified: Some(true),
                product: Some(product),
                message: Some("Product verified successfully".to_owned()),
                error: None,
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => {
            warn!(error = %err, "verify: rejected");
            let body = VerifyResponse {
                success: Some(false),
                verified: Some(false),
                error: Some(format!("Failed to verify product: {err}")),
                ..VerifyResponse::default()
            };
            (product_error_to_status(&err), Json(body)).into_response()
        }
    }
}

/// `GET /api/products/{product_id}`: fetch one product.
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<Product>, StatusCode> {
    registry::get_product(&state, &product_id)
        .await
        .map(Json)
        .map_err(|err| product_error_to_status(&err))
}
