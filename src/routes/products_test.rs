use super::*;
use crate::state::test_helpers;
use ::products::{VerifyPolicy, classify_registration};

async fn body_text(response: Response) -> (u16, String) {
    let status = response.status().as_u16();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("body");
    (status, String::from_utf8(bytes.to_vec()).expect("utf8"))
}

fn form_request(product_id: Option<&str>) -> RegisterRequest {
    serde_json::from_value(serde_json::json!({
        "productId": product_id,
        "productName": "Organic Tomatoes",
        "category": "vegetables",
        "dateOfManufacture": "2024-01-15",
        "time": "08:30",
        "place": "Green Valley Farm",
        "qualityRating": "premium",
        "priceForFarmer": 45.0,
        "description": "Fresh organic tomatoes"
    }))
    .expect("request")
}

#[test]
fn product_error_to_status_maps_variants() {
    assert_eq!(product_error_to_status(&ProductError::MissingName), StatusCode::BAD_REQUEST);
    assert_eq!(product_error_to_status(&ProductError::Duplicate("x".into())), StatusCode::BAD_REQUEST);
    assert_eq!(product_error_to_status(&ProductError::UnknownCode), StatusCode::BAD_REQUEST);
    assert_eq!(product_error_to_status(&ProductError::NotFound("x".into())), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn register_response_satisfies_client_contract() {
    let state = test_helpers::test_app_state();
    let response = register(State(state), Ok(Json(form_request(None)))).await;
    let (status, body) = body_text(response).await;

    assert_eq!(status, 200);
    let registration = classify_registration(status, &body).expect("registration");
    assert!(registration.product.product_id.starts_with("AGR-"));
    assert_eq!(registration.product.name, "Organic Tomatoes");
    assert!(registration.verification_code.is_some());
}

#[tokio::test]
async fn register_blank_name_is_bad_request_with_error() {
    let state = test_helpers::test_app_state();
    let mut request = form_request(None);
    request.name.clear();
    let (status, body) = body_text(register(State(state), Ok(Json(request))).await).await;

    assert_eq!(status, 400);
    let err = classify_registration(status, &body).unwrap_err();
    assert_eq!(err.to_string(), "Failed to register product: product name is required");
}

#[tokio::test]
async fn register_then_verify_round_trip_under_both_policies() {
    let state = test_helpers::test_app_state();
    let (status, body) = body_text(register(State(state.clone()), Ok(Json(form_request(Some("AGR-e2e"))))).await).await;
    let registration = classify_registration(status, &body).expect("registration");
    let code = registration.verification_code.expect("code");

    let (status, body) = body_text(verify(State(state), Path(code)).await).await;
    assert_eq!(status, 200);
    for policy in [VerifyPolicy::Lenient, VerifyPolicy::Strict] {
        let product = policy.classify(status, &body).expect("verified");
        assert_eq!(product, registration.product);
    }
}

#[tokio::test]
async fn verify_unknown_code_reports_both_flags_false() {
    let state = test_helpers::test_app_state();
    let (status, body) = body_text(verify(State(state), Path("bogus".to_owned())).await).await;

    assert_eq!(status, 400);
    let parsed: VerifyResponse = serde_json::from_str(&body).expect("json");
    assert_eq!(parsed.success, Some(false));
    assert_eq!(parsed.verified, Some(false));
    assert!(parsed.product.is_none());
    let err = VerifyPolicy::Lenient.classify(status, &body).unwrap_err();
    assert!(err.to_string().starts_with("Failed to verify product:"));
}

#[tokio::test]
async fn get_product_returns_404_for_unknown_id() {
    let state = test_helpers::test_app_state();
    let result = get_product(State(state), Path("AGR-missing".to_owned())).await;
    assert_eq!(result.unwrap_err(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_product_returns_registered_record() {
    let state = test_helpers::test_app_state();
    let _response = register(State(state.clone()), Ok(Json(form_request(Some("AGR-fetch"))))).await;
    let Json(product) = get_product(State(state), Path("AGR-fetch".to_owned())).await.expect("product");
    assert_eq!(product.farm_location, "Green Valley Farm");
}
