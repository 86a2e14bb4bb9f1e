use super::*;
use crate::state::test_helpers;

fn sample_request(product_id: Option<&str>) -> RegisterRequest {
    RegisterRequest {
        product_id: product_id.map(str::to_owned),
        name: "Organic Tomatoes".to_owned(),
        category: "vegetables".to_owned(),
        harvest_date: "2024-01-15".to_owned(),
        harvest_time: "08:30".to_owned(),
        farm_location: "Green Valley Farm, Maharashtra".to_owned(),
        quality_rating: "premium".to_owned(),
        price_per_unit: Some(45.0),
        description: "Fresh organic tomatoes".to_owned(),
    }
}

#[tokio::test]
async fn register_generates_id_and_stamps_ledger_fields() {
    let state = test_helpers::test_app_state();
    let registered = register_product(&state, sample_request(None)).await.expect("register");

    let product = &registered.product;
    assert!(product.product_id.starts_with("AGR-"));
    assert!(product.created_at.is_some());
    assert_eq!(product.farmer_address.as_deref(), Some(state.config.farmer_address.as_str()));
    assert!(product.transaction_hash.as_deref().is_some_and(|h| h.starts_with("0x")));
    assert!(registered.qr_code.starts_with("data:image/png;base64,"));
}

#[tokio::test]
async fn register_keeps_caller_product_id() {
    let state = test_helpers::test_app_state();
    let registered = register_product(&state, sample_request(Some("AGR-custom01"))).await.expect("register");
    assert_eq!(registered.product.product_id, "AGR-custom01");
}

#[tokio::test]
async fn issued_code_embeds_product_identity() {
    let state = test_helpers::test_app_state();
    let registered = register_product(&state, sample_request(Some("AGR-custom02"))).await.expect("register");
    let code = VerificationCode::decode(&registered.encrypted_code).expect("code");
    assert_eq!(code.product_id, "AGR-custom02");
    assert_eq!(code.name, "Organic Tomatoes");
    assert_eq!(code.farm_location, "Green Valley Farm, Maharashtra");
}

#[tokio::test]
async fn qr_image_encodes_issued_code() {
    let state = test_helpers::test_app_state();
    let registered = register_product(&state, sample_request(None)).await.expect("register");
    let png = qr::data_url_png_bytes(&registered.qr_code).expect("png");
    assert_eq!(qr::decode_image(&png).expect("decode"), registered.encrypted_code);
}

#[tokio::test]
async fn register_rejects_blank_name() {
    let state = test_helpers::test_app_state();
    let mut request = sample_request(None);
    request.name = "  ".to_owned();
    assert!(matches!(register_product(&state, request).await, Err(ProductError::MissingName)));
    assert!(state.registry.read().await.products.is_empty());
}

#[tokio::test]
async fn register_rejects_duplicate_id() {
    let state = test_helpers::test_app_state();
    register_product(&state, sample_request(Some("AGR-dup"))).await.expect("first");
    let err = register_product(&state, sample_request(Some("AGR-dup"))).await.unwrap_err();
    assert!(matches!(err, ProductError::Duplicate(ref id) if id == "AGR-dup"));
    assert_eq!(state.registry.read().await.codes.len(), 1);
}

#[tokio::test]
async fn verify_returns_registered_product() {
    let state = test_helpers::test_app_state();
    let registered = register_product(&state, sample_request(None)).await.expect("register");
    let product = verify_product(&state, &registered.encrypted_code).await.expect("verify");
    assert_eq!(product, registered.product);
}

#[tokio::test]
async fn verify_rejects_unknown_code() {
    let state = test_helpers::test_app_state();
    assert!(matches!(verify_product(&state, "bm9wZQ==").await, Err(ProductError::UnknownCode)));
}

#[tokio::test]
async fn verify_reports_orphaned_code() {
    let state = test_helpers::test_app_state();
    state.registry.write().await.codes.insert("orphan".to_owned(), "AGR-gone".to_owned());
    assert!(matches!(verify_product(&state, "orphan").await, Err(ProductError::Orphaned(_))));
}

#[tokio::test]
async fn get_product_by_id() {
    let state = test_helpers::test_app_state();
    let registered = register_product(&state, sample_request(Some("AGR-lookup"))).await.expect("register");
    assert_eq!(get_product(&state, "AGR-lookup").await.expect("get"), registered.product);
    assert!(matches!(get_product(&state, "AGR-none").await, Err(ProductError::NotFound(_))));
}
