use super::*;
use products::Product;

fn filled_form() -> FarmerForm {
    FarmerForm {
        product_name: "Organic Tomatoes".to_owned(),
        category: "vegetables".to_owned(),
        date_of_manufacture: "2024-01-15".to_owned(),
        time: "08:30".to_owned(),
        place: "Green Valley Farm".to_owned(),
        quality_rating: "premium".to_owned(),
        price_for_farmer: "45.50".to_owned(),
        description: "Fresh".to_owned(),
        product_id: String::new(),
    }
}

fn registration(id: &str) -> Registration {
    Registration {
        product: Product { product_id: id.to_owned(), ..Product::default() },
        qr_code: "data:image/png;base64,AAAA".to_owned(),
        verification_code: None,
    }
}

// =============================================================
// FarmerField
// =============================================================

#[test]
fn only_product_id_is_optional() {
    let optional: Vec<_> = FarmerField::ALL.iter().filter(|f| !f.required()).collect();
    assert_eq!(optional, vec![&FarmerField::ProductId]);
}

#[test]
fn field_input_types() {
    assert_eq!(FarmerField::DateOfManufacture.input_type(), "date");
    assert_eq!(FarmerField::Time.input_type(), "time");
    assert_eq!(FarmerField::PriceForFarmer.input_type(), "number");
    assert_eq!(FarmerField::Place.input_type(), "text");
    assert!(FarmerField::Description.multiline());
}

#[test]
fn form_set_and_get_cover_every_field() {
    let mut form = FarmerForm::default();
    for (i, field) in FarmerField::ALL.iter().enumerate() {
        form.set(*field, format!("value-{i}"));
    }
    for (i, field) in FarmerField::ALL.iter().enumerate() {
        assert_eq!(form.get(*field), format!("value-{i}"));
    }
}

// =============================================================
// FarmerForm::to_request
// =============================================================

#[test]
fn to_request_maps_form_fields() {
    let request = filled_form().to_request().expect("request");
    assert_eq!(request.product_id, None);
    assert_eq!(request.name, "Organic Tomatoes");
    assert_eq!(request.harvest_date, "2024-01-15");
    assert_eq!(request.harvest_time, "08:30");
    assert_eq!(request.farm_location, "Green Valley Farm");
    assert_eq!(request.price_per_unit, Some(45.5));
}

#[test]
fn to_request_keeps_trimmed_product_id() {
    let mut form = filled_form();
    form.product_id = "  AGR-custom  ".to_owned();
    assert_eq!(form.to_request().expect("request").product_id.as_deref(), Some("AGR-custom"));
}

#[test]
fn to_request_requires_every_required_field() {
    for field in FarmerField::ALL.iter().filter(|f| f.required()) {
        let mut form = filled_form();
        form.set(*field, "   ".to_owned());
        assert_eq!(form.to_request(), Err(MISSING_FIELDS_MESSAGE), "field {field:?}");
    }
}

#[test]
fn to_request_rejects_unparseable_price() {
    let mut form = filled_form();
    form.price_for_farmer = "cheap".to_owned();
    assert_eq!(form.to_request(), Err(INVALID_PRICE_MESSAGE));
}

// =============================================================
// FarmerState transitions
// =============================================================

#[test]
fn begin_submit_sets_loading_and_clears_error() {
    let mut state = FarmerState { form: filled_form(), error: Some("old".to_owned()), ..FarmerState::default() };
    assert!(state.begin_submit().is_some());
    assert!(state.loading);
    assert_eq!(state.error, None);
}

#[test]
fn begin_submit_is_blocked_while_loading() {
    let mut state = FarmerState { form: filled_form(), loading: true, ..FarmerState::default() };
    assert!(state.begin_submit().is_none());
}

#[test]
fn begin_submit_with_missing_fields_sends_nothing() {
    let mut state = FarmerState::default();
    assert!(state.begin_submit().is_none());
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some(MISSING_FIELDS_MESSAGE));
}

#[test]
fn finish_submit_success_renders_qr_and_id() {
    let mut state = FarmerState { form: filled_form(), ..FarmerState::default() };
    state.begin_submit();
    state.finish_submit(Ok(registration("AGR-1a2b3c4d")));
    assert!(!state.loading);
    assert_eq!(state.qr_code.as_deref(), Some("data:image/png;base64,AAAA"));
    assert_eq!(state.product_id.as_deref(), Some("AGR-1a2b3c4d"));
    assert_eq!(
        state.success_message().as_deref(),
        Some("Product AGR-1a2b3c4d has been added to the blockchain.")
    );
}

#[test]
fn finish_submit_failure_clears_previous_result() {
    let mut state = FarmerState::default();
    state.finish_submit(Ok(registration("AGR-old")));
    state.finish_submit(Err("Failed to register product".to_owned()));
    assert_eq!(state.qr_code, None);
    assert_eq!(state.product_id, None);
    assert_eq!(state.error.as_deref(), Some("Failed to register product"));
}

#[test]
fn reset_clears_form_and_result() {
    let mut state = FarmerState { form: filled_form(), ..FarmerState::default() };
    state.finish_submit(Ok(registration("AGR-1")));
    state.reset();
    assert_eq!(state, FarmerState::default());
}
