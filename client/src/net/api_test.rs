use super::*;

#[test]
fn endpoint_joins_base_and_path() {
    assert_eq!(
        endpoint("http://localhost:8086", "/api/products/register"),
        "http://localhost:8086/api/products/register"
    );
}

#[test]
fn endpoint_drops_trailing_slash_on_base() {
    assert_eq!(endpoint("https://farm.example/", "/healthz"), "https://farm.example/healthz");
}

#[test]
fn endpoint_accepts_encoded_verify_path() {
    let url = endpoint(DEFAULT_API_BASE, &products::verify_path("QUdS+LQ=="));
    assert_eq!(url, "http://localhost:8086/api/products/verify/QUdS%2BLQ%3D%3D");
}

#[test]
fn transport_failed_message_includes_cause() {
    assert_eq!(transport_failed_message(&"connection refused"), "Network error: connection refused");
}

#[test]
fn api_base_defaults_to_local_server() {
    if option_env!("AGRICHAIN_API_BASE").is_none() {
        assert_eq!(api_base(), DEFAULT_API_BASE);
    }
}
