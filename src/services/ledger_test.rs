use super::*;

#[test]
fn generated_product_ids_have_prefix_and_length() {
    let id = generate_product_id();
    assert!(id.starts_with("AGR-"));
    assert_eq!(id.len(), 12);
    assert!(id[4..].chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generated_product_ids_are_distinct() {
    assert_ne!(generate_product_id(), generate_product_id());
}

#[test]
fn transaction_hash_is_hex_prefixed() {
    let hash = simulated_transaction_hash();
    assert!(hash.starts_with("0x"));
    assert_eq!(hash.len(), 34);
}

#[test]
fn now_ms_converts_from_unix_time() {
    let at = OffsetDateTime::from_unix_timestamp(1_700_000_000).expect("timestamp");
    assert_eq!(now_ms(at), 1_700_000_000_000);
}

#[test]
fn rfc3339_formats_utc() {
    let at = OffsetDateTime::from_unix_timestamp(0).expect("timestamp");
    assert_eq!(rfc3339(at), "1970-01-01T00:00:00Z");
}
