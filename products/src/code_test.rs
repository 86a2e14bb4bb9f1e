use super::*;

#[test]
fn encode_matches_known_payload() {
    let code = VerificationCode {
        product_id: "AGR-884f4cc".to_owned(),
        name: "Organic Apples".to_owned(),
        farm_location: "California Farm".to_owned(),
        issued_at_ms: 173_161_498_089,
    };
    assert_eq!(code.encode(), "QUdSLTg4NGY0Y2N8T3JnYW5pYyBBcHBsZXN8Q2FsaWZvcm5pYSBGYXJtfDE3MzE2MTQ5ODA4OQ==");
}

#[test]
fn decode_reads_demo_payload() {
    let code = VerificationCode::decode("QUdSLTg4NGY0Y2N8T3JnYW5pYyBBcHBsZXN8Q2FsaWZvcm5pYSBGYXJtfDE3MzE2MTQ5ODA4OQ==")
        .expect("code");
    assert_eq!(code.product_id, "AGR-884f4cc");
    assert_eq!(code.name, "Organic Apples");
    assert_eq!(code.farm_location, "California Farm");
    assert_eq!(code.issued_at_ms, 173_161_498_089);
}

#[test]
fn issue_copies_identifying_fields() {
    let product = Product {
        product_id: "AGR-12345678".to_owned(),
        name: "Turmeric".to_owned(),
        farm_location: "Kandhamal".to_owned(),
        ..Product::default()
    };
    let code = VerificationCode::issue(&product, 1_700_000_000_000);
    let decoded = VerificationCode::decode(&code.encode()).expect("code");
    assert_eq!(decoded, code);
}

#[test]
fn decode_keeps_separator_inside_location() {
    let raw = base64::engine::general_purpose::STANDARD.encode("AGR-1|Rice|Farm|Block B|42");
    let code = VerificationCode::decode(&raw).expect("code");
    assert_eq!(code.name, "Rice");
    assert_eq!(code.farm_location, "Farm|Block B");
    assert_eq!(code.issued_at_ms, 42);
}

#[test]
fn decode_rejects_non_base64() {
    assert!(matches!(VerificationCode::decode("not base64!"), Err(ContractError::InvalidCode(_))));
}

#[test]
fn decode_rejects_missing_parts() {
    let raw = base64::engine::general_purpose::STANDARD.encode("AGR-1|Rice");
    assert!(matches!(VerificationCode::decode(&raw), Err(ContractError::InvalidCode(_))));
}

#[test]
fn decode_rejects_bad_timestamp() {
    let raw = base64::engine::general_purpose::STANDARD.encode("AGR-1|Rice|Puri|soon");
    let err = VerificationCode::decode(&raw).unwrap_err();
    assert_eq!(err.to_string(), "invalid verification code: bad timestamp `soon`");
}
