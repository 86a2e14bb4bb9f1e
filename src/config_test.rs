use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let config = ServerConfig::from_lookup(|_| None);
    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.listen_addr(), "0.0.0.0:8086");
}

#[test]
fn reads_all_overrides() {
    let config = ServerConfig::from_lookup(lookup_from(&[
        ("BIND_ADDR", "127.0.0.1"),
        ("PORT", "9000"),
        ("FARMER_ADDRESS", "0xabc"),
        ("QR_SIZE", "512"),
    ]));
    assert_eq!(config.listen_addr(), "127.0.0.1:9000");
    assert_eq!(config.farmer_address, "0xabc");
    assert_eq!(config.qr_size, 512);
}

#[test]
fn invalid_numbers_fall_back_to_defaults() {
    let config = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty"), ("QR_SIZE", "-1")]));
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.qr_size, DEFAULT_QR_SIZE);
}

#[test]
fn blank_text_values_use_defaults() {
    let config = ServerConfig::from_lookup(lookup_from(&[("BIND_ADDR", "  "), ("FARMER_ADDRESS", "")]));
    assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(config.farmer_address, DEFAULT_FARMER_ADDRESS);
}

#[test]
fn qr_size_has_a_floor() {
    let config = ServerConfig::from_lookup(lookup_from(&[("QR_SIZE", "10")]));
    assert_eq!(config.qr_size, 64);
}
