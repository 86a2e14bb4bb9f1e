use super::*;

#[test]
fn decode_qr_reads_rendered_code() {
    let png = products::qr::render_png("QUdSLTF8VG9tYXRvZXN8RmFybXwx", 240).expect("render");
    assert_eq!(decode_qr(&png).as_deref(), Ok("QUdSLTF8VG9tYXRvZXN8RmFybXwx"));
}

#[test]
fn decode_qr_rejects_non_image_bytes() {
    assert!(decode_qr(b"definitely not an image").is_err());
}
