//! Reading an uploaded QR image and extracting its payload.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

/// Read the full contents of a file picked in an `<input type="file">`.
///
/// # Errors
///
/// Returns the browser's error text when the read is rejected.
#[cfg(feature = "hydrate")]
pub async fn read_file(file: web_sys::File) -> Result<Vec<u8>, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| e.as_string().unwrap_or_else(|| format!("{e:?}")))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Decode the first QR code found in PNG/JPEG bytes.
///
/// # Errors
///
/// Returns the decoder's reason when no readable code is present.
#[cfg(any(test, feature = "hydrate"))]
pub fn decode_qr(bytes: &[u8]) -> Result<String, String> {
    products::qr::decode_image(bytes).map_err(|e| e.to_string())
}
