//! QR rendering for issued codes and QR decoding for uploaded images.

#[cfg(test)]
#[path = "qr_test.rs"]
mod qr_test;

use std::io::Cursor;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{DynamicImage, ImageFormat, Luma};
use qrcode::QrCode;

use crate::wire::ContractError;

const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

#[derive(Debug, thiserror::Error)]
pub enum QrError {
    #[error("failed to encode QR code: {0}")]
    Encode(#[from] qrcode::types::QrError),
    #[error("failed to process image: {0}")]
    Image(#[from] image::ImageError),
    #[error("no QR code found in image")]
    NotFound,
    #[error("failed to decode QR code: {0}")]
    Decode(#[from] rqrr::DeQRError),
}

/// Render `text` as a PNG QR code at least `size` pixels square.
///
/// # Errors
///
/// Returns [`QrError::Encode`] when the text does not fit in a QR symbol and
/// [`QrError::Image`] if PNG encoding fails.
pub fn render_png(text: &str, size: u32) -> Result<Vec<u8>, QrError> {
    let code = QrCode::new(text.as_bytes())?;
    let pixels = code.render::<Luma<u8>>().min_dimensions(size, size).build();

    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageLuma8(pixels).write_to(&mut out, ImageFormat::Png)?;
    Ok(out.into_inner())
}

/// Render `text` as a `data:image/png;base64,…` URL suitable for an `<img>`.
///
/// # Errors
///
/// Same as [`render_png`].
pub fn render_data_url(text: &str, size: u32) -> Result<String, QrError> {
    let png = render_png(text, size)?;
    Ok(format!("{PNG_DATA_URL_PREFIX}{}", STANDARD.encode(png)))
}

/// Extract the PNG bytes from a data URL produced by [`render_data_url`].
///
/// # Errors
///
/// Returns [`ContractError::InvalidDataUrl`] for any other scheme or bad base64.
pub fn data_url_png_bytes(data_url: &str) -> Result<Vec<u8>, ContractError> {
    let payload = data_url
        .strip_prefix(PNG_DATA_URL_PREFIX)
        .ok_or(ContractError::InvalidDataUrl)?;
    STANDARD.decode(payload).map_err(|_| ContractError::InvalidDataUrl)
}

/// Decode the first QR code found in an encoded image (PNG or JPEG).
///
/// # Errors
///
/// Returns [`QrError::Image`] for unreadable images, [`QrError::NotFound`]
/// when no symbol is detected and [`QrError::Decode`] for damaged symbols.
#[allow(clippy::cast_possible_truncation)]
pub fn decode_image(bytes: &[u8]) -> Result<String, QrError> {
    let gray = image::load_from_memory(bytes)?.to_luma8();
    let (width, height) = gray.dimensions();
    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(width as usize, height as usize, |x, y| {
        gray.get_pixel(x as u32, y as u32).0[0]
    });

    let grids = prepared.detect_grids();
    let grid = grids.first().ok_or(QrError::NotFound)?;
    let (_meta, content) = grid.decode()?;
    Ok(content)
}
