//! Multipart fixtures for document submissions.

#![allow(dead_code)]

use axum_test::multipart::{MultipartForm, Part};

/// Bytes with a JPEG magic prefix, padded to `size`.
pub fn jpeg_bytes(size: usize) -> Vec<u8> {
    let mut data = vec![0xFF, 0xD8, 0xFF, 0xE0];
    data.resize(size.max(4), 0xAA);
    data
}

/// Bytes with a PNG magic prefix, padded to `size`.
pub fn png_bytes(size: usize) -> Vec<u8> {
    let mut data = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    data.resize(size.max(8), 0xAB);
    data
}

pub fn file_part(data: Vec<u8>, filename: &str, mime: &str) -> Part {
    Part::bytes(data).file_name(filename).mime_type(mime)
}

/// A complete valid submission: front.png, back.jpg, selfie.jpg.
pub fn valid_submission() -> MultipartForm {
    MultipartForm::new()
        .add_part(
            "nid-front",
            file_part(png_bytes(2 * 1024), "front.png", "image/png"),
        )
        .add_part(
            "nid-back",
            file_part(jpeg_bytes(3 * 1024), "back.jpg", "image/jpeg"),
        )
        .add_part(
            "selfie-with-nid",
            file_part(jpeg_bytes(1024), "selfie.jpg", "image/jpeg"),
        )
}
