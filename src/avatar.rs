//! Avatar images stored as `data:` URLs.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AvatarError {
    #[error("Not an image file: {0}")]
    NotAnImage(String),

    #[error("Failed to read avatar: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data URL: {0}")]
    InvalidDataUrl(String),
}

fn mime_for_extension(ext: &str) -> Option<&'static str> {
    match ext.to_ascii_lowercase().as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

/// Read an image file into a `data:<mime>;base64,...` URL.
pub fn encode_avatar(path: &Path) -> Result<String, AvatarError> {
    let mime = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(mime_for_extension)
        .ok_or_else(|| AvatarError::NotAnImage(path.display().to_string()))?;

    let bytes = std::fs::read(path)?;
    Ok(encode_bytes(mime, &bytes))
}

pub fn encode_bytes(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Check that `url` is a base64 image data URL, as uploaded by a browser.
pub fn validate_data_url(url: &str) -> Result<(), AvatarError> {
    let invalid = || AvatarError::InvalidDataUrl(truncate(url));

    let rest = url.strip_prefix("data:").ok_or_else(invalid)?;
    let (mime, payload) = rest.split_once(";base64,").ok_or_else(invalid)?;
    if !mime.starts_with("image/") {
        return Err(AvatarError::NotAnImage(mime.to_string()));
    }
    STANDARD.decode(payload).map_err(|_| invalid())?;
    Ok(())
}

fn truncate(url: &str) -> String {
    url.chars().take(32).collect()
}
