//! Media reference types and upload-boundary validation.

use serde::{Deserialize, Serialize};

/// File extensions the upload boundary accepts.
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Opaque reference to an object stored at the external image host
/// (the provider public id, e.g. `education/x7kq2p`).
///
/// Stored in the database as nullable TEXT; Rust code models absence as
/// `Option<MediaRef>` rather than an empty-string sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct MediaRef(String);

impl MediaRef {
    pub fn new(public_id: impl Into<String>) -> Self {
        Self(public_id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Folder namespace at the image host. Each image-bearing entity uploads
/// into its own folder; references are never shared across entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaFolder {
    Education,
    Work,
    Portfolio,
}

impl MediaFolder {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaFolder::Education => "education",
            MediaFolder::Work => "work",
            MediaFolder::Portfolio => "portfolio",
        }
    }
}

/// A raw uploaded file decoded from a multipart file part.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Check an uploaded file name against [`ALLOWED_EXTENSIONS`].
///
/// Returns the human-readable message to attach to the `image` field on
/// rejection. Matching is case-insensitive on the final extension.
pub fn validate_image_file_name(file_name: &str) -> Result<(), String> {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());

    match extension {
        Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
        _ => Err(format!(
            "File extension not allowed. Allowed extensions are: {}.",
            ALLOWED_EXTENSIONS.join(", ")
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_extensions_pass() {
        assert!(validate_image_file_name("diploma.png").is_ok());
        assert!(validate_image_file_name("logo.jpg").is_ok());
        assert!(validate_image_file_name("photo.JPEG").is_ok());
    }

    #[test]
    fn test_rejected_extension_names_allowed_formats() {
        let message = validate_image_file_name("animation.gif").unwrap_err();
        assert!(message.contains("png, jpg, jpeg"), "got: {message}");
    }

    #[test]
    fn test_missing_extension_rejected() {
        assert!(validate_image_file_name("noextension").is_err());
        assert!(validate_image_file_name("").is_err());
    }
}
