//! Shared multipart form decoding for the image-bearing resources.
//!
//! Education, work, and portfolio writes arrive as multipart form-data:
//! text fields plus an optional `image` file part. The decoder collects
//! both; per-field helpers then coerce values while accumulating
//! [`FieldErrors`] so a response names every problem at once. Unknown
//! fields are ignored.

use std::collections::BTreeMap;

use axum::extract::Multipart;
use folio_core::validation::{FieldErrors, INVALID_INTEGER, INVALID_URL};
use folio_media::{validate_image_file_name, UploadedImage};
use validator::ValidateUrl;

use crate::error::AppError;

/// Decoded multipart payload: text fields by name, plus at most one
/// uploaded image.
#[derive(Debug, Default)]
pub struct FormData {
    fields: BTreeMap<String, String>,
    image: Option<UploadedImage>,
}

impl FormData {
    /// Drain a multipart stream.
    ///
    /// A file part named `image` becomes the upload; an empty file part
    /// (what browsers send for an untouched file input) is treated as
    /// omitted, so updates that skip the image leave the stored reference
    /// alone. Malformed multipart bodies map to a 400.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = FormData::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            if let Some(file_name) = field.file_name() {
                let file_name = file_name.to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;

                if file_name.is_empty() && bytes.is_empty() {
                    continue;
                }
                if name == "image" {
                    form.image = Some(UploadedImage {
                        file_name,
                        content_type,
                        bytes: bytes.to_vec(),
                    });
                }
            } else {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                form.fields.insert(name, text);
            }
        }

        Ok(form)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Take the uploaded image after its file name passed validation.
    pub fn take_image(&mut self) -> Option<UploadedImage> {
        self.image.take()
    }

    #[cfg(test)]
    pub fn for_tests(fields: &[(&str, &str)], image: Option<UploadedImage>) -> Self {
        Self {
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            image,
        }
    }
}

// ---------------------------------------------------------------------------
// Field coercion helpers
// ---------------------------------------------------------------------------

/// Required text field: records the missing-field error and returns an
/// empty placeholder that is never persisted (the caller bails on any
/// recorded error before using it).
pub fn require_text(form: &FormData, name: &str, errors: &mut FieldErrors) -> String {
    match form.text(name) {
        Some(value) => value.to_string(),
        None => {
            errors.require(name);
            String::new()
        }
    }
}

pub fn optional_text(form: &FormData, name: &str) -> Option<String> {
    form.text(name).map(str::to_string)
}

/// Required integer field; parse failures record [`INVALID_INTEGER`].
pub fn require_int(form: &FormData, name: &str, errors: &mut FieldErrors) -> i32 {
    match form.text(name) {
        Some(raw) => parse_int(raw, name, errors).unwrap_or_default(),
        None => {
            errors.require(name);
            0
        }
    }
}

pub fn optional_int(form: &FormData, name: &str, errors: &mut FieldErrors) -> Option<i32> {
    form.text(name).and_then(|raw| parse_int(raw, name, errors))
}

fn parse_int(raw: &str, name: &str, errors: &mut FieldErrors) -> Option<i32> {
    match raw.trim().parse::<i32>() {
        Ok(value) => Some(value),
        Err(_) => {
            errors.add(name, INVALID_INTEGER);
            None
        }
    }
}

/// Required URL field; malformed values record [`INVALID_URL`].
pub fn require_url(form: &FormData, name: &str, errors: &mut FieldErrors) -> String {
    match form.text(name) {
        Some(raw) => {
            check_url(raw, name, errors);
            raw.to_string()
        }
        None => {
            errors.require(name);
            String::new()
        }
    }
}

pub fn optional_url(form: &FormData, name: &str, errors: &mut FieldErrors) -> Option<String> {
    form.text(name).map(|raw| {
        check_url(raw, name, errors);
        raw.to_string()
    })
}

fn check_url(raw: &str, name: &str, errors: &mut FieldErrors) {
    if !raw.validate_url() {
        errors.add(name, INVALID_URL);
    }
}

/// Validate the uploaded image's file name, recording any problem on the
/// `image` field. Returns whether an acceptable image is present.
pub fn check_image(form: &FormData, errors: &mut FieldErrors) {
    if let Some(image) = &form.image {
        if let Err(message) = validate_image_file_name(&image.file_name) {
            errors.add("image", message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields_record_errors() {
        let form = FormData::for_tests(&[("school", "Uni")], None);
        let mut errors = FieldErrors::new();

        assert_eq!(require_text(&form, "school", &mut errors), "Uni");
        require_text(&form, "degree", &mut errors);
        require_int(&form, "ordinal", &mut errors);

        let json = serde_json::to_value(&errors).unwrap();
        assert!(json.get("school").is_none());
        assert!(json.get("degree").is_some());
        assert!(json.get("ordinal").is_some());
    }

    #[test]
    fn test_int_coercion() {
        let form = FormData::for_tests(&[("ordinal", " 7 "), ("bad", "seven")], None);
        let mut errors = FieldErrors::new();

        assert_eq!(require_int(&form, "ordinal", &mut errors), 7);
        assert!(errors.is_empty());

        optional_int(&form, "bad", &mut errors);
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_url_validation() {
        let form = FormData::for_tests(&[("url", "not a url")], None);
        let mut errors = FieldErrors::new();
        require_url(&form, "url", &mut errors);
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["url"][0], INVALID_URL);
    }

    #[test]
    fn test_bad_image_extension_recorded() {
        let image = UploadedImage {
            file_name: "animation.gif".to_string(),
            content_type: Some("image/gif".to_string()),
            bytes: vec![1, 2, 3],
        };
        let form = FormData::for_tests(&[], Some(image));
        let mut errors = FieldErrors::new();
        check_image(&form, &mut errors);

        let json = serde_json::to_value(&errors).unwrap();
        let message = json["image"][0].as_str().unwrap();
        assert!(message.contains("png, jpg, jpeg"));
    }

    #[test]
    fn test_optional_absent_fields_stay_none() {
        let form = FormData::for_tests(&[], None);
        let mut errors = FieldErrors::new();
        assert!(optional_text(&form, "years").is_none());
        assert!(optional_int(&form, "ordinal", &mut errors).is_none());
        assert!(errors.is_empty());
    }
}
