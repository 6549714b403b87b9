//! Cloudinary-backed [`MediaStore`] implementation.
//!
//! Uploads go to `POST {api_base}/v1_1/{cloud_name}/image/upload` as
//! multipart form-data with a SHA-256 request signature (the account's
//! `signature_algorithm=sha256` mode). Delivery URLs are templated from
//! the stored public id and never require a network call.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::error::MediaError;
use crate::store::MediaStore;
use crate::types::{MediaFolder, MediaRef, UploadedImage};

const DEFAULT_API_BASE: &str = "https://api.cloudinary.com";
const DEFAULT_DELIVERY_HOST: &str = "res.cloudinary.com";
const DEFAULT_UPLOAD_TIMEOUT_SECS: u64 = 30;

/// Media host configuration, built once at process start.
#[derive(Debug, Clone)]
pub struct MediaConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    /// Upload API base (default: `https://api.cloudinary.com`).
    pub api_base: String,
    /// Delivery hostname used in resolved URLs (default: `res.cloudinary.com`).
    pub delivery_host: String,
    /// Deadline for a single upload request. Expiry surfaces as
    /// [`MediaError::Timeout`]; there is no retry.
    pub upload_timeout_secs: u64,
}

impl MediaConfig {
    /// Load media host configuration from environment variables.
    ///
    /// | Env Var                    | Required | Default                      |
    /// |----------------------------|----------|------------------------------|
    /// | `CLOUDINARY_CLOUD_NAME`    | **yes**  | --                           |
    /// | `CLOUDINARY_API_KEY`       | **yes**  | --                           |
    /// | `CLOUDINARY_API_SECRET`    | **yes**  | --                           |
    /// | `CLOUDINARY_API_BASE`      | no       | `https://api.cloudinary.com` |
    /// | `CLOUDINARY_DELIVERY_HOST` | no       | `res.cloudinary.com`         |
    /// | `MEDIA_UPLOAD_TIMEOUT_SECS`| no       | `30`                         |
    ///
    /// # Panics
    ///
    /// Panics if a required variable is missing, which is the desired
    /// fail-fast behaviour at startup.
    pub fn from_env() -> Self {
        let cloud_name = std::env::var("CLOUDINARY_CLOUD_NAME")
            .expect("CLOUDINARY_CLOUD_NAME must be set in the environment");
        let api_key = std::env::var("CLOUDINARY_API_KEY")
            .expect("CLOUDINARY_API_KEY must be set in the environment");
        let api_secret = std::env::var("CLOUDINARY_API_SECRET")
            .expect("CLOUDINARY_API_SECRET must be set in the environment");

        let api_base =
            std::env::var("CLOUDINARY_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.into());
        let delivery_host = std::env::var("CLOUDINARY_DELIVERY_HOST")
            .unwrap_or_else(|_| DEFAULT_DELIVERY_HOST.into());

        let upload_timeout_secs: u64 = std::env::var("MEDIA_UPLOAD_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_UPLOAD_TIMEOUT_SECS.to_string())
            .parse()
            .expect("MEDIA_UPLOAD_TIMEOUT_SECS must be a valid u64");

        Self {
            cloud_name,
            api_key,
            api_secret,
            api_base,
            delivery_host,
            upload_timeout_secs,
        }
    }
}

/// Subset of the upload response we care about.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    public_id: String,
}

pub struct CloudinaryStore {
    client: reqwest::Client,
    config: MediaConfig,
}

impl CloudinaryStore {
    /// Build a store with a client whose timeout bounds every upload.
    pub fn new(config: MediaConfig) -> Result<Self, MediaError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upload_timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    fn upload_url(&self) -> String {
        format!(
            "{}/v1_1/{}/image/upload",
            self.config.api_base, self.config.cloud_name
        )
    }

    /// SHA-256 signature over the signed params in alphabetical order,
    /// with the API secret appended.
    fn sign(&self, folder: &str, timestamp: i64) -> String {
        let to_sign = format!(
            "folder={folder}&timestamp={timestamp}{}",
            self.config.api_secret
        );
        let digest = Sha256::digest(to_sign.as_bytes());
        format!("{digest:x}")
    }
}

#[async_trait]
impl MediaStore for CloudinaryStore {
    async fn store(
        &self,
        upload: UploadedImage,
        folder: MediaFolder,
    ) -> Result<MediaRef, MediaError> {
        let timestamp = chrono::Utc::now().timestamp();
        let signature = self.sign(folder.as_str(), timestamp);

        let mut file_part = Part::bytes(upload.bytes).file_name(upload.file_name.clone());
        if let Some(content_type) = &upload.content_type {
            file_part = file_part
                .mime_str(content_type)
                .map_err(|e| MediaError::InvalidResponse(format!("Bad content type: {e}")))?;
        }

        let form = Form::new()
            .part("file", file_part)
            .text("folder", folder.as_str())
            .text("timestamp", timestamp.to_string())
            .text("api_key", self.config.api_key.clone())
            .text("signature", signature);

        let url = self.upload_url();
        tracing::debug!(%url, folder = folder.as_str(), file = %upload.file_name, "Uploading to media host");

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MediaError::Timeout
                } else {
                    MediaError::Transport(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::warn!(status = status.as_u16(), %body, "Media host rejected upload");
            return Err(MediaError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: UploadResponse = response
            .json()
            .await
            .map_err(|e| MediaError::InvalidResponse(e.to_string()))?;

        tracing::info!(public_id = %parsed.public_id, "Upload stored");
        Ok(MediaRef::new(parsed.public_id))
    }

    fn resolve_url(&self, reference: &MediaRef, secure: bool) -> String {
        let scheme = if secure { "https" } else { "http" };
        format!(
            "{scheme}://{}/{}/image/upload/{}",
            self.config.delivery_host,
            self.config.cloud_name,
            reference.as_str()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> MediaConfig {
        MediaConfig {
            cloud_name: "demo".to_string(),
            api_key: "key".to_string(),
            api_secret: "secret".to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            delivery_host: DEFAULT_DELIVERY_HOST.to_string(),
            upload_timeout_secs: 5,
        }
    }

    #[test]
    fn test_resolve_url_templates_scheme_and_public_id() {
        let store = CloudinaryStore::new(test_config()).unwrap();
        let reference = MediaRef::new("education/x7kq2p");

        assert_eq!(
            store.resolve_url(&reference, true),
            "https://res.cloudinary.com/demo/image/upload/education/x7kq2p"
        );
        assert_eq!(
            store.resolve_url(&reference, false),
            "http://res.cloudinary.com/demo/image/upload/education/x7kq2p"
        );
    }

    #[test]
    fn test_signature_is_deterministic() {
        let store = CloudinaryStore::new(test_config()).unwrap();
        let a = store.sign("education", 1700000000);
        let b = store.sign("education", 1700000000);
        assert_eq!(a, b);
        assert_eq!(a.len(), 64); // sha256 hex

        // Different folder or timestamp changes the signature.
        assert_ne!(a, store.sign("work", 1700000000));
        assert_ne!(a, store.sign("education", 1700000001));
    }

    #[test]
    fn test_upload_url_includes_cloud_name() {
        let store = CloudinaryStore::new(test_config()).unwrap();
        assert_eq!(
            store.upload_url(),
            "https://api.cloudinary.com/v1_1/demo/image/upload"
        );
    }
}
