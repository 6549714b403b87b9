use async_trait::async_trait;

use crate::error::MediaError;
use crate::types::{MediaFolder, MediaRef, UploadedImage};

/// Storage seam between handlers and the external image host.
///
/// The production implementation is [`crate::CloudinaryStore`]; HTTP tests
/// substitute an in-process fake so no network is involved.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Upload a file into `folder`, returning the stable reference the
    /// host assigned. Fails without retry if the host is unreachable,
    /// rejects the file, or the configured deadline expires.
    async fn store(
        &self,
        upload: UploadedImage,
        folder: MediaFolder,
    ) -> Result<MediaRef, MediaError>;

    /// Build a fetchable URL for a stored reference. Pure string
    /// templating -- no network call.
    fn resolve_url(&self, reference: &MediaRef, secure: bool) -> String;
}
