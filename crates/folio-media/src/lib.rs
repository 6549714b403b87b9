//! Media reference layer.
//!
//! Accepts raw uploaded files, forwards them to the external image host
//! under a per-entity folder, and hands back an opaque [`MediaRef`] the
//! persistence layer stores. Delivery URLs are derived from a reference
//! without any network call via [`MediaStore::resolve_url`].

pub mod cloudinary;
pub mod error;
pub mod store;
pub mod types;

pub use cloudinary::{CloudinaryStore, MediaConfig};
pub use error::MediaError;
pub use store::MediaStore;
pub use types::{validate_image_file_name, MediaFolder, MediaRef, UploadedImage};
