/// Failures while storing a file at the external image host.
///
/// None of these are retried; the enclosing create/update operation
/// surfaces them to the caller as a client-visible upload error.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("Upload timed out")]
    Timeout,

    #[error("Upload transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Upload rejected by media host (status {status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("Unexpected media host response: {0}")]
    InvalidResponse(String),
}
