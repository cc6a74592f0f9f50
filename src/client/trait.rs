use crate::errors::TagError;
use crate::models::FilePayload;

/// Trait for services that extract topical tags from a file payload
#[async_trait::async_trait]
pub trait TagProvider: Send + Sync {
    /// Extract an ordered list of tags for the given file
    ///
    /// The list is returned exactly as produced (order preserved, no
    /// deduplication). Fails with `TagError::Configuration` when no
    /// credential is available, `TagError::Upstream` when the remote call
    /// fails, and `TagError::Parse` when the response does not match the
    /// expected schema.
    async fn extract_tags(&self, payload: &FilePayload) -> Result<Vec<String>, TagError>;
}
