use crate::models::ResourceFileInfo;
use anyhow::Result;

/// Trait for the host file storage backing course resources
#[async_trait::async_trait]
pub trait FileStore: Send + Sync {
    /// Locate the first file attached to a resource, by filename ordering
    /// among non-directory entries. An absent file is `None`, not an error.
    async fn resolve_first_file(&self, resource_id: u64) -> Result<Option<ResourceFileInfo>>;

    /// Retrieve the raw bytes for a previously resolved file
    async fn read(&self, file: &ResourceFileInfo) -> Result<Vec<u8>>;
}
