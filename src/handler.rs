use crate::auth::{capability, Authorizer};
use crate::client::TagProvider;
use crate::constants::{PDF_MEDIA_TYPE, SUPPORTED_EXTENSION};
use crate::errors::TagError;
use crate::models::{CallerIdentity, FilePayload};
use crate::storage::FileStore;
use std::sync::Arc;

/// Orchestrates one tag request: permission check, file resolution, file
/// type gate, credential gate, then delegation to the tag provider
///
/// Every gate runs before the provider is reached, so a rejected request
/// never costs an API call. Stateless across requests.
pub struct TagRequestHandler {
    store: Arc<dyn FileStore>,
    authorizer: Arc<dyn Authorizer>,
    provider: Arc<dyn TagProvider>,
    api_key: Option<String>,
}

impl TagRequestHandler {
    pub fn new(
        store: Arc<dyn FileStore>,
        authorizer: Arc<dyn Authorizer>,
        provider: Arc<dyn TagProvider>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            store,
            authorizer,
            provider,
            api_key,
        }
    }

    /// Handle a tag request for the given resource
    ///
    /// Returns the provider's tag list unchanged, or exactly one error —
    /// there is no partial-success path.
    pub async fn handle(
        &self,
        resource_id: u64,
        caller: &CallerIdentity,
    ) -> Result<Vec<String>, TagError> {
        if !self
            .authorizer
            .can(caller, resource_id, capability::ADD_RESOURCE)
            .await
        {
            return Err(TagError::Permission);
        }

        let file = self
            .store
            .resolve_first_file(resource_id)
            .await
            .map_err(|e| TagError::Storage(e.to_string()))?;

        // Missing file and non-PDF file are the same user-facing rejection
        let file = match file {
            Some(file) if file.has_extension(SUPPORTED_EXTENSION) => file,
            _ => return Err(TagError::UnsupportedFileType),
        };

        if self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .is_none()
        {
            return Err(TagError::Configuration);
        }

        let bytes = self
            .store
            .read(&file)
            .await
            .map_err(|e| TagError::Storage(e.to_string()))?;

        tracing::debug!(resource_id, file = %file.name, size = bytes.len(), "extracting tags");

        let payload = FilePayload {
            file_name: file.name,
            media_type: PDF_MEDIA_TYPE.to_string(),
            bytes,
        };

        self.provider.extract_tags(&payload).await
    }
}
