use crate::models::CallerIdentity;

/// Trait for the host permission system
///
/// The host framework decides what a capability means; this crate only asks
/// whether the caller holds one in the resource's context.
#[async_trait::async_trait]
pub trait Authorizer: Send + Sync {
    /// Whether the caller holds the capability for the given resource
    async fn can(&self, caller: &CallerIdentity, resource_id: u64, capability: &str) -> bool;
}
