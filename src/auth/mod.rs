pub mod allowlist;
pub mod r#trait;

pub use allowlist::StaticAuthorizer;
pub use r#trait::Authorizer;

/// Capability names checked by the workflow
pub mod capability {
    /// Required to add or manage resources in the enclosing context
    pub const ADD_RESOURCE: &str = "resource:addinstance";
}
