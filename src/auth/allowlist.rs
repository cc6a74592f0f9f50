use crate::auth::Authorizer;
use crate::models::CallerIdentity;
use std::collections::HashSet;

/// Authorizer backed by an explicit grant table
///
/// Grants are (user id, capability) pairs valid for every resource; the
/// permissive mode grants everything. Intended for the CLI and tests;
/// production hosts plug in their own `Authorizer`.
pub struct StaticAuthorizer {
    permissive: bool,
    grants: HashSet<(String, String)>,
}

impl StaticAuthorizer {
    /// Create an authorizer that denies everything until grants are added
    pub fn new() -> Self {
        Self {
            permissive: false,
            grants: HashSet::new(),
        }
    }

    /// Create an authorizer that grants every capability to every caller
    pub fn allow_all() -> Self {
        Self {
            permissive: true,
            grants: HashSet::new(),
        }
    }

    /// Grant a capability to a user
    pub fn allow(mut self, user_id: &str, capability: &str) -> Self {
        self.grants
            .insert((user_id.to_string(), capability.to_string()));
        self
    }
}

impl Default for StaticAuthorizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Authorizer for StaticAuthorizer {
    async fn can(&self, caller: &CallerIdentity, _resource_id: u64, capability: &str) -> bool {
        self.permissive
            || self
                .grants
                .contains(&(caller.user_id.clone(), capability.to_string()))
    }
}
