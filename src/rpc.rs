use crate::handler::TagRequestHandler;
use crate::models::CallerIdentity;
use serde::{Deserialize, Serialize};

/// Parameters of the `tag_resource` RPC method
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagResourceRequest {
    pub resourceid: u64,
}

/// Wire result of the `tag_resource` RPC method: an ordered tag array on
/// success, or an error object carrying one human-readable message
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum TagResourceResponse {
    Tags(Vec<String>),
    Failure { error: RpcError },
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RpcError {
    pub message: String,
}

/// Run one `tag_resource` call and flatten any error to its message
///
/// The UI never branches on error kind, so the kind is erased here.
pub async fn dispatch(
    handler: &TagRequestHandler,
    caller: &CallerIdentity,
    request: TagResourceRequest,
) -> TagResourceResponse {
    match handler.handle(request.resourceid, caller).await {
        Ok(tags) => TagResourceResponse::Tags(tags),
        Err(e) => TagResourceResponse::Failure {
            error: RpcError {
                message: e.to_string(),
            },
        },
    }
}
