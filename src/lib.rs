pub mod auth;
pub mod client;
pub mod config;
pub mod constants;
pub mod errors;
pub mod handler;
pub mod models;
pub mod rpc;
pub mod storage;
pub mod ui;
pub mod utils;

pub use auth::Authorizer;
pub use client::TagProvider;
pub use errors::TagError;
pub use handler::TagRequestHandler;
pub use models::{CallerIdentity, FilePayload, ResourceFileInfo};
pub use storage::FileStore;
pub use ui::{TagForm, TagRpc, TaggingController};
