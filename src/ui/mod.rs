pub mod controller;
pub mod r#trait;

pub use controller::TaggingController;
pub use r#trait::{TagForm, TagRpc};
