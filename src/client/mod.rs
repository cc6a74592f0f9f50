pub mod openai;
pub mod r#trait;

pub use openai::OpenAiTagProvider;
pub use r#trait::TagProvider;
