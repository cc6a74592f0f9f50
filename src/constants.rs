/// Constants used throughout the AutoTag workflow
/// This module centralizes all constant values for better maintainability

/// System instruction sent with every tagging request
pub const TAGGING_SYSTEM_PROMPT: &str = "You are a tagging assistant. Your task is to extract a list of the most important tags for the given content. All tags shall be given in English.";

/// Name of the strict output schema requested from the API
pub const TAG_SCHEMA_NAME: &str = "tag_response";

/// Default model used for tag extraction
pub const DEFAULT_MODEL: &str = "gpt-5";

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Request timeout in seconds
/// Tagging large PDFs is slow, so this is minutes rather than seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 600;

/// The only file extension accepted for tagging (lowercased)
pub const SUPPORTED_EXTENSION: &str = "pdf";

/// Media type declared in the file payload sent to the API
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Maximum length of a single tag committed into the form, in characters
pub const MAX_TAG_LENGTH: usize = 100;

/// Maximum number of tags committed into the form per request
pub const MAX_TAGS_PER_REQUEST: usize = 50;
