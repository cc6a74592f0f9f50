use thiserror::Error;

/// Errors raised by the tag request workflow
///
/// Every variant crosses the RPC boundary as its display string; the
/// user-facing wording therefore lives here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    /// The caller lacks the capability to manage this resource
    #[error("You do not have permission to tag this resource.")]
    Permission,

    /// The resource has no attached file, or the file is not a PDF
    #[error("Only PDF files are currently supported.")]
    UnsupportedFileType,

    /// No API credential configured
    #[error("No OpenAI API key provided.")]
    Configuration,

    /// The remote call failed or timed out; the message is passed through
    #[error("{0}")]
    Upstream(String),

    /// The API responded but its output did not match the expected schema
    #[error("Error while parsing the generated tags.")]
    Parse,

    /// Host file storage failed while resolving or reading the file
    #[error("File storage error: {0}")]
    Storage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_user_facing_strings() {
        assert_eq!(
            TagError::Configuration.to_string(),
            "No OpenAI API key provided."
        );
        assert_eq!(
            TagError::UnsupportedFileType.to_string(),
            "Only PDF files are currently supported."
        );
        assert_eq!(
            TagError::Parse.to_string(),
            "Error while parsing the generated tags."
        );
    }

    #[test]
    fn test_upstream_message_passed_through() {
        let err = TagError::Upstream("connection reset".to_string());
        assert_eq!(err.to_string(), "connection reset");
    }
}
