use crate::utils;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The first file attached to a resource, as reported by the file store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceFileInfo {
    /// Filename as stored
    pub name: String,
    /// File extension (lowercased, without the dot), derived from the filename
    pub extension: Option<String>,
    /// Handle usable to retrieve the raw bytes
    pub path: PathBuf,
}

impl ResourceFileInfo {
    /// Create a new ResourceFileInfo, deriving the extension from the filename
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        let name = name.into();
        let extension = utils::extension_from_filename(&name);
        Self {
            name,
            extension,
            path: path.into(),
        }
    }

    /// Whether this file has the given lowercased extension
    pub fn has_extension(&self, ext: &str) -> bool {
        self.extension.as_deref() == Some(ext)
    }
}

/// File content handed to the tag extraction client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePayload {
    /// Filename declared to the API
    pub file_name: String,
    /// Declared media type, e.g. "application/pdf"
    pub media_type: String,
    /// Raw file bytes
    pub bytes: Vec<u8>,
}

/// Opaque identity of the caller requesting tags
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallerIdentity {
    pub user_id: String,
}

impl CallerIdentity {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}
