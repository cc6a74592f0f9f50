use crate::models::ResourceFileInfo;
use crate::storage::FileStore;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// File store backed by a directory tree: one subdirectory per resource id,
/// holding that resource's content files
pub struct DirectoryFileStore {
    root: PathBuf,
}

impl DirectoryFileStore {
    /// Create a new store rooted at the given directory
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding the content files of a resource
    fn area_path(&self, resource_id: u64) -> PathBuf {
        self.root.join(resource_id.to_string())
    }
}

#[async_trait::async_trait]
impl FileStore for DirectoryFileStore {
    async fn resolve_first_file(&self, resource_id: u64) -> Result<Option<ResourceFileInfo>> {
        let area = self.area_path(resource_id);

        let mut entries = match tokio::fs::read_dir(&area).await {
            Ok(entries) => entries,
            // A resource without a storage area simply has no file
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to list storage area {}", area.display()))
            }
        };

        let mut files: Vec<(String, PathBuf)> = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .with_context(|| format!("Failed to list storage area {}", area.display()))?
        {
            let file_type = entry.file_type().await?;
            if !file_type.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            files.push((name, entry.path()));
        }

        files.sort_by(|a, b| a.0.cmp(&b.0));

        Ok(files
            .into_iter()
            .next()
            .map(|(name, path)| ResourceFileInfo::new(name, path)))
    }

    async fn read(&self, file: &ResourceFileInfo) -> Result<Vec<u8>> {
        tokio::fs::read(&file.path)
            .await
            .with_context(|| format!("Failed to read file {}", file.path.display()))
    }
}
