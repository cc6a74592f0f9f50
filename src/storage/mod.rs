pub mod directory;
pub mod r#trait;

pub use directory::DirectoryFileStore;
pub use r#trait::FileStore;
