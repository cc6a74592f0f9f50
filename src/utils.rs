/// Get the extension of a filename (lowercased, without the dot)
pub fn extension_from_filename(name: &str) -> Option<String> {
    std::path::Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())
}
