use crate::error::{Error, Result};
use std::path::Path;

#[derive(Debug)]
pub struct FileTypeConfig {
    pub extensions: &'static [&'static str],
    pub size_limit: u64,
}

pub const SUPPORTED_FILE_TYPES: &[FileTypeConfig] = &[
    FileTypeConfig {
        extensions: &["mp4", "mov"],
        size_limit: 262144000, // 250 MB
    },
    FileTypeConfig {
        extensions: &["jpg", "png", "jpeg", "gif", "webp"],
        size_limit: 52428800, // 50 MB
    },
    FileTypeConfig {
        extensions: &["flac", "wav", "mp3", "m4a", "aac", "alac", "ogg"],
        size_limit: 20971520, // 20 MB
    },
    FileTypeConfig {
        extensions: &["txt"],
        size_limit: 5242880, // 5 MB
    },
];

/// Look up the supported type entry for a path's extension (case-insensitive)
pub fn file_type_for(path: &Path) -> Option<&'static FileTypeConfig> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    SUPPORTED_FILE_TYPES
        .iter()
        .find(|config| config.extensions.contains(&extension.as_str()))
}

/// Check that a file exists, has a supported extension and is within the
/// size limit for its type. Returns the file size in bytes.
pub async fn validate_file(path: &Path) -> Result<u64> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|_| Error::InvalidFile(format!("File not found: {}", path.display())))?;

    if !metadata.is_file() {
        return Err(Error::InvalidFile(format!(
            "Not a regular file: {}",
            path.display()
        )));
    }

    let file_type = file_type_for(path).ok_or_else(|| {
        Error::InvalidFile(format!("Unsupported file type: {}", path.display()))
    })?;

    if metadata.len() > file_type.size_limit {
        return Err(Error::FileTooLarge(format!(
            "{} is {} bytes, the limit for this type is {} bytes",
            path.display(),
            metadata.len(),
            file_type.size_limit
        )));
    }

    Ok(metadata.len())
}
