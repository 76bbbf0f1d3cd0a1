//! Disk-Backed Image Store
//!
//! Writes uploaded files under generated, timestamp-prefixed names so
//! concurrent uploads of identically named files cannot collide.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tokio::fs;

use crate::error::UploadResult;

/// Filesystem image store
#[derive(Debug, Clone)]
pub struct DiskImageStore {
    root: PathBuf,
}

impl DiskImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory files are written to
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write `bytes` under a unique name derived from `original_name`.
    ///
    /// Returns the stored file name. The write is awaited; a failure
    /// surfaces as an error and nothing is reported as stored.
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> UploadResult<String> {
        fs::create_dir_all(&self.root).await?;

        let stored_name = unique_name(original_name);
        let path = self.root.join(&stored_name);

        fs::write(&path, bytes).await?;

        tracing::debug!(file = %stored_name, bytes = bytes.len(), "Stored upload");

        Ok(stored_name)
    }
}

/// Millisecond-timestamp prefix plus the sanitized original name
fn unique_name(original_name: &str) -> String {
    format!("{}-{}", Utc::now().timestamp_millis(), sanitize(original_name))
}

/// Keep a conservative character set; everything else becomes `_`.
/// Path separators in client-supplied names must never reach the disk.
fn sanitize(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.trim_matches('_').is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_keeps_simple_names() {
        assert_eq!(sanitize("photo.png"), "photo.png");
        assert_eq!(sanitize("my-bike_1.jpeg"), "my-bike_1.jpeg");
    }

    #[test]
    fn test_sanitize_strips_path_separators() {
        assert_eq!(sanitize("../../etc/passwd"), ".._.._etc_passwd");
        assert_eq!(sanitize("a/b\\c.png"), "a_b_c.png");
    }

    #[test]
    fn test_sanitize_empty_name_falls_back() {
        assert_eq!(sanitize(""), "upload");
        assert_eq!(sanitize("///"), "upload");
    }

    #[test]
    fn test_unique_name_is_timestamp_prefixed() {
        let name = unique_name("photo.png");
        let (prefix, rest) = name.split_once('-').unwrap();
        assert!(prefix.parse::<i64>().is_ok());
        assert_eq!(rest, "photo.png");
    }

    #[tokio::test]
    async fn test_save_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = DiskImageStore::new(dir.path());

        let stored = store.save("photo.png", b"fake image bytes").await.unwrap();

        let on_disk = std::fs::read(dir.path().join(&stored)).unwrap();
        assert_eq!(on_disk, b"fake image bytes");
    }
}
