// SPDX-License-Identifier: MPL-2.0
//! Local photo directory used as the asset host.

use crate::application::port::{ExistenceProbe, TextFetch};
use crate::error::ManifestError;

/// Filesystem implementation of the asset ports.
///
/// Locations are interpreted as filesystem paths, relative to the process
/// working directory when not absolute.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsAssets;

impl FsAssets {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ExistenceProbe for FsAssets {
    async fn exists(&self, location: &str) -> bool {
        match tokio::fs::metadata(location).await {
            Ok(metadata) => metadata.is_file(),
            Err(err) => {
                tracing::debug!(path = location, error = %err, "probe miss");
                false
            }
        }
    }
}

impl TextFetch for FsAssets {
    async fn fetch_text(&self, location: &str) -> Result<String, ManifestError> {
        tokio::fs::read_to_string(location)
            .await
            .map_err(|e| ManifestError::Unavailable(format!("{location}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn regular_file_exists() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("Colonie 1.jpg");
        fs::write(&path, b"jpeg").expect("failed to write file");

        assert!(FsAssets.exists(path.to_str().unwrap()).await);
    }

    #[tokio::test]
    async fn directory_and_missing_path_do_not_exist() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("Colonie 2.jpg");

        assert!(!FsAssets.exists(temp_dir.path().to_str().unwrap()).await);
        assert!(!FsAssets.exists(missing.to_str().unwrap()).await);
    }

    #[tokio::test]
    async fn fetch_text_reads_file_contents() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("index.json");
        fs::write(&path, r#"{"images":[]}"#).expect("failed to write file");

        let text = FsAssets.fetch_text(path.to_str().unwrap()).await.unwrap();
        assert_eq!(text, r#"{"images":[]}"#);
    }

    #[tokio::test]
    async fn fetch_text_missing_file_is_unavailable() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("index.json");

        let result = FsAssets.fetch_text(path.to_str().unwrap()).await;
        assert!(matches!(result, Err(ManifestError::Unavailable(_))));
    }
}
