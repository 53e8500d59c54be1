// SPDX-License-Identifier: MPL-2.0
//! Per-folder image manifests (`index.json`).
//!
//! A manifest lists the image files of one photo folder so a site can read a
//! single JSON file instead of probing numbered filenames:
//!
//! ```json
//! {
//!   "images": ["Colonie 1.jpg", "Colonie 2.png"],
//!   "generated": "2024-05-01T10:00:00.000Z",
//!   "count": 2
//! }
//! ```

pub mod watch;

pub use watch::{watch, watch_until, FolderChange, WatchState};

use crate::config::defaults::{MANIFEST_FILE_NAME, MANIFEST_IMAGE_EXTENSIONS};
use crate::domain::gallery::FolderSpec;
use crate::error::{ManifestError, Result};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Contents of an `index.json` manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageIndex {
    /// Bare filenames, sorted alphabetically.
    pub images: Vec<String>,
    /// RFC 3339 UTC timestamp of generation.
    #[serde(default)]
    pub generated: String,
    #[serde(default)]
    pub count: usize,
}

impl ImageIndex {
    /// Builds an index stamped with the current time.
    #[must_use]
    pub fn new(images: Vec<String>) -> Self {
        Self {
            count: images.len(),
            generated: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            images,
        }
    }

    /// Parses manifest JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Malformed`] if the text is not a manifest.
    pub fn from_json(text: &str) -> std::result::Result<Self, ManifestError> {
        serde_json::from_str(text).map_err(|e| ManifestError::Malformed(e.to_string()))
    }

    /// Serializes as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Serialize`] if serialization fails.
    pub fn to_json(&self) -> std::result::Result<String, ManifestError> {
        serde_json::to_string_pretty(self).map_err(|e| ManifestError::Serialize(e.to_string()))
    }
}

/// Manifest written for one folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderIndex {
    pub folder: String,
    pub index_path: PathBuf,
    pub count: usize,
}

/// Outcome of [`generate_all_indexes`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexReport {
    pub folders: Vec<FolderIndex>,
    pub total: usize,
}

/// Returns `true` if `file_name` has a manifest image extension (any case).
#[must_use]
pub fn is_manifest_image(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            MANIFEST_IMAGE_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Lists the image filenames of `dir`, sorted alphabetically.
///
/// A missing directory is logged and yields an empty list.
///
/// # Errors
///
/// Returns an error if the directory exists but cannot be read.
pub fn list_images(dir: &Path) -> Result<Vec<String>> {
    if !dir.exists() {
        tracing::warn!(dir = %dir.display(), "photo folder does not exist");
        return Ok(Vec::new());
    }

    let mut images = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }
        // Non UTF-8 names cannot be referenced from a page anyway.
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if is_manifest_image(&name) {
            images.push(name);
        }
    }
    images.sort();
    Ok(images)
}

/// Writes the manifest of `dir` to `output`, creating parent directories.
///
/// Returns the number of images listed.
///
/// # Errors
///
/// Returns an error if the directory cannot be read or the manifest cannot
/// be written.
pub fn generate_index_for_directory(dir: &Path, output: &Path) -> Result<usize> {
    tracing::debug!(dir = %dir.display(), "scanning photo folder");
    let index = ImageIndex::new(list_images(dir)?);

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output, index.to_json()?)?;

    tracing::info!(
        path = %output.display(),
        count = index.count,
        images = ?index.images,
        "manifest generated"
    );
    Ok(index.count)
}

/// Location of a folder's manifest under `photos_root`.
#[must_use]
pub fn index_path(photos_root: &Path, folder: &FolderSpec) -> PathBuf {
    photos_root
        .join(&folder.internal_name)
        .join(MANIFEST_FILE_NAME)
}

/// Writes `<photos_root>/<internal_name>/index.json` for every folder.
///
/// # Errors
///
/// Stops at the first folder whose manifest cannot be generated.
pub fn generate_all_indexes(photos_root: &Path, folders: &[FolderSpec]) -> Result<IndexReport> {
    let mut report = IndexReport::default();

    for folder in folders {
        let dir = photos_root.join(&folder.internal_name);
        let index_path = index_path(photos_root, folder);
        let count = generate_index_for_directory(&dir, &index_path)?;
        report.total += count;
        report.folders.push(FolderIndex {
            folder: folder.internal_name.clone(),
            index_path,
            count,
        });
    }

    tracing::info!(
        folders = report.folders.len(),
        total = report.total,
        "manifest generation complete"
    );
    Ok(report)
}
