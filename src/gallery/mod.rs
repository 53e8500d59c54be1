// SPDX-License-Identifier: MPL-2.0
//! Image discovery for the gallery.
//!
//! Two sources are supported, selected by [`DiscoveryMode`]:
//! - [`scanner`]: probe numbered filenames until a run of misses
//! - [`discovery`]: read each folder's `index.json` manifest
//!
//! Both return records in folder order, then ascending sequence number.

pub mod discovery;
pub mod scanner;

pub use discovery::discover_from_manifest;
pub use scanner::{scan_folder, scan_folders, ScanOptions};

use crate::application::port::{ExistenceProbe, TextFetch};
use crate::config::DiscoveryMode;
use crate::domain::gallery::{FolderSpec, ImageRecord};
use crate::error::ManifestError;

/// Images found by a discovery run, and the folders it had to skip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovery {
    pub images: Vec<ImageRecord>,
    /// Always empty when probing: a folder without images is not an error.
    pub skipped: Vec<SkippedFolder>,
}

/// A folder left out because its manifest could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFolder {
    pub folder: String,
    pub error: ManifestError,
}

/// Discovers every folder's images with the configured source.
///
/// `parallel` only affects probing; manifests are read one after the other.
pub async fn discover<A>(
    assets: &A,
    mode: DiscoveryMode,
    folders: &[FolderSpec],
    options: ScanOptions<'_>,
    parallel: bool,
) -> Discovery
where
    A: ExistenceProbe + TextFetch,
{
    tracing::debug!(?mode, base = options.base, folders = folders.len(), "discovering images");
    match mode {
        DiscoveryMode::Probe => Discovery {
            images: scan_folders(assets, folders, options, parallel).await,
            skipped: Vec::new(),
        },
        DiscoveryMode::Manifest => discover_from_manifest(assets, folders, options).await,
    }
}
