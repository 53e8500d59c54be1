// SPDX-License-Identifier: MPL-2.0
//! Folder scanner discovering numbered images by probing.
//!
//! For each folder, sequence numbers are tried from 1 upwards. For every number
//! the extensions are tried in order and the first one that exists wins. A run
//! of consecutive numbers with no match ends the folder; images past a gap that
//! long are never discovered.

use crate::application::port::ExistenceProbe;
use crate::domain::gallery::{FolderSpec, ImageRecord, MissThreshold, ScanState};
use futures_util::future::join_all;

/// Probe settings shared by every folder of a scan.
#[derive(Debug, Clone, Copy)]
pub struct ScanOptions<'a> {
    /// URL or directory holding the folders.
    pub base: &'a str,
    /// Extensions in priority order, without the leading dot.
    pub extensions: &'a [String],
    pub threshold: MissThreshold,
}

/// Discovers the images of one folder, in ascending sequence number.
///
/// Probes are awaited one at a time. Probe failures count as misses.
pub async fn scan_folder<P: ExistenceProbe>(
    probe: &P,
    folder: &FolderSpec,
    options: ScanOptions<'_>,
) -> Vec<ImageRecord> {
    let mut images = Vec::new();
    let mut state = ScanState::new();

    while !state.is_exhausted(options.threshold) {
        let number = state.next_number();
        match find_image(probe, folder, options, number).await {
            Some(path) => {
                images.push(folder.record(path, number));
                state.record_hit();
            }
            None => state.record_miss(),
        }
    }

    tracing::info!(
        folder = %folder.internal_name,
        count = images.len(),
        "folder scanned"
    );
    images
}

/// Returns the location of image `number` with the first extension that exists.
async fn find_image<P: ExistenceProbe>(
    probe: &P,
    folder: &FolderSpec,
    options: ScanOptions<'_>,
    number: u32,
) -> Option<String> {
    for extension in options.extensions {
        let candidate = folder.candidate_path(options.base, number, extension);
        if probe.exists(&candidate).await {
            return Some(candidate);
        }
    }
    None
}

/// Discovers the images of every folder and aggregates them.
///
/// The result lists folders in the given order, each in ascending sequence
/// number. With `parallel`, folders are scanned concurrently; ordering is the
/// same as a sequential scan.
pub async fn scan_folders<P: ExistenceProbe>(
    probe: &P,
    folders: &[FolderSpec],
    options: ScanOptions<'_>,
    parallel: bool,
) -> Vec<ImageRecord> {
    let per_folder: Vec<Vec<ImageRecord>> = if parallel {
        join_all(folders.iter().map(|folder| scan_folder(probe, folder, options))).await
    } else {
        let mut per_folder = Vec::with_capacity(folders.len());
        for folder in folders {
            per_folder.push(scan_folder(probe, folder, options).await);
        }
        per_folder
    };

    let images: Vec<ImageRecord> = per_folder.into_iter().flatten().collect();
    tracing::info!(
        folders = folders.len(),
        count = images.len(),
        "gallery scan complete"
    );
    images
}
