// SPDX-License-Identifier: MPL-2.0
//! Discovery from pre-generated `index.json` manifests.
//!
//! Instead of probing, each folder's manifest is read once and filtered down
//! to the files following the folder's naming convention. No miss threshold
//! applies: every listed number is kept.

use super::scanner::ScanOptions;
use super::{Discovery, SkippedFolder};
use crate::application::port::TextFetch;
use crate::config::defaults::MANIFEST_FILE_NAME;
use crate::domain::gallery::{FolderSpec, ImageRecord};
use crate::error::ManifestError;
use crate::manifest::ImageIndex;
use std::collections::BTreeMap;

/// Discovers the images of every folder from their manifests.
///
/// For each number, the first extension in `options.extensions` that the
/// manifest lists wins, compared ASCII case-insensitively. Recorded paths
/// keep the filename as listed. A folder whose manifest is missing or
/// malformed contributes no images and is reported in
/// [`Discovery::skipped`].
pub async fn discover_from_manifest<S: TextFetch>(
    source: &S,
    folders: &[FolderSpec],
    options: ScanOptions<'_>,
) -> Discovery {
    let mut discovery = Discovery::default();
    for folder in folders {
        match discover_folder(source, folder, options).await {
            Ok(found) => {
                tracing::info!(
                    folder = %folder.internal_name,
                    count = found.len(),
                    "folder manifest read"
                );
                discovery.images.extend(found);
            }
            Err(error) => discovery.skipped.push(SkippedFolder {
                folder: folder.internal_name.clone(),
                error,
            }),
        }
    }
    discovery
}

async fn discover_folder<S: TextFetch>(
    source: &S,
    folder: &FolderSpec,
    options: ScanOptions<'_>,
) -> Result<Vec<ImageRecord>, ManifestError> {
    let location = folder.file_path(options.base, MANIFEST_FILE_NAME);
    let index = match source.fetch_text(&location).await {
        Ok(text) => ImageIndex::from_json(&text),
        Err(err) => Err(err),
    }
    .inspect_err(|err| tracing::warn!(manifest = %location, error = %err, "skipping folder"))?;

    // number -> (extension priority, listed filename)
    let mut best: BTreeMap<u32, (usize, &str)> = BTreeMap::new();
    for filename in &index.images {
        let Some((number, extension)) = folder.parse_filename(filename) else {
            continue;
        };
        let Some(priority) = options
            .extensions
            .iter()
            .position(|e| e.eq_ignore_ascii_case(extension))
        else {
            continue;
        };
        best.entry(number)
            .and_modify(|current| {
                if priority < current.0 {
                    *current = (priority, filename.as_str());
                }
            })
            .or_insert((priority, filename.as_str()));
    }

    Ok(best
        .into_iter()
        .map(|(number, (_, filename))| {
            folder.record(folder.file_path(options.base, filename), number)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::MissThreshold;
    use crate::test_utils::StaticAssets;

    const BASE: &str = "photos";

    fn extensions() -> Vec<String> {
        ["jpg", "jpeg", "png", "webp"].map(String::from).to_vec()
    }

    fn colonies() -> FolderSpec {
        FolderSpec::new("colonies", "Colonie", "Colonie", "colonies")
    }

    #[tokio::test]
    async fn manifest_honours_extension_priority_and_order() {
        let manifest = r#"{"images":["Colonie 10.png","Colonie 2.png","Colonie 2.jpg","Colonie 1.webp","notes.jpg","Colonie 3.gif"],"count":6}"#;
        let assets = StaticAssets::new().with_text("photos/colonies/index.json", manifest);
        let exts = extensions();
        let options = ScanOptions {
            base: BASE,
            extensions: &exts,
            threshold: MissThreshold::default(),
        };

        let images = discover_from_manifest(&assets, &[colonies()], options)
            .await
            .images;

        let paths: Vec<&str> = images.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(
            paths,
            [
                "photos/colonies/Colonie 1.webp",
                "photos/colonies/Colonie 2.jpg",
                "photos/colonies/Colonie 10.png",
            ]
        );
        assert_eq!(images[2].title, "Colonie 10");
        assert_eq!(images[2].sequence_number, 10);
    }

    #[tokio::test]
    async fn missing_manifest_yields_empty_folder() {
        let assets = StaticAssets::new()
            .with_text("photos/theatre/index.json", r#"{"images":["Théâtre 1.jpg"]}"#);
        let exts = extensions();
        let options = ScanOptions {
            base: BASE,
            extensions: &exts,
            threshold: MissThreshold::default(),
        };
        let folders = [
            colonies(),
            FolderSpec::new("theatre", "Théâtre", "Théâtre", "theatre"),
        ];

        let discovery = discover_from_manifest(&assets, &folders, options).await;

        assert_eq!(discovery.images.len(), 1);
        assert_eq!(discovery.images[0].title, "Théâtre 1");
        assert_eq!(discovery.skipped.len(), 1);
        assert_eq!(discovery.skipped[0].folder, "colonies");
        assert!(matches!(
            discovery.skipped[0].error,
            ManifestError::Unavailable(_)
        ));
    }

    #[tokio::test]
    async fn malformed_manifest_yields_empty_folder() {
        let assets = StaticAssets::new().with_text("photos/colonies/index.json", "not json");
        let exts = extensions();
        let options = ScanOptions {
            base: BASE,
            extensions: &exts,
            threshold: MissThreshold::default(),
        };

        let discovery = discover_from_manifest(&assets, &[colonies()], options).await;

        assert!(discovery.images.is_empty());
        assert_eq!(discovery.skipped[0].error.i18n_key(), "error-manifest-malformed");
    }

    #[tokio::test]
    async fn uppercase_extensions_keep_listed_filename() {
        let manifest = r#"{"images":["Colonie 1.JPG","Colonie 2.jpg","Colonie 3.Png","Colonie 3.JPEG"]}"#;
        let assets = StaticAssets::new().with_text("photos/colonies/index.json", manifest);
        let exts = extensions();
        let options = ScanOptions {
            base: BASE,
            extensions: &exts,
            threshold: MissThreshold::default(),
        };

        let images = discover_from_manifest(&assets, &[colonies()], options)
            .await
            .images;

        let paths: Vec<&str> = images.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(
            paths,
            [
                "photos/colonies/Colonie 1.JPG",
                "photos/colonies/Colonie 2.jpg",
                "photos/colonies/Colonie 3.JPEG",
            ]
        );
    }
}
