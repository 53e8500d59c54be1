// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Scan**: Base path, extensions, miss threshold and probe timeout
//! - **Gallery**: Page size and the ids of the rendered elements
//! - **Manifest**: Index file naming, listed extensions and watch interval

use crate::domain::gallery::newtypes::{miss_threshold_bounds, page_size_bounds};

// ==========================================================================
// Scan Defaults
// ==========================================================================

/// Default base path the photo folders live under.
pub const DEFAULT_BASE_PATH: &str = "../../photos/";

/// Extensions probed for each sequence number, in priority order.
pub const DEFAULT_IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

/// Default number of consecutive misses that ends a folder scan.
pub const DEFAULT_MISS_THRESHOLD: u32 = miss_threshold_bounds::DEFAULT;

/// Default timeout for a single existence probe (in milliseconds).
pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 5_000;

/// Minimum probe timeout (in milliseconds).
pub const MIN_PROBE_TIMEOUT_MS: u64 = 100;

/// Maximum probe timeout (in milliseconds).
pub const MAX_PROBE_TIMEOUT_MS: u64 = 60_000;

/// Maximum number of redirects followed by a probe.
pub const PROBE_REDIRECT_LIMIT: usize = 10;

/// User agent sent with HTTP probes and manifest fetches.
pub const USER_AGENT: &str = concat!("GalleryLens/", env!("CARGO_PKG_VERSION"));

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default number of images appended per page load.
pub const DEFAULT_PAGE_SIZE: usize = page_size_bounds::DEFAULT;

/// Default id of the element receiving gallery cards.
pub const DEFAULT_CONTAINER_ID: &str = "photoGallery";

/// Default id of the "load more" control.
pub const DEFAULT_LOAD_MORE_ID: &str = "loadMoreBtn";

// ==========================================================================
// Manifest Defaults
// ==========================================================================

/// File name of the per-folder manifest.
pub const MANIFEST_FILE_NAME: &str = "index.json";

/// Extensions listed by the manifest generator (case-insensitive).
pub const MANIFEST_IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

/// Default root directory scanned by the manifest generator.
pub const DEFAULT_PHOTOS_ROOT: &str = "photos";

/// Default interval of the watch mode fallback sweep (in milliseconds).
pub const DEFAULT_WATCH_INTERVAL_MS: u64 = 2_000;

/// Minimum interval of the watch mode fallback sweep (in milliseconds).
pub const MIN_WATCH_INTERVAL_MS: u64 = 100;

/// Maximum interval of the watch mode fallback sweep (in milliseconds).
pub const MAX_WATCH_INTERVAL_MS: u64 = 60_000;

/// Quiet time after the last file event before manifests are refreshed
/// (in milliseconds).
pub const WATCH_DEBOUNCE_MS: u64 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Probe timeout validation
    assert!(MIN_PROBE_TIMEOUT_MS > 0);
    assert!(MAX_PROBE_TIMEOUT_MS >= MIN_PROBE_TIMEOUT_MS);
    assert!(DEFAULT_PROBE_TIMEOUT_MS >= MIN_PROBE_TIMEOUT_MS);
    assert!(DEFAULT_PROBE_TIMEOUT_MS <= MAX_PROBE_TIMEOUT_MS);

    // Watch interval validation
    assert!(MIN_WATCH_INTERVAL_MS > 0);
    assert!(MAX_WATCH_INTERVAL_MS >= MIN_WATCH_INTERVAL_MS);
    assert!(DEFAULT_WATCH_INTERVAL_MS >= MIN_WATCH_INTERVAL_MS);
    assert!(DEFAULT_WATCH_INTERVAL_MS <= MAX_WATCH_INTERVAL_MS);
    assert!(WATCH_DEBOUNCE_MS < DEFAULT_WATCH_INTERVAL_MS);

    // Scan/gallery validation
    assert!(DEFAULT_MISS_THRESHOLD >= miss_threshold_bounds::MIN);
    assert!(DEFAULT_PAGE_SIZE >= page_size_bounds::MIN);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_defaults_match_site_behavior() {
        assert_eq!(DEFAULT_MISS_THRESHOLD, 3);
        assert_eq!(DEFAULT_IMAGE_EXTENSIONS, ["jpg", "jpeg", "png", "webp"]);
    }

    #[test]
    fn gallery_defaults_are_valid() {
        assert_eq!(DEFAULT_PAGE_SIZE, 6);
        assert_eq!(DEFAULT_CONTAINER_ID, "photoGallery");
    }

    #[test]
    fn manifest_lists_gif_but_scanner_does_not_probe_it() {
        assert!(MANIFEST_IMAGE_EXTENSIONS.contains(&"gif"));
        assert!(!DEFAULT_IMAGE_EXTENSIONS.contains(&"gif"));
    }

    #[test]
    fn user_agent_carries_version() {
        assert!(USER_AGENT.starts_with("GalleryLens/"));
    }
}
