// SPDX-License-Identifier: MPL-2.0
//! Gallery settings, read from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language
//! - `[scan]` - Where and how images are discovered
//! - `[gallery]` - Pagination and rendered element ids
//! - `[manifest]` - `index.json` generation and watch mode
//! - `[[folders]]` - The photo folders, in display order
//!
//! # Path Resolution
//!
//! [`load`] looks for `settings.toml` in the directory picked by
//! [`paths::config_dir`]. [`load_from_path`] reads an explicit file.
//!
//! # Examples
//!
//! ```no_run
//! use gallery_lens::config::{self, Config};
//!
//! // Missing files give the defaults; unreadable ones also give a warning key
//! let (config, warning) = config::load(None);
//! if let Some(key) = warning {
//!     eprintln!("{key}");
//! }
//! println!("{} folders", config.folder_specs().len());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::gallery::{FolderSpec, MissThreshold, PageSize};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums (shared between sections)
// =============================================================================

/// How images are discovered on the asset host.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DiscoveryMode {
    /// Guess `<prefix> <N>.<ext>` names and check each one exists.
    #[default]
    Probe,
    /// Read the per-folder `index.json` written by the manifest generator.
    Manifest,
}

impl std::str::FromStr for DiscoveryMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "probe" => Ok(Self::Probe),
            "manifest" => Ok(Self::Manifest),
            other => Err(Error::InvalidArgument(format!(
                "unknown discovery mode '{other}' (expected 'probe' or 'manifest')"
            ))),
        }
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Image discovery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanConfig {
    /// URL (`http://…`) or directory the photo folders live under.
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// Extensions tried for each sequence number, first match wins.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Consecutive misses that end a folder scan.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub miss_threshold: Option<u32>,

    #[serde(default)]
    pub discovery: DiscoveryMode,

    /// Scan folders concurrently instead of one after another.
    #[serde(default)]
    pub parallel_folders: bool,

    /// Timeout for one existence probe, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probe_timeout_ms: Option<u64>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            extensions: default_extensions(),
            miss_threshold: Some(DEFAULT_MISS_THRESHOLD),
            discovery: DiscoveryMode::default(),
            parallel_folders: false,
            probe_timeout_ms: Some(DEFAULT_PROBE_TIMEOUT_MS),
        }
    }
}

/// Pagination and rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Images appended per page load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,

    /// Id of the element receiving cards.
    #[serde(default = "default_container_id")]
    pub container_id: String,

    /// Id of the "load more" control; `None` when the page has none.
    #[serde(default = "default_load_more_id", skip_serializing_if = "Option::is_none")]
    pub load_more_id: Option<String>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            page_size: Some(DEFAULT_PAGE_SIZE),
            container_id: default_container_id(),
            load_more_id: default_load_more_id(),
        }
    }
}

/// Manifest generation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ManifestConfig {
    /// Local directory holding the photo folders.
    #[serde(default = "default_photos_root")]
    pub photos_root: PathBuf,

    /// Polling interval for watch mode, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watch_interval_ms: Option<u64>,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            photos_root: default_photos_root(),
            watch_interval_ms: Some(DEFAULT_WATCH_INTERVAL_MS),
        }
    }
}

/// One photo folder as written in `settings.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FolderConfig {
    /// Directory name under the base path.
    pub name: String,
    /// Label used in image titles.
    pub display_name: String,
    /// Filename prefix before the sequence number.
    pub search_name: String,
    pub category: String,
}

impl From<&FolderConfig> for FolderSpec {
    fn from(folder: &FolderConfig) -> Self {
        FolderSpec::new(
            folder.name.clone(),
            folder.display_name.clone(),
            folder.search_name.clone(),
            folder.category.as_str(),
        )
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub manifest: ManifestConfig,

    #[serde(default = "default_folders")]
    pub folders: Vec<FolderConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            scan: ScanConfig::default(),
            gallery: GalleryConfig::default(),
            manifest: ManifestConfig::default(),
            folders: default_folders(),
        }
    }
}

impl Config {
    /// Domain view of the configured folders, in display order.
    #[must_use]
    pub fn folder_specs(&self) -> Vec<FolderSpec> {
        self.folders.iter().map(FolderSpec::from).collect()
    }

    #[must_use]
    pub fn miss_threshold(&self) -> MissThreshold {
        self.scan
            .miss_threshold
            .map_or_else(MissThreshold::default, MissThreshold::new)
    }

    #[must_use]
    pub fn page_size(&self) -> PageSize {
        self.gallery
            .page_size
            .map_or_else(PageSize::default, PageSize::new)
    }

    #[must_use]
    pub fn probe_timeout(&self) -> Duration {
        let ms = self
            .scan
            .probe_timeout_ms
            .unwrap_or(DEFAULT_PROBE_TIMEOUT_MS)
            .clamp(MIN_PROBE_TIMEOUT_MS, MAX_PROBE_TIMEOUT_MS);
        Duration::from_millis(ms)
    }

    #[must_use]
    pub fn watch_interval(&self) -> Duration {
        let ms = self
            .manifest
            .watch_interval_ms
            .unwrap_or(DEFAULT_WATCH_INTERVAL_MS)
            .clamp(MIN_WATCH_INTERVAL_MS, MAX_WATCH_INTERVAL_MS);
        Duration::from_millis(ms)
    }

    /// Rejects settings that would make discovery meaningless.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when no extension is configured or two
    /// folders share a directory name.
    pub fn validate(&self) -> Result<()> {
        if self.scan.extensions.iter().all(|ext| ext.trim().is_empty()) {
            return Err(Error::Config("scan.extensions must not be empty".into()));
        }

        let mut seen = HashSet::new();
        for folder in &self.folders {
            if !seen.insert(folder.name.as_str()) {
                return Err(Error::Config(format!(
                    "folder '{}' is configured twice",
                    folder.name
                )));
            }
        }
        Ok(())
    }
}

// =============================================================================
// Default Value Functions (for serde)
// =============================================================================

fn default_base_path() -> String {
    DEFAULT_BASE_PATH.to_string()
}

fn default_extensions() -> Vec<String> {
    DEFAULT_IMAGE_EXTENSIONS
        .iter()
        .map(|ext| (*ext).to_string())
        .collect()
}

fn default_container_id() -> String {
    DEFAULT_CONTAINER_ID.to_string()
}

#[allow(clippy::unnecessary_wraps)]
fn default_load_more_id() -> Option<String> {
    Some(DEFAULT_LOAD_MORE_ID.to_string())
}

fn default_photos_root() -> PathBuf {
    PathBuf::from(DEFAULT_PHOTOS_ROOT)
}

fn default_folders() -> Vec<FolderConfig> {
    [
        ("activites", "Activité", "Activite", "activites"),
        ("colonies", "Colonie", "Colonie", "colonies"),
        ("theatre", "Théâtre", "Théâtre", "theatre"),
    ]
    .into_iter()
    .map(|(name, display_name, search_name, category)| FolderConfig {
        name: name.to_string(),
        display_name: display_name.to_string(),
        search_name: search_name.to_string(),
        category: category.to_string(),
    })
    .collect()
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn settings_path(config_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir(config_dir).map(|dir| dir.join(CONFIG_FILE))
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from `config_dir`, or from the resolved settings
/// directory when `None`.
///
/// Returns a tuple of (config, optional_warning). A missing file gives the
/// defaults. An unreadable one gives the defaults plus the message key of
/// the warning to show.
pub fn load(config_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = settings_path(config_dir).filter(|path| path.exists()) else {
        return (Config::default(), None);
    };
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
            (
                Config::default(),
                Some("notification-config-load-error".to_string()),
            )
        }
    }
}

/// Loads and validates configuration from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid TOML, or fails
/// [`Config::validate`].
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
