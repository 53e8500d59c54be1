// SPDX-License-Identifier: MPL-2.0
//! Location of the settings directory.
//!
//! `--config-dir` wins, then a non-empty `GALLERY_LENS_CONFIG_DIR`, then
//! `GalleryLens/` under the platform config directory (`dirs::config_dir`).

use std::ffi::OsString;
use std::path::PathBuf;

/// Folder created under the platform config directory.
const SETTINGS_DIR_NAME: &str = "GalleryLens";

/// Environment variable naming the settings directory.
pub const CONFIG_DIR_ENV: &str = "GALLERY_LENS_CONFIG_DIR";

/// Settings directory for this process, `None` if the platform has no config
/// directory and nothing overrides it.
#[must_use]
pub fn config_dir(cli_dir: Option<PathBuf>) -> Option<PathBuf> {
    resolve(cli_dir, std::env::var_os(CONFIG_DIR_ENV), dirs::config_dir())
}

fn resolve(
    cli_dir: Option<PathBuf>,
    env_dir: Option<OsString>,
    platform_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    cli_dir
        .or_else(|| env_dir.filter(|dir| !dir.is_empty()).map(PathBuf::from))
        .or_else(|| platform_dir.map(|dir| dir.join(SETTINGS_DIR_NAME)))
}
