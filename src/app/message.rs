// SPDX-License-Identifier: MPL-2.0
//! Gallery messages and runtime flags.

use crate::config::DiscoveryMode;
use crate::domain::gallery::CategoryFilter;
use std::path::PathBuf;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The "load more" control was activated.
    LoadMore,
    /// A filter control was activated.
    FilterSelected(CategoryFilter),
    /// The render target finished applying the last batch.
    RenderCompleted,
}

/// Runtime flags passed from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `GALLERY_LENS_CONFIG_DIR` environment variable.
    pub config_dir: Option<PathBuf>,
    /// Overrides `scan.discovery` from the config file.
    pub discovery: Option<DiscoveryMode>,
}
