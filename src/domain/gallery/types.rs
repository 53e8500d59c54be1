// SPDX-License-Identifier: MPL-2.0
//! Core gallery types: folders, discovered images and the per-folder scan cursor.

use std::fmt;

use super::MissThreshold;

// =============================================================================
// Category
// =============================================================================

/// Category key shared by folders, images and filter controls (e.g. `theatre`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Category(String);

impl Category {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// FolderSpec
// =============================================================================

/// A photo folder on the asset host.
///
/// Images inside follow the `<search_prefix> <N>.<ext>` naming convention,
/// with `N` counting up from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderSpec {
    /// Directory name under the base path (e.g. `colonies`).
    pub internal_name: String,
    /// Human label used to build image titles (e.g. `Colonie`).
    pub display_name: String,
    /// Filename prefix before the sequence number (e.g. `Colonie`).
    pub search_prefix: String,
    pub category: Category,
}

impl FolderSpec {
    #[must_use]
    pub fn new(
        internal_name: impl Into<String>,
        display_name: impl Into<String>,
        search_prefix: impl Into<String>,
        category: impl Into<Category>,
    ) -> Self {
        Self {
            internal_name: internal_name.into(),
            display_name: display_name.into(),
            search_prefix: search_prefix.into(),
            category: category.into(),
        }
    }

    /// Filename without extension for sequence number `number`.
    #[must_use]
    pub fn file_stem(&self, number: u32) -> String {
        format!("{} {}", self.search_prefix, number)
    }

    /// Composes `<base>/<internal_name>/<search_prefix> <number>.<ext>`.
    ///
    /// A trailing `/` on `base` is tolerated; an empty base yields a relative path.
    #[must_use]
    pub fn candidate_path(&self, base: &str, number: u32, extension: &str) -> String {
        format!(
            "{}{}/{}.{}",
            base_prefix(base),
            self.internal_name,
            self.file_stem(number),
            extension
        )
    }

    /// Location of `file_name` inside this folder under `base`.
    #[must_use]
    pub fn file_path(&self, base: &str, file_name: &str) -> String {
        format!("{}{}/{}", base_prefix(base), self.internal_name, file_name)
    }

    /// Parses a bare filename following this folder's naming convention.
    ///
    /// Returns the sequence number and extension for `"<prefix> <N>.<ext>"`,
    /// `None` for anything else (including `N = 0`).
    #[must_use]
    pub fn parse_filename<'a>(&self, filename: &'a str) -> Option<(u32, &'a str)> {
        let rest = filename.strip_prefix(self.search_prefix.as_str())?;
        let rest = rest.strip_prefix(' ')?;
        let (number, extension) = rest.rsplit_once('.')?;
        if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let number: u32 = number.parse().ok()?;
        if number == 0 || extension.is_empty() {
            return None;
        }
        Some((number, extension))
    }

    /// Builds the record for an image found at `path` with sequence `number`.
    #[must_use]
    pub fn record(&self, path: String, number: u32) -> ImageRecord {
        ImageRecord {
            path,
            title: format!("{} {}", self.display_name, number),
            category: self.category.clone(),
            sequence_number: number,
        }
    }
}

fn base_prefix(base: &str) -> String {
    if base.is_empty() {
        String::new()
    } else {
        format!("{}/", base.trim_end_matches('/'))
    }
}

// =============================================================================
// ImageRecord
// =============================================================================

/// An image discovered during scanning. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    /// URL or filesystem path the image was found at.
    pub path: String,
    /// Display label, `"<display_name> <sequence_number>"`.
    pub title: String,
    pub category: Category,
    /// Position in the folder's numbering, starting at 1.
    pub sequence_number: u32,
}

// =============================================================================
// ScanState
// =============================================================================

/// Per-folder cursor: next sequence number to probe and the current run of misses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanState {
    next_number: u32,
    consecutive_misses: u32,
}

impl ScanState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_number: 1,
            consecutive_misses: 0,
        }
    }

    /// Sequence number the next probe should target.
    #[must_use]
    pub fn next_number(&self) -> u32 {
        self.next_number
    }

    #[must_use]
    pub fn consecutive_misses(&self) -> u32 {
        self.consecutive_misses
    }

    /// Records that the current number exists and moves to the next one.
    pub fn record_hit(&mut self) {
        self.consecutive_misses = 0;
        self.next_number = self.next_number.saturating_add(1);
    }

    /// Records that no extension matched the current number and moves on.
    pub fn record_miss(&mut self) {
        self.consecutive_misses += 1;
        self.next_number = self.next_number.saturating_add(1);
    }

    /// Returns `true` once the run of misses has reached `threshold`.
    #[must_use]
    pub fn is_exhausted(&self, threshold: MissThreshold) -> bool {
        self.consecutive_misses >= threshold.value()
    }
}

impl Default for ScanState {
    fn default() -> Self {
        Self::new()
    }
}
