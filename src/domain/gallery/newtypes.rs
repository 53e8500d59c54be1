// SPDX-License-Identifier: MPL-2.0
//! Gallery newtypes.
//!
//! Type-safe wrappers for the scan and pagination knobs, always within
//! valid ranges.

// =============================================================================
// Miss Threshold Bounds
// =============================================================================

/// Consecutive-miss threshold bounds.
pub mod miss_threshold_bounds {
    /// Minimum number of consecutive misses that ends a folder scan.
    pub const MIN: u32 = 1;
    /// Maximum number of consecutive misses that ends a folder scan.
    pub const MAX: u32 = 50;
    /// Default number of consecutive misses that ends a folder scan.
    pub const DEFAULT: u32 = 3;
}

// =============================================================================
// MissThreshold
// =============================================================================

/// Number of consecutive missing sequence numbers that terminates a folder scan.
///
/// A gap in the numbering at least this long hides every image after it.
///
/// # Example
///
/// ```
/// use gallery_lens::domain::gallery::MissThreshold;
///
/// let threshold = MissThreshold::new(5);
/// assert_eq!(threshold.value(), 5);
///
/// // Values outside range are clamped
/// assert_eq!(MissThreshold::new(0).value(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissThreshold(u32);

impl MissThreshold {
    /// Creates a new threshold, clamping to the valid range.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.clamp(miss_threshold_bounds::MIN, miss_threshold_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for MissThreshold {
    fn default() -> Self {
        Self(miss_threshold_bounds::DEFAULT)
    }
}

// =============================================================================
// Page Size Bounds
// =============================================================================

/// Page size bounds.
pub mod page_size_bounds {
    /// Minimum number of cards appended per page load.
    pub const MIN: usize = 1;
    /// Maximum number of cards appended per page load.
    pub const MAX: usize = 100;
    /// Default number of cards appended per page load.
    pub const DEFAULT: usize = 6;
}

// =============================================================================
// PageSize
// =============================================================================

/// Number of images appended by a single "load more".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(usize);

impl PageSize {
    /// Creates a new page size, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(page_size_bounds::MIN, page_size_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(page_size_bounds::DEFAULT)
    }
}
