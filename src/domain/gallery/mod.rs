// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! This module contains the folder/image data model, the value objects
//! that bound scanning and pagination, and the paginated gallery view.

pub mod filter;
pub mod newtypes;
pub mod render;
pub mod state;
pub mod types;

// Re-export commonly used types
pub use filter::CategoryFilter;
pub use newtypes::{MissThreshold, PageSize};
pub use render::{LoadMoreState, RenderInstruction};
pub use state::GalleryState;
pub use types::{Category, FolderSpec, ImageRecord, ScanState};
