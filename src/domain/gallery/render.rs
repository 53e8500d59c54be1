// SPDX-License-Identifier: MPL-2.0
//! Render instructions produced by gallery operations.
//!
//! Gallery state never touches a document directly. Each operation returns
//! the list of changes a render target must apply, in order.

use super::{CategoryFilter, ImageRecord};

/// State of the "load more" control after a page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadMoreState {
    pub visible: bool,
    /// Localized caption; empty when hidden.
    pub label: String,
}

impl LoadMoreState {
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            visible: false,
            label: String::new(),
        }
    }

    #[must_use]
    pub fn shown(label: impl Into<String>) -> Self {
        Self {
            visible: true,
            label: label.into(),
        }
    }
}

/// One change to apply to the rendered gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderInstruction {
    /// Remove every card from the container.
    Clear,
    /// Append a card for this image at the end of the container.
    AppendCard(ImageRecord),
    /// Show or hide the "load more" control.
    SetLoadMore(LoadMoreState),
    /// Mark the filter control matching this filter as active.
    SetActiveFilter(CategoryFilter),
    /// Attach reveal-on-scroll observers to cards appended since the last one.
    ObserveAnimations,
}

impl RenderInstruction {
    /// Returns the image of an `AppendCard` instruction.
    #[must_use]
    pub fn appended_image(&self) -> Option<&ImageRecord> {
        match self {
            Self::AppendCard(image) => Some(image),
            _ => None,
        }
    }
}
