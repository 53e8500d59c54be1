// SPDX-License-Identifier: MPL-2.0
//! Paginated, filterable view over the discovered images.
//!
//! [`GalleryState`] owns the aggregated collection and a cursor into the
//! filtered view. Operations never touch a document; they return the
//! [`RenderInstruction`]s a render target applies.
//!
//! Output is append-only between filter changes: `load_page` only appends,
//! and only `set_filter` clears.

use super::{CategoryFilter, ImageRecord, LoadMoreState, PageSize, RenderInstruction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryState {
    all_images: Vec<ImageRecord>,
    displayed_count: usize,
    current_filter: CategoryFilter,
    page_size: PageSize,
}

impl GalleryState {
    /// Creates a state over `all_images` (folder order, then ascending number)
    /// with nothing displayed and no filter.
    #[must_use]
    pub fn new(all_images: Vec<ImageRecord>, page_size: PageSize) -> Self {
        Self {
            all_images,
            displayed_count: 0,
            current_filter: CategoryFilter::All,
            page_size,
        }
    }

    #[must_use]
    pub fn all_images(&self) -> &[ImageRecord] {
        &self.all_images
    }

    /// Number of filtered images already rendered.
    #[must_use]
    pub fn displayed_count(&self) -> usize {
        self.displayed_count
    }

    #[must_use]
    pub fn current_filter(&self) -> &CategoryFilter {
        &self.current_filter
    }

    #[must_use]
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Images in the current filtered view, in collection order.
    pub fn filtered(&self) -> impl Iterator<Item = &ImageRecord> {
        self.current_filter.apply(&self.all_images)
    }

    #[must_use]
    pub fn filtered_count(&self) -> usize {
        self.filtered().count()
    }

    /// Returns `true` while some filtered images are not rendered yet.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.displayed_count < self.filtered_count()
    }

    /// First render: clears whatever the container held, then loads a page.
    #[must_use]
    pub fn initial_load(&mut self, load_more_label: &str) -> Vec<RenderInstruction> {
        self.displayed_count = 0;
        let mut instructions = vec![RenderInstruction::Clear];
        instructions.extend(self.load_page(load_more_label));
        instructions
    }

    /// Appends the next page of the filtered view.
    ///
    /// Emits one card per image, then the load-more state (hidden once
    /// everything is shown, `load_more_label` otherwise) and a request to
    /// observe the new cards. Past the end, only the trailing updates remain.
    #[must_use]
    pub fn load_page(&mut self, load_more_label: &str) -> Vec<RenderInstruction> {
        let page: Vec<ImageRecord> = self
            .filtered()
            .skip(self.displayed_count)
            .take(self.page_size.value())
            .cloned()
            .collect();
        self.displayed_count += page.len();

        let mut instructions: Vec<RenderInstruction> =
            page.into_iter().map(RenderInstruction::AppendCard).collect();
        instructions.push(RenderInstruction::SetLoadMore(self.load_more_state(load_more_label)));
        instructions.push(RenderInstruction::ObserveAnimations);
        instructions
    }

    /// Switches the filtered view and renders its first page.
    ///
    /// Always clears the output before appending, even when the filter is
    /// unchanged. No scanning happens here.
    #[must_use]
    pub fn set_filter(
        &mut self,
        filter: CategoryFilter,
        load_more_label: &str,
    ) -> Vec<RenderInstruction> {
        self.current_filter = filter.clone();
        self.displayed_count = 0;

        let mut instructions = vec![
            RenderInstruction::SetActiveFilter(filter),
            RenderInstruction::Clear,
        ];
        instructions.extend(self.load_page(load_more_label));
        instructions
    }

    fn load_more_state(&self, label: &str) -> LoadMoreState {
        if self.has_more() {
            LoadMoreState::shown(label)
        } else {
            LoadMoreState::hidden()
        }
    }
}
