// SPDX-License-Identifier: MPL-2.0
//! Gallery controller.
//!
//! The `App` struct owns the gallery state and the render target it writes
//! to, and translates [`Message`]s into render batches. It is the only writer
//! to the target's container.

mod message;
pub mod paths;
mod update;

pub use message::{Flags, Message};

use crate::application::port::RenderTarget;
use crate::config::Config;
use crate::domain::gallery::{GalleryState, ImageRecord, RenderInstruction};
use crate::error::{Error, Result};
use crate::i18n::fluent::I18n;
use std::fmt;

/// Gallery controller bound to one render target.
pub struct App<T: RenderTarget> {
    pub i18n: I18n,
    state: GalleryState,
    target: T,
    /// Whether the last batch has not been acknowledged yet.
    in_flight: bool,
}

impl<T: RenderTarget> fmt::Debug for App<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("displayed_count", &self.state.displayed_count())
            .field("current_filter", &self.state.current_filter())
            .field("in_flight", &self.in_flight)
            .finish_non_exhaustive()
    }
}

impl<T: RenderTarget> App<T> {
    /// Sets the gallery up on `target` and renders the first page.
    ///
    /// The initial batch is in flight until [`Message::RenderCompleted`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingContainer`] if the target has no element with
    /// the configured container id. Nothing is rendered in that case.
    pub fn init(mut target: T, images: Vec<ImageRecord>, i18n: I18n, config: &Config) -> Result<Self> {
        let container_id = &config.gallery.container_id;
        if !target.has_element(container_id) {
            tracing::error!(container = %container_id, "gallery container not found");
            return Err(Error::MissingContainer(container_id.clone()));
        }

        let mut state = GalleryState::new(images, config.page_size());
        let instructions = state.initial_load(&i18n.tr("gallery-load-more"));
        target.apply(&instructions);

        Ok(Self {
            i18n,
            state,
            target,
            in_flight: true,
        })
    }

    /// Handles one message and returns the batch it rendered, empty if none.
    pub fn update(&mut self, message: Message) -> Vec<RenderInstruction> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            state: &mut self.state,
            target: &mut self.target,
            in_flight: &mut self.in_flight,
        };
        match message {
            Message::LoadMore => update::handle_load_more(&mut ctx),
            Message::FilterSelected(filter) => update::handle_filter_selected(&mut ctx, filter),
            Message::RenderCompleted => update::handle_render_completed(&mut ctx),
        }
    }

    #[must_use]
    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    #[must_use]
    pub fn target(&self) -> &T {
        &self.target
    }

    #[must_use]
    pub fn into_target(self) -> T {
        self.target
    }

    /// Returns `true` while a rendered batch awaits acknowledgement.
    #[must_use]
    pub fn is_rendering(&self) -> bool {
        self.in_flight
    }
}
