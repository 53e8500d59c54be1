// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the gallery.
//!
//! Each handler computes render instructions from the gallery state and hands
//! them to the render target as one batch. A batch stays in flight until the
//! target reports completion; "load more" requests arriving meanwhile are
//! dropped so a double click cannot append the same page twice.

use crate::application::port::RenderTarget;
use crate::domain::gallery::{CategoryFilter, GalleryState, RenderInstruction};
use crate::i18n::fluent::I18n;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a, T: RenderTarget> {
    pub i18n: &'a I18n,
    pub state: &'a mut GalleryState,
    pub target: &'a mut T,
    pub in_flight: &'a mut bool,
}

impl<T: RenderTarget> UpdateContext<'_, T> {
    fn load_more_label(&self) -> String {
        self.i18n.tr("gallery-load-more")
    }

    fn render(&mut self, instructions: Vec<RenderInstruction>) -> Vec<RenderInstruction> {
        self.target.apply(&instructions);
        *self.in_flight = true;
        instructions
    }
}

/// Appends the next page unless a batch is still being rendered.
pub fn handle_load_more<T: RenderTarget>(ctx: &mut UpdateContext<'_, T>) -> Vec<RenderInstruction> {
    if *ctx.in_flight {
        tracing::debug!("load more ignored while a render is in flight");
        return Vec::new();
    }
    let label = ctx.load_more_label();
    let instructions = ctx.state.load_page(&label);
    ctx.render(instructions)
}

/// Switches filter; always accepted, and always clears before rendering.
pub fn handle_filter_selected<T: RenderTarget>(
    ctx: &mut UpdateContext<'_, T>,
    filter: CategoryFilter,
) -> Vec<RenderInstruction> {
    tracing::debug!(filter = %filter, "filter selected");
    let label = ctx.load_more_label();
    let instructions = ctx.state.set_filter(filter, &label);
    ctx.render(instructions)
}

pub fn handle_render_completed<T: RenderTarget>(ctx: &mut UpdateContext<'_, T>) -> Vec<RenderInstruction> {
    *ctx.in_flight = false;
    Vec::new()
}
