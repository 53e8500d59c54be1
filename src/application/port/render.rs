// SPDX-License-Identifier: MPL-2.0
//! Render target port definition.

use crate::domain::gallery::RenderInstruction;

/// A document that receives gallery render instructions.
///
/// The gallery is the sole writer to the container: targets apply the
/// instructions in order and do not reorder or drop them.
pub trait RenderTarget {
    /// Returns `true` if the document has an element with this id.
    fn has_element(&self, id: &str) -> bool;

    /// Applies one batch of instructions, in order.
    fn apply(&mut self, instructions: &[RenderInstruction]);
}
