// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, so the scanner and the gallery can be
//! tested with in-memory fakes.
//!
//! # Available Ports
//!
//! - [`assets`]: Existence checks and text fetches against the asset host
//! - [`render`]: Targets that apply gallery render instructions
//!
//! # Design Notes
//!
//! - Asset ports are async and never block the runtime
//! - Existence checks collapse every failure to `false`
//! - Render targets are synchronous; a batch is fully applied before the next

pub mod assets;
pub mod render;

// Re-export main types for convenience
pub use assets::{ExistenceProbe, TextFetch};
pub use render::RenderTarget;
