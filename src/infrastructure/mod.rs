// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies like `reqwest`,
//! the tokio filesystem API, and HTML templates.
//!
//! # Available Adapters
//!
//! - [`http`]: Static asset host over HTTP (implements [`ExistenceProbe`] and [`TextFetch`])
//! - [`fs`]: Local photo directory (implements [`ExistenceProbe`] and [`TextFetch`])
//! - [`html`]: HTML page built from a template (implements [`RenderTarget`])
//!
//! [`ExistenceProbe`]: crate::application::port::ExistenceProbe
//! [`TextFetch`]: crate::application::port::TextFetch
//! [`RenderTarget`]: crate::application::port::RenderTarget

pub mod fs;
pub mod html;
pub mod http;

// Re-export main types for convenience
pub use fs::FsAssets;
pub use html::HtmlDocument;
pub use http::HttpAssets;
