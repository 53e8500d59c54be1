// SPDX-License-Identifier: MPL-2.0
//! `gallery_lens` discovers the photos of a static site's gallery and renders
//! them page by page.
//!
//! Images live in named folders as `<prefix> <N>.<ext>`. They are discovered
//! either by probing numbered filenames against an HTTP server or a local
//! directory, or by reading per-folder `index.json` manifests that the
//! [`manifest`] module generates. The [`app`] controller then paginates and
//! filters the collection into a render target such as an HTML page.

#![doc(html_root_url = "https://docs.rs/gallery_lens/0.3.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod infrastructure;
pub mod logging;
pub mod manifest;

#[cfg(test)]
pub(crate) mod test_utils;
