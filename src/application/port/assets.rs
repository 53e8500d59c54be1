// SPDX-License-Identifier: MPL-2.0
//! Asset host port definitions.
//!
//! The asset host is whatever serves the photo folders: a static HTTP server
//! or a local directory. Locations are plain strings (URLs or paths) composed
//! by [`FolderSpec`](crate::domain::gallery::FolderSpec).

use crate::error::ManifestError;
use std::future::Future;

/// Answers "does this location resolve to a retrievable resource?".
///
/// The check is idempotent and has no side effects. Every failure (missing
/// resource, error status, transport failure, timeout) is reported as `false`;
/// implementations never retry.
///
/// # Example
///
/// ```ignore
/// use gallery_lens::application::port::ExistenceProbe;
///
/// async fn first_existing(probe: &impl ExistenceProbe, candidates: &[String]) -> Option<String> {
///     for candidate in candidates {
///         if probe.exists(candidate).await {
///             return Some(candidate.clone());
///         }
///     }
///     None
/// }
/// ```
pub trait ExistenceProbe: Send + Sync {
    fn exists(&self, location: &str) -> impl Future<Output = bool> + Send;
}

/// Reads a small text resource (a manifest) from the asset host.
pub trait TextFetch: Send + Sync {
    /// # Errors
    ///
    /// Returns [`ManifestError::Unavailable`] if the resource cannot be read.
    fn fetch_text(&self, location: &str)
        -> impl Future<Output = Result<String, ManifestError>> + Send;
}

impl<T: ExistenceProbe> ExistenceProbe for &T {
    fn exists(&self, location: &str) -> impl Future<Output = bool> + Send {
        (**self).exists(location)
    }
}

impl<T: TextFetch> TextFetch for &T {
    fn fetch_text(
        &self,
        location: &str,
    ) -> impl Future<Output = Result<String, ManifestError>> + Send {
        (**self).fetch_text(location)
    }
}
