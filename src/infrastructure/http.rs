// SPDX-License-Identifier: MPL-2.0
//! Static asset host reached over HTTP.
//!
//! Existence checks use `HEAD` and succeed only on a 2xx status. Anything else,
//! including transport errors and timeouts, is reported as "not found".

use crate::application::port::{ExistenceProbe, TextFetch};
use crate::config::defaults::{PROBE_REDIRECT_LIMIT, USER_AGENT};
use crate::error::{ManifestError, Result};
use std::time::Duration;

/// HTTP implementation of the asset ports.
#[derive(Debug, Clone)]
pub struct HttpAssets {
    client: reqwest::Client,
}

impl HttpAssets {
    /// Builds a client with the given per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`](crate::error::Error::Http) if the TLS backend
    /// cannot be initialized.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(PROBE_REDIRECT_LIMIT))
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    /// Returns `true` if `base` looks like an HTTP(S) URL rather than a directory.
    #[must_use]
    pub fn handles(base: &str) -> bool {
        let lower = base.to_ascii_lowercase();
        lower.starts_with("http://") || lower.starts_with("https://")
    }
}

impl ExistenceProbe for HttpAssets {
    async fn exists(&self, location: &str) -> bool {
        match self.client.head(location).send().await {
            Ok(response) => {
                let found = response.status().is_success();
                if !found {
                    tracing::debug!(url = location, status = %response.status(), "probe miss");
                }
                found
            }
            Err(err) => {
                tracing::debug!(url = location, error = %err, "probe failed, treating as missing");
                false
            }
        }
    }
}

impl TextFetch for HttpAssets {
    async fn fetch_text(&self, location: &str) -> std::result::Result<String, ManifestError> {
        let response = self
            .client
            .get(location)
            .send()
            .await
            .map_err(|e| ManifestError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ManifestError::Unavailable(format!(
                "HTTP status: {}",
                response.status()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| ManifestError::Unavailable(e.to_string()))
    }
}
