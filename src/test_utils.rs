// SPDX-License-Identifier: MPL-2.0
//! Test doubles for the asset and render ports.
//!
//! [`StaticAssets`] is an in-memory asset host that records every probe, and
//! [`RecordingTarget`] keeps each applied instruction batch for inspection.

use crate::application::port::{ExistenceProbe, RenderTarget, TextFetch};
use crate::domain::gallery::{ImageRecord, RenderInstruction};
use crate::error::ManifestError;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory asset host keyed by full location.
#[derive(Debug, Default)]
pub struct StaticAssets {
    files: HashMap<String, String>,
    probes: Mutex<Vec<String>>,
}

impl StaticAssets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an (empty) file at `location`.
    pub fn with_file(mut self, location: impl Into<String>) -> Self {
        self.files.insert(location.into(), String::new());
        self
    }

    /// Adds files for `numbers` of a folder, as `<base>/<folder>/<prefix> <N>.<ext>`.
    pub fn with_numbered(mut self, base: &str, folder: &str, prefix: &str, ext: &str, numbers: &[u32]) -> Self {
        for n in numbers {
            self.files
                .insert(format!("{base}/{folder}/{prefix} {n}.{ext}"), String::new());
        }
        self
    }

    /// Adds a text file at `location`.
    pub fn with_text(mut self, location: impl Into<String>, text: impl Into<String>) -> Self {
        self.files.insert(location.into(), text.into());
        self
    }

    /// Every location probed so far, in order.
    pub fn probed(&self) -> Vec<String> {
        self.probes.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

impl ExistenceProbe for StaticAssets {
    async fn exists(&self, location: &str) -> bool {
        if let Ok(mut probes) = self.probes.lock() {
            probes.push(location.to_string());
        }
        self.files.contains_key(location)
    }
}

impl TextFetch for StaticAssets {
    async fn fetch_text(&self, location: &str) -> Result<String, ManifestError> {
        self.files
            .get(location)
            .cloned()
            .ok_or_else(|| ManifestError::Unavailable(location.to_string()))
    }
}

/// Render target that stores applied batches.
#[derive(Debug, Default)]
pub struct RecordingTarget {
    elements: Vec<String>,
    pub batches: Vec<Vec<RenderInstruction>>,
}

impl RecordingTarget {
    /// A target whose document has elements with these ids.
    pub fn with_elements(ids: &[&str]) -> Self {
        Self {
            elements: ids.iter().map(|id| (*id).to_string()).collect(),
            batches: Vec::new(),
        }
    }

    /// Cards currently shown, replaying every batch from the start.
    pub fn shown(&self) -> Vec<ImageRecord> {
        let mut shown = Vec::new();
        for instruction in self.batches.iter().flatten() {
            match instruction {
                RenderInstruction::Clear => shown.clear(),
                RenderInstruction::AppendCard(image) => shown.push(image.clone()),
                _ => {}
            }
        }
        shown
    }
}

impl RenderTarget for RecordingTarget {
    fn has_element(&self, id: &str) -> bool {
        self.elements.iter().any(|element| element == id)
    }

    fn apply(&mut self, instructions: &[RenderInstruction]) {
        self.batches.push(instructions.to_vec());
    }
}
