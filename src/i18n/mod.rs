// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation loading, and string formatting for
//! gallery labels and CLI summaries.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Translation files embedded in the binary
//! - Runtime language switching
//! - Fallback to `en-US` when the current locale lacks a bundle

pub mod fluent;

pub use fluent::I18n;
