// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) so that scanning
//! and pagination rules can be tested without a network or a renderer.
//!
//! # Modules
//!
//! - [`gallery`]: Gallery types ([`FolderSpec`](gallery::FolderSpec),
//!   [`ImageRecord`](gallery::ImageRecord), [`CategoryFilter`](gallery::CategoryFilter),
//!   [`MissThreshold`](gallery::MissThreshold), [`PageSize`](gallery::PageSize))

pub mod gallery;
