// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Scanning, discovery and rendering code is written against the ports
//!
//! # Example
//!
//! ```ignore
//! use gallery_lens::application::port::ExistenceProbe;
//!
//! // Infrastructure implements the port trait
//! struct HttpAssets { /* ... */ }
//! impl ExistenceProbe for HttpAssets { /* ... */ }
//! ```

pub mod port;
