//! # Descriptor Registry Library
//!
//! This library resolves versioned service descriptors (API models,
//! paginators, waiters) from a data directory. Given a document type, a
//! service name, and a version (either concrete, like `2012-08-10`, or the
//! alias `latest`), it finds the matching concrete revision and loads the
//! descriptor file for it.
//!
//! ## Quick Example
//!
//! ```
//! use descriptor_registry::manifest::Manifest;
//! use descriptor_registry::provider::{ChainProvider, ManifestProvider};
//! use descriptor_registry::resolver;
//!
//! let dir = tempfile::tempdir().unwrap();
//! std::fs::write(dir.path().join("s3-2006-03-01.api.json"), r#"{"ok":true}"#).unwrap();
//!
//! let manifest = Manifest::parse(r#"{"s3": {"latest": "2006-03-01"}}"#).unwrap();
//! let provider = ChainProvider::new().with(ManifestProvider::new(dir.path(), manifest));
//!
//! let api = resolver::resolve(&provider, "api", "s3", "latest").unwrap();
//! assert_eq!(api["ok"], true);
//! ```
//!
//! ## Core Concepts
//!
//! - **Manifest (`manifest`)**: service -> alias -> concrete version table,
//!   loaded once and shared.
//! - **Loader (`loader`)**: reads `{service}-{version}.{category}.{ext}`,
//!   preferring the precompiled MessagePack form over JSON.
//! - **Providers (`provider`)**: sources that answer lookups with a
//!   descriptor, a miss, or a hard error. Directory-scanning and
//!   manifest-backed providers can be chained so an override directory is
//!   consulted before the bundled data.
//! - **Resolver (`resolver`)**: turns a miss into an explicit error for
//!   callers that need a descriptor.
//!
//! ## Supporting Modules
//!
//! - **`config`**: YAML sources file describing a provider chain.
//! - **`compile`**: precompiles JSON descriptors to MessagePack.
//! - **`defaults`**: default paths and environment variable names.

pub mod compile;
pub mod config;
pub mod defaults;
pub mod document;
pub mod error;
pub mod loader;
pub mod manifest;
pub mod provider;
pub mod resolver;
pub mod suggestions;

#[cfg(test)]
mod manifest_proptest;
