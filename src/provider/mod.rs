//! # Descriptor Providers
//!
//! A provider answers `(type, service, version)` lookups with one of three
//! outcomes:
//!
//! - `Ok(Some(descriptor))`: this source has the document.
//! - `Ok(None)`: this source has no answer. Not an error.
//! - `Err(_)`: a hard failure (corrupt file, invalid type, I/O problem).
//!
//! ## Implementations
//!
//! - **`FilesystemProvider`**: resolves versions by scanning a directory.
//! - **`ManifestProvider`**: resolves versions through a
//!   [`Manifest`](crate::manifest::Manifest).
//! - **`ChainProvider`**: tries several providers in order, returning the
//!   first answer and stopping at the first hard error.
//!
//! Anything implementing [`Provider`] can be dropped into a chain, which is
//! how an override directory gets layered in front of the bundled data.

pub mod chain;
pub mod filesystem;
pub mod manifest;

pub use chain::{compose, ChainProvider};
pub use filesystem::FilesystemProvider;
pub use manifest::ManifestProvider;

use crate::defaults;
use crate::document::{Descriptor, DocumentType};
use crate::error::Result;
use crate::manifest::ManifestStore;
use std::path::Path;
use std::sync::Arc;

/// A source of service descriptors.
pub trait Provider: Send + Sync {
    /// Look up a descriptor. `Ok(None)` means this source cannot answer.
    fn provide(
        &self,
        doc_type: DocumentType,
        service: &str,
        version: &str,
    ) -> Result<Option<Descriptor>>;

    /// Look up a descriptor by its type token (`api`, `paginator`, `waiter`).
    ///
    /// Any other token is an `InvalidDocumentType` error, whatever the provider.
    fn provide_str(
        &self,
        doc_type: &str,
        service: &str,
        version: &str,
    ) -> Result<Option<Descriptor>> {
        let doc_type = doc_type.parse::<DocumentType>()?;
        self.provide(doc_type, service, version)
    }
}

impl<P: Provider + ?Sized> Provider for Box<P> {
    fn provide(
        &self,
        doc_type: DocumentType,
        service: &str,
        version: &str,
    ) -> Result<Option<Descriptor>> {
        (**self).provide(doc_type, service, version)
    }
}

impl<P: Provider + ?Sized> Provider for Arc<P> {
    fn provide(
        &self,
        doc_type: DocumentType,
        service: &str,
        version: &str,
    ) -> Result<Option<Descriptor>> {
        (**self).provide(doc_type, service, version)
    }
}

/// The provider for a bundled data directory: a chain holding one
/// `ManifestProvider` backed by `<data_dir>/manifest.json`.
///
/// The manifest is read on every call. Hosts that build providers
/// repeatedly should keep one [`ManifestStore`] and use
/// [`default_provider_from_store`].
pub fn default_provider<P: AsRef<Path>>(data_dir: P) -> Result<ChainProvider> {
    let data_dir = data_dir.as_ref();
    let store = ManifestStore::new(defaults::default_manifest_path(data_dir));
    default_provider_from_store(data_dir, &store)
}

/// Same as [`default_provider`], but the manifest comes from `store`, which
/// loads it at most once however many providers are built from it.
pub fn default_provider_from_store<P: AsRef<Path>>(
    data_dir: P,
    store: &ManifestStore,
) -> Result<ChainProvider> {
    let provider = ManifestProvider::from_store(data_dir.as_ref(), store)?;
    Ok(ChainProvider::new().with(provider))
}
