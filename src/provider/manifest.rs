//! Manifest-backed provider.

use super::Provider;
use crate::document::{Descriptor, DocumentType};
use crate::error::Result;
use crate::loader;
use crate::manifest::{Manifest, ManifestStore};
use log::trace;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Provider that resolves aliases through a manifest before loading.
///
/// A service or alias missing from the manifest is a miss, even if a
/// matching file happens to exist in the directory.
#[derive(Debug, Clone)]
pub struct ManifestProvider {
    dir: PathBuf,
    manifest: Arc<Manifest>,
}

impl ManifestProvider {
    /// Create a provider over `dir` using an in-memory manifest.
    pub fn new<P: Into<PathBuf>>(dir: P, manifest: impl Into<Arc<Manifest>>) -> Self {
        Self {
            dir: dir.into(),
            manifest: manifest.into(),
        }
    }

    /// Create a provider sharing the manifest held by `store`.
    pub fn from_store<P: Into<PathBuf>>(dir: P, store: &ManifestStore) -> Result<Self> {
        Ok(Self::new(dir, store.manifest()?))
    }

    /// The directory descriptors are loaded from
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The manifest used for alias resolution
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}

impl Provider for ManifestProvider {
    fn provide(
        &self,
        doc_type: DocumentType,
        service: &str,
        version: &str,
    ) -> Result<Option<Descriptor>> {
        let Some(concrete) = self.manifest.resolve(service, version) else {
            trace!("Manifest has no entry for {}@{}", service, version);
            return Ok(None);
        };
        loader::load(doc_type, service, concrete, &self.dir)
    }
}
