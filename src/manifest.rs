//! # Manifest Store
//!
//! The manifest maps each service name to a table of version aliases, where
//! every alias (including `latest`) points at a concrete version:
//!
//! ```json
//! {
//!   "dynamodb": {
//!     "latest": "2012-08-10",
//!     "2012-08-10": "2012-08-10",
//!     "2010-02-04": "2010-02-04"
//!   }
//! }
//! ```
//!
//! Every concrete version also maps to itself, so resolving an already
//! resolved version is a no-op. [`Manifest`] enforces this on construction:
//! identity entries missing from a hand-written file are filled in.
//!
//! A manifest is immutable once built. [`ManifestStore`] reads one from disk
//! at most once and hands out shared references, so a host application can
//! construct a store up front and pass it to every provider that needs it.

use crate::error::{Error, Result};
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Alias table for one service: alias -> concrete version
pub type VersionTable = BTreeMap<String, String>;

/// Service name -> alias table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, VersionTable>", into = "BTreeMap<String, VersionTable>")]
pub struct Manifest {
    services: BTreeMap<String, VersionTable>,
}

impl From<BTreeMap<String, VersionTable>> for Manifest {
    fn from(services: BTreeMap<String, VersionTable>) -> Self {
        let mut manifest = Manifest::new();
        for (service, table) in services {
            for (alias, version) in table {
                manifest.insert(&service, &alias, &version);
            }
        }
        manifest
    }
}

impl From<Manifest> for BTreeMap<String, VersionTable> {
    fn from(manifest: Manifest) -> Self {
        manifest.services
    }
}

impl Manifest {
    /// Create an empty manifest
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a manifest from JSON text.
    ///
    /// Malformed text is a [`Error::ManifestLoad`] with an empty path.
    pub fn parse(content: &str) -> Result<Self> {
        Self::parse_from(Path::new(""), content)
    }

    /// Read and parse a manifest file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::ManifestLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let manifest = Self::parse_from(path, &content)?;
        debug!(
            "Loaded manifest {} ({} services)",
            path.display(),
            manifest.len()
        );
        Ok(manifest)
    }

    fn parse_from(path: &Path, content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::ManifestLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Build a manifest by scanning a descriptor directory.
    ///
    /// Every `{service}-{YYYY-MM-DD}.api.*` file contributes an identity entry,
    /// and each service gets `latest` pointing at its newest version. Files
    /// whose names don't follow that shape are ignored.
    pub fn from_directory<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(Error::InvalidDirectory {
                path: dir.to_path_buf(),
            });
        }

        let api_file = Regex::new(r"^(?P<service>.+)-(?P<version>\d{4}-\d{2}-\d{2})\.api\.[^.]+$")?;
        let mut manifest = Manifest::new();

        for entry in fs::read_dir(dir)? {
            let name = entry?.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if let Some(caps) = api_file.captures(name) {
                let version = &caps["version"];
                manifest.insert(&caps["service"], version, version);
            }
        }

        for table in manifest.services.values_mut() {
            if let Some(newest) = table.keys().next_back().cloned() {
                table.insert(crate::document::LATEST.to_string(), newest);
            }
        }

        Ok(manifest)
    }

    /// Write the manifest as pretty-printed JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json + "\n")?;
        Ok(())
    }

    /// Map `alias` to `version` for `service`, adding the identity entry for
    /// `version` as well.
    pub fn insert(&mut self, service: &str, alias: &str, version: &str) {
        let table = self.services.entry(service.to_string()).or_default();
        table.insert(alias.to_string(), version.to_string());
        table
            .entry(version.to_string())
            .or_insert_with(|| version.to_string());
    }

    /// Resolve an alias or concrete version for a service.
    pub fn resolve(&self, service: &str, alias: &str) -> Option<&str> {
        self.services
            .get(service)
            .and_then(|table| table.get(alias))
            .map(String::as_str)
    }

    /// The alias table for a service, if known.
    pub fn versions_table(&self, service: &str) -> Option<&VersionTable> {
        self.services.get(service)
    }

    /// Distinct concrete versions for a service, newest first.
    ///
    /// Unknown services yield an empty list.
    pub fn list_versions(&self, service: &str) -> Vec<String> {
        let Some(table) = self.services.get(service) else {
            return Vec::new();
        };
        let distinct: BTreeSet<&String> = table.values().collect();
        distinct.into_iter().rev().cloned().collect()
    }

    /// Whether the manifest knows the service
    pub fn contains_service(&self, service: &str) -> bool {
        self.services.contains_key(service)
    }

    /// Known service names, sorted
    pub fn services(&self) -> impl Iterator<Item = &str> {
        self.services.keys().map(String::as_str)
    }

    /// Number of services
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Check if the manifest is empty
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

/// Load-once holder for a manifest.
///
/// The first call to [`ManifestStore::manifest`] reads the file; later calls
/// return the same shared instance. A failed load is not cached.
#[derive(Debug)]
pub struct ManifestStore {
    path: Option<PathBuf>,
    loaded: Mutex<Option<Arc<Manifest>>>,
}

impl ManifestStore {
    /// Create a store that will lazily load `path`.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: Some(path.into()),
            loaded: Mutex::new(None),
        }
    }

    /// Create a store around an already built manifest.
    pub fn from_manifest(manifest: Manifest) -> Self {
        Self {
            path: None,
            loaded: Mutex::new(Some(Arc::new(manifest))),
        }
    }

    /// The backing file, if the store was created from one
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Get the manifest, loading it on first use.
    pub fn manifest(&self) -> Result<Arc<Manifest>> {
        let mut loaded = self.loaded.lock().map_err(|_| Error::LockPoisoned {
            context: "manifest store".to_string(),
        })?;
        if let Some(manifest) = loaded.as_ref() {
            return Ok(Arc::clone(manifest));
        }

        let Some(path) = self.path.as_deref() else {
            return Err(Error::ManifestLoad {
                path: PathBuf::new(),
                message: "store has neither a manifest nor a backing file".to_string(),
            });
        };
        let manifest = Arc::new(Manifest::load(path)?);
        *loaded = Some(Arc::clone(&manifest));
        Ok(manifest)
    }
}
