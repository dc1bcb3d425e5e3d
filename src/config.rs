//! # Sources Configuration
//!
//! A sources file lists descriptor providers in the order they should be
//! consulted. It lets a deployment put an override directory in front of the
//! bundled data without code changes:
//!
//! ```yaml
//! sources:
//!   - filesystem: ./overrides
//!   - manifest:
//!       dir: ./data
//!       manifest: ./data/manifest.json   # optional
//! ```
//!
//! - **`filesystem`**: a [`FilesystemProvider`] over the directory; `latest`
//!   is found by scanning file names.
//! - **`manifest`**: a [`ManifestProvider`] over `dir`, resolving aliases
//!   through `manifest` (default `<dir>/manifest.json`).
//!
//! Relative paths are resolved against the directory holding the sources
//! file when loaded with [`from_file`], or against the base passed to
//! [`SourcesConfig::build_provider`].

use crate::defaults;
use crate::error::{Error, Result};
use crate::manifest::ManifestStore;
use crate::provider::{ChainProvider, FilesystemProvider, ManifestProvider};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Manifest source configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestSource {
    /// Directory holding the descriptor files.
    pub dir: PathBuf,
    /// Manifest file. Defaults to `manifest.json` inside `dir`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<PathBuf>,
}

/// One entry in the `sources` list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Source {
    /// Scan a directory directly.
    Filesystem { filesystem: PathBuf },
    /// Resolve through a manifest.
    Manifest { manifest: ManifestSource },
}

/// The whole sources file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// Providers, in lookup order
    pub sources: Vec<Source>,
    /// Directory relative paths are resolved against
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

impl SourcesConfig {
    /// Build the provider chain described by this configuration.
    ///
    /// Filesystem sources fail here if their directory is missing, and
    /// manifest sources fail if their manifest cannot be loaded. Manifests
    /// are read on every call, so build the chain once and keep it.
    pub fn build_provider(&self) -> Result<ChainProvider> {
        let base = self.base_dir.as_deref().unwrap_or_else(|| Path::new("."));
        let mut chain = ChainProvider::new();

        for source in &self.sources {
            match source {
                Source::Filesystem { filesystem } => {
                    chain.push(FilesystemProvider::new(resolve_path(base, filesystem))?);
                }
                Source::Manifest { manifest } => {
                    let dir = resolve_path(base, &manifest.dir);
                    let manifest_path = match &manifest.manifest {
                        Some(path) => resolve_path(base, path),
                        None => defaults::default_manifest_path(&dir),
                    };
                    let store = ManifestStore::new(manifest_path);
                    chain.push(ManifestProvider::from_store(dir, &store)?);
                }
            }
        }

        Ok(chain)
    }
}

fn resolve_path(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Parse a sources configuration from YAML.
pub fn parse(yaml_content: &str) -> Result<SourcesConfig> {
    let config: SourcesConfig = serde_yaml::from_str(yaml_content)?;
    if config.sources.is_empty() {
        return Err(Error::Config {
            message: "No sources configured".to_string(),
            hint: Some("Add at least one 'filesystem' or 'manifest' entry under 'sources:'".to_string()),
        });
    }
    Ok(config)
}

/// Load a sources configuration file, resolving relative paths against its
/// directory.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<SourcesConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    let mut config = parse(&content)?;
    config.base_dir = Some(
        path.parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    );
    Ok(config)
}
