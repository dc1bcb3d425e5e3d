//! Directory-backed provider.
//!
//! Concrete versions go straight to the loader. `latest` is resolved by
//! listing `{service}-*.api.*` in the directory and picking the greatest
//! version token; the answer is cached per service for the lifetime of the
//! provider. A new provider instance is needed to observe files added after
//! the first `latest` lookup.
//!
//! Each service has its own cache slot, so a scan for one service never
//! waits on a scan for another.

use super::Provider;
use crate::document::{Descriptor, DocumentType, LATEST};
use crate::error::{Error, Result};
use crate::loader;
use glob::Pattern;
use log::debug;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Width of the date-shaped version token in file names.
const VERSION_TOKEN_LEN: usize = 10;

/// Cached `latest` answer for one service. `None` until a scan finds a file.
type LatestSlot = Arc<Mutex<Option<String>>>;

/// Provider that reads descriptors straight from a directory
#[derive(Debug)]
pub struct FilesystemProvider {
    dir: PathBuf,
    latest: Mutex<HashMap<String, LatestSlot>>,
    scans: AtomicUsize,
}

impl FilesystemProvider {
    /// Create a provider over `dir`, failing if it is not a directory.
    pub fn new<P: Into<PathBuf>>(dir: P) -> Result<Self> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(Error::InvalidDirectory { path: dir });
        }
        Ok(Self {
            dir,
            latest: Mutex::new(HashMap::new()),
            scans: AtomicUsize::new(0),
        })
    }

    /// The directory this provider reads from
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolve `latest` for a service, scanning the directory on first use.
    ///
    /// The service's slot stays locked across the scan, so concurrent lookups
    /// for the same service scan once. Lookups for other services only share
    /// the brief slot lookup. Misses are not cached.
    pub fn latest_version(&self, service: &str) -> Result<Option<String>> {
        let slot = self.slot(service)?;
        let mut cached = slot.lock().map_err(|_| self.poisoned(service))?;
        if let Some(version) = cached.as_ref() {
            return Ok(Some(version.clone()));
        }

        self.scans.fetch_add(1, Ordering::Relaxed);
        let Some(version) = scan_latest(&self.dir, service)? else {
            return Ok(None);
        };
        debug!(
            "Resolved latest version of {} to {} in {}",
            service,
            version,
            self.dir.display()
        );
        *cached = Some(version.clone());
        Ok(Some(version))
    }

    /// Number of directory scans performed so far
    pub fn scan_count(&self) -> usize {
        self.scans.load(Ordering::Relaxed)
    }

    fn slot(&self, service: &str) -> Result<LatestSlot> {
        let mut slots = self.latest.lock().map_err(|_| self.poisoned(service))?;
        Ok(Arc::clone(slots.entry(service.to_string()).or_default()))
    }

    fn poisoned(&self, service: &str) -> Error {
        Error::LockPoisoned {
            context: format!(
                "latest version cache for {} in {}",
                service,
                self.dir.display()
            ),
        }
    }
}

impl Provider for FilesystemProvider {
    fn provide(
        &self,
        doc_type: DocumentType,
        service: &str,
        version: &str,
    ) -> Result<Option<Descriptor>> {
        if version != LATEST {
            return loader::load(doc_type, service, version, &self.dir);
        }
        match self.latest_version(service)? {
            Some(version) => loader::load(doc_type, service, &version, &self.dir),
            None => Ok(None),
        }
    }
}

/// Find the greatest version token among `{service}-*.api.*` files.
///
/// The token is the fixed-width run of characters right after `{service}-`.
/// Tokens are compared as plain strings, which orders `YYYY-MM-DD` dates
/// chronologically. A directory that has disappeared scans as empty.
fn scan_latest(dir: &Path, service: &str) -> Result<Option<String>> {
    let pattern = Pattern::new(&format!("{}-*.api.*", Pattern::escape(service)))?;
    let prefix_len = service.len() + 1;

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("{} no longer exists; no {} files", dir.display(), service);
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let mut tokens = Vec::new();
    for entry in entries {
        let name = entry?.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if !pattern.matches(name) {
            continue;
        }
        if let Some(rest) = name.get(prefix_len..) {
            tokens.push(rest.chars().take(VERSION_TOKEN_LEN).collect::<String>());
        }
    }

    debug!(
        "Scanned {} for {}: {} candidate(s)",
        dir.display(),
        service,
        tokens.len()
    );
    tokens.sort_unstable_by(|a, b| b.cmp(a));
    Ok(tokens.into_iter().next())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_new_rejects_missing_directory() {
        let dir = TempDir::new().unwrap();
        let err = FilesystemProvider::new(dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, Error::InvalidDirectory { .. }));
    }

    #[test]
    fn test_new_rejects_file() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "plain.txt", "");
        let err = FilesystemProvider::new(dir.path().join("plain.txt")).unwrap_err();
        assert!(matches!(err, Error::InvalidDirectory { .. }));
    }

    #[test]
    fn test_concrete_version() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "s3-2006-03-01.api.json", r#"{"v":1}"#);

        let provider = FilesystemProvider::new(dir.path()).unwrap();
        assert_eq!(
            provider.provide(DocumentType::Api, "s3", "2006-03-01").unwrap(),
            Some(json!({"v": 1}))
        );
        assert!(provider
            .provide(DocumentType::Api, "s3", "2099-01-01")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_latest_picks_newest() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "sqs-2011-10-01.api.json", r#"{"v":"old"}"#);
        write(dir.path(), "sqs-2012-11-05.api.json", r#"{"v":"new"}"#);
        write(dir.path(), "sqs-2012-11-05.paginators.json", r#"{"p":1}"#);

        let provider = FilesystemProvider::new(dir.path()).unwrap();
        assert_eq!(
            provider.provide(DocumentType::Api, "sqs", "latest").unwrap(),
            Some(json!({"v": "new"}))
        );
        assert_eq!(
            provider.provide(DocumentType::Paginator, "sqs", "latest").unwrap(),
            Some(json!({"p": 1}))
        );
    }

    #[test]
    fn test_latest_for_unknown_service() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "sqs-2012-11-05.api.json", "{}");

        let provider = FilesystemProvider::new(dir.path()).unwrap();
        assert!(provider
            .provide(DocumentType::Api, "dodo", "latest")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_latest_is_cached_per_instance() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "svc-2010-01-01.api.json", r#"{"v":2010}"#);

        let provider = FilesystemProvider::new(dir.path()).unwrap();
        assert_eq!(
            provider.provide(DocumentType::Api, "svc", "latest").unwrap(),
            Some(json!({"v": 2010}))
        );

        write(dir.path(), "svc-2099-01-01.api.json", r#"{"v":2099}"#);
        assert_eq!(
            provider.provide(DocumentType::Api, "svc", "latest").unwrap(),
            Some(json!({"v": 2010}))
        );

        let fresh = FilesystemProvider::new(dir.path()).unwrap();
        assert_eq!(
            fresh.provide(DocumentType::Api, "svc", "latest").unwrap(),
            Some(json!({"v": 2099}))
        );
    }

    #[test]
    fn test_miss_is_not_cached() {
        let dir = TempDir::new().unwrap();
        let provider = FilesystemProvider::new(dir.path()).unwrap();

        assert!(provider.latest_version("svc").unwrap().is_none());
        write(dir.path(), "svc-2015-05-05.api.json", "{}");
        assert_eq!(
            provider.latest_version("svc").unwrap().as_deref(),
            Some("2015-05-05")
        );
    }

    #[test]
    fn test_removed_directory_is_a_miss() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("overrides");
        fs::create_dir(&dir).unwrap();
        write(&dir, "s3-2006-03-01.api.json", r#"{"v":1}"#);

        let provider = FilesystemProvider::new(&dir).unwrap();
        fs::remove_dir_all(&dir).unwrap();

        assert!(provider
            .provide(DocumentType::Api, "s3", "latest")
            .unwrap()
            .is_none());
        assert!(provider
            .provide(DocumentType::Api, "s3", "2006-03-01")
            .unwrap()
            .is_none());

        // The miss was not cached, so a recreated directory is seen.
        fs::create_dir(&dir).unwrap();
        write(&dir, "s3-2006-03-01.api.json", r#"{"v":1}"#);
        assert_eq!(
            provider.provide(DocumentType::Api, "s3", "latest").unwrap(),
            Some(json!({"v": 1}))
        );
    }

    #[test]
    fn test_removed_directory_falls_through_in_a_chain() {
        let root = TempDir::new().unwrap();
        let overrides = root.path().join("overrides");
        let data = root.path().join("data");
        fs::create_dir(&overrides).unwrap();
        fs::create_dir(&data).unwrap();
        write(&data, "s3-2006-03-01.api.json", r#"{"ok":1}"#);

        let chain = crate::provider::ChainProvider::new()
            .with(FilesystemProvider::new(&overrides).unwrap())
            .with(FilesystemProvider::new(&data).unwrap());
        fs::remove_dir_all(&overrides).unwrap();

        assert_eq!(
            chain.provide(DocumentType::Api, "s3", "latest").unwrap(),
            Some(json!({"ok": 1}))
        );
    }

    #[test]
    fn test_scan_count_tracks_cache_fills() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "sqs-2012-11-05.api.json", "{}");
        write(dir.path(), "sns-2010-03-31.api.json", "{}");
        let provider = FilesystemProvider::new(dir.path()).unwrap();

        provider.latest_version("sqs").unwrap();
        provider.latest_version("sqs").unwrap();
        assert_eq!(provider.scan_count(), 1);

        provider.latest_version("sns").unwrap();
        assert_eq!(provider.scan_count(), 2);

        // Misses scan every time.
        provider.latest_version("dodo").unwrap();
        provider.latest_version("dodo").unwrap();
        assert_eq!(provider.scan_count(), 4);
    }

    #[test]
    fn test_other_services_do_not_wait_on_a_held_slot() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "sqs-2012-11-05.api.json", "{}");
        write(dir.path(), "sns-2010-03-31.api.json", "{}");
        let provider = FilesystemProvider::new(dir.path()).unwrap();

        let sqs = provider.slot("sqs").unwrap();
        let _held = sqs.lock().unwrap();
        assert_eq!(
            provider.latest_version("sns").unwrap().as_deref(),
            Some("2010-03-31")
        );
    }

    #[test]
    fn test_service_name_is_matched_literally() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a-2010-01-01.api.json", "{}");
        write(dir.path(), "[a]-2012-01-01.api.json", "{}");

        let provider = FilesystemProvider::new(dir.path()).unwrap();
        assert_eq!(
            provider.latest_version("[a]").unwrap().as_deref(),
            Some("2012-01-01")
        );
        assert_eq!(
            provider.latest_version("a").unwrap().as_deref(),
            Some("2010-01-01")
        );
    }

    #[test]
    fn test_cache_fill_is_logged_once() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "sns-2010-03-31.api.json", "{}");
        let provider = FilesystemProvider::new(dir.path()).unwrap();

        testing_logger::setup();
        provider.latest_version("sns").unwrap();
        provider.latest_version("sns").unwrap();

        testing_logger::validate(|captured_logs| {
            let fills: Vec<_> = captured_logs
                .iter()
                .filter(|log| log.body.contains("Resolved latest version of sns"))
                .collect();
            assert_eq!(fills.len(), 1);
            assert_eq!(fills[0].level, log::Level::Debug);
            assert!(fills[0].body.contains("2010-03-31"));
        });
    }
}
