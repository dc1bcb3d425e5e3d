//! # Descriptor Precompilation
//!
//! Converts JSON descriptors in a directory into their precompiled
//! MessagePack siblings. The loader prefers the precompiled file when both
//! exist, so running this over a data directory speeds up every later load
//! without changing what is loaded. A precompiled file older than its JSON
//! source is stale and is rebuilt on the next run.
//!
//! Only files following the descriptor naming scheme
//! (`{service}-{version}.{category}.json`) are compiled; the manifest and any
//! other JSON in the directory are left alone.

use crate::document::DocumentType;
use crate::error::{Error, Result};
use crate::loader::{JSON_EXT, PRECOMPILED_EXT};
use log::{debug, info};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Options for [`compile_directory`]
#[derive(Debug, Clone, Copy, Default)]
pub struct CompileOptions {
    /// Rebuild precompiled files even when they are up to date
    pub force: bool,
}

/// Precompile every JSON descriptor in `dir`.
///
/// Returns the paths written, sorted. A JSON file that fails to parse aborts
/// the run with [`Error::Parse`].
pub fn compile_directory<P: AsRef<Path>>(dir: P, options: CompileOptions) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(Error::InvalidDirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut sources: Vec<PathBuf> = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<_>>()?;
    sources.retain(|path| is_json_descriptor(path));
    sources.sort();

    let mut written = Vec::new();
    for source in sources {
        let target = source.with_extension(PRECOMPILED_EXT);
        if !options.force && is_up_to_date(&source, &target)? {
            debug!("Skipping {}: already compiled", source.display());
            continue;
        }
        compile_file(&source, &target)?;
        written.push(target);
    }

    info!("Precompiled {} descriptor(s) in {}", written.len(), dir.display());
    Ok(written)
}

/// Precompile a single JSON descriptor into `target`.
pub fn compile_file(source: &Path, target: &Path) -> Result<()> {
    let bytes = fs::read(source)?;
    let value: serde_json::Value =
        serde_json::from_slice(&bytes).map_err(|e| Error::Parse {
            path: source.to_path_buf(),
            message: e.to_string(),
        })?;
    let packed = rmp_serde::to_vec(&value).map_err(|e| Error::Serialization {
        message: format!("{}: {}", source.display(), e),
    })?;
    fs::write(target, packed)?;
    debug!("Compiled {} -> {}", source.display(), target.display());
    Ok(())
}

/// A target is up to date when it exists and is not older than its source.
fn is_up_to_date(source: &Path, target: &Path) -> Result<bool> {
    let target_modified = match fs::metadata(target) {
        Ok(metadata) => metadata.modified()?,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e.into()),
    };
    let source_modified = fs::metadata(source)?.modified()?;
    Ok(target_modified >= source_modified)
}

fn is_json_descriptor(path: &Path) -> bool {
    if path.extension().and_then(|e| e.to_str()) != Some(JSON_EXT) {
        return false;
    }
    let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
        return false;
    };
    DocumentType::ALL.iter().any(|doc_type| {
        stem.strip_suffix(doc_type.category())
            .is_some_and(|rest| rest.ends_with('.') && rest.len() > 1)
    })
}
