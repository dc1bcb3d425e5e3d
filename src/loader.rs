//! # Document Loader
//!
//! Loads a single descriptor for a concrete `(type, service, version)` from a
//! base directory. Each supported encoding is an entry in [`FORMATS`], tried in
//! order: the precompiled MessagePack form first, then plain JSON.
//!
//! ## Missing vs. corrupt
//!
//! A candidate that does not exist is skipped. When no candidate exists the
//! loader returns `Ok(None)` and the caller decides what that means. A
//! candidate that exists but fails to decode is an [`Error::Parse`] and is
//! returned immediately; the loader never falls through to the next format,
//! and provider chains never fall through to the next provider.

use crate::document::{Descriptor, DocumentType};
use crate::error::{Error, Result};
use log::{debug, trace};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A descriptor encoding: file extension plus decoder.
#[derive(Debug, Clone, Copy)]
pub struct Format {
    /// File extension, without the leading dot
    pub ext: &'static str,
    decode: fn(&[u8]) -> std::result::Result<Descriptor, String>,
}

impl Format {
    /// Decode raw file contents in this format.
    pub fn decode(&self, bytes: &[u8]) -> std::result::Result<Descriptor, String> {
        (self.decode)(bytes)
    }
}

/// Extension of the precompiled descriptor format.
pub const PRECOMPILED_EXT: &str = "msgpack";

/// Extension of the JSON descriptor format.
pub const JSON_EXT: &str = "json";

/// Supported formats in precedence order.
pub const FORMATS: &[Format] = &[
    Format {
        ext: PRECOMPILED_EXT,
        decode: decode_msgpack,
    },
    Format {
        ext: JSON_EXT,
        decode: decode_json,
    },
];

fn decode_msgpack(bytes: &[u8]) -> std::result::Result<Descriptor, String> {
    rmp_serde::from_slice(bytes).map_err(|e| e.to_string())
}

fn decode_json(bytes: &[u8]) -> std::result::Result<Descriptor, String> {
    serde_json::from_slice(bytes).map_err(|e| e.to_string())
}

/// Candidate paths for a descriptor, in the order they are tried.
pub fn candidates(
    doc_type: DocumentType,
    service: &str,
    version: &str,
    base_dir: &Path,
) -> Vec<PathBuf> {
    FORMATS
        .iter()
        .map(|format| base_dir.join(doc_type.file_name(service, version, format.ext)))
        .collect()
}

/// Load and decode a descriptor.
///
/// Returns `Ok(None)` when no candidate file exists.
pub fn load(
    doc_type: DocumentType,
    service: &str,
    version: &str,
    base_dir: &Path,
) -> Result<Option<Descriptor>> {
    for format in FORMATS {
        let path = base_dir.join(doc_type.file_name(service, version, format.ext));
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                trace!("No descriptor at {}", path.display());
                continue;
            }
            Err(e) => return Err(Error::Io(e)),
        };

        debug!("Loading {} descriptor from {}", doc_type, path.display());
        return format
            .decode(&bytes)
            .map(Some)
            .map_err(|message| Error::Parse { path, message });
    }

    Ok(None)
}
