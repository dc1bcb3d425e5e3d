//! Document types and the on-disk naming scheme for descriptors.
//!
//! Descriptor files live flat in a data directory and are named
//! `{service}-{version}.{category}.{ext}`, where the category token depends on
//! the [`DocumentType`] being requested.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Parsed descriptor contents. The library never interprets them.
pub type Descriptor = serde_json::Value;

/// The alias that asks a provider for the newest known version.
pub const LATEST: &str = "latest";

/// The kinds of descriptor document a service can ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentType {
    /// The service API model
    Api,
    /// Pagination configuration
    Paginator,
    /// Waiter definitions (version 2 format)
    Waiter,
}

impl DocumentType {
    /// All document types, in a stable order.
    pub const ALL: [DocumentType; 3] = [
        DocumentType::Api,
        DocumentType::Paginator,
        DocumentType::Waiter,
    ];

    /// The token callers use to request this type.
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentType::Api => "api",
            DocumentType::Paginator => "paginator",
            DocumentType::Waiter => "waiter",
        }
    }

    /// The category token embedded in file names.
    pub fn category(self) -> &'static str {
        match self {
            DocumentType::Api => "api",
            DocumentType::Paginator => "paginators",
            DocumentType::Waiter => "waiters2",
        }
    }

    /// Builds the file name for this type with the given extension.
    pub fn file_name(self, service: &str, version: &str, ext: &str) -> String {
        format!("{}-{}.{}.{}", service, version, self.category(), ext)
    }
}

impl FromStr for DocumentType {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "api" => Ok(DocumentType::Api),
            "paginator" => Ok(DocumentType::Paginator),
            "waiter" => Ok(DocumentType::Waiter),
            other => Err(Error::InvalidDocumentType {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
