//! # Error Suggestions
//!
//! This module provides helper functions for generating helpful error
//! messages with hints and suggestions. Errors shown to CLI users should say
//! what went wrong AND how to fix it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use descriptor_registry::suggestions;
//!
//! // Instead of:
//! anyhow::bail!("Data directory not found: {}", path.display());
//!
//! // Use:
//! return Err(suggestions::data_dir_not_found(path));
//! ```

use crate::error::Error;
use std::path::Path;

/// Generate an error for when the data directory does not exist.
///
/// Includes hints about:
/// - Using the --data-dir flag
/// - Using the DESCRIPTOR_DATA_DIR environment variable
pub fn data_dir_not_found(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Descriptor data directory not found: {path}\n\n\
         hint: Use --data-dir to point at a directory of descriptor files\n\
         hint: Set the DESCRIPTOR_DATA_DIR environment variable",
        path = path.display()
    )
}

/// Generate an error for when the sources file does not exist.
pub fn config_not_found(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Sources file not found: {path}\n\n\
         hint: Check the path passed to -c/--config",
        path = path.display()
    )
}

/// Attach a hint to a library error when one applies.
///
/// Errors without a known remedy are passed through unchanged.
pub fn with_hint(error: Error) -> anyhow::Error {
    let hint = match &error {
        Error::UnresolvedDescriptor { service, .. } => Some(format!(
            "Run 'descriptor-registry versions {service}' to see the available versions"
        )),
        Error::ManifestLoad { .. } => Some(
            "Run 'descriptor-registry manifest build <DIR>' to generate a manifest".to_string(),
        ),
        Error::Parse { .. } => {
            Some("The file exists but is corrupt; fix or remove it".to_string())
        }
        Error::InvalidDocumentType { .. } => {
            Some("Use --type api, --type paginator, or --type waiter".to_string())
        }
        _ => None,
    };

    match hint {
        Some(hint) => anyhow::anyhow!("{error}\n\nhint: {hint}"),
        None => anyhow::Error::new(error),
    }
}
