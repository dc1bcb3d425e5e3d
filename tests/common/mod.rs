//! Shared test utilities for integration and E2E tests.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = DataDir::new().with_descriptor("s3-2006-03-01.api.json", "{}");
//!     // ... test code
//! }
//! ```

use assert_fs::prelude::*;
use assert_fs::TempDir;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::manifests;
    #[allow(unused_imports)]
    pub use super::registry_cmd;
    pub use super::DataDir;
}

/// Manifest snippets for testing.
#[allow(dead_code)]
pub mod manifests {
    /// DynamoDB with two concrete versions.
    pub const DYNAMODB: &str = r#"{
  "dynamodb": {
    "latest": "2012-08-10",
    "2012-08-10": "2012-08-10",
    "2010-02-04": "2010-02-04"
  }
}"#;

    /// Malformed manifest for error testing.
    pub const INVALID: &str = r#"{"dynamodb": "#;
}

/// Get a Command for the descriptor-registry binary
#[allow(dead_code)]
pub fn registry_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("descriptor-registry").unwrap();
    cmd.env_remove("DESCRIPTOR_DATA_DIR").env_remove("RUST_LOG");
    cmd
}

/// A temporary descriptor data directory.
pub struct DataDir {
    pub temp: TempDir,
}

#[allow(dead_code)]
impl DataDir {
    /// Create an empty data directory.
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().unwrap(),
        }
    }

    /// The directory's path
    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Add a descriptor file with raw contents.
    pub fn with_descriptor(self, name: &str, content: &str) -> Self {
        self.temp.child(name).write_str(content).unwrap();
        self
    }

    /// Add a precompiled descriptor encoding `value`.
    pub fn with_precompiled(self, name: &str, value: &serde_json::Value) -> Self {
        let bytes = rmp_serde::to_vec(value).unwrap();
        self.temp.child(name).write_binary(&bytes).unwrap();
        self
    }

    /// Add a `manifest.json`.
    pub fn with_manifest(self, content: &str) -> Self {
        self.temp.child("manifest.json").write_str(content).unwrap();
        self
    }

    /// The DynamoDB layout: an old precompiled model holding `[]` and a new
    /// JSON model holding `{"foo":"bar"}`.
    pub fn dynamodb() -> Self {
        Self::new()
            .with_precompiled("dynamodb-2010-02-04.api.msgpack", &serde_json::json!([]))
            .with_descriptor("dynamodb-2012-08-10.api.json", r#"{"foo":"bar"}"#)
    }
}
