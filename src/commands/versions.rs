//! # Versions Command Implementation
//!
//! This module implements the `versions` subcommand, which lists the distinct
//! concrete versions the manifest knows for a service, newest first.
//!
//! When the data directory has no `manifest.json`, a manifest is built on the
//! fly from the descriptor file names.

use anyhow::Result;
use clap::Args;
use log::info;
use std::path::PathBuf;

use descriptor_registry::defaults::{self, DATA_DIR_ENV};
use descriptor_registry::manifest::Manifest;
use descriptor_registry::suggestions;

/// List the concrete versions known for a service
#[derive(Args, Debug)]
pub struct VersionsArgs {
    /// Service name (e.g. "dynamodb")
    pub service: String,

    /// Directory holding the bundled descriptors
    #[arg(long, value_name = "DIR", env = DATA_DIR_ENV)]
    pub data_dir: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Execute the `versions` command.
pub fn execute(args: VersionsArgs) -> Result<()> {
    let data_dir = args.data_dir.unwrap_or_else(defaults::default_data_dir);
    if !data_dir.is_dir() {
        return Err(suggestions::data_dir_not_found(&data_dir));
    }

    let manifest_path = defaults::default_manifest_path(&data_dir);
    let manifest = if manifest_path.is_file() {
        Manifest::load(&manifest_path).map_err(suggestions::with_hint)?
    } else {
        info!(
            "No manifest in {}; scanning descriptor files",
            data_dir.display()
        );
        Manifest::from_directory(&data_dir).map_err(suggestions::with_hint)?
    };

    let versions = manifest.list_versions(&args.service);

    if args.json {
        println!("{}", serde_json::to_string(&versions)?);
    } else if versions.is_empty() {
        eprintln!("No versions found for service '{}'", args.service);
    } else {
        for version in versions {
            println!("{}", version);
        }
    }
    Ok(())
}
