//! # Resolve Command Implementation
//!
//! This module implements the `resolve` subcommand, which loads a single
//! descriptor and prints it as JSON.
//!
//! ## Provider selection
//!
//! - With `--config`, the provider chain comes from the sources file.
//! - Otherwise each `--override` directory is consulted first, in the order
//!   given, followed by the data directory. The data directory resolves
//!   versions through its `manifest.json` when it has one, and by scanning
//!   file names when it doesn't.

use anyhow::Result;
use clap::Args;
use log::debug;
use std::path::{Path, PathBuf};

use descriptor_registry::config;
use descriptor_registry::defaults::{self, DATA_DIR_ENV};
use descriptor_registry::manifest::ManifestStore;
use descriptor_registry::provider::{ChainProvider, FilesystemProvider, ManifestProvider};
use descriptor_registry::resolver;
use descriptor_registry::suggestions;

/// Resolve a descriptor and print it as JSON
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Service name (e.g. "dynamodb")
    pub service: String,

    /// Concrete version or an alias such as "latest"
    #[arg(default_value = "latest")]
    pub version: String,

    /// Document type: api, paginator, or waiter
    #[arg(short = 't', long = "type", value_name = "TYPE", default_value = "api")]
    pub doc_type: String,

    /// Directory holding the bundled descriptors.
    ///
    /// Defaults to the platform data directory
    /// (`~/.local/share/descriptor-registry` on Linux).
    #[arg(long, value_name = "DIR", env = DATA_DIR_ENV)]
    pub data_dir: Option<PathBuf>,

    /// Directory consulted before the data directory. May be repeated.
    #[arg(long = "override", value_name = "DIR")]
    pub overrides: Vec<PathBuf>,

    /// Sources file describing the provider chain. Takes precedence over
    /// --data-dir and --override.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print compact JSON instead of pretty-printed output
    #[arg(long)]
    pub compact: bool,
}

/// Execute the `resolve` command.
pub fn execute(args: ResolveArgs) -> Result<()> {
    let provider = build_provider(&args)?;

    let descriptor = resolver::resolve(&provider, &args.doc_type, &args.service, &args.version)
        .map_err(suggestions::with_hint)?;

    let output = if args.compact {
        serde_json::to_string(&descriptor)?
    } else {
        serde_json::to_string_pretty(&descriptor)?
    };
    println!("{}", output);
    Ok(())
}

/// Build the provider chain for the given arguments.
fn build_provider(args: &ResolveArgs) -> Result<ChainProvider> {
    if let Some(config_path) = &args.config {
        if !config_path.exists() {
            return Err(suggestions::config_not_found(config_path));
        }
        let sources = config::from_file(config_path).map_err(suggestions::with_hint)?;
        return sources.build_provider().map_err(suggestions::with_hint);
    }

    let mut chain = ChainProvider::new();
    for dir in &args.overrides {
        chain.push(FilesystemProvider::new(dir).map_err(suggestions::with_hint)?);
    }

    let data_dir = args
        .data_dir
        .clone()
        .unwrap_or_else(defaults::default_data_dir);
    if !data_dir.is_dir() {
        return Err(suggestions::data_dir_not_found(&data_dir));
    }
    push_data_dir(&mut chain, &data_dir)?;

    Ok(chain)
}

fn push_data_dir(chain: &mut ChainProvider, data_dir: &Path) -> Result<()> {
    let manifest_path = defaults::default_manifest_path(data_dir);
    if manifest_path.is_file() {
        debug!("Using manifest {}", manifest_path.display());
        let store = ManifestStore::new(manifest_path);
        chain.push(ManifestProvider::from_store(data_dir, &store).map_err(suggestions::with_hint)?);
    } else {
        debug!(
            "No manifest in {}; resolving versions by directory scan",
            data_dir.display()
        );
        chain.push(FilesystemProvider::new(data_dir).map_err(suggestions::with_hint)?);
    }
    Ok(())
}
