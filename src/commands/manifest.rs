//! # Manifest Command Implementation
//!
//! This module implements the `manifest` subcommand.
//!
//! ## Subcommands
//!
//! - **`build`**: Generate a manifest from the descriptor files in a directory
//! - **`show`**: Print the alias table for one service, or every service name

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use std::path::PathBuf;

use descriptor_registry::manifest::Manifest;
use descriptor_registry::suggestions;

/// Work with manifest files
#[derive(Args, Debug)]
pub struct ManifestArgs {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: ManifestSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ManifestSubcommand {
    /// Generate a manifest by scanning descriptor files
    Build(BuildArgs),
    /// Print manifest contents
    Show(ShowArgs),
}

/// Arguments for the manifest build command
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Directory holding `{service}-{version}.api.*` files
    pub dir: PathBuf,

    /// Write the manifest here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the manifest show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Manifest file to read
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    /// Only show this service's alias table
    #[arg(long)]
    pub service: Option<String>,
}

/// Execute the `manifest` command.
pub fn execute(args: ManifestArgs) -> Result<()> {
    match args.command {
        ManifestSubcommand::Build(build_args) => execute_build(build_args),
        ManifestSubcommand::Show(show_args) => execute_show(show_args),
    }
}

fn execute_build(args: BuildArgs) -> Result<()> {
    if !args.dir.is_dir() {
        return Err(suggestions::data_dir_not_found(&args.dir));
    }
    let manifest = Manifest::from_directory(&args.dir).map_err(suggestions::with_hint)?;

    match args.output {
        Some(output) => {
            manifest
                .save(&output)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!(
                "Wrote {} ({} services)",
                output.display(),
                manifest.len()
            );
        }
        None => println!("{}", serde_json::to_string_pretty(&manifest)?),
    }
    Ok(())
}

fn execute_show(args: ShowArgs) -> Result<()> {
    let manifest = Manifest::load(&args.path).map_err(suggestions::with_hint)?;

    match args.service {
        Some(service) => {
            let table = manifest.versions_table(&service).with_context(|| {
                format!(
                    "Service '{}' is not in {}",
                    service,
                    args.path.display()
                )
            })?;
            for (alias, version) in table {
                println!("{} -> {}", alias, version);
            }
        }
        None => {
            for service in manifest.services() {
                println!("{}", service);
            }
        }
    }
    Ok(())
}

