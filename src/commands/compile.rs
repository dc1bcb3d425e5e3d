//! # Compile Command Implementation
//!
//! This module implements the `compile` subcommand, which writes a
//! precompiled MessagePack copy next to every JSON descriptor in a directory.
//! The loader prefers the precompiled copy, so later loads skip JSON parsing.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use descriptor_registry::compile::{compile_directory, CompileOptions};
use descriptor_registry::suggestions;

/// Precompile JSON descriptors for faster loading
#[derive(Args, Debug)]
pub struct CompileArgs {
    /// Directory holding JSON descriptors
    pub dir: PathBuf,

    /// Rebuild precompiled files even when they are newer than their source
    #[arg(long)]
    pub force: bool,
}

/// Execute the `compile` command.
pub fn execute(args: CompileArgs) -> Result<()> {
    if !args.dir.is_dir() {
        return Err(suggestions::data_dir_not_found(&args.dir));
    }

    let written = compile_directory(&args.dir, CompileOptions { force: args.force })
        .map_err(suggestions::with_hint)?;

    for path in &written {
        println!("{}", path.display());
    }
    println!("Compiled {} descriptor(s)", written.len());
    Ok(())
}
