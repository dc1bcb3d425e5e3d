//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Descriptor Registry - Resolve versioned service descriptors
#[derive(Parser, Debug)]
#[command(name = "descriptor-registry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Set log level (error, warn, info, debug, trace). RUST_LOG takes precedence.
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a descriptor and print it as JSON
    Resolve(commands::resolve::ResolveArgs),

    /// List the concrete versions known for a service
    Versions(commands::versions::VersionsArgs),

    /// Work with manifest files
    Manifest(commands::manifest::ManifestArgs),

    /// Precompile JSON descriptors for faster loading
    Compile(commands::compile::CompileArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        match self.command {
            Commands::Resolve(args) => commands::resolve::execute(args),
            Commands::Versions(args) => commands::versions::execute(args),
            Commands::Manifest(args) => commands::manifest::execute(args),
            Commands::Compile(args) => commands::compile::execute(args),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    // A logger may already be installed when embedded in tests.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
