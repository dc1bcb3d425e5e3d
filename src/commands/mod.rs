//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `descriptor-registry` command-line tool. Each subcommand is defined in its
//! own file.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and performs the
//!   command's logic.
//!
//! The `execute` function is the main entry point for the command and calls
//! into the `descriptor_registry` library to do the actual work.

pub mod compile;
pub mod completions;
pub mod manifest;
pub mod resolve;
pub mod versions;
