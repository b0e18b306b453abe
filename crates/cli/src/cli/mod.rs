//! CLI schema for the lineage binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "lineage")]
#[command(about = "Runs every plugin linked into this host")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Registry config (TOML with `[families.Plugin]` settings)
	#[arg(short, long, value_name = "PATH", global = true)]
	pub config: Option<PathBuf>,

	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// List registered plugins and rejected candidates
	List,
	/// Run plugins over files
	Run {
		/// Only run these plugin keys (repeatable)
		#[arg(short, long = "plugin", value_name = "KEY")]
		plugins: Vec<String>,

		/// Files to analyze
		#[arg(required = true)]
		files: Vec<PathBuf>,
	},
}

#[cfg(test)]
mod tests;
