//! Lineage demo host.
//!
//! Builds the `Plugin` family from whatever plugins are linked in, then lists
//! them or runs them over files.

mod cli;
mod plugins;

use std::path::Path;

use anyhow::Context as _;
use clap::Parser;
use cli::{Cli, Command};
use lineage_registry::{Family, RegistryConfig};
use plugins::{Plugins, REPORT, Report};
use tracing::info;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	setup_tracing(cli.verbose);

	let config = match &cli.config {
		Some(path) => RegistryConfig::load(path)?,
		None => RegistryConfig::default(),
	};
	let family = plugins::family(&config);
	info!(plugins = family.len(), "plugin family ready");

	match cli.command {
		Command::List => list(&family),
		Command::Run { plugins, files } => {
			for file in &files {
				run(&family, &plugins, file)?;
			}
			Ok(())
		}
	}
}

fn list(family: &Family<Plugins>) -> anyhow::Result<()> {
	for descriptor in family.all() {
		println!("{}\t{}\t{}", descriptor.key(), descriptor.name(), descriptor.origin());
	}
	for rejection in family.rejections() {
		eprintln!("rejected {} ({}): {}", rejection.name, rejection.origin, rejection.error);
	}
	Ok(())
}

fn run(family: &Family<Plugins>, only: &[String], path: &Path) -> anyhow::Result<()> {
	let text =
		std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
	let mut ctx = plugins::context(path.display().to_string(), text);

	let selected = if only.is_empty() {
		family.instances()
	} else {
		only.iter()
			.map(|key| {
				let descriptor = family.resolve(key)?;
				let plugin = descriptor.instantiate();
				Ok((descriptor, plugin))
			})
			.collect::<anyhow::Result<Vec<_>>>()?
	};

	for (descriptor, plugin) in selected {
		tracing::debug!(plugin = descriptor.key(), path = %path.display(), "running");
		plugin
			.run(&mut ctx)
			.with_context(|| format!("plugin {} failed on {}", descriptor.key(), path.display()))?;
	}

	if let Some(report) = ctx.get::<Report>(REPORT) {
		for (label, value) in &report.entries {
			println!("{}\t{label}\t{value}", path.display());
		}
	}
	Ok(())
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("lineage_registry=debug,lineage_cli=debug,info")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}
