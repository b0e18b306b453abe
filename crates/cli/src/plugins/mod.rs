//! The `Plugin` family this host runs.
//!
//! Plugins read the file under analysis from the [`Context`] (`path`, `text`)
//! and append their findings to its [`Report`].

mod builtins;

use lineage_registry::{Context, Contract, Family, FamilyConfig, RegistryConfig};

/// Contract every plugin fulfils.
pub trait Plugin: Send + Sync {
	fn run(&self, ctx: &mut Context) -> Result<(), PluginError>;
}

/// Marker for the plugin family.
pub struct Plugins;

impl Contract for Plugins {
	type Object = dyn Plugin;
	const ROOT: &'static str = "Plugin";
	const OPERATIONS: &'static [&'static str] = &["run"];
}

#[derive(Debug, thiserror::Error)]
pub enum PluginError {
	#[error("context has no {0:?} entry")]
	MissingInput(&'static str),
}

/// Findings collected across one run, in plugin order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
	pub entries: Vec<(String, String)>,
}

impl Report {
	pub fn push(&mut self, label: impl Into<String>, value: impl ToString) {
		self.entries.push((label.into(), value.to_string()));
	}
}

pub const TEXT: &str = "text";
pub const PATH: &str = "path";
pub const REPORT: &str = "report";

/// Builds a context for one file.
pub fn context(path: impl Into<String>, text: impl Into<String>) -> Context {
	Context::new()
		.with(PATH, path.into())
		.with(TEXT, text.into())
		.with(REPORT, Report::default())
}

pub(crate) fn text(ctx: &Context) -> Result<&str, PluginError> {
	ctx.get::<String>(TEXT)
		.map(String::as_str)
		.ok_or(PluginError::MissingInput(TEXT))
}

pub(crate) fn report(ctx: &mut Context) -> Result<&mut Report, PluginError> {
	ctx.get_mut::<Report>(REPORT)
		.ok_or(PluginError::MissingInput(REPORT))
}

/// Settings used when the config has no `[families.Plugin]` table.
pub fn default_config() -> FamilyConfig {
	FamilyConfig::default()
		.with_suffix("Plugin")
		.strip_suffix(true)
}

/// Builds the plugin family from the host config.
pub fn family(config: &RegistryConfig) -> Family<Plugins> {
	let settings = config
		.families
		.get(Plugins::ROOT)
		.cloned()
		.unwrap_or_else(default_config);
	Family::builder().config(settings).build()
}
