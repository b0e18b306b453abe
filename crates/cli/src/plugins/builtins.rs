use lineage_registry::{Context, register};

use super::{Plugin, PluginError, Plugins, report, text};

#[derive(Default)]
pub struct LineCountPlugin;

impl Plugin for LineCountPlugin {
	fn run(&self, ctx: &mut Context) -> Result<(), PluginError> {
		let lines = text(ctx)?.lines().count();
		report(ctx)?.push("lines", lines);
		Ok(())
	}
}

#[derive(Default)]
pub struct WordCountPlugin;

impl Plugin for WordCountPlugin {
	fn run(&self, ctx: &mut Context) -> Result<(), PluginError> {
		let words = text(ctx)?.split_whitespace().count();
		report(ctx)?.push("words", words);
		Ok(())
	}
}

/// Shared utility that does not follow the plugin naming convention.
#[derive(Default)]
pub struct Helper;

impl Plugin for Helper {
	fn run(&self, ctx: &mut Context) -> Result<(), PluginError> {
		report(ctx)?.push("helper", "ran");
		Ok(())
	}
}

register!(Plugins, LineCountPlugin, provides: ["run"]);
register!(Plugins, WordCountPlugin, provides: ["run"]);
register!(Plugins, Helper, provides: ["run"]);
