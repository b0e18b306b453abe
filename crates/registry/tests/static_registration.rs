//! Link-time registration through `register!` and family ingestion.

use std::sync::LazyLock;

use lineage_registry::{
	Context, Contract, DuplicatePolicy, Family, FamilyConfig, RegistryError, register,
};

pub trait Plugin: Send + Sync {
	fn run(&self, ctx: &mut Context);
}

pub struct Plugins;

impl Contract for Plugins {
	type Object = dyn Plugin;
	const ROOT: &'static str = "Plugin";
	const OPERATIONS: &'static [&'static str] = &["run"];
}

fn text(ctx: &Context) -> &str {
	ctx.get::<String>("text").map(String::as_str).unwrap_or_default()
}

#[derive(Default)]
struct LineCountPlugin;

impl Plugin for LineCountPlugin {
	fn run(&self, ctx: &mut Context) {
		let lines = text(ctx).lines().count();
		ctx.insert("lines", lines);
	}
}

#[derive(Default)]
struct WordCountPlugin;

impl Plugin for WordCountPlugin {
	fn run(&self, ctx: &mut Context) {
		let words = text(ctx).split_whitespace().count();
		ctx.insert("words", words);
	}
}

#[derive(Default)]
struct Helper;

impl Plugin for Helper {
	fn run(&self, _ctx: &mut Context) {}
}

#[derive(Default)]
struct BasePlugin;

impl Plugin for BasePlugin {
	fn run(&self, _ctx: &mut Context) {}
}

#[derive(Default)]
struct SilentPlugin;

impl Plugin for SilentPlugin {
	fn run(&self, _ctx: &mut Context) {}
}

register!(Plugins, LineCountPlugin, provides: ["run"]);
register!(Plugins, WordCountPlugin, provides: ["run"]);
register!(Plugins, Helper, provides: ["run"]);
register!(Plugins, BasePlugin, name: "Plugin", provides: ["run"]);
register!(Plugins, SilentPlugin);

mod shadow {
	use super::{Context, Plugin, Plugins};

	struct ShadowWords;

	impl Plugin for ShadowWords {
		fn run(&self, ctx: &mut Context) {
			ctx.insert("shadowed", true);
		}
	}

	fn boxed() -> Box<dyn Plugin> {
		Box::new(ShadowWords)
	}

	lineage_registry::register!(Plugins, ShadowWords, name: "WordCountPlugin", provides: ["run"], factory: boxed);
}

static PLUGINS: LazyLock<Family<Plugins>> = LazyLock::new(|| {
	Family::builder()
		.config(FamilyConfig::default().with_suffix("Plugin"))
		.build()
});

fn keys(family: &Family<Plugins>) -> Vec<String> {
	family.keys()
}

#[test]
fn suffix_family_collects_conforming_plugins() {
	assert_eq!(keys(&PLUGINS), ["LineCountPlugin", "WordCountPlugin"]);
	assert!(!PLUGINS.exists("Helper"));
	assert!(!PLUGINS.exists("Plugin"));
	assert_eq!(PLUGINS.resolve("LineCountPlugin").unwrap().origin(), "static_registration");
}

#[test]
fn ingest_records_rejections() {
	let rejections = PLUGINS.rejections();
	assert_eq!(rejections.len(), 2, "{rejections:?}");

	assert_eq!(rejections[0].name, "SilentPlugin");
	assert!(matches!(
		&rejections[0].error,
		RegistryError::ContractViolation { missing, .. } if missing == &["run"]
	));

	assert_eq!(rejections[1].origin, "static_registration::shadow");
	assert!(matches!(
		&rejections[1].error,
		RegistryError::DuplicateKey { key, .. } if key == "WordCountPlugin"
	));
}

#[test]
fn unconstrained_family_still_skips_root() {
	let family = Family::<Plugins>::new();
	assert_eq!(keys(&family), ["Helper", "LineCountPlugin", "WordCountPlugin"]);
	assert!(!family.exists("Plugin"));
}

#[test]
fn overwrite_lets_later_origin_win() {
	let family = Family::<Plugins>::builder()
		.config(
			FamilyConfig::default()
				.with_suffix("Plugin")
				.duplicates(DuplicatePolicy::Overwrite),
		)
		.build();

	assert_eq!(keys(&family), ["LineCountPlugin", "WordCountPlugin"]);
	let words = family.resolve("WordCountPlugin").unwrap();
	assert_eq!(words.origin(), "static_registration::shadow");

	let mut ctx = Context::new();
	words.instantiate().run(&mut ctx);
	assert_eq!(ctx.get::<bool>("shadowed"), Some(&true));
}

#[test]
fn strip_suffix_family_uses_short_keys() {
	let family = Family::<Plugins>::builder()
		.config(
			FamilyConfig::default()
				.with_suffix("Plugin")
				.strip_suffix(true)
				.duplicates(DuplicatePolicy::KeepFirst),
		)
		.build();
	assert_eq!(keys(&family), ["LineCount", "WordCount"]);
}

#[test]
fn families_of_one_contract_do_not_share_entries() {
	let empty = Family::<Plugins>::builder().build_empty();
	assert!(empty.is_empty());
	assert!(!PLUGINS.is_empty());
	assert_ne!(empty.id(), PLUGINS.id());
}

#[test]
fn host_runs_every_plugin() {
	let mut ctx = Context::new().with("text", String::from("one two\nthree\n"));
	for (_, plugin) in PLUGINS.instances() {
		plugin.run(&mut ctx);
	}
	assert_eq!(ctx.get::<usize>("lines"), Some(&2));
	assert_eq!(ctx.get::<usize>("words"), Some(&3));
}

#[test]
fn concurrent_readers_see_the_same_family() {
	let seen: Vec<usize> = std::thread::scope(|scope| {
		let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| PLUGINS.all().len())).collect();
		handles.into_iter().map(|h| h.join().unwrap()).collect()
	});
	assert!(seen.iter().all(|&n| n == 2));
}
