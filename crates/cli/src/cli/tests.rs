use clap::{CommandFactory, Parser};

use super::*;

#[test]
fn schema_is_consistent() {
	Cli::command().debug_assert();
}

#[test]
fn parse_list() {
	let cli = Cli::parse_from(["lineage", "list"]);
	assert!(matches!(cli.command, Command::List));
	assert!(cli.config.is_none());
	assert!(!cli.verbose);
}

#[test]
fn parse_run_with_plugins() {
	let cli = Cli::parse_from([
		"lineage", "run", "-p", "LineCount", "--plugin", "WordCount", "a.txt", "b.txt",
	]);
	let Command::Run { plugins, files } = cli.command else {
		panic!("expected run");
	};
	assert_eq!(plugins, ["LineCount", "WordCount"]);
	assert_eq!(files, [PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
}

#[test]
fn global_flags_after_subcommand() {
	let cli = Cli::parse_from(["lineage", "list", "--config", "lineage.toml", "-v"]);
	assert_eq!(cli.config, Some(PathBuf::from("lineage.toml")));
	assert!(cli.verbose);
}

#[test]
fn run_requires_files() {
	assert!(Cli::try_parse_from(["lineage", "run"]).is_err());
}
