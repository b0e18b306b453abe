//! Per-family settings, loadable from TOML.
//!
//! ```toml
//! [families.Plugin]
//! suffix = "Plugin"
//! strip-suffix = true
//! duplicates = "overwrite"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::policy::DuplicatePolicy;

/// Naming convention and duplicate handling for one family.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct FamilyConfig {
	/// Required name prefix.
	pub prefix: Option<String>,
	/// Required name suffix.
	pub suffix: Option<String>,
	/// Drop the suffix when deriving keys.
	pub strip_suffix: bool,
	pub duplicates: DuplicatePolicy,
	/// When false the family admits nothing.
	pub enabled: bool,
}

impl Default for FamilyConfig {
	fn default() -> Self {
		Self {
			prefix: None,
			suffix: None,
			strip_suffix: false,
			duplicates: DuplicatePolicy::default(),
			enabled: true,
		}
	}
}

impl FamilyConfig {
	pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
		self.suffix = Some(suffix.into());
		self
	}

	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = Some(prefix.into());
		self
	}

	pub fn strip_suffix(mut self, on: bool) -> Self {
		self.strip_suffix = on;
		self
	}

	pub fn duplicates(mut self, policy: DuplicatePolicy) -> Self {
		self.duplicates = policy;
		self
	}

	pub fn enabled(mut self, on: bool) -> Self {
		self.enabled = on;
		self
	}
}

/// Settings for every family a host builds, keyed by family root name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
	pub families: BTreeMap<String, FamilyConfig>,
}

impl RegistryConfig {
	/// Parses a TOML document.
	pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(text)?)
	}

	/// Reads and parses a TOML file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_toml_str(&text)
	}

	/// Returns the settings for `root`, or the defaults when it has none.
	pub fn family(&self, root: &str) -> FamilyConfig {
		self.families.get(root).cloned().unwrap_or_default()
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use super::*;

	#[test]
	fn parses_family_tables() {
		let config = RegistryConfig::from_toml_str(
			r#"
			[families.Plugin]
			suffix = "Plugin"
			strip-suffix = true
			duplicates = "overwrite"

			[families.Codec]
			enabled = false
			"#,
		)
		.unwrap();

		let plugin = config.family("Plugin");
		assert_eq!(plugin.suffix.as_deref(), Some("Plugin"));
		assert!(plugin.strip_suffix);
		assert_eq!(plugin.duplicates, DuplicatePolicy::Overwrite);
		assert!(plugin.enabled);

		assert!(!config.family("Codec").enabled);
	}

	#[test]
	fn missing_family_uses_defaults() {
		let config = RegistryConfig::default();
		let family = config.family("Plugin");
		assert_eq!(family, FamilyConfig::default());
		assert_eq!(family.duplicates, DuplicatePolicy::Error);
	}

	#[test]
	fn unknown_policy_is_a_parse_error() {
		let err = RegistryConfig::from_toml_str("[families.Plugin]\nduplicates = \"sometimes\"\n")
			.unwrap_err();
		assert!(matches!(err, ConfigError::Parse(_)));
	}

	#[test]
	fn loads_from_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "[families.Plugin]\nprefix = \"Lc\"").unwrap();
		let config = RegistryConfig::load(file.path()).unwrap();
		assert_eq!(config.family("Plugin").prefix.as_deref(), Some("Lc"));
	}

	#[test]
	fn missing_file_reports_path() {
		let err = RegistryConfig::load("/nonexistent/lineage.toml").unwrap_err();
		assert!(err.to_string().contains("/nonexistent/lineage.toml"));
	}
}
