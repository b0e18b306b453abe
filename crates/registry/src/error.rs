use std::path::PathBuf;

use crate::descriptor::FamilyId;

/// Failures surfaced by registration and lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// The candidate does not declare every operation its family requires.
	#[error("{candidate} does not satisfy the {family} contract: missing {missing:?}")]
	ContractViolation {
		family: FamilyId,
		candidate: String,
		missing: Vec<&'static str>,
	},
	/// A second candidate derived an existing key under [`crate::DuplicatePolicy::Error`].
	#[error("duplicate key in {family}: key={key:?} existing={existing} incoming={incoming}")]
	DuplicateKey {
		family: FamilyId,
		key: String,
		existing: String,
		incoming: String,
	},
	/// No entry is registered under the key.
	#[error("no {family} registered under {key:?}")]
	NotFound { family: FamilyId, key: String },
}

/// Failures while loading registry configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("failed to read {}: {source}", path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("invalid registry config: {0}")]
	Parse(#[from] toml::de::Error),
}
