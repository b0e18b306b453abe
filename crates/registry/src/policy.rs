//! Key derivation, admission filtering and duplicate handling.

use serde::Deserialize;

use crate::config::FamilyConfig;
use crate::contract::CandidateInfo;

/// What to do when an admitted candidate derives a key that is already taken.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
	/// Replace the stored entry; the key keeps its enumeration position.
	Overwrite,
	/// Keep the stored entry and ignore the newcomer.
	KeepFirst,
	/// Fail the newcomer with [`crate::RegistryError::DuplicateKey`].
	#[default]
	Error,
}

impl std::fmt::Display for DuplicatePolicy {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Overwrite => write!(f, "overwrite"),
			Self::KeepFirst => write!(f, "keep-first"),
			Self::Error => write!(f, "error"),
		}
	}
}

/// Output of a [`FilterPolicy`] for one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterDecision {
	pub accept: bool,
	pub key: String,
}

impl FilterDecision {
	pub fn accept(key: impl Into<String>) -> Self {
		Self {
			accept: true,
			key: key.into(),
		}
	}

	pub fn reject(key: impl Into<String>) -> Self {
		Self {
			accept: false,
			key: key.into(),
		}
	}
}

/// Per-family admission policy: derives the key and decides acceptance.
///
/// Closures of the right shape implement it, so a family can be given an
/// ad-hoc rule without a named type:
///
/// ```ignore
/// Family::<Plugins>::builder()
/// 	.filter(|c: &CandidateInfo<'_>| FilterDecision::accept(c.name.to_lowercase()))
/// 	.build();
/// ```
pub trait FilterPolicy: Send + Sync {
	fn decide(&self, candidate: &CandidateInfo<'_>) -> FilterDecision;
}

impl<F> FilterPolicy for F
where
	F: Fn(&CandidateInfo<'_>) -> FilterDecision + Send + Sync,
{
	fn decide(&self, candidate: &CandidateInfo<'_>) -> FilterDecision {
		self(candidate)
	}
}

/// Default filter built from a family's naming convention.
///
/// The key is the declared name, with the required suffix removed when
/// `strip_suffix` is set. A name equal to the root, or missing the configured
/// prefix or suffix, is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamingFilter {
	pub prefix: Option<String>,
	pub suffix: Option<String>,
	pub strip_suffix: bool,
}

impl NamingFilter {
	pub fn conforms(&self, candidate: &CandidateInfo<'_>) -> bool {
		let name = candidate.name;
		name != candidate.root
			&& self.prefix.as_deref().is_none_or(|p| name.starts_with(p))
			&& self.suffix.as_deref().is_none_or(|s| name.ends_with(s))
	}

	pub fn key_for<'a>(&self, name: &'a str) -> &'a str {
		if !self.strip_suffix {
			return name;
		}
		// A name that is nothing but the suffix keeps its full spelling.
		self.suffix
			.as_deref()
			.and_then(|s| name.strip_suffix(s))
			.filter(|stem| !stem.is_empty())
			.unwrap_or(name)
	}
}

impl From<&FamilyConfig> for NamingFilter {
	fn from(config: &FamilyConfig) -> Self {
		Self {
			prefix: config.prefix.clone(),
			suffix: config.suffix.clone(),
			strip_suffix: config.strip_suffix,
		}
	}
}

impl FilterPolicy for NamingFilter {
	fn decide(&self, candidate: &CandidateInfo<'_>) -> FilterDecision {
		let key = self.key_for(candidate.name);
		if self.conforms(candidate) {
			FilterDecision::accept(key)
		} else {
			FilterDecision::reject(key)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn info(name: &str) -> CandidateInfo<'_> {
		CandidateInfo {
			name,
			origin: "tests",
			root: "Plugin",
		}
	}

	#[test]
	fn default_filter_accepts_declared_name() {
		let decision = NamingFilter::default().decide(&info("LineCountPlugin"));
		assert_eq!(decision, FilterDecision::accept("LineCountPlugin"));
	}

	#[test]
	fn root_name_is_never_accepted() {
		assert!(!NamingFilter::default().decide(&info("Plugin")).accept);
	}

	#[test]
	fn suffix_rule_rejects_nonconforming_names() {
		let filter = NamingFilter {
			suffix: Some("Plugin".into()),
			..Default::default()
		};
		assert!(filter.decide(&info("LineCountPlugin")).accept);
		assert!(!filter.decide(&info("Helper")).accept);
	}

	#[test]
	fn prefix_rule_rejects_nonconforming_names() {
		let filter = NamingFilter {
			prefix: Some("Lc".into()),
			..Default::default()
		};
		assert!(filter.decide(&info("LcWords")).accept);
		assert!(!filter.decide(&info("Words")).accept);
	}

	#[test]
	fn strip_suffix_shortens_key() {
		let filter = NamingFilter {
			suffix: Some("Plugin".into()),
			strip_suffix: true,
			..Default::default()
		};
		assert_eq!(filter.decide(&info("LineCountPlugin")).key, "LineCount");
		assert_eq!(filter.key_for("Plugin"), "Plugin");
	}

	#[test]
	fn closures_are_filters() {
		let lower = |c: &CandidateInfo<'_>| FilterDecision::accept(c.name.to_lowercase());
		assert_eq!(lower.decide(&info("Words")).key, "words");
	}
}
