//! Init-time type registries for plugin hosts.
//!
//! A host declares a [`Contract`] (what members are built as, the family
//! root, the operations members must declare) and builds a [`Family`] for it.
//! Implementations anywhere in the link graph join with [`register!`]; the
//! family collects them when it is built, without any central list of
//! implementations.
//!
//! # Key Types
//!
//! | Type | Role |
//! |------|------|
//! | [`Family`] | Registration domain: config, filter, store, rejection log. |
//! | [`Candidate`] | A type offered to a family. |
//! | [`FilterPolicy`] | Derives the key and accepts or rejects a candidate. |
//! | [`RegistryStore`] | Insertion-ordered key to [`TypeDescriptor`] map. |
//! | [`TypeDescriptor`] | Stored record: key, name, origin, factory, family. |
//!
//! # Concurrency
//!
//! - **Reads:** Lock-free (atomic load of the current snapshot).
//! - **Writes:** Serialized per family; each write publishes a new snapshot.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::LazyLock;
//!
//! use lineage_registry::{Contract, Family, FamilyConfig, register};
//!
//! pub trait Plugin: Send + Sync {
//! 	fn run(&self);
//! }
//!
//! pub struct Plugins;
//!
//! impl Contract for Plugins {
//! 	type Object = dyn Plugin;
//! 	const ROOT: &'static str = "Plugin";
//! 	const OPERATIONS: &'static [&'static str] = &["run"];
//! }
//!
//! #[derive(Default)]
//! struct LineCountPlugin;
//!
//! impl Plugin for LineCountPlugin {
//! 	fn run(&self) {}
//! }
//!
//! register!(Plugins, LineCountPlugin, provides: ["run"]);
//!
//! static PLUGINS: LazyLock<Family<Plugins>> = LazyLock::new(|| {
//! 	Family::builder()
//! 		.config(FamilyConfig::default().with_suffix("Plugin"))
//! 		.build()
//! });
//!
//! for (_, plugin) in PLUGINS.instances() {
//! 	plugin.run();
//! }
//! ```

pub mod config;
pub mod context;
pub mod contract;
pub mod descriptor;
pub mod error;
pub mod family;
mod macros;
pub mod policy;
pub mod store;

pub use config::{FamilyConfig, RegistryConfig};
pub use context::Context;
pub use contract::{Candidate, CandidateInfo, Contract, Factory, Submission};
pub use descriptor::{FamilyId, TypeDescriptor};
pub use error::{ConfigError, RegistryError};
pub use family::{Admission, Family, FamilyBuilder, Rejection};
pub use policy::{DuplicatePolicy, FilterDecision, FilterPolicy, NamingFilter};
pub use store::{InsertAction, RegistryStore, Snapshot};

#[doc(hidden)]
pub mod __private {
	pub use inventory;
}

#[cfg(test)]
pub(crate) mod test_fixtures;
