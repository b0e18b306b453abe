//! Families: one contract, one store, one admission policy.
//!
//! # Lifecycle
//!
//! 1. Setup: [`FamilyBuilder::build`] creates the store and runs the
//!    registration hook once for every candidate submitted with
//!    [`crate::register!`] for the family's contract.
//! 2. Extension: [`Family::register`] runs the same hook for candidates that
//!    appear later, from any thread.
//! 3. Consumption: the query methods read the current snapshot without
//!    blocking writers.
//!
//! A family is usually held in a `LazyLock` static:
//!
//! ```ignore
//! pub static PLUGINS: LazyLock<Family<Plugins>> = LazyLock::new(|| {
//! 	Family::builder()
//! 		.config(FamilyConfig::default().with_suffix("Plugin"))
//! 		.build()
//! });
//! ```

mod hook;

use std::marker::PhantomData;
use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashSet;

pub use hook::{Admission, Rejection};

use crate::config::FamilyConfig;
use crate::contract::Contract;
use crate::descriptor::{FamilyId, TypeDescriptor};
use crate::error::RegistryError;
use crate::policy::{FilterPolicy, NamingFilter};
use crate::store::{RegistryStore, Snapshot};

/// Isolated registration domain rooted at contract `C`.
pub struct Family<C: Contract> {
	id: FamilyId,
	config: FamilyConfig,
	filter: Box<dyn FilterPolicy>,
	store: RegistryStore<C>,
	/// Addresses of static candidates the hook already ran for.
	seen: Mutex<FxHashSet<usize>>,
	rejections: Mutex<Vec<Rejection>>,
}

/// Configures a [`Family`] before it ingests its submissions.
pub struct FamilyBuilder<C: Contract> {
	config: FamilyConfig,
	filter: Option<Box<dyn FilterPolicy>>,
	_contract: PhantomData<fn() -> C>,
}

impl<C: Contract> Default for FamilyBuilder<C> {
	fn default() -> Self {
		Self {
			config: FamilyConfig::default(),
			filter: None,
			_contract: PhantomData,
		}
	}
}

impl<C: Contract> FamilyBuilder<C> {
	pub fn config(mut self, config: FamilyConfig) -> Self {
		self.config = config;
		self
	}

	/// Replaces the naming-convention filter derived from the config.
	pub fn filter(mut self, filter: impl FilterPolicy + 'static) -> Self {
		self.filter = Some(Box::new(filter));
		self
	}

	/// Builds the family and ingests every statically submitted candidate.
	pub fn build(self) -> Family<C> {
		let family = self.build_empty();
		family.ingest();
		family
	}

	/// Builds the family without looking at static submissions.
	pub fn build_empty(self) -> Family<C> {
		let id = FamilyId::next(C::ROOT);
		let filter: Box<dyn FilterPolicy> = match self.filter {
			Some(filter) => filter,
			None => Box::new(NamingFilter::from(&self.config)),
		};
		Family {
			id,
			config: self.config,
			filter,
			store: RegistryStore::new(id),
			seen: Mutex::new(FxHashSet::default()),
			rejections: Mutex::new(Vec::new()),
		}
	}
}

impl<C: Contract> Family<C> {
	pub fn builder() -> FamilyBuilder<C> {
		FamilyBuilder::default()
	}

	/// Builds a family with default settings and ingests its submissions.
	pub fn new() -> Self {
		Self::builder().build()
	}

	pub fn id(&self) -> FamilyId {
		self.id
	}

	pub fn config(&self) -> &FamilyConfig {
		&self.config
	}

	pub fn store(&self) -> &RegistryStore<C> {
		&self.store
	}

	/// Returns every failed registration so far, oldest first.
	pub fn rejections(&self) -> Vec<Rejection> {
		self.rejections.lock().clone()
	}

	/// Looks up `key`, failing with [`RegistryError::NotFound`].
	pub fn resolve(&self, key: &str) -> Result<Arc<TypeDescriptor<C>>, RegistryError> {
		self.store.get(key)
	}

	/// Looks up `key`.
	pub fn get(&self, key: &str) -> Option<Arc<TypeDescriptor<C>>> {
		self.store.snapshot().get(key).cloned()
	}

	/// Returns every registered descriptor in registration order.
	pub fn all(&self) -> Vec<Arc<TypeDescriptor<C>>> {
		self.store.get_all()
	}

	pub fn exists(&self, key: &str) -> bool {
		self.store.contains(key)
	}

	pub fn keys(&self) -> Vec<String> {
		self.store.snapshot().keys().map(str::to_owned).collect()
	}

	pub fn snapshot(&self) -> Arc<Snapshot<C>> {
		self.store.snapshot()
	}

	pub fn len(&self) -> usize {
		self.store.len()
	}

	pub fn is_empty(&self) -> bool {
		self.store.is_empty()
	}

	/// Resolves `key` and builds an instance through its factory.
	pub fn instantiate(&self, key: &str) -> Result<Box<C::Object>, RegistryError> {
		Ok(self.resolve(key)?.instantiate())
	}

	/// Builds one instance of every registered type, in registration order.
	pub fn instances(&self) -> Vec<(Arc<TypeDescriptor<C>>, Box<C::Object>)> {
		self.all()
			.into_iter()
			.map(|descriptor| {
				let instance = descriptor.instantiate();
				(descriptor, instance)
			})
			.collect()
	}
}

impl<C: Contract> Default for Family<C> {
	fn default() -> Self {
		Self::new()
	}
}

impl<C: Contract> std::fmt::Debug for Family<C> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Family")
			.field("id", &self.id)
			.field("config", &self.config)
			.field("len", &self.len())
			.finish()
	}
}
