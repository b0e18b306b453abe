use std::borrow::Cow;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::contract::{Contract, Factory};

static NEXT_SERIAL: AtomicU64 = AtomicU64::new(1);

/// Identity of one family instance.
///
/// Two families built from the same contract get distinct ids, so descriptors
/// always point back at the store that admitted them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FamilyId {
	root: &'static str,
	serial: u64,
}

impl FamilyId {
	pub(crate) fn next(root: &'static str) -> Self {
		Self {
			root,
			serial: NEXT_SERIAL.fetch_add(1, Ordering::Relaxed),
		}
	}

	/// Returns the root name of the family.
	pub fn root(self) -> &'static str {
		self.root
	}

	/// Returns the per-process instance number.
	pub fn serial(self) -> u64 {
		self.serial
	}
}

impl std::fmt::Display for FamilyId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.root)
	}
}

/// Immutable record of an admitted type.
pub struct TypeDescriptor<C: Contract> {
	pub(crate) key: String,
	pub(crate) name: Cow<'static, str>,
	pub(crate) origin: &'static str,
	pub(crate) family: FamilyId,
	pub(crate) factory: Factory<C>,
}

impl<C: Contract> TypeDescriptor<C> {
	/// Returns the key this entry is stored under.
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Returns the name the type was declared with.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the module path that declared the type.
	pub fn origin(&self) -> &'static str {
		self.origin
	}

	/// Returns the family that admitted this entry.
	pub fn family(&self) -> FamilyId {
		self.family
	}

	pub fn factory(&self) -> Factory<C> {
		self.factory
	}

	/// Builds a fresh instance through the stored factory.
	pub fn instantiate(&self) -> Box<C::Object> {
		(self.factory)()
	}
}

impl<C: Contract> std::fmt::Debug for TypeDescriptor<C> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TypeDescriptor")
			.field("key", &self.key)
			.field("name", &self.name)
			.field("origin", &self.origin)
			.field("family", &self.family)
			.finish()
	}
}
