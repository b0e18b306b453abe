//! Per-family backing store with atomic publication.
//!
//! # Mental model
//!
//! * Readers pin an `Arc<Snapshot>` and resolve lookups against that immutable view.
//! * Writers take the store's mutex, copy the current snapshot, apply one insert
//!   and publish the copy through `ArcSwap`.
//!
//! # Invariants
//!
//! * The duplicate check and the insert happen under one writer lock, so two
//!   racing registrations of the same key cannot both see it as vacant.
//! * A published snapshot is never mutated; readers observe the result of a
//!   prefix of completed writes.
//! * Enumeration follows first-insertion order. Overwriting a key keeps its slot.

use std::sync::Arc;

use arc_swap::ArcSwap;
use indexmap::IndexMap;
use parking_lot::Mutex;
use rustc_hash::FxBuildHasher;

use crate::contract::Contract;
use crate::descriptor::{FamilyId, TypeDescriptor};
use crate::error::RegistryError;
use crate::policy::DuplicatePolicy;

type Map<C> = IndexMap<String, Arc<TypeDescriptor<C>>, FxBuildHasher>;

/// Result of a successful [`RegistryStore::put`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InsertAction {
	/// Key was new; descriptor inserted.
	InsertedNew,
	/// Key existed; the stored descriptor was kept.
	KeptExisting,
	/// Key existed; replaced with the incoming descriptor.
	ReplacedExisting,
}

/// Immutable published state of a store.
pub struct Snapshot<C: Contract> {
	entries: Map<C>,
}

impl<C: Contract> Snapshot<C> {
	fn empty() -> Self {
		Self {
			entries: Map::default(),
		}
	}

	#[inline]
	pub fn get(&self, key: &str) -> Option<&Arc<TypeDescriptor<C>>> {
		self.entries.get(key)
	}

	#[inline]
	pub fn contains(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	/// Returns descriptors in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = &Arc<TypeDescriptor<C>>> + '_ {
		self.entries.values()
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
		self.entries.keys().map(String::as_str)
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// Key to descriptor mapping for one family.
pub struct RegistryStore<C: Contract> {
	family: FamilyId,
	snap: ArcSwap<Snapshot<C>>,
	writer: Mutex<()>,
}

impl<C: Contract> RegistryStore<C> {
	pub fn new(family: FamilyId) -> Self {
		Self {
			family,
			snap: ArcSwap::from_pointee(Snapshot::empty()),
			writer: Mutex::new(()),
		}
	}

	pub fn family(&self) -> FamilyId {
		self.family
	}

	/// Stores `descriptor` under its key, resolving an occupied key by `policy`.
	///
	/// On error the published snapshot is left untouched.
	pub fn put(
		&self,
		descriptor: TypeDescriptor<C>,
		policy: DuplicatePolicy,
	) -> Result<InsertAction, RegistryError> {
		let _writer = self.writer.lock();
		let old = self.snap.load_full();

		let action = match old.get(&descriptor.key) {
			None => InsertAction::InsertedNew,
			Some(existing) => match policy {
				DuplicatePolicy::Overwrite => InsertAction::ReplacedExisting,
				DuplicatePolicy::KeepFirst => return Ok(InsertAction::KeptExisting),
				DuplicatePolicy::Error => {
					return Err(RegistryError::DuplicateKey {
						family: self.family,
						key: descriptor.key,
						existing: existing.name().to_owned(),
						incoming: descriptor.name.into_owned(),
					});
				}
			},
		};

		let mut entries = old.entries.clone();
		entries.insert(descriptor.key.clone(), Arc::new(descriptor));
		self.snap.store(Arc::new(Snapshot { entries }));
		Ok(action)
	}

	/// Looks up a descriptor, failing with [`RegistryError::NotFound`].
	pub fn get(&self, key: &str) -> Result<Arc<TypeDescriptor<C>>, RegistryError> {
		self.snap
			.load()
			.get(key)
			.cloned()
			.ok_or_else(|| RegistryError::NotFound {
				family: self.family,
				key: key.to_owned(),
			})
	}

	/// Returns every descriptor in insertion order, as of this call.
	pub fn get_all(&self) -> Vec<Arc<TypeDescriptor<C>>> {
		self.snap.load().iter().cloned().collect()
	}

	pub fn contains(&self, key: &str) -> bool {
		self.snap.load().contains(key)
	}

	/// Pins the current snapshot for repeated reads.
	pub fn snapshot(&self) -> Arc<Snapshot<C>> {
		self.snap.load_full()
	}

	pub fn len(&self) -> usize {
		self.snap.load().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}
