//! The registration hook.
//!
//! # Data flow
//!
//! 1. Gate: disabled families and the family root admit nothing.
//! 2. Shape check: the candidate must declare every contract operation.
//! 3. Filter: the family's [`crate::FilterPolicy`] derives the key and decides.
//! 4. Store: [`crate::RegistryStore::put`] applies the duplicate policy under
//!    the writer lock.
//!
//! Failures in steps 2 and 4 are returned and appended to the rejection log;
//! the store never sees a partial write.

use super::Family;
use crate::contract::{self, Candidate, Contract};
use crate::descriptor::TypeDescriptor;
use crate::error::RegistryError;
use crate::store::InsertAction;

/// Outcome of one hook invocation that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
	/// Stored under a fresh key.
	Inserted { key: String },
	/// Replaced the entry stored under `key`.
	Replaced { key: String },
	/// `key` was taken and the stored entry was kept.
	KeptExisting { key: String },
	/// The filter declined the candidate.
	Filtered { key: String },
	/// The candidate is the family root.
	SkippedRoot,
	/// The family is disabled.
	Disabled,
	/// This static candidate was already offered to the family.
	AlreadySeen,
}

impl Admission {
	/// Returns true if the candidate's descriptor is now in the store.
	pub fn is_stored(&self) -> bool {
		matches!(self, Self::Inserted { .. } | Self::Replaced { .. })
	}
}

/// A failed registration, kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
	pub name: String,
	pub origin: &'static str,
	pub error: RegistryError,
}

impl<C: Contract> Family<C> {
	/// Runs the registration hook for a candidate.
	pub fn register(&self, candidate: Candidate<C>) -> Result<Admission, RegistryError> {
		self.admit(candidate)
	}

	/// Runs the registration hook for a static candidate, at most once per family.
	pub fn register_static(
		&self,
		candidate: &'static Candidate<C>,
	) -> Result<Admission, RegistryError> {
		let addr = candidate as *const Candidate<C> as usize;
		if !self.seen.lock().insert(addr) {
			return Ok(Admission::AlreadySeen);
		}
		self.admit(candidate.clone())
	}

	/// Offers every statically submitted candidate, sorted by name then origin.
	pub(super) fn ingest(&self) {
		let mut candidates = contract::submitted::<C>();
		candidates.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.origin.cmp(b.origin)));

		let mut stored = 0usize;
		for candidate in candidates {
			match self.register_static(candidate) {
				Ok(admission) if admission.is_stored() => stored += 1,
				Ok(_) => {}
				Err(e) => {
					tracing::error!(family = %self.id, candidate = %candidate.name, origin = candidate.origin, "{e}");
				}
			}
		}

		tracing::info!(family = %self.id, stored, total = self.len(), "family built");
	}

	fn admit(&self, candidate: Candidate<C>) -> Result<Admission, RegistryError> {
		if !self.config.enabled {
			tracing::trace!(family = %self.id, candidate = %candidate.name, "family disabled");
			return Ok(Admission::Disabled);
		}
		if candidate.name == C::ROOT {
			return Ok(Admission::SkippedRoot);
		}

		let missing = candidate.missing_operations();
		if !missing.is_empty() {
			let error = RegistryError::ContractViolation {
				family: self.id,
				candidate: candidate.name.clone().into_owned(),
				missing,
			};
			return Err(self.reject(&candidate, error));
		}

		let decision = self.filter.decide(&candidate.info());
		if !decision.accept {
			tracing::debug!(family = %self.id, candidate = %candidate.name, key = %decision.key, "filtered");
			return Ok(Admission::Filtered { key: decision.key });
		}

		let key = decision.key;
		let descriptor = TypeDescriptor {
			key: key.clone(),
			name: candidate.name.clone(),
			origin: candidate.origin,
			family: self.id,
			factory: candidate.factory,
		};

		match self.store.put(descriptor, self.config.duplicates) {
			Ok(InsertAction::InsertedNew) => {
				tracing::debug!(family = %self.id, key = %key, origin = candidate.origin, "registered");
				Ok(Admission::Inserted { key })
			}
			Ok(InsertAction::ReplacedExisting) => {
				tracing::warn!(family = %self.id, key = %key, candidate = %candidate.name, "overwrote existing entry");
				Ok(Admission::Replaced { key })
			}
			Ok(InsertAction::KeptExisting) => {
				tracing::warn!(family = %self.id, key = %key, candidate = %candidate.name, "key taken, kept existing entry");
				Ok(Admission::KeptExisting { key })
			}
			Err(e) => Err(self.reject(&candidate, e)),
		}
	}

	fn reject(&self, candidate: &Candidate<C>, error: RegistryError) -> RegistryError {
		self.rejections.lock().push(Rejection {
			name: candidate.name.clone().into_owned(),
			origin: candidate.origin,
			error: error.clone(),
		});
		error
	}
}
