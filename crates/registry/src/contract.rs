//! Contracts, candidates and link-time submission.
//!
//! A [`Contract`] is a marker type naming what registered types are built as
//! (its trait object type), the family root and the operations every member
//! must declare. A [`Candidate`] is one type offered to a family. Candidates
//! declared with [`crate::register!`] are collected through `inventory` and
//! ingested when a family is built.

use std::any::{Any, TypeId};
use std::borrow::Cow;

/// Host-defined contract a family is rooted at.
///
/// ```ignore
/// pub trait Plugin: Send + Sync {
/// 	fn run(&self, ctx: &mut Context);
/// }
///
/// pub struct Plugins;
///
/// impl Contract for Plugins {
/// 	type Object = dyn Plugin;
/// 	const ROOT: &'static str = "Plugin";
/// 	const OPERATIONS: &'static [&'static str] = &["run"];
/// }
/// ```
pub trait Contract: Sized + 'static {
	/// What factories of this family produce, usually `dyn Trait`.
	type Object: ?Sized + 'static;

	/// Name of the family root. A candidate declared under this name is never
	/// registered.
	const ROOT: &'static str;

	/// Operations every member must declare.
	const OPERATIONS: &'static [&'static str] = &[];
}

/// Constructor stored for each admitted type.
pub type Factory<C> = fn() -> Box<<C as Contract>::Object>;

/// A type offered to a family for registration.
pub struct Candidate<C: Contract> {
	pub(crate) name: Cow<'static, str>,
	pub(crate) origin: &'static str,
	pub(crate) provides: &'static [&'static str],
	pub(crate) factory: Factory<C>,
}

impl<C: Contract> Candidate<C> {
	/// Creates a candidate that declares no operations.
	pub const fn new(name: &'static str, origin: &'static str, factory: Factory<C>) -> Self {
		Self::with_operations(name, origin, &[], factory)
	}

	/// Creates a candidate declaring the operations it provides.
	pub const fn with_operations(
		name: &'static str,
		origin: &'static str,
		provides: &'static [&'static str],
		factory: Factory<C>,
	) -> Self {
		Self {
			name: Cow::Borrowed(name),
			origin,
			provides,
			factory,
		}
	}

	/// Creates a candidate whose name is only known at runtime.
	pub fn named(
		name: impl Into<String>,
		origin: &'static str,
		provides: &'static [&'static str],
		factory: Factory<C>,
	) -> Self {
		Self {
			name: Cow::Owned(name.into()),
			origin,
			provides,
			factory,
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn origin(&self) -> &'static str {
		self.origin
	}

	pub fn provides(&self) -> &'static [&'static str] {
		self.provides
	}

	/// Returns the contract operations this candidate does not declare.
	pub fn missing_operations(&self) -> Vec<&'static str> {
		C::OPERATIONS
			.iter()
			.copied()
			.filter(|op| !self.provides.contains(op))
			.collect()
	}

	pub(crate) fn info(&self) -> CandidateInfo<'_> {
		CandidateInfo {
			name: &self.name,
			origin: self.origin,
			root: C::ROOT,
		}
	}
}

impl<C: Contract> Clone for Candidate<C> {
	fn clone(&self) -> Self {
		Self {
			name: self.name.clone(),
			origin: self.origin,
			provides: self.provides,
			factory: self.factory,
		}
	}
}

impl<C: Contract> std::fmt::Debug for Candidate<C> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Candidate")
			.field("name", &self.name)
			.field("origin", &self.origin)
			.field("provides", &self.provides)
			.finish()
	}
}

/// What a filter sees of a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateInfo<'a> {
	/// Declared type name.
	pub name: &'a str,
	/// Declaring module path.
	pub origin: &'a str,
	/// Root name of the family being joined.
	pub root: &'static str,
}

/// Type-erased link-time registration record.
///
/// Emitted by [`crate::register!`]; families pick out the records whose
/// contract matches their own.
pub struct Submission {
	family: fn() -> TypeId,
	candidate: &'static (dyn Any + Send + Sync),
}

impl Submission {
	pub const fn new<C: Contract>(candidate: &'static Candidate<C>) -> Self {
		Self {
			family: TypeId::of::<C>,
			candidate,
		}
	}
}

inventory::collect!(Submission);

/// Returns every statically submitted candidate of `C`, in link order.
pub(crate) fn submitted<C: Contract>() -> Vec<&'static Candidate<C>> {
	let family = TypeId::of::<C>();
	inventory::iter::<Submission>
		.into_iter()
		.filter(|s| (s.family)() == family)
		.filter_map(|s| s.candidate.downcast_ref::<Candidate<C>>())
		.collect()
}
