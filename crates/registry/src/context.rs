use std::any::Any;

use rustc_hash::FxHashMap;

/// String-keyed bag of arbitrary values passed to contract entrypoints.
#[derive(Default)]
pub struct Context {
	values: FxHashMap<String, Box<dyn Any + Send + Sync>>,
}

impl Context {
	pub fn new() -> Self {
		Self::default()
	}

	/// Stores `value` under `key`, replacing whatever was there.
	pub fn insert<T: Any + Send + Sync>(&mut self, key: impl Into<String>, value: T) {
		self.values.insert(key.into(), Box::new(value));
	}

	/// Builder-style [`Context::insert`].
	pub fn with<T: Any + Send + Sync>(mut self, key: impl Into<String>, value: T) -> Self {
		self.insert(key, value);
		self
	}

	/// Returns the value under `key` if it exists and has type `T`.
	pub fn get<T: Any>(&self, key: &str) -> Option<&T> {
		self.values.get(key)?.downcast_ref()
	}

	pub fn get_mut<T: Any>(&mut self, key: &str) -> Option<&mut T> {
		self.values.get_mut(key)?.downcast_mut()
	}

	/// Removes and returns the value under `key` if it has type `T`.
	///
	/// A value of another type is left in place.
	pub fn take<T: Any>(&mut self, key: &str) -> Option<T> {
		if !self.values.get(key)?.is::<T>() {
			return None;
		}
		let value = self.values.remove(key)?;
		value.downcast().ok().map(|boxed: Box<T>| *boxed)
	}

	pub fn contains(&self, key: &str) -> bool {
		self.values.contains_key(key)
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
		self.values.keys().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}

impl std::fmt::Debug for Context {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let mut keys: Vec<_> = self.keys().collect();
		keys.sort_unstable();
		f.debug_struct("Context").field("keys", &keys).finish()
	}
}
