//! Environment variable stores

use indexmap::IndexMap;
use std::env;

/// A read-only store of environment variables.
pub trait EnvSource {
	/// Returns the value of `key`, or `None` if it is unset.
	fn var(&self, key: &str) -> Option<String>;

	/// Human-readable description for diagnostics.
	fn description(&self) -> String;
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
	fn var(&self, key: &str) -> Option<String> {
		(**self).var(key)
	}

	fn description(&self) -> String {
		(**self).description()
	}
}

/// The process environment.
///
/// Variables that are unset or not valid Unicode read as `None`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
	fn var(&self, key: &str) -> Option<String> {
		env::var(key).ok()
	}

	fn description(&self) -> String {
		"process environment".to_string()
	}
}

/// An in-memory environment, useful for tests and embedding.
///
/// # Examples
///
/// ```
/// use dim_env::{EnvSource, MapEnv};
///
/// let env = MapEnv::new().with_var("DATABASE_URL", "sqlite::memory:");
/// assert_eq!(env.var("DATABASE_URL").as_deref(), Some("sqlite::memory:"));
/// assert_eq!(env.var("MISSING"), None);
/// ```
#[derive(Debug, Default, Clone)]
pub struct MapEnv {
	vars: IndexMap<String, String>,
}

impl MapEnv {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a variable, builder style.
	pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.set(key, value);
		self
	}

	pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.vars.insert(key.into(), value.into());
	}

	pub fn remove(&mut self, key: &str) -> Option<String> {
		self.vars.shift_remove(key)
	}

	pub fn len(&self) -> usize {
		self.vars.len()
	}

	pub fn is_empty(&self) -> bool {
		self.vars.is_empty()
	}
}

impl EnvSource for MapEnv {
	fn var(&self, key: &str) -> Option<String> {
		self.vars.get(key).cloned()
	}

	fn description(&self) -> String {
		format!("in-memory environment ({} variables)", self.vars.len())
	}
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			vars: iter
				.into_iter()
				.map(|(key, value)| (key.into(), value.into()))
				.collect(),
		}
	}
}
