//! Service names

use std::borrow::{Borrow, Cow};
use std::fmt;

/// Symbolic identifier of a service.
///
/// Static names are stored without allocating; dynamic names are accepted
/// as owned strings. A `ServiceName` borrows as `&str`, so tables keyed by it
/// can be queried with plain string slices.
///
/// # Examples
///
/// ```
/// use dim_di::ServiceName;
///
/// let name = ServiceName::from("logger");
/// assert_eq!(name.as_str(), "logger");
/// assert_eq!(name.to_string(), "logger");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ServiceName(Cow<'static, str>);

impl ServiceName {
	/// Creates a name from a static string without allocating.
	pub const fn from_static(name: &'static str) -> Self {
		Self(Cow::Borrowed(name))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for ServiceName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl Borrow<str> for ServiceName {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl AsRef<str> for ServiceName {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl From<&'static str> for ServiceName {
	fn from(name: &'static str) -> Self {
		Self::from_static(name)
	}
}

impl From<String> for ServiceName {
	fn from(name: String) -> Self {
		Self(Cow::Owned(name))
	}
}

impl From<&String> for ServiceName {
	fn from(name: &String) -> Self {
		Self(Cow::Owned(name.clone()))
	}
}

impl From<&ServiceName> for ServiceName {
	fn from(name: &ServiceName) -> Self {
		name.clone()
	}
}

impl PartialEq<str> for ServiceName {
	fn eq(&self, other: &str) -> bool {
		self.as_str() == other
	}
}

impl PartialEq<&str> for ServiceName {
	fn eq(&self, other: &&str) -> bool {
		self.as_str() == *other
	}
}
