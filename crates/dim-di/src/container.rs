//! The service container
//!
//! A [`Container`] maps service names to factories, memoizes the instances
//! they build, and falls back to a parent [`Resolver`] for names it does not
//! register itself.
//!
//! ## Resolution
//!
//! `lookup(name)` proceeds in order:
//!
//! 1. Return the instance cached in *this* container, if any.
//! 2. Find the factory: the local registry first, then the parent chain.
//! 3. Invoke the factory with *this* container, so lookups made inside the
//!    factory search this container before its ancestors.
//! 4. Cache the instance here (never in the ancestor that owns the factory).
//!
//! ## Overrides and the cache
//!
//! [`Container::override_service`] replaces a local factory but leaves any
//! instance already cached under that name in place. Call
//! [`Container::clear_cache`] to observe the new factory.
//!
//! ## Threading
//!
//! Containers use `RefCell` tables and `Rc` handles, so they are confined to
//! one thread. Sharing one across threads requires external synchronization,
//! and even then two threads racing on the same uncached name could each
//! construct an instance.

use crate::resolver::downcast;
use crate::{DiError, DiResult, Factory, Resolver, RootContainer, Service, ServiceName};
use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::rc::Rc;

/// Registry, cache and parent-delegating resolver for named services.
///
/// # Examples
///
/// ```
/// use dim_di::Container;
/// use std::rc::Rc;
///
/// struct Logger {
///     file: Rc<String>,
/// }
///
/// let container = Container::new();
/// container.register("log_file", |_| Ok(String::from("logfile.log"))).unwrap();
/// container
///     .register("logger", |c| Ok(Logger { file: c.lookup("log_file")? }))
///     .unwrap();
///
/// let logger = container.lookup::<Logger>("logger").unwrap();
/// assert_eq!(*logger.file, "logfile.log");
///
/// // The same instance is handed out on every lookup.
/// assert!(Rc::ptr_eq(&logger, &container.lookup("logger").unwrap()));
/// ```
pub struct Container {
	services: RefCell<HashMap<ServiceName, Factory>>,
	cache: RefCell<HashMap<ServiceName, Service>>,
	parent: Rc<dyn Resolver>,
}

impl Container {
	/// Creates a top-level container whose parent is a [`RootContainer`].
	pub fn new() -> Self {
		Self::with_resolver(Rc::new(RootContainer::new()))
	}

	/// Creates a container that falls back to `parent` for unknown names.
	///
	/// # Examples
	///
	/// ```
	/// use dim_di::Container;
	/// use std::rc::Rc;
	///
	/// let parent = Rc::new(Container::new());
	/// parent.register("gene", |_| Ok("x")).unwrap();
	///
	/// let child = Container::with_parent(Rc::clone(&parent));
	/// assert_eq!(*child.lookup::<&str>("gene").unwrap(), "x");
	/// ```
	pub fn with_parent(parent: Rc<Container>) -> Self {
		Self::with_resolver(parent)
	}

	/// Creates a container on top of an arbitrary resolver.
	pub fn with_resolver(parent: Rc<dyn Resolver>) -> Self {
		Self {
			services: RefCell::new(HashMap::new()),
			cache: RefCell::new(HashMap::new()),
			parent,
		}
	}

	/// Creates a child container of `self`.
	pub fn child(self: &Rc<Self>) -> Container {
		Self::with_parent(Rc::clone(self))
	}

	/// The immediate parent of this container.
	pub fn parent(&self) -> &Rc<dyn Resolver> {
		&self.parent
	}

	/// Registers a factory for `name`.
	///
	/// The factory receives the container the lookup started from. Fails with
	/// [`DiError::DuplicateService`] if `name` is already registered in this
	/// container; names registered only in ancestors may be registered again.
	///
	/// # Examples
	///
	/// ```
	/// use dim_di::{Container, DiError};
	///
	/// let container = Container::new();
	/// container.register("app", |_| Ok(0u8)).unwrap();
	///
	/// let err = container.register("app", |_| Ok(1u8)).unwrap_err();
	/// assert_eq!(err, DiError::DuplicateService("app".into()));
	/// ```
	pub fn register<T, F>(&self, name: impl Into<ServiceName>, factory: F) -> DiResult<()>
	where
		T: Any,
		F: Fn(&Container) -> DiResult<T> + 'static,
	{
		self.register_factory(name, Factory::new(factory))
	}

	/// Registers a literal value, handed out as the same instance every time.
	pub fn register_instance<T: Any>(&self, name: impl Into<ServiceName>, value: T) -> DiResult<()> {
		self.register_factory(name, Factory::instance(value))
	}

	/// Registers a prebuilt [`Factory`] for `name`.
	pub fn register_factory(&self, name: impl Into<ServiceName>, factory: Factory) -> DiResult<()> {
		match self.services.borrow_mut().entry(name.into()) {
			Entry::Occupied(entry) => Err(DiError::DuplicateService(entry.key().clone())),
			Entry::Vacant(entry) => {
				tracing::debug!(service = %entry.key(), "registered service");
				entry.insert(factory);
				Ok(())
			}
		}
	}

	/// Replaces the local factory for `name`, registering it if absent.
	///
	/// Never fails and never touches a parent's registrations. An instance
	/// already cached under `name` is **kept**: lookups keep returning it
	/// until [`Container::clear_cache`] is called.
	///
	/// # Examples
	///
	/// ```
	/// use dim_di::Container;
	///
	/// let container = Container::new();
	/// container.register("mode", |_| Ok("production")).unwrap();
	/// assert_eq!(*container.lookup::<&str>("mode").unwrap(), "production");
	///
	/// container.override_service("mode", |_| Ok("test"));
	/// assert_eq!(*container.lookup::<&str>("mode").unwrap(), "production");
	///
	/// container.clear_cache();
	/// assert_eq!(*container.lookup::<&str>("mode").unwrap(), "test");
	/// ```
	pub fn override_service<T, F>(&self, name: impl Into<ServiceName>, factory: F)
	where
		T: Any,
		F: Fn(&Container) -> DiResult<T> + 'static,
	{
		self.override_factory(name, Factory::new(factory));
	}

	/// Replaces the local factory for `name` with a prebuilt [`Factory`].
	pub fn override_factory(&self, name: impl Into<ServiceName>, factory: Factory) {
		let name = name.into();
		tracing::debug!(service = %name, "overrode service");
		let replaced = self.services.borrow_mut().insert(name, factory);
		// Dropped outside the borrow: captured values may re-enter the container.
		drop(replaced);
	}

	/// Looks up a service and downcasts it to `T`.
	///
	/// Fails with [`DiError::MissingService`] if no container in the chain
	/// registers `name`, and with [`DiError::TypeMismatch`] if the instance
	/// is not a `T`. Errors returned by the factory are passed through and
	/// leave the cache untouched.
	pub fn lookup<T: Any>(&self, name: &str) -> DiResult<Rc<T>> {
		downcast(name, self.lookup_any(name)?)
	}

	/// Looks up a service without downcasting it.
	pub fn lookup_any(&self, name: &str) -> DiResult<Service> {
		if let Some(service) = self.cached(name) {
			tracing::trace!(service = name, "cache hit");
			return Ok(service);
		}

		let factory = self.find_factory(name)?;
		tracing::trace!(service = name, "invoking factory");
		let service = factory.call(self)?;

		// A nested lookup may already have cached this name; keep the first.
		let (cached, unused) = {
			let mut cache = self.cache.borrow_mut();
			match cache.entry(ServiceName::from(name.to_owned())) {
				Entry::Occupied(entry) => (Rc::clone(entry.get()), Some(service)),
				Entry::Vacant(entry) => (Rc::clone(entry.insert(service)), None),
			}
		};
		drop(unused);
		Ok(cached)
	}

	/// Drops every instance cached in this container.
	///
	/// Ancestors keep their caches. The next lookup of a dropped name invokes
	/// its factory again and may return a different instance.
	pub fn clear_cache(&self) {
		let drained = std::mem::take(&mut *self.cache.borrow_mut());
		tracing::debug!(entries = drained.len(), "cleared service cache");
		drop(drained);
	}

	/// Whether every name in `names` resolves somewhere in the chain.
	///
	/// Only checks that a factory exists; no factory is invoked and nothing
	/// is cached.
	///
	/// # Examples
	///
	/// ```
	/// use dim_di::Container;
	///
	/// let container = Container::new();
	/// container.register("db", |_| Ok(())).unwrap();
	///
	/// assert!(container.verify_dependencies(["db"]));
	/// assert!(!container.verify_dependencies(["db", "cache"]));
	/// ```
	pub fn verify_dependencies<I>(&self, names: I) -> bool
	where
		I: IntoIterator,
		I::Item: AsRef<str>,
	{
		names.into_iter().all(|name| self.contains(name.as_ref()))
	}

	/// The names in `names` that do not resolve anywhere in the chain, in
	/// input order.
	pub fn missing_dependencies<I>(&self, names: I) -> Vec<ServiceName>
	where
		I: IntoIterator,
		I::Item: AsRef<str>,
	{
		names
			.into_iter()
			.filter(|name| !self.contains(name.as_ref()))
			.map(|name| ServiceName::from(name.as_ref().to_owned()))
			.collect()
	}

	/// Whether `name` resolves here or in an ancestor.
	pub fn contains(&self, name: &str) -> bool {
		self.find_factory(name).is_ok()
	}

	/// Whether `name` is registered in this container itself.
	pub fn is_registered(&self, name: &str) -> bool {
		self.services.borrow().contains_key(name)
	}

	/// Whether an instance of `name` is cached in this container.
	pub fn is_cached(&self, name: &str) -> bool {
		self.cache.borrow().contains_key(name)
	}

	/// Names registered in this container, sorted.
	pub fn service_names(&self) -> Vec<ServiceName> {
		let mut names: Vec<_> = self.services.borrow().keys().cloned().collect();
		names.sort();
		names
	}

	fn cached(&self, name: &str) -> Option<Service> {
		self.cache.borrow().get(name).cloned()
	}
}

impl Resolver for Container {
	fn find_factory(&self, name: &str) -> DiResult<Factory> {
		let local = self.services.borrow().get(name).cloned();
		match local {
			Some(factory) => Ok(factory),
			None => self.parent.find_factory(name),
		}
	}

	fn resolve(&self, name: &str) -> DiResult<Service> {
		self.lookup_any(name)
	}
}

impl Default for Container {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for Container {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut cached: Vec<_> = self.cache.borrow().keys().cloned().collect();
		cached.sort();
		f.debug_struct("Container")
			.field("services", &self.service_names())
			.field("cached", &cached)
			.finish_non_exhaustive()
	}
}
