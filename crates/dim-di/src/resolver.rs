//! Factory resolution along the parent chain
//!
//! Every [`Container`](crate::Container) delegates unknown names to a parent
//! [`Resolver`]. The chain always ends in a [`RootContainer`], whose lookups
//! fail, so no container needs a null check for "no parent".

use crate::{DiError, DiResult, Factory, Service, ServiceName};
use std::any::{Any, type_name};
use std::rc::Rc;

/// Something that can locate factories and resolve services by name.
///
/// Implemented by [`Container`](crate::Container) and by the terminal
/// [`RootContainer`]. Custom resolvers can be installed at the top of a chain
/// with [`Container::with_resolver`](crate::Container::with_resolver).
pub trait Resolver {
	/// Returns the factory registered for `name` here or in an ancestor.
	fn find_factory(&self, name: &str) -> DiResult<Factory>;

	/// Looks `name` up on this resolver, constructing and caching as needed.
	fn resolve(&self, name: &str) -> DiResult<Service>;

	/// Whether `name` resolves anywhere in the chain. Never invokes a factory.
	fn contains(&self, name: &str) -> bool {
		self.find_factory(name).is_ok()
	}
}

impl dyn Resolver {
	/// Typed variant of [`Resolver::resolve`].
	///
	/// Lets a factory defer to its parent's version of a service it wraps:
	///
	/// ```
	/// use dim_di::Container;
	/// use std::rc::Rc;
	///
	/// let parent = Rc::new(Container::new());
	/// parent.register("greeting", |_| Ok(String::from("hello"))).unwrap();
	///
	/// let child = parent.child();
	/// child
	///     .register("greeting", |c| {
	///         let inner = c.parent().lookup::<String>("greeting")?;
	///         Ok(format!("{inner}, world"))
	///     })
	///     .unwrap();
	///
	/// assert_eq!(*child.lookup::<String>("greeting").unwrap(), "hello, world");
	/// ```
	pub fn lookup<T: Any>(&self, name: &str) -> DiResult<Rc<T>> {
		downcast(name, self.resolve(name)?)
	}
}

/// Terminal resolver that ends every parent chain.
///
/// Holds no registrations and no state; every lookup fails with
/// [`DiError::MissingService`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RootContainer;

impl RootContainer {
	pub fn new() -> Self {
		Self
	}
}

impl Resolver for RootContainer {
	fn find_factory(&self, name: &str) -> DiResult<Factory> {
		Err(DiError::MissingService(ServiceName::from(name.to_owned())))
	}

	fn resolve(&self, name: &str) -> DiResult<Service> {
		Err(DiError::MissingService(ServiceName::from(name.to_owned())))
	}

	fn contains(&self, _name: &str) -> bool {
		false
	}
}

pub(crate) fn downcast<T: Any>(name: &str, service: Service) -> DiResult<Rc<T>> {
	service.downcast::<T>().map_err(|_| DiError::TypeMismatch {
		name: ServiceName::from(name.to_owned()),
		expected: type_name::<T>(),
	})
}
