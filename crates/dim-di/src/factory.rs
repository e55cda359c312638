//! Service factories

use crate::{Container, DiResult};
use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// A constructed, type-erased service instance.
///
/// Two lookups observe the same instance when `Rc::ptr_eq` holds.
pub type Service = Rc<dyn Any>;

type FactoryFnInner = Rc<dyn Fn(&Container) -> DiResult<Service>>;

/// Wrapper type for factory functions
///
/// A factory receives the container that started the resolution, so any
/// lookups it performs search that container first. Cloning a `Factory` is
/// cheap and shares the underlying function.
#[derive(Clone)]
pub struct Factory(FactoryFnInner);

impl Factory {
	/// Wraps a typed constructor, erasing the produced type.
	///
	/// # Examples
	///
	/// ```
	/// use dim_di::{Container, Factory};
	///
	/// let factory = Factory::new(|_: &Container| Ok(String::from("jim")));
	/// let service = factory.call(&Container::new()).unwrap();
	/// assert_eq!(service.downcast_ref::<String>().unwrap(), "jim");
	/// ```
	pub fn new<T, F>(func: F) -> Self
	where
		T: Any,
		F: Fn(&Container) -> DiResult<T> + 'static,
	{
		Self(Rc::new(move |container| {
			func(container).map(|value| Rc::new(value) as Service)
		}))
	}

	/// Wraps a constructor that already produces shared `Rc<T>` values.
	pub fn from_rc<T, F>(func: F) -> Self
	where
		T: Any,
		F: Fn(&Container) -> DiResult<Rc<T>> + 'static,
	{
		Self(Rc::new(move |container| {
			func(container).map(|value| value as Service)
		}))
	}

	/// Wraps a constructor that produces already-erased services, such as
	/// one forwarding to another resolver.
	pub fn erased<F>(func: F) -> Self
	where
		F: Fn(&Container) -> DiResult<Service> + 'static,
	{
		Self(Rc::new(func))
	}

	/// A factory that hands out the same instance on every call.
	pub fn instance<T: Any>(value: T) -> Self {
		let shared: Service = Rc::new(value);
		Self(Rc::new(move |_| Ok(Rc::clone(&shared))))
	}

	/// Invokes the factory against `container`.
	pub fn call(&self, container: &Container) -> DiResult<Service> {
		(self.0)(container)
	}
}

impl fmt::Debug for Factory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Factory").finish_non_exhaustive()
	}
}
