//! Named access sugar

/// Looks up a service by writing its name as an identifier.
///
/// `service!(c.logger)` is exactly `c.lookup(stringify!(logger))`: it works
/// for any identifier and fails with
/// [`DiError::MissingService`](crate::DiError::MissingService) for unknown
/// names. The instance type is inferred, or given after a colon. Use the
/// `=>` form when the container is not a plain variable.
///
/// # Examples
///
/// ```
/// use dim_di::{Container, DiError, service};
/// use std::rc::Rc;
///
/// let container = Container::new();
/// container.register("username", |_| Ok(String::from("jim"))).unwrap();
///
/// let name: Rc<String> = service!(container.username).unwrap();
/// assert_eq!(*name, "jim");
///
/// let again = service!(container.username: String).unwrap();
/// assert!(Rc::ptr_eq(&name, &again));
///
/// let boxed = Box::new(container);
/// assert_eq!(*service!(&*boxed => username: String).unwrap(), "jim");
///
/// let err = service!(boxed => not_here: String).unwrap_err();
/// assert_eq!(err, DiError::MissingService("not_here".into()));
/// ```
#[macro_export]
macro_rules! service {
	($container:ident . $name:ident : $ty:ty) => {
		$container.lookup::<$ty>(::core::stringify!($name))
	};
	($container:ident . $name:ident) => {
		$container.lookup(::core::stringify!($name))
	};
	($container:expr => $name:ident : $ty:ty) => {
		($container).lookup::<$ty>(::core::stringify!($name))
	};
	($container:expr => $name:ident) => {
		($container).lookup(::core::stringify!($name))
	};
}
