//! Binding services to environment variables

use crate::{EnvSource, ProcessEnv};
use dim_di::{Container, DiError, DiResult, Factory, ServiceName};

/// Registers services whose values come from environment variables.
///
/// A service named `database_url` reads the variable `DATABASE_URL`, or
/// `{prefix}DATABASE_URL` when a prefix is configured. The variable is read
/// once, when the service is bound; later changes to the environment are not
/// observed.
///
/// # Examples
///
/// ```
/// use dim_di::Container;
/// use dim_env::{EnvBinder, MapEnv};
///
/// let env = MapEnv::new().with_var("APP_LOG_LEVEL", "debug");
/// let binder = EnvBinder::new(env).with_prefix("APP_");
///
/// let container = Container::new();
/// binder.bind(&container, "log_level", None).unwrap();
/// binder.bind(&container, "workers", Some("4")).unwrap();
///
/// assert_eq!(*container.lookup::<String>("log_level").unwrap(), "debug");
/// assert_eq!(*container.lookup::<String>("workers").unwrap(), "4");
/// ```
#[derive(Debug, Clone)]
pub struct EnvBinder<S = ProcessEnv> {
	source: S,
	prefix: String,
}

impl EnvBinder<ProcessEnv> {
	/// A binder reading the process environment without a prefix.
	pub fn process() -> Self {
		Self::new(ProcessEnv)
	}
}

impl Default for EnvBinder<ProcessEnv> {
	fn default() -> Self {
		Self::process()
	}
}

impl<S: EnvSource> EnvBinder<S> {
	pub fn new(source: S) -> Self {
		Self {
			source,
			prefix: String::new(),
		}
	}

	/// Sets a prefix prepended to every variable name.
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = prefix.into();
		self
	}

	pub fn prefix(&self) -> &str {
		&self.prefix
	}

	pub fn source(&self) -> &S {
		&self.source
	}

	/// The environment variable consulted for service `name`.
	pub fn variable_name(&self, name: &str) -> String {
		format!("{}{}", self.prefix, name.to_uppercase())
	}

	/// Registers `name` in `container` from the environment.
	///
	/// In order of preference the service is bound to:
	///
	/// 1. the value of the environment variable, as a `String`;
	/// 2. `default`, if given;
	/// 3. whatever the container's parent chain resolves `name` to.
	///
	/// Fails with [`DiError::EnvironmentVariableNotFound`] when none of these
	/// can supply a value, and with [`DiError::DuplicateService`] when `name`
	/// is already registered in `container`.
	pub fn bind(
		&self,
		container: &Container,
		name: impl Into<ServiceName>,
		default: Option<&str>,
	) -> DiResult<()> {
		let name = name.into();
		if container.is_registered(name.as_str()) {
			return Err(DiError::DuplicateService(name));
		}

		let variable = self.variable_name(name.as_str());
		if let Some(value) = self.source.var(&variable) {
			tracing::debug!(service = %name, variable = %variable, "bound service to environment variable");
			return container.register_instance(name, value);
		}

		if let Some(default) = default {
			tracing::debug!(service = %name, variable = %variable, "bound service to default value");
			return container.register_instance(name, default.to_owned());
		}

		if container.parent().contains(name.as_str()) {
			tracing::debug!(service = %name, variable = %variable, "deferred service to parent container");
			let key = name.clone();
			return container
				.register_factory(name, Factory::erased(move |c| c.parent().resolve(key.as_str())));
		}

		Err(DiError::EnvironmentVariableNotFound { name, variable })
	}
}
