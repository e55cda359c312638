//! `register_env` on [`Container`]

use crate::EnvBinder;
use dim_di::{Container, DiResult, ServiceName};

/// Environment-backed registration for [`Container`], reading the process
/// environment.
///
/// See [`EnvBinder::bind`] for the resolution order. Use an [`EnvBinder`]
/// directly to read another [`EnvSource`](crate::EnvSource) or to add a
/// variable prefix.
pub trait ContainerEnvExt {
	/// Binds `name` to the variable `NAME`, falling back to the parent chain.
	fn register_env(&self, name: impl Into<ServiceName>) -> DiResult<()>;

	/// Binds `name` to the variable `NAME`, falling back to `default`.
	fn register_env_or(&self, name: impl Into<ServiceName>, default: &str) -> DiResult<()>;
}

impl ContainerEnvExt for Container {
	fn register_env(&self, name: impl Into<ServiceName>) -> DiResult<()> {
		EnvBinder::process().bind(self, name, None)
	}

	fn register_env_or(&self, name: impl Into<ServiceName>, default: &str) -> DiResult<()> {
		EnvBinder::process().bind(self, name, Some(default))
	}
}
