//! Error types for service registration and resolution.

use crate::ServiceName;
use thiserror::Error;

/// Errors raised by a [`Container`](crate::Container) and its collaborators.
///
/// Every variant carries the offending service name so callers can match on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiError {
	/// No factory for the name exists anywhere in the parent chain.
	#[error("Unknown Service '{0}'")]
	MissingService(ServiceName),

	/// The name is already registered in the same container.
	#[error("Duplicate Service Name '{0}'")]
	DuplicateService(ServiceName),

	/// Neither the environment nor the parent chain can supply the service.
	#[error(
		"Could not find an environment variable named {variable} nor a service named '{name}' in the parent container"
	)]
	EnvironmentVariableNotFound {
		name: ServiceName,
		variable: String,
	},

	/// The cached instance is not of the requested type.
	#[error("Service '{name}' is not of type {expected}")]
	TypeMismatch {
		name: ServiceName,
		expected: &'static str,
	},

	/// A factory failed to construct its service.
	#[error("Provider error for service '{name}': {message}")]
	Provider { name: ServiceName, message: String },
}

impl DiError {
	/// Builds a [`DiError::Provider`] for a factory that failed.
	///
	/// # Examples
	///
	/// ```
	/// use dim_di::DiError;
	///
	/// let err = DiError::provider("database", "connection refused");
	/// assert_eq!(
	///     err.to_string(),
	///     "Provider error for service 'database': connection refused"
	/// );
	/// ```
	pub fn provider(name: impl Into<ServiceName>, message: impl Into<String>) -> Self {
		Self::Provider {
			name: name.into(),
			message: message.into(),
		}
	}

	/// The service name this error is about.
	pub fn service_name(&self) -> &ServiceName {
		match self {
			Self::MissingService(name) | Self::DuplicateService(name) => name,
			Self::EnvironmentVariableNotFound { name, .. }
			| Self::TypeMismatch { name, .. }
			| Self::Provider { name, .. } => name,
		}
	}
}

/// Result type alias for container operations.
pub type DiResult<T> = Result<T, DiError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(DiError::MissingService("not_here".into()), "Unknown Service 'not_here'")]
	#[case(DiError::DuplicateService("app".into()), "Duplicate Service Name 'app'")]
	#[case(
		DiError::TypeMismatch { name: "db".into(), expected: "u32" },
		"Service 'db' is not of type u32"
	)]
	fn test_messages_name_the_service(#[case] err: DiError, #[case] expected: &str) {
		assert_eq!(err.to_string(), expected);
	}

	#[rstest]
	fn test_env_error_mentions_variable_and_name() {
		let err = DiError::EnvironmentVariableNotFound {
			name: "home_dir".into(),
			variable: "HOME_DIR".to_string(),
		};

		let message = err.to_string();

		assert!(message.contains("HOME_DIR"));
		assert!(message.contains("'home_dir'"));
		assert_eq!(err.service_name(), "home_dir");
	}
}
