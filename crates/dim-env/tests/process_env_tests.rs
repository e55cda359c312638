//! `register_env` against the process environment
//!
//! These tests mutate process-wide state and are serialized.

use dim_di::{Container, DiError};
use dim_env::ContainerEnvExt;
use rstest::*;
use serial_test::serial;
use std::env;
use std::rc::Rc;

/// Removes the variable when dropped so a failing test cannot leak it.
struct EnvVarGuard(&'static str);

impl EnvVarGuard {
	fn set(key: &'static str, value: &str) -> Self {
		// SAFETY: all tests in this file are serialized.
		unsafe {
			env::set_var(key, value);
		}
		Self(key)
	}

	fn unset(key: &'static str) -> Self {
		// SAFETY: all tests in this file are serialized.
		unsafe {
			env::remove_var(key);
		}
		Self(key)
	}
}

impl Drop for EnvVarGuard {
	fn drop(&mut self) {
		// SAFETY: all tests in this file are serialized.
		unsafe {
			env::remove_var(self.0);
		}
	}
}

#[rstest]
#[serial(process_env)]
fn register_env_reads_uppercased_variable() {
	// Arrange
	let _guard = EnvVarGuard::set("DIM_TEST_HOME_DIR", "/home/jim");
	let container = Container::new();

	// Act
	container.register_env("dim_test_home_dir").unwrap();

	// Assert
	assert_eq!(
		*container.lookup::<String>("dim_test_home_dir").unwrap(),
		"/home/jim"
	);
}

#[rstest]
#[serial(process_env)]
fn register_env_or_uses_default_when_unset() {
	// Arrange
	let _guard = EnvVarGuard::unset("DIM_TEST_WORKERS");
	let container = Container::new();

	// Act
	container.register_env_or("dim_test_workers", "4").unwrap();

	// Assert
	assert_eq!(*container.lookup::<String>("dim_test_workers").unwrap(), "4");
}

#[rstest]
#[serial(process_env)]
fn register_env_falls_back_to_parent() {
	// Arrange
	let _guard = EnvVarGuard::unset("DIM_TEST_REGION");
	let parent = Rc::new(Container::new());
	parent
		.register("dim_test_region", |_| Ok(String::from("eu-west-1")))
		.unwrap();
	let child = parent.child();

	// Act
	child.register_env("dim_test_region").unwrap();

	// Assert
	assert_eq!(
		*child.lookup::<String>("dim_test_region").unwrap(),
		"eu-west-1"
	);
}

#[rstest]
#[serial(process_env)]
fn register_env_fails_when_nothing_supplies_the_value() {
	// Arrange
	let _guard = EnvVarGuard::unset("DIM_TEST_API_KEY");
	let container = Container::new();

	// Act
	let result = container.register_env("dim_test_api_key");

	// Assert
	let err = result.unwrap_err();
	assert_eq!(
		err,
		DiError::EnvironmentVariableNotFound {
			name: "dim_test_api_key".into(),
			variable: "DIM_TEST_API_KEY".to_string(),
		}
	);
	assert!(err.to_string().contains("DIM_TEST_API_KEY"));
}
