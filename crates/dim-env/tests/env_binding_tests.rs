//! Binding services from an in-memory environment

use dim_di::{Container, DiError, service};
use dim_env::{EnvBinder, MapEnv};
use rstest::*;
use std::rc::Rc;

#[fixture]
fn env() -> MapEnv {
	MapEnv::new()
		.with_var("USERNAME", "jim")
		.with_var("APP_USERNAME", "app_jim")
}

#[rstest]
fn binds_present_variable_as_literal(env: MapEnv) {
	// Arrange
	let container = Container::new();
	let binder = EnvBinder::new(env);

	// Act
	binder.bind(&container, "username", None).unwrap();

	// Assert
	let first = service!(container.username: String).unwrap();
	container.clear_cache();
	let second = service!(container.username: String).unwrap();
	assert_eq!(*first, "jim");
	assert!(Rc::ptr_eq(&first, &second));
}

#[rstest]
fn variable_wins_over_default(env: MapEnv) {
	// Arrange
	let container = Container::new();
	let binder = EnvBinder::new(env);

	// Act
	binder.bind(&container, "username", Some("fallback")).unwrap();

	// Assert
	assert_eq!(*container.lookup::<String>("username").unwrap(), "jim");
}

#[rstest]
fn prefix_selects_variable(env: MapEnv) {
	// Arrange
	let container = Container::new();
	let binder = EnvBinder::new(env).with_prefix("APP_");

	// Act
	binder.bind(&container, "username", None).unwrap();

	// Assert
	assert_eq!(*container.lookup::<String>("username").unwrap(), "app_jim");
}

#[rstest]
fn absent_variable_uses_default() {
	// Arrange
	let container = Container::new();
	let binder = EnvBinder::new(MapEnv::new());

	// Act
	binder.bind(&container, "password", Some("secret")).unwrap();

	// Assert
	assert_eq!(*container.lookup::<String>("password").unwrap(), "secret");
}

#[rstest]
fn absent_variable_defers_to_parent_chain() {
	// Arrange
	let grandparent = Rc::new(Container::new());
	grandparent
		.register("password", |_| Ok(String::from("from_grandparent")))
		.unwrap();
	let parent = Rc::new(grandparent.child());
	let child = parent.child();
	let binder = EnvBinder::new(MapEnv::new());

	// Act
	binder.bind(&child, "password", None).unwrap();

	// Assert
	assert!(child.is_registered("password"));
	assert_eq!(
		*child.lookup::<String>("password").unwrap(),
		"from_grandparent"
	);
}

#[rstest]
fn deferred_value_follows_parent_registration() {
	// Arrange
	let parent = Rc::new(Container::new());
	parent.register("endpoint", |_| Ok(String::from("v1"))).unwrap();
	let child = parent.child();
	EnvBinder::new(MapEnv::new())
		.bind(&child, "endpoint", None)
		.unwrap();

	// Act
	parent.override_service("endpoint", |_| Ok(String::from("v2")));

	// Assert
	assert_eq!(*child.lookup::<String>("endpoint").unwrap(), "v2");
}

#[rstest]
fn missing_everywhere_fails_with_environment_error() {
	// Arrange
	let parent = Rc::new(Container::new());
	let child = parent.child();
	let binder = EnvBinder::new(MapEnv::new()).with_prefix("APP_");

	// Act
	let result = binder.bind(&child, "api_key", None);

	// Assert
	assert_eq!(
		result,
		Err(DiError::EnvironmentVariableNotFound {
			name: "api_key".into(),
			variable: "APP_API_KEY".to_string(),
		})
	);
	assert!(!child.is_registered("api_key"));
}

#[rstest]
fn already_registered_name_is_a_duplicate(env: MapEnv) {
	// Arrange
	let container = Container::new();
	container.register("username", |_| Ok(String::from("manual"))).unwrap();
	let binder = EnvBinder::new(env);

	// Act
	let result = binder.bind(&container, "username", None);

	// Assert
	assert_eq!(result, Err(DiError::DuplicateService("username".into())));
	assert_eq!(*container.lookup::<String>("username").unwrap(), "manual");
}

#[rstest]
fn variable_is_read_once_at_bind_time() {
	// Arrange
	let mut env = MapEnv::new().with_var("MODE", "initial");
	let container = Container::new();
	EnvBinder::new(&env).bind(&container, "mode", None).unwrap();

	// Act
	env.set("MODE", "changed");

	// Assert
	assert_eq!(*container.lookup::<String>("mode").unwrap(), "initial");
	assert_eq!(env.len(), 1);
}

#[rstest]
fn bound_services_feed_other_factories(env: MapEnv) {
	// Arrange
	struct Greeter {
		name: Rc<String>,
	}
	let container = Container::new();
	EnvBinder::new(env)
		.bind(&container, "username", None)
		.unwrap();
	container
		.register("greeter", |c| Ok(Greeter { name: service!(c.username)? }))
		.unwrap();

	// Act
	let greeter = service!(container.greeter: Greeter).unwrap();

	// Assert
	assert_eq!(*greeter.name, "jim");
}
