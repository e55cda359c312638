//! # DIM Environment Services
//!
//! Registers container services whose values come from environment
//! variables. A service named `log_level` is read from `LOG_LEVEL`; when the
//! variable is unset, a literal default or the parent container's service is
//! used instead.
//!
//! ## Example
//!
//! ```rust
//! use dim_di::{Container, DiError};
//! use dim_env::{EnvBinder, MapEnv};
//! use std::rc::Rc;
//!
//! let parent = Rc::new(Container::new());
//! parent.register("region", |_| Ok(String::from("eu-west-1"))).unwrap();
//!
//! let child = parent.child();
//! let binder = EnvBinder::new(MapEnv::new().with_var("BUCKET", "assets"));
//! binder.bind(&child, "bucket", None).unwrap();
//! binder.bind(&child, "region", None).unwrap();
//!
//! assert_eq!(*child.lookup::<String>("bucket").unwrap(), "assets");
//! assert_eq!(*child.lookup::<String>("region").unwrap(), "eu-west-1");
//!
//! let err = binder.bind(&child, "api_key", None).unwrap_err();
//! assert!(matches!(err, DiError::EnvironmentVariableNotFound { .. }));
//! ```
//!
//! With the process environment, use [`ContainerEnvExt`]:
//!
//! ```rust,no_run
//! use dim_di::Container;
//! use dim_env::ContainerEnvExt;
//!
//! let container = Container::new();
//! container.register_env_or("database_url", "sqlite::memory:").unwrap();
//! ```

pub mod binder;
pub mod ext;
pub mod source;

pub use binder::EnvBinder;
pub use ext::ContainerEnvExt;
pub use source::{EnvSource, MapEnv, ProcessEnv};
