//! # DIM
//!
//! Minimal dependency injection: a [`Container`] maps service names to
//! factories, builds each service on first lookup, hands out the same
//! instance afterwards, and falls back to a parent container for names it
//! does not define.
//!
//! ## Feature Flags
//!
//! - `env` (default) - [`env`] module: services bound to environment variables
//!
//! ## Quick Example
//!
//! ```rust
//! use dim::prelude::*;
//! use std::rc::Rc;
//!
//! struct FileLogger {
//!     path: Rc<String>,
//! }
//!
//! struct Application {
//!     logger: Rc<FileLogger>,
//! }
//!
//! let container = Rc::new(Container::new());
//! container.register("log_file", |_| Ok(String::from("logfile.log"))).unwrap();
//! container
//!     .register("logger", |c| Ok(FileLogger { path: service!(c.log_file)? }))
//!     .unwrap();
//! container
//!     .register("application", |c| Ok(Application { logger: service!(c.logger)? }))
//!     .unwrap();
//!
//! // A test container swaps out one dependency and inherits the rest.
//! let test = container.child();
//! test.register("log_file", |_| Ok(String::from("test.log"))).unwrap();
//!
//! let app = service!(test.application: Application).unwrap();
//! assert_eq!(*app.logger.path, "test.log");
//! ```

pub use dim_di::*;

#[cfg(feature = "env")]
pub mod env;

pub mod prelude {
	pub use crate::{Container, DiError, DiResult, Resolver, ServiceName, service};

	#[cfg(feature = "env")]
	pub use crate::env::{ContainerEnvExt, EnvBinder, EnvSource, MapEnv, ProcessEnv};
}
