//! # DIM Dependency Injection
//!
//! A minimal dependency injection container: services are registered by name
//! with a factory, built lazily on first lookup, and memoized per container.
//!
//! ## Features
//!
//! - **Lazy**: factories run on first lookup, at most once per container
//! - **Hierarchical**: child containers fall back to their parent's factories
//! - **Overridable**: a child can replace a service, including an indirect
//!   dependency of a service its parent defines
//! - **Non-invasive checks**: `verify_dependencies` tests resolvability
//!   without constructing anything
//!
//! ## Example
//!
//! ```rust
//! use dim_di::{Container, service};
//! use std::rc::Rc;
//!
//! struct Database {
//!     username: Rc<String>,
//! }
//!
//! let container = Rc::new(Container::new());
//! container.register("username", |_| Ok(String::from("jim"))).unwrap();
//! container
//!     .register("database", |c| Ok(Database { username: service!(c.username)? }))
//!     .unwrap();
//!
//! // Children reuse the parent's factories but resolve dependencies
//! // against themselves first.
//! let child = container.child();
//! child.register("username", |_| Ok(String::from("test"))).unwrap();
//!
//! let db = child.lookup::<Database>("database").unwrap();
//! assert_eq!(*db.username, "test");
//!
//! let db = container.lookup::<Database>("database").unwrap();
//! assert_eq!(*db.username, "jim");
//! ```

pub mod container;
pub mod error;
pub mod factory;
mod macros;
pub mod name;
pub mod resolver;

pub use container::Container;
pub use error::{DiError, DiResult};
pub use factory::{Factory, Service};
pub use name::ServiceName;
pub use resolver::{Resolver, RootContainer};
