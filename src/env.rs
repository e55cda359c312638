//! Environment module.
//!
//! This module binds container services to environment variables.
//!
//! # Examples
//!
//! ```rust,no_run
//! use dim::Container;
//! use dim::env::ContainerEnvExt;
//!
//! let container = Container::new();
//! container.register_env_or("log_level", "info").unwrap();
//! ```

pub use dim_env::*;
