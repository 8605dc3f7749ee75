//! Load YAML environment files into environment variables.
//!
//! This crate reads a restricted YAML subset (string keys, scalar values,
//! nested mappings), flattens nested keys with `_`, and exports the result
//! through an [`EnvStore`]. Loaded variables can then be checked with a
//! chained [`Validator`].
//!
//! ```no_run
//! use yamlenv::Yamlenv;
//!
//! let mut env = Yamlenv::new("config").with_uppercase(true);
//! env.load()?;
//! env.required(["DB_HOST", "DB_PORT"])?.not_empty()?;
//! env.required("DB_PORT")?.is_integer()?;
//! # Ok::<(), yamlenv::Error>(())
//! ```

pub mod constants;
pub mod dump;
pub mod flatten;
mod loader;
pub mod parser;
mod session;
pub mod store;
mod validator;
pub mod value;

pub use flatten::{FlatEntry, KeyCase};
pub use loader::{EnvSnapshot, Error, LoadMode, Loader};
pub use parser::{ParseError, ParseErrorKind};
pub use session::Yamlenv;
pub use store::{EnvStore, MemoryEnv, ProcessEnv};
pub use validator::{AssertionFailure, FailureKind, Keys, ValidationError, Validator};
pub use value::{Document, Value};
