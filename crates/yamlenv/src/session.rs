//! Session facade over loader, store, and validator.
//!
//! Responsibilities:
//! - Hold the target directory, filename, and key case for one environment file.
//! - Create the loader lazily on the first load or overload and reuse it.
//! - Answer lookups from the loader's cache and assertions from the live store.
//!
//! Does NOT handle:
//! - Parsing or flattening (see `parser/` and `flatten.rs`).
//!
//! Invariants:
//! - Changing the filename or key case discards the loader; the next load
//!   starts fresh.
//! - `loader()` reports `LoaderNotInitialized` until a load has succeeded.

use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_FILENAME;
use crate::dump::write_dotenv;
use crate::loader::{Error, Loader};
use crate::store::{EnvStore, ProcessEnv};
use crate::validator::{Keys, ValidationError, Validator};
use crate::value::Value;

/// Loads one environment file into a store and validates the result.
///
/// The default store is the process environment.
#[derive(Debug)]
pub struct Yamlenv<S: EnvStore = ProcessEnv> {
    dir: PathBuf,
    filename: String,
    uppercase: bool,
    store: S,
    loader: Option<Loader>,
}

impl Yamlenv<ProcessEnv> {
    /// Session for `dir/env.yml` backed by the process environment.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_store(dir, ProcessEnv)
    }
}

impl<S: EnvStore> Yamlenv<S> {
    /// Session for `dir/env.yml` backed by `store`.
    pub fn with_store(dir: impl Into<PathBuf>, store: S) -> Self {
        Self {
            dir: dir.into(),
            filename: DEFAULT_FILENAME.to_string(),
            uppercase: false,
            store,
            loader: None,
        }
    }

    /// Use `filename` inside the session directory.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self.loader = None;
        self
    }

    /// Uppercase flattened names before export.
    pub fn with_uppercase(mut self, uppercase: bool) -> Self {
        self.uppercase = uppercase;
        self.loader = None;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn is_uppercase(&self) -> bool {
        self.uppercase
    }

    /// The file this session reads.
    pub fn file_path(&self) -> PathBuf {
        self.dir.join(&self.filename)
    }

    /// Load the file, keeping variables that already hold a value.
    pub fn load(&mut self) -> Result<(), Error> {
        let Self {
            dir,
            filename,
            uppercase,
            store,
            loader,
        } = self;
        loader
            .get_or_insert_with(|| Loader::new(dir.as_path(), filename, *uppercase))
            .load(store)
    }

    /// Load the file, overwriting existing variables.
    pub fn overload(&mut self) -> Result<(), Error> {
        let Self {
            dir,
            filename,
            uppercase,
            store,
            loader,
        } = self;
        loader
            .get_or_insert_with(|| Loader::new(dir.as_path(), filename, *uppercase))
            .overload(store)
    }

    /// The loader, once a load has succeeded.
    pub fn loader(&self) -> Result<&Loader, Error> {
        self.loader
            .as_ref()
            .filter(|loader| loader.is_loaded())
            .ok_or(Error::LoaderNotInitialized)
    }

    /// Cached flattened value for `name` from the last successful load.
    pub fn get_env(&self, name: &str) -> Option<&str> {
        self.loader.as_ref()?.env(name)
    }

    /// Cached unflattened value for the top-level key `name`.
    pub fn get_raw_env(&self, name: &str) -> Option<&Value> {
        self.loader.as_ref()?.raw_env(name)
    }

    /// Start assertions over `keys`, failing if any of them is absent from the store.
    pub fn required(&self, keys: impl Into<Keys>) -> Result<Validator<'_, S>, ValidationError> {
        Validator::new(&self.store, keys)
    }

    /// Write the last loaded variables as a dotenv file.
    ///
    /// A relative `target` is resolved against the session directory.
    pub fn dump(&self, target: impl AsRef<Path>) -> Result<PathBuf, Error> {
        let loader = self.loader()?;
        let path = self.dir.join(target.as_ref());
        write_dotenv(&path, loader.entries())?;
        Ok(path)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
