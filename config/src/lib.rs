//! Run configuration: which platform and version tests are selected for.
//!
//! Settings come from `shakedown.toml` in the config directory, overridden
//! by `SHAKEDOWN_*` environment variables, overridden in turn by whatever the
//! caller passes to [`RunConfig::with_overrides`].

use std::path::{Path, PathBuf};

use shakedown_errors::{ConfigError, HarnessError};

mod loader;
mod run;

pub use loader::NewForConfig;
pub use run::{Overrides, RunConfig};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("[{file}] {err}")]
    WithSource { file: PathBuf, err: Box<Self> },
    #[error("config error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    #[error("validation errors: {0}")]
    ValidationErrors(#[from] ::validator::ValidationErrors),
    #[error("invalid version '{given}': {source}")]
    Version {
        given: String,
        source: semver::Error,
    },
    #[error("missing required setting '{0}'")]
    Missing(&'static str),
}

impl Error {
    pub fn with_source(
        self,
        file: impl AsRef<Path>,
    ) -> Self {
        Self::WithSource {
            file: file.as_ref().to_path_buf(),
            err: Box::new(self),
        }
    }

    pub fn from_with_source_init<E: Into<Error>>(file: impl AsRef<Path>) -> impl FnOnce(E) -> Self {
        |err| err.into().with_source(file)
    }
}

impl From<Error> for HarnessError {
    fn from(err: Error) -> Self {
        let err = match err {
            Error::WithSource { file, err } => {
                match *err {
                    Error::ConfigError(e) => ConfigError::load_failed(file.display().to_string(), e),
                    Error::ValidationErrors(e) => ConfigError::invalid(e),
                    inner => return inner.into(),
                }
            },
            Error::ConfigError(e) => ConfigError::load_failed("<environment>", e),
            Error::ValidationErrors(e) => ConfigError::invalid(e),
            Error::Version { given, source } => ConfigError::invalid_version(given, source),
            Error::Missing(key) => ConfigError::missing(key),
        };
        err.into()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
