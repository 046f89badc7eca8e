//! Shakedown Error System
//!
//! Unified error handling for the shakedown test harness.
//!
//! # Overview
//!
//! Every harness error carries a code in the `SD[Domain][Category][Sequence]`
//! format, a message, a severity and optional help text. Domain errors are
//! declared with [`define_domain_errors!`] and wrapped by [`HarnessError`].
//!
//! # Example
//!
//! ```
//! use shakedown_errors::{HarnessError, RegistryError};
//!
//! let err: HarnessError = RegistryError::duplicate_name("coreos.basic").into();
//!
//! assert_eq!(err.error_code().to_string(), "SDRG3001");
//! assert_eq!(err.message(), "test 'coreos.basic' is already registered");
//! ```

mod code;
mod diagnostic;
#[macro_use]
mod macros;

pub mod domains;

pub use code::{Category, Domain, ErrorCode, Severity};
pub use diagnostic::{CodedDiagnostic, DiagnosticBuilder};

pub use domains::{CleanupError, ConfigError, InternalError, RegistryError};

/// Unified error type for all harness operations.
///
/// This enum wraps all domain-specific errors and provides common operations
/// like error code generation, message formatting, and diagnostic conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    Registry(RegistryError),
    Cleanup(CleanupError),
    Config(ConfigError),
    Internal(InternalError),

    /// Multiple errors collected together.
    Multiple(Vec<HarnessError>),
}

impl HarnessError {
    /// Returns the error code for this error.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::Registry(e) => e.error_code(),
            Self::Cleanup(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Internal(e) => e.error_code(),
            Self::Multiple(errs) => {
                errs.first()
                    .map(|e| e.error_code())
                    .unwrap_or_else(|| ErrorCode::new(Domain::IN, Category::Internal, 1))
            },
        }
    }

    /// Returns the human-readable error message.
    pub fn message(&self) -> String {
        match self {
            Self::Registry(e) => e.message(),
            Self::Cleanup(e) => e.message(),
            Self::Config(e) => e.message(),
            Self::Internal(e) => e.message(),
            Self::Multiple(errs) => {
                if errs.len() == 1 {
                    errs[0].message()
                } else {
                    format!("{} errors occurred", errs.len())
                }
            },
        }
    }

    /// Returns the severity level.
    pub fn severity(&self) -> Severity {
        match self {
            Self::Registry(e) => e.severity(),
            Self::Cleanup(e) => e.severity(),
            Self::Config(e) => e.severity(),
            Self::Internal(e) => e.severity(),
            Self::Multiple(errs) => {
                errs.iter()
                    .map(|e| e.severity())
                    .reduce(Severity::max)
                    .unwrap_or(Severity::Error)
            },
        }
    }

    /// Returns optional help text.
    pub fn help_text(&self) -> Option<&'static str> {
        match self {
            Self::Registry(e) => e.help_text(),
            Self::Cleanup(e) => e.help_text(),
            Self::Config(e) => e.help_text(),
            Self::Internal(e) => e.help_text(),
            Self::Multiple(_) => None,
        }
    }

    /// Iterates the leaf errors, flattening nested `Multiple` values.
    pub fn leaves(&self) -> Vec<&HarnessError> {
        match self {
            Self::Multiple(errs) => {
                errs.iter()
                    .flat_map(|e| e.leaves())
                    .collect()
            },
            other => vec![other],
        }
    }

    /// Converts to a coded diagnostic; every leaf of a `Multiple` becomes a
    /// related diagnostic of its own.
    pub fn to_diagnostic(&self) -> CodedDiagnostic {
        let builder = DiagnosticBuilder::new(self.error_code(), self.message(), self.severity())
            .help_opt(self.help_text());

        match self {
            Self::Multiple(errs) if errs.len() != 1 => {
                builder
                    .related(
                        self.leaves()
                            .into_iter()
                            .map(|e| e.to_diagnostic()),
                    )
                    .build()
            },
            Self::Multiple(errs) => errs[0].to_diagnostic(),
            _ => builder.build(),
        }
    }

    /// Converts to a miette Report for display.
    pub fn to_report(&self) -> miette::Report {
        miette::Report::new(self.to_diagnostic())
    }

    /// Returns true if this is a fatal error.
    pub fn is_fatal(&self) -> bool {
        self.severity().is_fatal()
    }
}

impl std::fmt::Display for HarnessError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for HarnessError {}

impl From<RegistryError> for HarnessError {
    fn from(e: RegistryError) -> Self {
        Self::Registry(e)
    }
}

impl From<CleanupError> for HarnessError {
    fn from(e: CleanupError) -> Self {
        Self::Cleanup(e)
    }
}

impl From<ConfigError> for HarnessError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<InternalError> for HarnessError {
    fn from(e: InternalError) -> Self {
        Self::Internal(e)
    }
}

impl From<std::convert::Infallible> for HarnessError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

/// Type alias for Results using HarnessError.
pub type Result<T, E = HarnessError> = std::result::Result<T, E>;
