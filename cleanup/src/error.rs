use miette::Diagnostic;
use shakedown_errors::{Category, CleanupError, Domain, ErrorCode, HarnessError};

use crate::BoxError;

/// One resource's failed release.
#[derive(Debug)]
pub struct ReleaseFailure {
    index: usize,
    error: BoxError,
}

impl ReleaseFailure {
    pub fn new(
        index: usize,
        error: impl Into<BoxError>,
    ) -> Self {
        Self {
            index,
            error: error.into(),
        }
    }

    /// Position of the resource in add order, starting at zero.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self.error.as_ref()
    }

    pub fn into_error(self) -> BoxError {
        self.error
    }

    fn as_cleanup_error(&self) -> Option<&CleanupError> {
        self.error.downcast_ref::<CleanupError>()
    }

    fn error_code(&self) -> ErrorCode {
        self.as_cleanup_error()
            .map(CleanupError::error_code)
            .unwrap_or(ErrorCode::new(Domain::CL, Category::Release, 1))
    }
}

impl std::fmt::Display for ReleaseFailure {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ReleaseFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.error.source()
    }
}

impl Diagnostic for ReleaseFailure {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        Some(Box::new(self.error_code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        self.as_cleanup_error()
            .and_then(CleanupError::help_text)
            .map(|h| Box::new(h) as Box<dyn std::fmt::Display>)
    }
}

/// A nested group's failure stays a `Multiple` of its own causes.
impl From<ReleaseFailure> for HarnessError {
    fn from(failure: ReleaseFailure) -> Self {
        let error = match failure.error.downcast::<MultiError>() {
            Ok(nested) => return HarnessError::from(*nested),
            Err(other) => other,
        };

        match error.downcast::<CleanupError>() {
            Ok(err) => HarnessError::Cleanup(*err),
            Err(other) => CleanupError::release_failed(other).into(),
        }
    }
}

/// Every failure from a batch of releases, in release order.
///
/// Causes are kept as the original error values so callers can inspect or
/// downcast each one; nothing is collapsed into a single string.
#[derive(Debug, Default)]
pub struct MultiError {
    failures: Vec<ReleaseFailure>,
}

impl MultiError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        failure: ReleaseFailure,
    ) {
        self.failures.push(failure);
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[ReleaseFailure] {
        &self.failures
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReleaseFailure> {
        self.failures.iter()
    }

    /// The underlying causes, in release order.
    pub fn errors(&self) -> impl Iterator<Item = &(dyn std::error::Error + Send + Sync + 'static)> {
        self.failures
            .iter()
            .map(ReleaseFailure::error)
    }

    pub fn into_errors(self) -> Vec<BoxError> {
        self.failures
            .into_iter()
            .map(ReleaseFailure::into_error)
            .collect()
    }

    /// `Ok(())` when nothing failed, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl std::fmt::Display for MultiError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self.failures.len() {
            1 => write!(f, "1 resource failed to release:")?,
            n => write!(f, "{n} resources failed to release:")?,
        }
        for failure in &self.failures {
            write!(f, "\n  [{}] {}", failure.index, failure)?;
        }
        Ok(())
    }
}

impl std::error::Error for MultiError {}

impl Diagnostic for MultiError {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        self.failures
            .first()
            .map(|f| Box::new(f.error_code()) as Box<dyn std::fmt::Display>)
    }

    fn related<'a>(&'a self) -> Option<Box<dyn Iterator<Item = &'a dyn Diagnostic> + 'a>> {
        Some(Box::new(
            self.failures
                .iter()
                .map(|f| f as &dyn Diagnostic),
        ))
    }
}

impl IntoIterator for MultiError {
    type Item = ReleaseFailure;
    type IntoIter = std::vec::IntoIter<ReleaseFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.into_iter()
    }
}

impl<'a> IntoIterator for &'a MultiError {
    type Item = &'a ReleaseFailure;
    type IntoIter = std::slice::Iter<'a, ReleaseFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.iter()
    }
}

impl From<MultiError> for HarnessError {
    fn from(errors: MultiError) -> Self {
        HarnessError::Multiple(
            errors
                .into_iter()
                .map(HarnessError::from)
                .collect(),
        )
    }
}
