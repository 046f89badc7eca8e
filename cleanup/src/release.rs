use std::{path::PathBuf, process::Child};

use crate::BoxError;

/// Something that must be explicitly released once it is no longer needed.
///
/// Implementations release the underlying resource on the first call; later
/// calls have nothing left to release and return `Ok(())`.
pub trait Release {
    fn release(&mut self) -> Result<(), BoxError>;
}

impl<R: Release + ?Sized> Release for Box<R> {
    fn release(&mut self) -> Result<(), BoxError> {
        self.as_mut().release()
    }
}

/// The narrower capability of values that can only be closed.
///
/// Closing consumes the value, so it can happen at most once. Use
/// [`CloseOnRelease`] (or [`MultiRelease::add_closer`](crate::MultiRelease::add_closer))
/// to lift a closable value into [`Release`].
pub trait Close {
    type Error: Into<BoxError>;

    fn close(self) -> Result<(), Self::Error>;
}

/// Adapts a [`Close`] value into a [`Release`].
#[derive(Debug)]
pub struct CloseOnRelease<C> {
    inner: Option<C>,
}

impl<C: Close> CloseOnRelease<C> {
    pub fn new(inner: C) -> Self {
        Self { inner: Some(inner) }
    }

    pub fn is_released(&self) -> bool {
        self.inner.is_none()
    }
}

impl<C: Close> Release for CloseOnRelease<C> {
    fn release(&mut self) -> Result<(), BoxError> {
        match self.inner.take() {
            Some(inner) => inner.close().map_err(Into::into),
            None => Ok(()),
        }
    }
}

/// Adapts a one-shot closure into a [`Release`].
pub struct ReleaseFn<F> {
    f: Option<F>,
}

/// Lifts `f` into a [`Release`] that runs it on the first release.
pub fn release_fn<F, E>(f: F) -> ReleaseFn<F>
where
    F: FnOnce() -> Result<(), E>,
    E: Into<BoxError>, {
    ReleaseFn { f: Some(f) }
}

impl<F, E> Release for ReleaseFn<F>
where
    F: FnOnce() -> Result<(), E>,
    E: Into<BoxError>,
{
    fn release(&mut self) -> Result<(), BoxError> {
        match self.f.take() {
            Some(f) => f().map_err(Into::into),
            None => Ok(()),
        }
    }
}

impl<F> std::fmt::Debug for ReleaseFn<F> {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("ReleaseFn")
            .field("released", &self.f.is_none())
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReleaseError {
    #[error("failed to kill process {pid}: {source}")]
    Kill { pid: u32, source: std::io::Error },
    #[error("failed to reap process {pid}: {source}")]
    Wait { pid: u32, source: std::io::Error },
    #[error("failed to remove {}: {source}", path.display())]
    Remove {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Kills the process and reaps it.
impl Close for Child {
    type Error = ReleaseError;

    fn close(mut self) -> Result<(), Self::Error> {
        let pid = self.id();

        self.kill()
            .map_err(|source| ReleaseError::Kill { pid, source })?;
        let status = self
            .wait()
            .map_err(|source| ReleaseError::Wait { pid, source })?;

        tracing::trace!(pid, %status, "reaped process");
        Ok(())
    }
}

/// Removes the directory and everything in it.
impl Close for tempfile::TempDir {
    type Error = ReleaseError;

    fn close(self) -> Result<(), Self::Error> {
        let path = self.path().to_path_buf();
        tempfile::TempDir::close(self).map_err(|source| ReleaseError::Remove { path, source })
    }
}

/// Removes the file.
impl Close for tempfile::NamedTempFile {
    type Error = ReleaseError;

    fn close(self) -> Result<(), Self::Error> {
        let path = self.path().to_path_buf();
        tempfile::NamedTempFile::close(self).map_err(|source| ReleaseError::Remove { path, source })
    }
}
