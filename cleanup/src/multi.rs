use std::time::Duration;

use shakedown_errors::CleanupError;

use crate::{BoxError, Close, CloseOnRelease, MultiError, Release, ReleaseFailure};

/// An ordered set of resources released together.
///
/// [`release_all`](Self::release_all) attempts every release in add order,
/// continues past failures, and reports all of them. It consumes the
/// aggregator, so nothing can be added to it or released from it afterwards.
#[derive(Default)]
pub struct MultiRelease {
    resources: Vec<Box<dyn Release + Send>>,
}

impl MultiRelease {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn add(
        &mut self,
        resource: impl Release + Send + 'static,
    ) {
        self.resources.push(Box::new(resource));
    }

    pub fn add_closer(
        &mut self,
        closer: impl Close + Send + 'static,
    ) {
        self.add(CloseOnRelease::new(closer));
    }

    pub fn with(
        mut self,
        resource: impl Release + Send + 'static,
    ) -> Self {
        self.add(resource);
        self
    }

    pub fn with_closer(
        mut self,
        closer: impl Close + Send + 'static,
    ) -> Self {
        self.add_closer(closer);
        self
    }

    pub fn release_all(self) -> Result<(), MultiError> {
        let total = self.resources.len();
        let mut errors = MultiError::new();

        for (index, mut resource) in self.resources.into_iter().enumerate() {
            match resource.release() {
                Ok(()) => tracing::debug!(index, total, "released resource"),
                Err(err) => {
                    tracing::warn!(index, total, "failed to release resource: {err}");
                    errors.push(ReleaseFailure::new(index, err));
                },
            }
        }

        errors.into_result()
    }

    /// Like [`release_all`](Self::release_all), but gives each release at
    /// most `budget` to finish.
    ///
    /// Releases run one at a time on the blocking pool. A release that runs
    /// over budget is recorded as [`CleanupError::ReleaseTimedOut`] and left
    /// running in the background while the next resource is released.
    pub async fn release_all_with_timeout(
        self,
        budget: Duration,
    ) -> Result<(), MultiError> {
        let total = self.resources.len();
        let mut errors = MultiError::new();

        for (index, mut resource) in self.resources.into_iter().enumerate() {
            let task = tokio::task::spawn_blocking(move || resource.release());

            let failure: Option<BoxError> = match tokio::time::timeout(budget, task).await {
                Ok(Ok(Ok(()))) => None,
                Ok(Ok(Err(err))) => Some(err),
                Ok(Err(join)) => Some(CleanupError::aborted(index, join).into()),
                Err(_) => Some(CleanupError::timed_out(index, budget).into()),
            };

            match failure {
                None => tracing::debug!(index, total, "released resource"),
                Some(err) => {
                    tracing::warn!(index, total, "failed to release resource: {err}");
                    errors.push(ReleaseFailure::new(index, err));
                },
            }
        }

        errors.into_result()
    }
}

/// Releases the members as a nested group. A second release finds the group
/// empty and succeeds.
impl Release for MultiRelease {
    fn release(&mut self) -> Result<(), BoxError> {
        std::mem::take(self)
            .release_all()
            .map_err(Into::into)
    }
}

impl std::fmt::Debug for MultiRelease {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("MultiRelease")
            .field("resources", &self.resources.len())
            .finish()
    }
}
