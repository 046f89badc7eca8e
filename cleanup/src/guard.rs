use crate::{Close, MultiError, MultiRelease, Release};

/// Scoped ownership of a [`MultiRelease`].
///
/// Call [`release`](Self::release) to clean up and inspect the outcome. A
/// guard dropped without an explicit release (early return, `?`, panic)
/// releases everything on drop and logs each failure.
#[derive(Debug, Default)]
pub struct ReleaseGuard {
    inner: Option<MultiRelease>,
}

impl ReleaseGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        resource: impl Release + Send + 'static,
    ) {
        self.inner
            .get_or_insert_with(MultiRelease::new)
            .add(resource);
    }

    pub fn add_closer(
        &mut self,
        closer: impl Close + Send + 'static,
    ) {
        self.inner
            .get_or_insert_with(MultiRelease::new)
            .add_closer(closer);
    }

    pub fn len(&self) -> usize {
        self.inner
            .as_ref()
            .map_or(0, MultiRelease::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn release(mut self) -> Result<(), MultiError> {
        match self.inner.take() {
            Some(inner) => inner.release_all(),
            None => Ok(()),
        }
    }
}

impl From<MultiRelease> for ReleaseGuard {
    fn from(inner: MultiRelease) -> Self {
        Self { inner: Some(inner) }
    }
}

impl Drop for ReleaseGuard {
    fn drop(&mut self) {
        let Some(inner) = self.inner.take() else {
            return;
        };

        if let Err(errors) = inner.release_all() {
            for failure in &errors {
                tracing::error!(
                    index = failure.index(),
                    "resource released on drop failed: {failure}"
                );
            }
        }
    }
}
