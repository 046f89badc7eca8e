//! Releasing acquired test resources without losing failures.
//!
//! A test body acquires many resources (machines, tunnels, temp dirs,
//! processes) and must give every one of them back, even when some of the
//! releases fail. [`MultiRelease`] collects the resources in acquisition
//! order and [`MultiRelease::release_all`] attempts each release, returning
//! a [`MultiError`] that lists every failure.
//!
//! # Example
//!
//! ```
//! use shakedown_cleanup::{MultiRelease, release_fn};
//!
//! let mut cleanup = MultiRelease::new();
//! cleanup.add(release_fn(|| Ok::<_, std::io::Error>(())));
//! cleanup.add(release_fn(|| Err(std::io::Error::other("disk busy"))));
//! cleanup.add_closer(tempfile::tempdir()?);
//!
//! let errors = cleanup.release_all().unwrap_err();
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors.failures()[0].to_string(), "disk busy");
//! # Ok::<(), std::io::Error>(())
//! ```

mod error;
mod guard;
mod multi;
mod release;

pub use error::{MultiError, ReleaseFailure};
pub use guard::ReleaseGuard;
pub use multi::MultiRelease;
pub use release::{Close, CloseOnRelease, Release, ReleaseError, ReleaseFn, release_fn};

pub use shakedown_errors::CleanupError;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
