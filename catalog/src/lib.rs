//! Catalog of declared tests and capability-based selection.
//!
//! Test modules declare what they need (platforms, a version window, a
//! cluster size) next to their entry point. Runners build a [`Registry`] and
//! ask it which tests are eligible for a concrete platform and version.
//!
//! # Example
//!
//! ```
//! use semver::Version;
//! use shakedown_catalog::{Registry, TestCluster, TestDeclaration};
//!
//! fn empty(_: &dyn TestCluster) {}
//!
//! let mut registry = Registry::new();
//! registry.register(
//!     TestDeclaration::builder()
//!         .name("coreos.ignition.v1.empty.aws")
//!         .run(empty)
//!         .platforms(["aws"])
//!         .build(),
//! )?;
//!
//! assert_eq!(registry.filter("aws", &Version::new(1045, 0, 0)).len(), 1);
//! assert!(registry.filter("gce", &Version::new(1045, 0, 0)).is_empty());
//! # Ok::<(), shakedown_catalog::RegistryError>(())
//! ```

mod declaration;
mod registry;
mod selector;
mod summary;

pub use declaration::{Platforms, TestCluster, TestDeclaration, TestFn};
pub use registry::Registry;
pub use selector::Selector;
pub use summary::TestSummary;

pub use shakedown_errors::RegistryError;

pub type Result<T, E = RegistryError> = std::result::Result<T, E>;

#[doc(hidden)]
pub mod __private {
    pub use inventory;
}

/// A test module's registration hook, collected at link time by
/// [`register_tests!`] and run by [`Registry::collect`].
pub struct Registration {
    declare: fn(&mut Registry) -> Result<()>,
}

impl Registration {
    pub const fn new(declare: fn(&mut Registry) -> Result<()>) -> Self {
        Self { declare }
    }

    pub fn declare(
        &self,
        registry: &mut Registry,
    ) -> Result<()> {
        (self.declare)(registry)
    }
}

inventory::collect!(Registration);

/// Submits a registration function to be run by [`Registry::collect`].
///
/// ```ignore
/// fn register(registry: &mut Registry) -> shakedown_catalog::Result<()> {
///     registry.register(TestDeclaration::builder().name("coreos.basic").run(basic).build())
/// }
///
/// shakedown_catalog::register_tests!(register);
/// ```
#[macro_export]
macro_rules! register_tests {
    ($declare:path) => {
        $crate::__private::inventory::submit! {
            $crate::Registration::new($declare)
        }
    };
}
