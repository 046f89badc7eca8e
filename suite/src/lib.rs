//! Declared test modules.
//!
//! Each module registers its tests with [`shakedown_catalog::register_tests!`];
//! linking this crate into a binary makes them visible to
//! [`Registry::collect`](shakedown_catalog::Registry::collect).

pub mod ignition;

/// Forces the linker to keep this crate's registrations.
///
/// Binaries that never name an item from this crate may have it dropped
/// along with every test it declares; calling this once at start-up
/// prevents that.
pub fn link() {
    std::hint::black_box(ignition::v1::empty::register as Declare);
}

type Declare = fn(&mut shakedown_catalog::Registry) -> shakedown_catalog::Result<()>;
