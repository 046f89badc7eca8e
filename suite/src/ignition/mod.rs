//! Ignition first-boot configuration tests.

pub mod v1;
